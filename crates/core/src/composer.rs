use crate::error::ChatError;
use crate::models::{ChatAnswer, ScoredChunk};
use async_trait::async_trait;

/// How many top-ranked chunks feed the model's context window.
const CONTEXT_CHUNKS: usize = 5;

/// How many top-ranked chunks come back as citations. Deliberately smaller
/// than the context: citation brevity and context richness are tuned
/// independently.
const SOURCE_CHUNKS: usize = 3;

/// The external generative-model collaborator. One prompt in, one text
/// response out; retries and timeouts are the caller's concern.
#[async_trait]
pub trait GenerativeClient {
    async fn generate(&self, prompt: &str) -> Result<String, ChatError>;
}

/// Assembles a bounded context from ranked chunks, prompts the model, and
/// packages the answer with its cited sources.
pub struct AnswerComposer<C>
where
    C: GenerativeClient,
{
    client: C,
}

impl<C> AnswerComposer<C>
where
    C: GenerativeClient + Send + Sync,
{
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn compose(
        &self,
        question: &str,
        ranked: &[ScoredChunk],
    ) -> Result<ChatAnswer, ChatError> {
        let context = ranked
            .iter()
            .take(CONTEXT_CHUNKS)
            .map(|scored| scored.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let prompt = build_prompt(question, &context);
        let answer = self.client.generate(&prompt).await?;

        if answer.trim().is_empty() {
            return Err(ChatError::EmptyResponse);
        }

        Ok(ChatAnswer {
            answer,
            sources: ranked.iter().take(SOURCE_CHUNKS).cloned().collect(),
        })
    }
}

fn build_prompt(question: &str, context: &str) -> String {
    format!(
        "You are an AI assistant helping users understand a PDF document.\n\
         Based on the following context from the document, please answer the user's question accurately and helpfully.\n\
         \n\
         Context from PDF:\n\
         {context}\n\
         \n\
         User Question: {question}\n\
         \n\
         Please provide a comprehensive answer based on the context provided.\n\
         If the question cannot be answered from the given context, please say so clearly."
    )
}
