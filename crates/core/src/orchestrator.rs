use crate::chunking::build_chunks;
use crate::cleaning::TextCleaner;
use crate::composer::{AnswerComposer, GenerativeClient};
use crate::error::{ChatError, ProcessError};
use crate::models::{ChatAnswer, Chunk, ChunkingOptions, PageText};
use crate::ranking::rank;
use tracing::info;

/// Front door of the core: turns extracted pages into a chunk set once per
/// upload, then answers any number of questions against that set. The model
/// client is injected so tests can substitute a canned one.
pub struct ChatCoordinator<C>
where
    C: GenerativeClient,
{
    cleaner: TextCleaner,
    options: ChunkingOptions,
    composer: AnswerComposer<C>,
}

impl<C> ChatCoordinator<C>
where
    C: GenerativeClient + Send + Sync,
{
    pub fn new(client: C, options: ChunkingOptions) -> Result<Self, ProcessError> {
        Ok(Self {
            cleaner: TextCleaner::new()?,
            options,
            composer: AnswerComposer::new(client),
        })
    }

    /// Cleans and chunks the extracted pages. Fails with `NoReadableText`
    /// when nothing retrievable survives cleaning; on failure no chunk set
    /// exists at all.
    pub fn process_document(&self, pages: &[PageText]) -> Result<Vec<Chunk>, ProcessError> {
        if pages.is_empty() {
            return Err(ProcessError::NoReadableText);
        }

        let full_text = pages
            .iter()
            .map(|page| page.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let cleaned = self.cleaner.clean(&full_text);
        let chunks = build_chunks(&cleaned, pages, &self.options)?;

        info!(
            pages = pages.len(),
            chunks = chunks.len(),
            "document processed"
        );

        Ok(chunks)
    }

    /// Ranks the stored chunks against the question and composes a grounded
    /// answer. A failure here spoils only this question; the chunk set
    /// remains usable.
    pub async fn answer_question(
        &self,
        question: &str,
        chunks: &[Chunk],
    ) -> Result<ChatAnswer, ChatError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatError::EmptyQuestion);
        }

        let ranked = rank(question, chunks);
        self.composer.compose(question, &ranked).await
    }
}
