use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use pdf_chat_core::{
    ChatAnswer, ChatCoordinator, Chunk, ChunkingOptions, GeminiClient, InMemorySessionStore,
    LopdfExtractor, PdfExtractor, SessionStore,
};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pdf-chat", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Gemini API key; falls back to the GEMINI_API_KEY environment variable.
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Generative model to answer with.
    #[arg(long, global = true, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash-latest")]
    model: String,

    /// Chunk window width, in words.
    #[arg(long, global = true, default_value = "1000")]
    chunk_size: usize,

    /// Overlap between consecutive chunks, in words.
    #[arg(long, global = true, default_value = "200")]
    overlap: usize,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a single question about a PDF and exit.
    Ask {
        /// Path to the PDF document.
        #[arg(long)]
        file: String,
        /// Question to answer from the document.
        #[arg(long)]
        question: String,
    },
    /// Load a PDF once, then answer questions interactively from stdin.
    Chat {
        /// Path to the PDF document.
        #[arg(long)]
        file: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let client = match &cli.api_key {
        Some(key) => GeminiClient::new(key.clone()),
        None => GeminiClient::from_env().map_err(|error| anyhow::anyhow!(error.to_string()))?,
    }
    .with_model(cli.model.as_str());

    let options = ChunkingOptions {
        chunk_size: cli.chunk_size,
        overlap: cli.overlap,
    };

    let coordinator = ChatCoordinator::new(client, options)
        .map_err(|error| anyhow::anyhow!(error.to_string()))?;

    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        "pdf-chat boot"
    );

    match cli.command {
        Command::Ask { file, question } => {
            let (filename, chunks) = load_document(&coordinator, &file)?;
            info!(file = %filename, chunk_count = chunks.len(), "document ready");

            let answer = coordinator
                .answer_question(&question, &chunks)
                .await
                .map_err(|error| anyhow::anyhow!(error.to_string()))?;

            print_answer(&answer);
        }
        Command::Chat { file } => {
            let (filename, chunks) = load_document(&coordinator, &file)?;

            let store = InMemorySessionStore::default();
            let chunk_count = chunks.len();
            let session_id = store.insert(&filename, chunks);
            println!("loaded {filename} ({chunk_count} chunks); ask away, or type 'exit' to quit");

            let stdin = io::stdin();
            loop {
                print!("> ");
                io::stdout().flush()?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }

                let question = line.trim();
                if question.is_empty() {
                    continue;
                }
                if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
                    break;
                }

                let Some(session) = store.get(&session_id) else {
                    break;
                };

                // A failed model call spoils one question, not the session.
                match coordinator.answer_question(question, &session.chunks).await {
                    Ok(answer) => print_answer(&answer),
                    Err(error) => {
                        warn!(%error, "question failed");
                        println!("error: {error}");
                    }
                }
            }

            store.remove(&session_id);
        }
    }

    Ok(())
}

fn load_document<C>(
    coordinator: &ChatCoordinator<C>,
    file: &str,
) -> anyhow::Result<(String, Vec<Chunk>)>
where
    C: pdf_chat_core::GenerativeClient + Send + Sync,
{
    let path = Path::new(file);
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
        .to_string();

    let pages = LopdfExtractor
        .extract_pages(path)
        .with_context(|| format!("could not read {file}"))?;

    let chunks = coordinator
        .process_document(&pages)
        .with_context(|| format!("could not process {file}"))?;

    Ok((filename, chunks))
}

fn print_answer(answer: &ChatAnswer) {
    println!("{}", answer.answer);

    for (position, source) in answer.sources.iter().enumerate() {
        let preview: String = source.chunk.text.chars().take(160).collect();
        println!(
            "[source {}] page={} score={} text={preview}",
            position + 1,
            source.chunk.page,
            source.score
        );
    }
}
