pub mod chunking;
pub mod cleaning;
pub mod composer;
pub mod error;
pub mod extractor;
pub mod gemini;
pub mod models;
pub mod orchestrator;
pub mod ranking;
pub mod session;

pub use chunking::{attribute_page, build_chunks};
pub use cleaning::TextCleaner;
pub use composer::{AnswerComposer, GenerativeClient};
pub use error::{ChatError, ProcessError};
pub use extractor::{LopdfExtractor, PdfExtractor};
pub use gemini::GeminiClient;
pub use models::{ChatAnswer, Chunk, ChunkingOptions, PageText, ScoredChunk};
pub use orchestrator::ChatCoordinator;
pub use ranking::rank;
pub use session::{DocumentSession, InMemorySessionStore, SessionStore};
