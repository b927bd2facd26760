use thiserror::Error;

/// Failures while turning an uploaded PDF into a chunk set. Any of these
/// aborts document processing entirely; no partial chunk set is kept.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("pdf parse error: {0}")]
    PdfParse(String),

    #[error("regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("no readable text found in document")]
    NoReadableText,

    #[error("invalid chunk: {0}")]
    InvalidChunk(String),
}

/// Failures while answering a single question. The stored chunk set stays
/// valid; the caller may retry the same question.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI response failed: {0}")]
    ModelCall(String),

    #[error("AI response failed: model returned empty text")]
    EmptyResponse,

    #[error("missing GEMINI_API_KEY in environment")]
    MissingApiKey,

    #[error("question is empty")]
    EmptyQuestion,
}

pub type Result<T, E = ProcessError> = std::result::Result<T, E>;
