use crate::error::ProcessError;
use serde::{Deserialize, Serialize};

/// Raw text of one extracted page, as handed over by the extractor.
/// Held only long enough to build and attribute chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    pub number: u32,
    pub text: String,
}

impl PageText {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// A bounded, page-attributed segment of the cleaned document text.
/// Immutable once built; `chunk_index` is contiguous from 0 within one
/// document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub page: u32,
    pub chunk_index: u64,
}

impl Chunk {
    pub fn new(text: impl Into<String>, page: u32, chunk_index: u64) -> Result<Self, ProcessError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ProcessError::InvalidChunk(format!(
                "chunk {chunk_index} has no text"
            )));
        }
        if page == 0 {
            return Err(ProcessError::InvalidChunk(format!(
                "chunk {chunk_index} has page number 0"
            )));
        }
        Ok(Self {
            text,
            page,
            chunk_index,
        })
    }
}

/// A chunk scored against one question. Built fresh per question and
/// discarded once the answer is composed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: u64,
}

/// The composed answer plus the chunks cited as its sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
    pub sources: Vec<ScoredChunk>,
}

/// Word-window parameters for the chunker. Both counts are in words, not
/// characters. `overlap >= chunk_size` is degenerate and makes the chunker
/// stop after the current window instead of looping.
#[derive(Debug, Clone, Copy)]
pub struct ChunkingOptions {
    pub chunk_size: usize,
    pub overlap: usize,
}

impl Default for ChunkingOptions {
    fn default() -> Self {
        Self {
            chunk_size: 1_000,
            overlap: 200,
        }
    }
}
