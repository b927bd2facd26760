use crate::models::{Chunk, ScoredChunk};
use std::collections::HashSet;

/// How many chunks to fall back on when nothing matches the question.
const FALLBACK_CHUNKS: usize = 3;

/// Scores chunks by lexical overlap with the question and returns them in
/// descending score order. Ties keep the original chunk order. When no
/// chunk shares a word with the question the first three chunks come back
/// with score 0 so composition still has something to work with.
pub fn rank(question: &str, chunks: &[Chunk]) -> Vec<ScoredChunk> {
    let lowered = question.to_lowercase();
    let question_words: HashSet<&str> = lowered.split_whitespace().collect();

    let mut scored: Vec<ScoredChunk> = chunks
        .iter()
        .filter_map(|chunk| {
            let chunk_lowered = chunk.text.to_lowercase();
            let chunk_words: HashSet<&str> = chunk_lowered.split_whitespace().collect();
            let score = question_words.intersection(&chunk_words).count() as u64;

            (score > 0).then(|| ScoredChunk {
                chunk: chunk.clone(),
                score,
            })
        })
        .collect();

    if scored.is_empty() {
        return chunks
            .iter()
            .take(FALLBACK_CHUNKS)
            .map(|chunk| ScoredChunk {
                chunk: chunk.clone(),
                score: 0,
            })
            .collect();
    }

    scored.sort_by(|left, right| right.score.cmp(&left.score));
    scored
}
