use crate::error::ProcessError;
use crate::models::{Chunk, ChunkingOptions, PageText};
use std::collections::HashSet;

/// How many leading words of a chunk participate in page attribution.
const ATTRIBUTION_WORDS: usize = 50;

/// Splits cleaned document text into fixed-size, overlapping word windows
/// and attributes each window to its most likely source page.
///
/// Windows are `chunk_size` words wide and each next window starts
/// `overlap` words before the previous one ended. The final window is the
/// one that reaches the last word. An `overlap >= chunk_size` configuration
/// cannot advance, so the loop stops after the current window instead of
/// repeating it.
pub fn build_chunks(
    cleaned: &str,
    pages: &[PageText],
    options: &ChunkingOptions,
) -> Result<Vec<Chunk>, ProcessError> {
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    if words.is_empty() {
        return Err(ProcessError::NoReadableText);
    }

    if words.len() <= options.chunk_size {
        let page = attribute_page(cleaned, pages);
        return Ok(vec![Chunk::new(cleaned, page, 0)?]);
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut chunk_index = 0u64;

    loop {
        let end = (start + options.chunk_size).min(words.len());
        let text = words[start..end].join(" ");
        let page = attribute_page(&text, pages);
        chunks.push(Chunk::new(text, page, chunk_index)?);
        chunk_index += 1;

        if end == words.len() {
            break;
        }

        let next = end.saturating_sub(options.overlap);
        if next <= start {
            break;
        }
        start = next;
    }

    Ok(chunks)
}

/// Picks the page whose full word set shares the most words with the first
/// 50 words of the chunk, case-insensitive. Ties keep the first page in
/// input order; a chunk with no overlap anywhere defaults to page 1.
pub fn attribute_page(chunk_text: &str, pages: &[PageText]) -> u32 {
    let lowered = chunk_text.to_lowercase();
    let chunk_words: HashSet<&str> = lowered
        .split_whitespace()
        .take(ATTRIBUTION_WORDS)
        .collect();

    let mut best_page = 1;
    let mut max_overlap = 0;

    for page in pages {
        let page_lowered = page.text.to_lowercase();
        let page_words: HashSet<&str> = page_lowered.split_whitespace().collect();
        let overlap = chunk_words.intersection(&page_words).count();

        if overlap > max_overlap {
            max_overlap = overlap;
            best_page = page.number;
        }
    }

    best_page
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_run(prefix: &str, count: usize) -> String {
        (0..count)
            .map(|index| format!("{prefix}{index}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn short_text_becomes_a_single_chunk() {
        let text = "a small document with very few words";
        let chunks = build_chunks(text, &[], &ChunkingOptions::default()).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
        assert_eq!(chunks[0].chunk_index, 0);
        assert_eq!(chunks[0].page, 1);
    }

    #[test]
    fn window_offsets_match_the_overlap_schedule() {
        // 2500 words at 1000/200 should window at [0,1000), [800,1800), [1600,2500).
        let text = word_run("w", 2_500);
        let chunks = build_chunks(&text, &[], &ChunkingOptions::default()).unwrap();

        assert_eq!(chunks.len(), 3);
        assert!(chunks[0].text.starts_with("w0 "));
        assert!(chunks[0].text.ends_with(" w999"));
        assert!(chunks[1].text.starts_with("w800 "));
        assert!(chunks[1].text.ends_with(" w1799"));
        assert!(chunks[2].text.starts_with("w1600 "));
        assert!(chunks[2].text.ends_with(" w2499"));
    }

    #[test]
    fn chunk_count_follows_the_window_formula() {
        let options = ChunkingOptions {
            chunk_size: 100,
            overlap: 20,
        };

        for total in [101usize, 180, 181, 260, 1_000] {
            let text = word_run("t", total);
            let chunks = build_chunks(&text, &[], &options).unwrap();
            let expected = (total - options.overlap).div_ceil(options.chunk_size - options.overlap);
            assert_eq!(chunks.len(), expected, "word count {total}");
            assert!(chunks.last().unwrap().text.ends_with(&format!("t{}", total - 1)));
        }
    }

    #[test]
    fn chunk_indices_are_contiguous_from_zero() {
        let text = word_run("x", 500);
        let options = ChunkingOptions {
            chunk_size: 120,
            overlap: 30,
        };
        let chunks = build_chunks(&text, &[], &options).unwrap();

        for (position, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, position as u64);
        }
    }

    #[test]
    fn degenerate_overlap_stops_after_the_current_window() {
        let text = word_run("d", 50);
        let options = ChunkingOptions {
            chunk_size: 10,
            overlap: 10,
        };
        let chunks = build_chunks(&text, &[], &options).unwrap();

        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].text.ends_with(" d9"));
    }

    #[test]
    fn empty_text_is_not_readable() {
        let result = build_chunks("", &[], &ChunkingOptions::default());
        assert!(matches!(result, Err(ProcessError::NoReadableText)));
    }

    #[test]
    fn attribution_picks_the_page_with_most_shared_words() {
        let pages = vec![
            PageText::new(1, "alpha beta gamma"),
            PageText::new(2, "refund policy terms conditions apply"),
        ];

        assert_eq!(attribute_page("refund policy apply", &pages), 2);
    }

    #[test]
    fn attribution_is_case_insensitive() {
        let pages = vec![PageText::new(3, "Refund Policy Terms")];
        assert_eq!(attribute_page("REFUND terms", &pages), 3);
    }

    #[test]
    fn attribution_ties_keep_the_first_page() {
        let pages = vec![
            PageText::new(1, "shared word"),
            PageText::new(2, "shared word"),
        ];
        assert_eq!(attribute_page("shared word", &pages), 1);
    }

    #[test]
    fn attribution_defaults_to_page_one_without_evidence() {
        let pages = vec![PageText::new(4, "completely unrelated content")];
        assert_eq!(attribute_page("nothing matches here", &pages), 1);
        assert_eq!(attribute_page("nothing matches here", &[]), 1);
    }

    #[test]
    fn attribution_only_reads_the_first_fifty_words() {
        // The marker word sits past the 50-word prefix, so page 2 never
        // accumulates any overlap.
        let mut text = word_run("q", 50);
        text.push_str(" marker");

        let pages = vec![
            PageText::new(1, "q0 q1"),
            PageText::new(2, "marker"),
        ];
        assert_eq!(attribute_page(&text, &pages), 1);
    }
}
