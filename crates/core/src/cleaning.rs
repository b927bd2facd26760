use crate::error::ProcessError;
use regex::Regex;

/// Normalizes raw extracted page text before chunking: characters outside
/// the allow-set (word characters, whitespace, basic punctuation) become
/// spaces, then all whitespace runs collapse to single spaces.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    disallowed: Regex,
}

impl TextCleaner {
    pub fn new() -> Result<Self, ProcessError> {
        Ok(Self {
            disallowed: Regex::new(r#"[^\w\s.,!?;:()\-'"]+"#)?,
        })
    }

    pub fn clean(&self, raw: &str) -> String {
        let filtered = self.disallowed.replace_all(raw, " ");
        filtered
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> TextCleaner {
        TextCleaner::new().unwrap()
    }

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        let cleaned = cleaner().clean("A  \t  lot\n\nof   spacing");
        assert_eq!(cleaned, "A lot of spacing");
    }

    #[test]
    fn disallowed_characters_become_spaces() {
        let cleaned = cleaner().clean("price†‡is€100");
        assert_eq!(cleaned, "price is 100");
    }

    #[test]
    fn allowed_punctuation_survives() {
        let input = r#"Done. Really, (yes!) "quoted" semi-colon; colon: dash-word 'ok'?"#;
        assert_eq!(cleaner().clean(input), input);
    }

    #[test]
    fn result_is_trimmed() {
        assert_eq!(cleaner().clean("   padded   "), "padded");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(cleaner().clean(""), "");
        assert_eq!(cleaner().clean("†††"), "");
    }
}
