use crate::error::ProcessError;
use crate::models::PageText;
use lopdf::Document;
use std::path::Path;
use tracing::warn;

/// Yields raw per-page text for one document. Implementations skip pages
/// that fail to extract; a document with no readable page at all is
/// `NoReadableText`.
pub trait PdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, ProcessError>;
}

#[derive(Default)]
pub struct LopdfExtractor;

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, ProcessError> {
        let document =
            Document::load(path).map_err(|error| ProcessError::PdfParse(error.to_string()))?;

        let mut pages = Vec::new();
        for (page_no, _page_id) in document.get_pages() {
            match document.extract_text(&[page_no]) {
                Ok(text) => {
                    if !text.trim().is_empty() {
                        pages.push(PageText::new(page_no, text));
                    }
                }
                Err(error) => {
                    warn!(page = page_no, %error, "could not extract text from page");
                }
            }
        }

        if pages.is_empty() {
            return Err(ProcessError::NoReadableText);
        }

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn unparseable_file_is_a_parse_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"%PDF-1.4\n%broken")?;

        let result = LopdfExtractor.extract_pages(&path);
        assert!(matches!(result, Err(ProcessError::PdfParse(_))));
        Ok(())
    }

    #[test]
    fn missing_file_is_a_parse_error() {
        let result = LopdfExtractor.extract_pages(Path::new("/nonexistent/file.pdf"));
        assert!(matches!(result, Err(ProcessError::PdfParse(_))));
    }
}
