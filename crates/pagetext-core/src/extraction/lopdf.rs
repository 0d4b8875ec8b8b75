use crate::error::PagetextError;
use crate::extraction::{guard_panics, PageText, PdfExtractor};
use ::lopdf::Document;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Primary PDF extraction backend using lopdf.
///
/// Opens the file itself and parses it from a buffered reader; the handle is
/// dropped when the attempt ends, whether it succeeds or not.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub const NAME: &'static str = "lopdf";

    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, PagetextError> {
        guard_panics(Self::NAME, || {
            let file = File::open(path)?;
            let doc = Document::load_from(BufReader::new(file)).map_err(|e| {
                PagetextError::Parse {
                    backend: Self::NAME.into(),
                    reason: e.to_string(),
                }
            })?;

            // get_pages() is keyed by page number, so iteration is in document order.
            let mut pages = Vec::new();
            for page_number in doc.get_pages().into_keys() {
                let text = doc
                    .extract_text(&[page_number])
                    .map_err(|e| PagetextError::PageText {
                        backend: Self::NAME.into(),
                        page: page_number,
                        reason: e.to_string(),
                    })?;
                pages.push(PageText { page_number, text });
            }

            Ok(pages)
        })
    }

    fn backend_name(&self) -> &str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_io_error() {
        let result = LopdfExtractor::new().extract_pages(Path::new("definitely/not/here.pdf"));
        match result {
            Err(PagetextError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"this is not a pdf at all").unwrap();

        let result = LopdfExtractor::new().extract_pages(tmp.path());
        assert!(
            matches!(
                result,
                Err(PagetextError::Parse { .. }) | Err(PagetextError::Panicked { .. })
            ),
            "got {result:?}"
        );
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(LopdfExtractor::new().backend_name(), "lopdf");
    }
}
