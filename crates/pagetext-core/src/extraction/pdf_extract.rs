use crate::error::PagetextError;
use crate::extraction::{guard_panics, PageText, PdfExtractor};
use ::pdf_extract::OutputError;
use std::path::Path;

/// PDF extraction backend using pdf-extract.
///
/// pdf-extract opens the path with its own loader and can panic on malformed
/// input rather than returning an error; panics are reported as
/// [`PagetextError::Panicked`]. It parses with lopdf underneath, so it is not
/// part of the default chain; select it with `--backend pdf-extract`.
pub struct PdfExtractExtractor;

impl PdfExtractExtractor {
    pub const NAME: &'static str = "pdf-extract";

    pub fn new() -> Self {
        PdfExtractExtractor
    }
}

impl Default for PdfExtractExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn output_error(e: OutputError) -> PagetextError {
    match e {
        OutputError::IoError(io) | OutputError::PdfError(::lopdf::Error::IO(io)) => {
            PagetextError::Io(io)
        }
        other => PagetextError::Parse {
            backend: PdfExtractExtractor::NAME.into(),
            reason: other.to_string(),
        },
    }
}

impl PdfExtractor for PdfExtractExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, PagetextError> {
        guard_panics(Self::NAME, || {
            let texts = ::pdf_extract::extract_text_by_pages(path).map_err(output_error)?;

            Ok(texts
                .into_iter()
                .zip(1u32..)
                .map(|(text, page_number)| PageText { page_number, text })
                .collect())
        })
    }

    fn backend_name(&self) -> &str {
        Self::NAME
    }
}
