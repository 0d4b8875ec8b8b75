use crate::error::PagetextError;
use crate::extraction::{guard_panics, PageText, PdfExtractor};
use ::pdf_oxide::document::PdfDocument;
use ::pdf_oxide::error::Error as OxideError;
use std::path::Path;

/// Fallback PDF extraction backend using pdf_oxide.
///
/// pdf_oxide has its own parser, independent of lopdf, and rebuilds the
/// cross-reference table by scanning the file when the stored one is
/// unusable. Documents lopdf rejects for a broken xref are often still
/// readable here.
pub struct PdfOxideExtractor;

impl PdfOxideExtractor {
    pub const NAME: &'static str = "pdf-oxide";

    pub fn new() -> Self {
        PdfOxideExtractor
    }
}

impl Default for PdfOxideExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn open_error(e: OxideError) -> PagetextError {
    match e {
        OxideError::Io(io) => PagetextError::Io(io),
        other => PagetextError::Parse {
            backend: PdfOxideExtractor::NAME.into(),
            reason: other.to_string(),
        },
    }
}

impl PdfExtractor for PdfOxideExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, PagetextError> {
        guard_panics(Self::NAME, || {
            let mut doc = PdfDocument::open(path).map_err(open_error)?;
            let count = doc.page_count().map_err(open_error)?;

            let mut pages = Vec::with_capacity(count);
            for (index, page_number) in (0..count).zip(1u32..) {
                let text = doc
                    .extract_text(index)
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
