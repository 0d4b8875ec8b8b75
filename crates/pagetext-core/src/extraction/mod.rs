pub mod lopdf;
pub mod pdf_extract;
pub mod pdf_oxide;

use crate::error::PagetextError;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 1-based position in the document.
    pub page_number: u32,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text from the PDF at `path`, returning one PageText per page in document order.
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, PagetextError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Concatenate pages in order, each followed by a single newline.
///
/// Trailing line breaks a backend leaves on a page are dropped first so that
/// pages are always separated by exactly one `\n`.
pub fn accumulate(pages: &[PageText]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(page.text.trim_end_matches(['\r', '\n']));
        text.push('\n');
    }
    text
}

/// Run a backend call, turning a library panic into `PagetextError::Panicked`.
///
/// The process panic hook still runs before the unwind is caught; the CLI
/// installs one that logs through `tracing`, otherwise the default hook
/// prints the panic message to stderr.
pub(crate) fn guard_panics<T>(
    backend: &str,
    f: impl FnOnce() -> Result<T, PagetextError>,
) -> Result<T, PagetextError> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(PagetextError::Panicked {
            backend: backend.to_string(),
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "malformed document".to_string()
    }
}
