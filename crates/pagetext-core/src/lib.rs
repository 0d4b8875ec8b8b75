pub mod chain;
pub mod error;
pub mod extraction;

use chain::{AttemptFailure, ExtractionOutcome, FallbackChain};
use extraction::accumulate;
use std::path::Path;

/// File read when no input path is given.
pub const DEFAULT_INPUT: &str = "Web_Developer_Interview_Task.pdf";

/// Main API entry point: extract the text of a PDF, falling back through the chain.
///
/// Each strategy builds its own text from scratch. The first one to succeed
/// wins and later strategies are never invoked. Every failure before that is
/// recorded in order. Nothing here panics or returns early on a strategy error.
pub fn extract_text(path: &Path, chain: &FallbackChain) -> ExtractionOutcome {
    let mut outcome = ExtractionOutcome::default();

    for strategy in chain.strategies() {
        let backend = strategy.backend_name();
        tracing::debug!(backend, path = %path.display(), "attempting extraction");

        match strategy.extract_pages(path) {
            Ok(pages) => {
                tracing::debug!(backend, pages = pages.len(), "extraction succeeded");
                outcome.text = Some(accumulate(&pages));
                outcome.backend = Some(backend.to_string());
                return outcome;
            }
            Err(error) => {
                tracing::warn!(backend, %error, "extraction failed");
                outcome.failures.push(AttemptFailure {
                    backend: backend.to_string(),
                    error,
                });
            }
        }
    }

    outcome
}
