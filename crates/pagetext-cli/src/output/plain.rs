use pagetext_core::chain::ExtractionOutcome;
use std::io::{self, Write};

const FALLBACK_NOTICE: &str = "Trying alternative approach...";

/// Write diagnostics for each failed attempt, then the extracted text if any.
///
/// The first failure is reported as `Error: ...`, later ones as
/// `Alternative approach failed: ...`. Every failure that is followed by
/// another attempt gets the fallback notice.
pub fn write_outcome<W: Write>(outcome: &ExtractionOutcome, out: &mut W) -> io::Result<()> {
    let attempts = outcome.failures.len() + usize::from(outcome.is_success());

    for (i, failure) in outcome.failures.iter().enumerate() {
        if i == 0 {
            writeln!(out, "Error: {}", failure.error)?;
        } else {
            writeln!(out, "Alternative approach failed: {}", failure.error)?;
        }
        if i + 1 < attempts {
            writeln!(out, "{FALLBACK_NOTICE}")?;
        }
    }

    if let Some(text) = &outcome.text {
        out.write_all(text.as_bytes())?;
    }

    Ok(())
}
