use pagetext_core::chain::FallbackChain;
use pagetext_core::error::PagetextError;
use std::io::Write;
use std::path::Path;

use crate::output;

/// Extract `input_file` and print the text or the diagnostics to stdout.
///
/// Only an invalid backend list is an error here; extraction failures are
/// reported on stdout and still count as a normal run.
pub fn run(input_file: &Path, backends: &[String]) -> Result<(), PagetextError> {
    let chain = FallbackChain::from_names(backends)?;
    let outcome = pagetext_core::extract_text(input_file, &chain);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::plain::write_outcome(&outcome, &mut out)?;
    out.flush()?;

    Ok(())
}
