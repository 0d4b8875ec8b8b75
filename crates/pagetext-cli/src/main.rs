mod commands;
mod logging;
mod output;

use clap::Parser;
use pagetext_core::chain::DEFAULT_BACKENDS;
use pagetext_core::DEFAULT_INPUT;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pagetext",
    version,
    about = "Print the text of a PDF, page by page, falling back to a second parser on failure"
)]
struct Cli {
    /// Path to the PDF file
    #[arg(default_value = DEFAULT_INPUT)]
    input_file: PathBuf,

    /// Extraction backend(s) to try, in order: lopdf, pdf-oxide, pdf-extract (default: lopdf then pdf-oxide)
    #[arg(short, long = "backend", value_name = "NAME")]
    backend: Vec<String>,

    /// Log each extraction attempt to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    logging::install_panic_hook();

    let backends = if cli.backend.is_empty() {
        DEFAULT_BACKENDS.iter().map(|s| s.to_string()).collect()
    } else {
        cli.backend
    };

    if let Err(e) = commands::extract::run(&cli.input_file, &backends) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
