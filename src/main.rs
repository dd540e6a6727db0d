//! booktrack CLI
//!
//! ```text
//! booktrack catalog.txt 9780441013593                  # look up by ISBN
//! booktrack catalog.txt Dune                           # search titles
//! booktrack catalog.txt "Dune:Herbert:9780441013593:3" # insert
//! ```

use std::io::Write;
use std::process::ExitCode;

use booktrack::{CatalogError, LoadMode, OutputFormat, TrackerConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Search or extend a flat-file book catalog.
///
/// OPERATION is a 13-digit ISBN (lookup), a `title:author:isbn:copies`
/// record (insertion), or any other text (title search). Options go before
/// CATALOG; everything after it is taken as-is, so OPERATION may begin with
/// `-`. Arguments after OPERATION are ignored.
#[derive(Parser)]
#[command(name = "booktrack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the catalog file, then an ISBN, new record, or title fragment
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,

    /// Output format for matching records
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Ignore blank lines in the catalog instead of rejecting them
    #[arg(long)]
    skip_blank_lines: bool,

    /// Extension the catalog file name must end with
    #[arg(long, default_value = booktrack::storage::DEFAULT_EXTENSION)]
    extension: String,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<TrackerConfig, CatalogError> {
        let load_mode = if self.skip_blank_lines {
            LoadMode::SkipBlankLines
        } else {
            LoadMode::Strict
        };
        Ok(TrackerConfig::from_args(self.args)?
            .with_extension(self.extension)
            .with_load_mode(load_mode)
            .with_output_format(self.format))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for catalog output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = cli
        .into_config()
        .and_then(|config| booktrack::run(&config, &mut out));

    match result {
        Ok(summary) => {
            tracing::debug!(?summary, "run complete");
            ExitCode::SUCCESS
        },
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            if writeln!(out, "{err}").is_err() {
                eprintln!("{err}");
            }
            ExitCode::FAILURE
        },
    }
}
