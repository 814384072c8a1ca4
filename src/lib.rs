pub mod cli;
pub mod errors;
pub mod filter;
pub mod output;
pub mod store;

pub use cli::{Cli, cli_parse};
pub use errors::InputError;
pub use filter::{FilterRule, FilterSet};
pub use output::{dump_file, dumps, render_record};
pub use store::RecordStore;

use anyhow::Context;
use std::io::Read;
use std::path::PathBuf;

/// Read the whole input into memory once, returning the text and the resolved
/// path used in diagnostics (`<stdin>` for standard input).
fn read_input(cli: &Cli) -> anyhow::Result<(String, PathBuf)> {
    match cli.file.as_deref() {
        Some(path) if !cli.reads_stdin() => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read input file '{}'", path.display()))?;
            let resolved = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            Ok((text, resolved))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok((text, PathBuf::from("<stdin>")))
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();

    if cli.verbose {
        eprintln!("Reading lines from input ...");
    }
    let (text, input_path) = read_input(&cli)?;

    // Rejected before any parsing is attempted.
    if text.is_empty() {
        return Err(InputError::EmptyInput { path: input_path }.into());
    }

    let store = RecordStore::from_lines(text.lines())?;
    if cli.verbose {
        eprintln!("Parsed {} JSON records from {}", store.len(), input_path.display());
    }

    let mut filters = FilterSet::new();
    filters.add_filter("opt_level", cli.filter_opt_level.as_deref());
    filters.add_filter("debuginfo", cli.filter_debuginfo.as_deref());
    filters.add_filter("reason", cli.filter_reason.as_deref());

    let records = filters.apply(store.into_records());
    if cli.verbose && !filters.is_empty() {
        eprintln!("{} records retained after filtering", records.len());
    }

    match &cli.dump {
        Some(path) => output::dump_file(&records, path, cli.verbose)
            .with_context(|| format!("failed to write dump file '{}'", path.display()))?,
        None => {
            let stdout = std::io::stdout();
            output::dumps(&records, &mut stdout.lock())
                .context("failed to write to standard output")?;
        }
    }

    Ok(())
}
