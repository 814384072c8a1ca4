use clap::Parser;
use std::path::PathBuf;

/// A tool to filter line-delimited JSON compiler diagnostics (cargo/clippy
/// `--message-format=json` output)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file containing one JSON diagnostic per line; '-' or omitted
    /// reads standard input
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Emit progress notices on the error stream
    #[arg(short, long)]
    pub verbose: bool,

    /// Comma separated values; drop records whose `opt_level` matches any of them
    #[arg(long, value_name = "VALUES")]
    pub filter_opt_level: Option<String>,

    /// Comma separated values; drop records whose `debuginfo` matches any of them
    #[arg(long, value_name = "VALUES")]
    pub filter_debuginfo: Option<String>,

    /// Comma separated values; drop records whose `reason` matches any of them
    #[arg(long, value_name = "VALUES")]
    pub filter_reason: Option<String>,

    /// Write the filtered records to PATH instead of standard output
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "json.dump")]
    pub dump: Option<PathBuf>,
}

impl Cli {
    /// True when the positional argument asks for standard input.
    pub fn reads_stdin(&self) -> bool {
        match &self.file {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
