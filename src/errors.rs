use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while acquiring and parsing the input stream
#[derive(Debug, Error)]
pub enum InputError {
    /// The input had zero bytes. Detected before any parsing is attempted.
    #[error("empty input provided: {}", path.display())]
    EmptyInput { path: PathBuf },

    /// A line shaped like a JSON object failed to parse. Fatal for the whole
    /// run; bad lines are never skipped.
    #[error("malformed JSON on line {line_number}: {line}")]
    MalformedInput {
        line_number: usize,
        line: String,
        #[source]
        source: serde_json::Error,
    },
}
