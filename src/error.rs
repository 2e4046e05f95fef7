use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a cleaning run.
///
/// Optional column rules never raise: a rule whose column is absent is a
/// no-op. Only the loader, the sink writer, and the unconditional ratio
/// feature produce errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Source path does not exist.
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Source file is not valid delimited text.
    #[error("failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column the pipeline depends on unconditionally is absent.
    #[error("required column '{0}' is missing from the input")]
    MissingColumn(String),

    /// Destination could not be created or written.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
