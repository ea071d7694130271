//! Rewrite operation errors.

use std::path::{Path, PathBuf};

/// Errors that can occur while rewriting a log file.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("File '{}' not found or is not a regular file.", path.display())]
    NotFoundOrNotRegularFile { path: PathBuf },

    #[error("Error reading file '{}': {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing to file '{}': {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RewriteError {
    /// The target path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFoundOrNotRegularFile { path }
            | Self::ReadFailure { path, .. }
            | Self::WriteFailure { path, .. } => path.as_path(),
        }
    }
}
