//! Command-line definition, shared by the binary and the man page task.

use std::path::PathBuf;

use clap::Parser;

use crate::rewrite::{RewriteOptions, WriteMode};

/// Keep only the payload after the first '=>' on each line of a log file.
///
/// Lines without '=>' are dropped and the file is overwritten with the
/// trimmed payloads, one per line.
#[derive(Parser, Debug)]
#[command(name = "log-rewrite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log file to rewrite in place
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Truncate and write the file directly instead of replacing it atomically
    #[arg(long)]
    pub in_place: bool,

    /// Exit with status 1 when the file cannot be processed
    #[arg(long)]
    pub strict: bool,

    /// Increase diagnostic output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Rewrite options selected on the command line.
    pub fn options(&self) -> RewriteOptions {
        RewriteOptions {
            write_mode: if self.in_place {
                WriteMode::InPlace
            } else {
                WriteMode::Atomic
            },
            ..RewriteOptions::default()
        }
    }
}
