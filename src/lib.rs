//! log-rewrite: keep only the payload after the `=>` marker in a log file.
//!
//! The library exposes [`LogRewriter`], which validates, reads, transforms and
//! replaces a single target file. The `log-rewrite` binary is a thin adapter
//! over it.

pub mod cli;
pub mod logging;
pub mod rewrite;

pub use rewrite::{LogRewriter, RewriteError, RewriteOptions, RewriteOutcome, WriteMode};
