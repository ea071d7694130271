//! Command handlers for the log-rewrite binary.

pub mod rewrite;
