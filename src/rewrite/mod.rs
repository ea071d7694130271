//! Single-file payload extraction and replacement.
//!
//! Lines containing [`DELIMITER`] are reduced to the trimmed text after its
//! first occurrence; all other lines are dropped. The result replaces the
//! original file content.

pub mod error;
pub mod extract;
pub mod outcome;
pub mod rewriter;
pub mod target;

pub use error::RewriteError;
pub use extract::{extract_payload, extract_payloads, render_output, split_lines, DELIMITER};
pub use outcome::{Preview, RewriteOutcome, DEFAULT_PREVIEW_LIMIT};
pub use rewriter::{LogRewriter, RewriteOptions};
pub use target::WriteMode;
