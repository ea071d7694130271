//! Rewrite results and the preview shown before overwriting.

use std::path::Path;

use super::extract::render_output;
use super::target::WriteMode;

/// Number of retained lines shown in a preview by default.
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// The result of transforming a log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Lines read from the target
    pub input_lines: usize,
    /// Trimmed payloads, in input order
    pub retained: Vec<String>,
    /// How the target is (or was) replaced
    pub write_mode: WriteMode,
}

impl RewriteOutcome {
    /// Number of lines that will be written.
    pub fn retained_count(&self) -> usize {
        self.retained.len()
    }

    /// Whether the rewrite leaves the file empty.
    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }

    /// Content the target file is replaced with.
    pub fn output(&self) -> String {
        render_output(&self.retained)
    }

    /// The first `limit` retained lines.
    pub fn preview(&self, limit: usize) -> Preview<'_> {
        let shown = self.retained.len().min(limit);
        Preview {
            lines: &self.retained[..shown],
            truncated: self.retained.len() > limit,
        }
    }

    /// Message reporting how many lines were read.
    pub fn read_message(&self, path: &Path) -> String {
        format!("Read {} lines from '{}'.", self.input_lines, path.display())
    }

    /// Message reporting how many lines were retained.
    pub fn found_message(&self) -> String {
        format!("Found {} lines to process.", self.retained_count())
    }

    /// Message reporting a successful overwrite.
    pub fn success_message(path: &Path) -> String {
        format!("Successfully processed and overwritten '{}'.", path.display())
    }
}

/// A bounded view of the retained lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview<'a> {
    pub lines: &'a [String],
    /// More lines exist beyond `lines`
    pub truncated: bool,
}

impl Preview<'_> {
    pub const HEADER: &'static str = "--- Content to be written (preview) ---";
    pub const FOOTER: &'static str = "--------------------------------------";
    pub const ELLIPSIS: &'static str = "...";

    /// Renders the preview block, one entry per console line.
    ///
    /// Nothing is rendered when there are no lines to show.
    pub fn render(&self) -> Vec<&str> {
        if self.lines.is_empty() {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.lines.len() + 3);
        out.push(Self::HEADER);
        out.extend(self.lines.iter().map(String::as_str));
        if self.truncated {
            out.push(Self::ELLIPSIS);
        }
        out.push(Self::FOOTER);
        out
    }
}
