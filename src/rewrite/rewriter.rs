//! Rewrite orchestrator.

use std::path::Path;

use tracing::{debug, info};

use super::error::RewriteError;
use super::extract::extract_payloads;
use super::outcome::{RewriteOutcome, DEFAULT_PREVIEW_LIMIT};
use super::target::{self, WriteMode};

/// Options controlling a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOptions {
    /// How the target is replaced (default: atomic).
    pub write_mode: WriteMode,
    /// Retained lines shown in the preview (default: 5).
    pub preview_limit: usize,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            write_mode: WriteMode::default(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

/// Rewrites a log file so only the payload after `=>` remains.
///
/// The work is split in two phases so callers can show a preview between
/// them:
/// 1. [`plan`](Self::plan) validates, reads and transforms (no writes)
/// 2. [`commit`](Self::commit) replaces the file content
#[derive(Debug, Clone, Default)]
pub struct LogRewriter {
    options: RewriteOptions,
}

impl LogRewriter {
    /// Create with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specific options.
    pub fn with_options(options: RewriteOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    /// Validates, reads and transforms `path` without modifying it.
    pub fn plan(&self, path: &Path) -> Result<RewriteOutcome, RewriteError> {
        target::validate(path)?;

        let content = target::read(path)?;
        let (input_lines, retained) = extract_payloads(&content);
        debug!(
            path = %path.display(),
            input_lines,
            retained = retained.len(),
            "transformed log content"
        );

        Ok(RewriteOutcome {
            input_lines,
            retained,
            write_mode: self.options.write_mode,
        })
    }

    /// Replaces the content of `path` with the outcome's output.
    pub fn commit(&self, path: &Path, outcome: &RewriteOutcome) -> Result<(), RewriteError> {
        target::write(path, &outcome.output(), outcome.write_mode)?;
        info!(
            path = %path.display(),
            lines = outcome.retained_count(),
            mode = outcome.write_mode.name(),
            "rewrote log file"
        );
        Ok(())
    }

    /// Plans and commits in one step.
    pub fn process(&self, path: &Path) -> Result<RewriteOutcome, RewriteError> {
        let outcome = self.plan(path)?;
        self.commit(path, &outcome)?;
        Ok(outcome)
    }
}
