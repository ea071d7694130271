//! Rewrite command handler

use std::path::Path;

use tracing::warn;

use log_rewrite::rewrite::Preview;
use log_rewrite::{LogRewriter, RewriteError, RewriteOptions, RewriteOutcome};

/// Rewrite `path`, printing the report and preview before overwriting.
///
/// Failures are reported, not propagated. Returns whether the file was
/// rewritten so the caller can decide on the exit status.
pub fn handle_rewrite(path: &Path, options: RewriteOptions) -> bool {
    let rewriter = LogRewriter::with_options(options);

    let outcome = match rewriter.plan(path) {
        Ok(outcome) => outcome,
        Err(e) => {
            report_error(&e);
            return false;
        }
    };

    print_report(path, &outcome, rewriter.options().preview_limit);

    if let Err(e) = rewriter.commit(path, &outcome) {
        report_error(&e);
        return false;
    }

    println!("{}", RewriteOutcome::success_message(path));
    true
}

/// Print line counts and the preview of what will be written.
fn print_report(path: &Path, outcome: &RewriteOutcome, preview_limit: usize) {
    println!("{}", outcome.read_message(path));
    println!("{}", outcome.found_message());

    let preview: Preview<'_> = outcome.preview(preview_limit);
    for line in preview.render() {
        println!("{}", line);
    }
}

fn report_error(error: &RewriteError) {
    warn!(path = %error.path().display(), "rewrite failed");
    eprintln!("Error: {}", error);
}
