//! Integration tests for LogRewriter against real files.

use std::fs;

use log_rewrite::{LogRewriter, RewriteError, RewriteOptions, WriteMode};

use crate::helpers::{temp_fixture, temp_log};

fn in_place() -> LogRewriter {
    LogRewriter::with_options(RewriteOptions {
        write_mode: WriteMode::InPlace,
        ..RewriteOptions::default()
    })
}

// ============================================================================
// End-to-end Behavior
// ============================================================================

#[test]
fn rewrites_sample_to_trimmed_payloads() {
    let (_dir, path) = temp_fixture("jobs.log");

    let outcome = LogRewriter::new().process(&path).unwrap();

    assert_eq!(outcome.input_lines, 3);
    assert_eq!(outcome.retained, vec!["started job 1", "started job 2"]);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "started job 1\nstarted job 2\n"
    );
}

#[test]
fn in_place_mode_produces_same_content() {
    let (_dir, path) = temp_fixture("jobs.log");

    in_place().process(&path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "started job 1\nstarted job 2\n"
    );
}

#[test]
fn first_delimiter_splits_and_later_ones_survive() {
    let (_dir, path) = temp_log("nested.log", "a=>b=>c\n");

    LogRewriter::new().process(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "b=>c\n");
}

#[test]
fn order_of_matching_lines_is_preserved() {
    let (_dir, path) = temp_log("order.log", "x => 3\ny\nx => 1\nx => 2\n");

    LogRewriter::new().process(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "3\n1\n2\n");
}

// ============================================================================
// Empty Results and Idempotence
// ============================================================================

#[test]
fn file_without_matches_becomes_empty() {
    let (_dir, path) = temp_log("plain.log", "nothing here\nor here\n");

    let outcome = LogRewriter::new().process(&path).unwrap();

    assert!(outcome.is_empty());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn repeated_runs_stabilize_on_empty_file() {
    let (_dir, path) = temp_fixture("jobs.log");
    let rewriter = LogRewriter::new();

    rewriter.process(&path).unwrap();
    let second = rewriter.process(&path).unwrap();
    assert_eq!(second.input_lines, 2);
    assert!(second.is_empty());
    assert_eq!(fs::read(&path).unwrap(), b"");

    let third = rewriter.process(&path).unwrap();
    assert_eq!(third.input_lines, 0);
    assert_eq!(fs::read(&path).unwrap(), b"");
}

#[test]
fn plan_does_not_modify_file() {
    let (_dir, path) = temp_fixture("jobs.log");
    let before = fs::read(&path).unwrap();

    let outcome = LogRewriter::new().plan(&path).unwrap();

    assert_eq!(outcome.retained_count(), 2);
    assert_eq!(fs::read(&path).unwrap(), before);
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn missing_file_is_reported_and_not_created() {
    let (dir, _path) = temp_log("other.log", "");
    let missing = dir.path().join("missing.log");

    let err = LogRewriter::new().process(&missing).unwrap_err();

    assert!(matches!(err, RewriteError::NotFoundOrNotRegularFile { .. }));
    assert!(err.to_string().contains("not found"));
    assert_eq!(err.path(), missing.as_path());
    assert!(!missing.exists());
}

#[test]
fn directory_is_rejected() {
    let (dir, _path) = temp_log("other.log", "");

    let err = LogRewriter::new().process(dir.path()).unwrap_err();

    assert!(matches!(err, RewriteError::NotFoundOrNotRegularFile { .. }));
}

#[test]
fn invalid_utf8_is_a_read_failure_and_leaves_file_intact() {
    let (_dir, path) = temp_log("binary.log", "");
    let bytes = b"ok => fine\n\xff\xfe => broken\n".to_vec();
    fs::write(&path, &bytes).unwrap();

    let err = LogRewriter::new().process(&path).unwrap_err();

    assert!(matches!(err, RewriteError::ReadFailure { .. }));
    assert!(err.to_string().starts_with("Error reading file"));
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn atomic_mode_leaves_no_temporary_files() {
    let (dir, path) = temp_fixture("long.log");

    LogRewriter::new().process(&path).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("long.log")]);
}

#[cfg(unix)]
#[test]
fn symlinked_target_rewrites_linked_file() {
    let (dir, real) = temp_log("real.log", "a => 1\nb\n");
    let link = dir.path().join("link.log");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let outcome = LogRewriter::new().process(&link).unwrap();

    assert_eq!(outcome.retained, vec!["1"]);
    assert_eq!(fs::read_to_string(&real).unwrap(), "1\n");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_to_string(&link).unwrap(), "1\n");
}

#[cfg(unix)]
#[test]
fn symlinked_target_in_place_rewrites_linked_file() {
    let (dir, real) = temp_log("real.log", "a => 1\nb\n");
    let link = dir.path().join("link.log");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    in_place().process(&link).unwrap();

    assert_eq!(fs::read_to_string(&real).unwrap(), "1\n");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
}

#[test]
fn carriage_return_separated_log_is_split_into_lines() {
    let (_dir, path) = temp_log("cr.log", "a => 1\rb => 2\rc\r");

    let outcome = LogRewriter::new().process(&path).unwrap();

    assert_eq!(outcome.input_lines, 3);
    assert_eq!(fs::read_to_string(&path).unwrap(), "1\n2\n");
}
