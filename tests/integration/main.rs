//! Integration tests for log-rewrite.


mod rewriter_test;
