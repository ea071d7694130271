//! Payload extraction from log lines.
//!
//! A line is kept only if it contains [`DELIMITER`]. The kept value is the
//! text after the first occurrence, with surrounding whitespace trimmed.

/// Marker separating the discarded prefix from the retained payload.
pub const DELIMITER: &str = "=>";

/// Extracts the payload from a single line.
///
/// Returns `None` when the line has no delimiter. Only the first occurrence
/// splits the line, so `a=>b=>c` yields `b=>c`.
pub fn extract_payload(line: &str) -> Option<&str> {
    line.split_once(DELIMITER)
        .map(|(_, payload)| payload.trim_matches(is_strip_whitespace))
}

/// Whitespace stripped from payload edges.
///
/// Unicode `White_Space` plus the ASCII information separators
/// `\x1c`..=`\x1f`, which plain-text tooling also treats as blanks.
fn is_strip_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Splits `content` into lines on `\n`, `\r\n` or a lone `\r`.
///
/// Line endings are not part of the yielded lines. A final line without a
/// terminator still counts; empty content has no lines.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Extracts payloads from every line of `content`, in input order.
///
/// Returns the number of input lines alongside the retained payloads.
/// Lines are split with [`split_lines`].
pub fn extract_payloads(content: &str) -> (usize, Vec<String>) {
    let mut input_lines = 0;
    let mut retained = Vec::new();

    for line in split_lines(content) {
        input_lines += 1;
        if let Some(payload) = extract_payload(line) {
            retained.push(payload.to_string());
        }
    }

    (input_lines, retained)
}

/// Renders retained payloads as file content.
///
/// Payloads are joined by `\n` with one trailing newline. No payloads
/// renders as the empty string.
pub fn render_output<S: AsRef<str>>(retained: &[S]) -> String {
    let mut output = String::with_capacity(
        retained.iter().map(|line| line.as_ref().len() + 1).sum(),
    );
    for line in retained {
        output.push_str(line.as_ref());
        output.push('\n');
    }
    output
}
