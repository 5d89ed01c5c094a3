//! Removal of C-style comments from single lines
//!
//! Block comments may span several lines, so the caller threads a single flag
//! from one line to the next. This flag is the only state carried across lines
//! while scanning a file.

/// Opening marker of a block comment
pub const BLOCK_OPEN: &str = "/*";

/// Closing marker of a block comment
pub const BLOCK_CLOSE: &str = "*/";

/// Opening marker of a line comment
pub const LINE_COMMENT: &str = "//";

/// Remove all block comment content from a line
///
/// Takes one line of text (without the newline) and whether the previous line
/// left an unterminated block comment open. Returns the remaining code and the
/// updated flag.
///
/// - Inside a block comment, everything up to and including `*/` is dropped.
///   Without a `*/` the whole line is comment and the flag stays set.
/// - Every `/* ... */` closed on the same line is excised, and scanning
///   continues after it.
/// - A `/*` with no close on the line removes the rest of the line and sets
///   the flag.
///
/// This never fails. A stray `*/` with nothing to close is left as ordinary
/// text.
///
/// ```rust
/// # use pfmc_equations::strip_block_comments;
/// // Comments contained in a single line
/// assert_eq!(strip_block_comments("a/*x*/b/*y*/c", false), ("abc".to_string(), false));
///
/// // Comments that continue onto the next line
/// let (first, open) = strip_block_comments("a/*x", false);
/// let (second, open) = strip_block_comments("y*/b", open);
/// assert_eq!((first.as_str(), second.as_str(), open), ("a", "b", false));
/// ```
pub fn strip_block_comments(line: &str, in_block_comment: bool) -> (String, bool) {
    let mut rest = line;
    let mut code = String::with_capacity(line.len());

    // finish off a comment left open by a previous line
    if in_block_comment {
        match rest.find(BLOCK_CLOSE) {
            Some(end) => rest = &rest[end + BLOCK_CLOSE.len()..],
            None => return (code, true),
        }
    }

    // a line may close one comment and open several more
    while let Some(start) = rest.find(BLOCK_OPEN) {
        code.push_str(&rest[..start]);
        let comment = &rest[start + BLOCK_OPEN.len()..];
        match comment.find(BLOCK_CLOSE) {
            Some(end) => rest = &comment[end + BLOCK_CLOSE.len()..],
            None => return (code, true),
        }
    }

    code.push_str(rest);
    (code, false)
}

/// Check for lines that are skipped before any comment stripping
///
/// Blank lines and those starting with `//` (ignoring surrounding whitespace)
/// carry no code at all.
pub fn is_blank_or_line_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with(LINE_COMMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(line: &str, open: bool) -> (String, bool) {
        strip_block_comments(line, open)
    }

    #[test]
    fn plain_lines_unchanged() {
        for line in ["", "int a = 1;", "  set_variable_name(0,\"c\");  ", "x * y / z"] {
            assert_eq!(strip(line, false), (line.to_string(), false));
        }
    }

    #[test]
    fn single_line_comment_block() {
        assert_eq!(strip("a/*x*/b", false), ("ab".to_string(), false));
        assert_eq!(strip("/* whole line */", false), ("".to_string(), false));
        assert_eq!(strip("/**/", false), ("".to_string(), false));
    }

    #[test]
    fn multiple_blocks_on_one_line() {
        assert_eq!(strip("a/*x*/b/*y*/c", false), ("abc".to_string(), false));
        assert_eq!(strip("a/*x*/b/*y", false), ("ab".to_string(), true));
    }

    #[test]
    fn block_spanning_lines() {
        let (first, open) = strip("a/*x", false);
        assert_eq!((first.as_str(), open), ("a", true));

        let (middle, open) = strip("nothing to see here", open);
        assert_eq!((middle.as_str(), open), ("", true));

        let (last, open) = strip("y*/b", open);
        assert_eq!((last.as_str(), open), ("b", false));
    }

    #[test]
    fn close_then_reopen() {
        assert_eq!(strip("x*/a/*y*/b/*z", true), ("ab".to_string(), true));
        assert_eq!(strip("*/", true), ("".to_string(), false));
    }

    #[test]
    fn markers_do_not_overlap() {
        // "/*/" opens a comment, the '*' is not reused as a close marker
        assert_eq!(strip("a/*/b", false), ("a".to_string(), true));
    }

    #[test]
    fn stray_close_is_tolerated() {
        assert_eq!(strip("a*/b", false), ("a*/b".to_string(), false));
    }

    #[test]
    fn skipped_lines() {
        assert!(is_blank_or_line_comment(""));
        assert!(is_blank_or_line_comment("   \t"));
        assert!(is_blank_or_line_comment("  // set_variable_name(0,\"c_v\");"));
        assert!(!is_blank_or_line_comment("a // trailing"));
        assert!(!is_blank_or_line_comment("/* block */"));
    }
}
