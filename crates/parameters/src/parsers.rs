//! Line parsers for deal.II style parameter files

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_until};
use nom::character::complete::{char, space0, space1};
use nom::combinator::{eof, rest, value};
use nom::sequence::{preceded, tuple};
use nom::IResult;

/// Kinds of line found in a parameter file
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `set <key> = <value>`
    Set(&'a str, &'a str),
    /// `subsection <name>`
    Subsection(&'a str),
    /// `end` of a subsection
    End,
    /// Nothing but whitespace or a comment
    Blank,
}

/// Everything before a `#` comment
pub(crate) fn strip_comment(i: &str) -> &str {
    match i.find('#') {
        Some(n) => &i[..n],
        None => i,
    }
}

/// Identify a single (comment-free) line
pub(crate) fn line(i: &str) -> IResult<&str, Line> {
    let i = i.trim();
    alt((set_entry, subsection, end, blank))(i)
}

/// Key/value pair from `set <key> = <value>`, trimmed
fn set_entry(i: &str) -> IResult<&str, Line> {
    let (i, (_, _, key, _, value)) =
        tuple((tag_no_case("set"), space1, take_until("="), char('='), rest))(i)?;
    Ok((i, Line::Set(key.trim(), value.trim())))
}

/// Start of a named subsection
fn subsection(i: &str) -> IResult<&str, Line> {
    let (i, name) = preceded(tuple((tag_no_case("subsection"), space1)), rest)(i)?;
    Ok((i, Line::Subsection(name.trim())))
}

/// Closing `end` of a subsection
fn end(i: &str) -> IResult<&str, Line> {
    value(Line::End, tuple((tag_no_case("end"), space0, eof)))(i)
}

/// Empty line
fn blank(i: &str) -> IResult<&str, Line> {
    value(Line::Blank, eof)(i)
}

/// Key with runs of whitespace collapsed to single spaces
pub(crate) fn normalise_key(key: &str) -> String {
    key.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_entries() {
        assert_eq!(
            line("set Domain size (X) = 40"),
            Ok(("", Line::Set("Domain size (X)", "40")))
        );
        assert_eq!(
            line("  SET Model constant McV=1.0, DOUBLE  "),
            Ok(("", Line::Set("Model constant McV", "1.0, DOUBLE")))
        );
        // value may be empty, but the '=' is required
        assert_eq!(line("set Output file name ="), Ok(("", Line::Set("Output file name", ""))));
        assert!(line("set Time step 1e-3").is_err());
    }

    #[test]
    fn value_keeps_extra_equals() {
        assert_eq!(
            line("set Boundary condition for variable c = NATURAL, x=0"),
            Ok(("", Line::Set("Boundary condition for variable c", "NATURAL, x=0")))
        );
    }

    #[test]
    fn structure_lines() {
        assert_eq!(line("subsection Mesh"), Ok(("", Line::Subsection("Mesh"))));
        assert_eq!(line("end"), Ok(("", Line::End)));
        assert_eq!(line("   "), Ok(("", Line::Blank)));
        assert!(line("endless").is_err());
        assert!(line("settings = 2").is_err());
    }

    #[test]
    fn comments() {
        assert_eq!(strip_comment("set a = 1 # trailing"), "set a = 1 ");
        assert_eq!(strip_comment("# =========="), "");
        assert_eq!(strip_comment("set a = 1"), "set a = 1");
    }

    #[test]
    fn keys_are_normalised() {
        assert_eq!(normalise_key("Domain  size\t(X)"), "Domain size (X)");
    }
}
