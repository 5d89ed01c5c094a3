//! Recognisers for variable attribute setter statements

// internal modules
use crate::record::Attribute;

// external crates
use log::{trace, warn};

// nom parser combinators
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{char, space0};
use nom::error::{Error, ErrorKind};
use nom::sequence::{terminated, tuple};
use nom::IResult;

/// Result of checking one line against one attribute setter
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Statement<'a> {
    /// The line is not a call to this setter
    Unrelated,
    /// A call to this setter that could not be read
    Malformed,
    /// A well formed call with its `(index, value)` arguments
    Setter(&'a str, &'a str),
}

/// More convenient error creation for nom
fn cause(s: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(s, ErrorKind::Fail))
}

/// Check a trimmed, comment-free line for a call to the attribute's setter
pub(crate) fn attribute_statement(line: &str, attribute: Attribute) -> Statement<'_> {
    let arguments = match setter_call(line, attribute.setter()) {
        Ok((arguments, _)) => arguments,
        Err(_) => return Statement::Unrelated,
    };

    match setter_arguments(arguments) {
        Ok((_, (index, value))) => {
            trace!("{} -> index {index:?}, value {value:?}", attribute.setter());
            Statement::Setter(index, value)
        }
        Err(_) => {
            warn!("Skipping malformed {} statement: {line:?}", attribute.setter());
            Statement::Malformed
        }
    }
}

/// Recognise the setter name and opening bracket, e.g. `set_variable_name (`
///
/// Whitespace is allowed before the bracket since setters are usually aligned
/// with tabs.
fn setter_call<'a>(i: &'a str, setter: &'static str) -> IResult<&'a str, &'a str> {
    let (i, (name, _, _)) = tuple((tag(setter), space0, char('(')))(i)?;
    Ok((i, name))
}

/// Split the `index, value);` remainder of a setter call
///
/// The value keeps any further commas. Surrounding double quotes are removed.
fn setter_arguments(i: &str) -> IResult<&str, (&str, &str)> {
    let body = closing_bracket(i).ok_or_else(|| cause(i))?;
    let (value, index) = terminated(take_until(","), char(','))(body)?;

    let index = index.trim();
    if index.is_empty() {
        return Err(cause(i));
    }

    Ok(("", (index, value.trim().trim_matches('"'))))
}

/// Everything before the final `);`, allowing a trailing `//` comment
///
/// The value itself may contain `//`, so the comment starts at the first `//`
/// that directly follows the closing `);`.
fn closing_bracket(i: &str) -> Option<&str> {
    let code = i
        .match_indices("//")
        .map(|(n, _)| &i[..n])
        .find(|code| code.trim_end().ends_with(");"))
        .unwrap_or(i);
    code.trim_end().strip_suffix(");")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_and_bare_values() {
        assert_eq!(
            attribute_statement("set_variable_name(0,\"c_v\");", Attribute::Name),
            Statement::Setter("0", "c_v")
        );
        assert_eq!(
            attribute_statement("set_variable_type(1, VECTOR);", Attribute::Kind),
            Statement::Setter("1", "VECTOR")
        );
    }

    #[test]
    fn aligned_with_whitespace() {
        assert_eq!(
            attribute_statement(
                "set_variable_equation_type\t\t(2,EXPLICIT_TIME_DEPENDENT);",
                Attribute::EquationKind
            ),
            Statement::Setter("2", "EXPLICIT_TIME_DEPENDENT")
        );
        assert_eq!(
            attribute_statement("set_variable_name  ( 3 ,  \"mu\" ) ;", Attribute::Name),
            Statement::Malformed
        );
    }

    #[test]
    fn setters_do_not_overlap() {
        let line = "set_variable_equation_type(0,PARABOLIC);";
        assert_eq!(attribute_statement(line, Attribute::Name), Statement::Unrelated);
        assert_eq!(attribute_statement(line, Attribute::Kind), Statement::Unrelated);

        // prefix must be followed by the bracket
        let line = "set_variable_name_alias(0,\"c\");";
        assert_eq!(attribute_statement(line, Attribute::Name), Statement::Unrelated);
    }

    #[test]
    fn unrelated_code() {
        for line in ["", "double c = 0.0;", "set_dependencies_value_term_RHS(0, \"c\");"] {
            assert_eq!(attribute_statement(line, Attribute::Name), Statement::Unrelated);
        }
    }

    #[test]
    fn malformed_statements() {
        // no comma
        assert_eq!(
            attribute_statement("set_variable_name(0);", Attribute::Name),
            Statement::Malformed
        );
        // unterminated
        assert_eq!(
            attribute_statement("set_variable_name(0, \"c\"", Attribute::Name),
            Statement::Malformed
        );
        // empty index
        assert_eq!(
            attribute_statement("set_variable_name( , \"c\");", Attribute::Name),
            Statement::Malformed
        );
    }

    #[test]
    fn value_keeps_extra_commas() {
        assert_eq!(
            attribute_statement("set_variable_name(0, \"a,b\");", Attribute::Name),
            Statement::Setter("0", "a,b")
        );
    }

    #[test]
    fn trailing_line_comment() {
        assert_eq!(
            attribute_statement("set_variable_name(0,\"c\"); // concentration", Attribute::Name),
            Statement::Setter("0", "c")
        );
    }

    #[test]
    fn slashes_in_value() {
        for line in [
            "set_variable_name(0,\"a//b\");",
            "set_variable_name(0,\"a//b\"); // note",
            "set_variable_name(0,\"a//b\");// note // more",
        ] {
            assert_eq!(
                attribute_statement(line, Attribute::Name),
                Statement::Setter("0", "a//b")
            );
        }
    }
}
