//! Grammar for the bracketed state literal.
//!
//! ```text
//! list   := '[' ( string ( ',' string )* ','? )? ']'
//! string := '\'' ... '\'' | '"' ... '"'
//! ```
//!
//! Whitespace (including newlines) is allowed between tokens. Anything else,
//! such as numbers, booleans, identifiers, calls or nested lists, makes the
//! whole literal malformed. The text is never evaluated.

use nom::{
    branch::alt,
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt},
    multi::separated_list1,
    sequence::{delimited, terminated},
    Err, IResult,
};

use ngport_core::{ExtractError, StateList};

use crate::lexer::{string_literal, ws};

/// Parse a bracketed list of quoted strings.
pub fn string_list(input: &str) -> IResult<&str, Vec<String>> {
    delimited(
        ws(char('[')),
        alt((
            terminated(
                separated_list1(ws(char(',')), ws(string_literal)),
                opt(ws(char(','))),
            ),
            map(multispace0, |_| Vec::new()),
        )),
        ws(char(']')),
    )(input)
}

/// Parse `literal` as a complete list of quoted strings.
///
/// The entire input must be consumed; trailing text is an error.
pub fn parse_string_list(literal: &str) -> Result<StateList, ExtractError> {
    match all_consuming(string_list)(literal) {
        Ok((_, items)) => Ok(StateList::from(items)),
        Err(Err::Error(e)) | Err(Err::Failure(e)) => {
            Err(ExtractError::malformed(literal, e.input, describe(literal, e.input)))
        }
        Err(Err::Incomplete(_)) => Err(ExtractError::malformed(
            literal,
            "",
            "unexpected end of literal",
        )),
    }
}

/// Explain why parsing of `literal` stopped at `rest`.
fn describe(literal: &str, rest: &str) -> &'static str {
    let parsed = &literal[..literal.len() - rest.len()];
    let after_element = parsed.trim_end().ends_with(['\'', '"']);
    match rest.trim_start().chars().next() {
        None => "unexpected end of literal",
        Some(_) if after_element => "expected ',' or ']'",
        Some('\'') | Some('"') => "unterminated or invalid string literal",
        Some('[') => "nested lists are not supported",
        Some(c) if c.is_ascii_digit() || c == '-' || c == '.' => {
            "numeric literals are not supported"
        }
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
            "only quoted string literals are supported"
        }
        Some(_) => "unexpected token",
    }
}
