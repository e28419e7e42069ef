//! Token parsers for the state literal grammar.
//!
//! Only quoted string tokens are recognized. There is deliberately no token
//! for numbers, identifiers or anything callable.

use nom::{
    branch::alt,
    bytes::complete::is_not,
    character::complete::{char, multispace0},
    combinator::{map, value},
    multi::fold_many0,
    sequence::{delimited, preceded},
    IResult,
};

/// Characters that end a run of plain text inside a single-quoted string.
const SINGLE_QUOTE_STOP: &str = "'\\\n\r";
/// Characters that end a run of plain text inside a double-quoted string.
const DOUBLE_QUOTE_STOP: &str = "\"\\\n\r";

/// A piece of string body: either literal text or one decoded escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fragment<'a> {
    Literal(&'a str),
    Escaped(char),
}

/// Wrap a parser so it skips surrounding whitespace, newlines included.
pub fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Parse a backslash escape. Unknown escapes are rejected.
fn escaped_char(input: &str) -> IResult<&str, char> {
    preceded(
        char('\\'),
        alt((
            value('\\', char('\\')),
            value('\'', char('\'')),
            value('"', char('"')),
            value('\n', char('n')),
            value('\t', char('t')),
            value('\r', char('r')),
            value('\0', char('0')),
        )),
    )(input)
}

fn fragment<'a>(stop: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, Fragment<'a>> {
    alt((
        map(is_not(stop), Fragment::Literal),
        map(escaped_char, Fragment::Escaped),
    ))
}

fn quoted<'a>(
    quote: char,
    stop: &'static str,
) -> impl FnMut(&'a str) -> IResult<&'a str, String> {
    delimited(
        char(quote),
        fold_many0(fragment(stop), String::new, |mut acc, frag| {
            match frag {
                Fragment::Literal(s) => acc.push_str(s),
                Fragment::Escaped(c) => acc.push(c),
            }
            acc
        }),
        char(quote),
    )
}

/// Parse a single- or double-quoted string literal into its decoded value.
///
/// Raw line breaks inside the quotes are not allowed.
pub fn string_literal(input: &str) -> IResult<&str, String> {
    alt((
        quoted('\'', SINGLE_QUOTE_STOP),
        quoted('"', DOUBLE_QUOTE_STOP),
    ))(input)
}
