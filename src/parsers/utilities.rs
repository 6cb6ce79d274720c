//! Utility parsers.

use crate::parsers::{ignore_single_line_comment, ParseResult, Span};
use nom::{
    character::complete::multispace0,
    combinator::value,
    sequence::preceded,
};

/// Consumes whitespace and line comments.
pub fn whitespace<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value((), preceded(multispace0, ignore_single_line_comment))(input.into())
}

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes leading whitespace, returning the output of `inner`. This parser
/// also suppresses line comments.
pub fn leading_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(whitespace, inner)
}
