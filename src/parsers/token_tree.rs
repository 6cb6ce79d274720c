//! Provides the reader turning declarative text into a [`TokenTree`].

use crate::errors::{ModelError, StructuralError};
use crate::parsed_types::{Name, TokenTree};
use crate::parsers::{leading_whitespace, whitespace, ParseResult, Span};
use nom::branch::alt;
use nom::bytes::complete::is_not;
use nom::character::complete::char;
use nom::combinator::map;
use nom::multi::many0;
use nom::sequence::{delimited, terminated};
use std::fs;
use std::path::Path;

/// Characters that end an atom.
const ATOM_DELIMITERS: &str = "(); \t\r\n";

/// Parses an atom, i.e. a maximal run of characters other than whitespace,
/// parentheses and `;`.
///
/// ## Example
/// ```
/// # use graphplan::parsers::{parse_atom, Span};
/// # use graphplan::parsed_types::TokenTree;
/// let (remainder, atom) = parse_atom(Span::new("?x)")).unwrap();
/// assert_eq!(atom, TokenTree::atom("?x"));
/// assert_eq!(remainder.fragment(), &")");
/// ```
pub fn parse_atom<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, TokenTree> {
    map(is_not(ATOM_DELIMITERS), |atom: Span| {
        TokenTree::Atom(Name::new(atom.fragment()))
    })(input.into())
}

/// Parses an atom or a parenthesised list of token trees.
pub fn parse_token_tree<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, TokenTree> {
    alt((parse_atom, map(parse_list, TokenTree::List)))(input.into())
}

fn parse_list(input: Span) -> ParseResult<Vec<TokenTree>> {
    delimited(
        char('('),
        many0(leading_whitespace(parse_token_tree)),
        leading_whitespace(char(')')),
    )(input)
}

/// Reads declarative text into a single token tree. The text is lower-cased
/// and `;` comments are dropped.
///
/// ## Example
/// ```
/// # use graphplan::parsers::read_token_tree;
/// # use graphplan::parsed_types::TokenTree;
/// let tree = read_token_tree("(On A ; the block\n B)").unwrap();
/// assert_eq!(
///     tree,
///     TokenTree::List(vec![
///         TokenTree::atom("on"),
///         TokenTree::atom("a"),
///         TokenTree::atom("b"),
///     ])
/// );
/// assert!(read_token_tree("(on a b").is_err());
/// ```
pub fn read_token_tree(input: &str) -> Result<TokenTree, StructuralError> {
    let normalised = input.to_lowercase();
    let (remainder, mut trees) = terminated(many0(leading_whitespace(parse_token_tree)), whitespace)(
        Span::new(&normalised),
    )
    .map_err(|_| StructuralError::MalformedExpression(0))?;

    // Whatever the forest parser left over starts at an unbalanced delimiter.
    if let Some(delimiter) = remainder.fragment().chars().next() {
        let line = remainder.location_line();
        let column = remainder.get_utf8_column();
        return Err(if delimiter == ')' {
            StructuralError::MissingOpenParenthesis { line, column }
        } else {
            StructuralError::MissingCloseParenthesis { line, column }
        });
    }

    if trees.len() != 1 {
        return Err(StructuralError::MalformedExpression(trees.len()));
    }
    Ok(trees.remove(0))
}

/// Reads the file at `path` into a single token tree.
pub fn read_token_tree_from_path(path: &Path) -> Result<TokenTree, ModelError> {
    let text = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read_token_tree(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn list(children: Vec<TokenTree>) -> TokenTree {
        TokenTree::List(children)
    }

    #[test]
    fn nested_lists() {
        let tree = read_token_tree("(define (domain depot)\n  (:requirements :typing))").unwrap();
        assert_eq!(
            tree,
            list(vec![
                TokenTree::atom("define"),
                list(vec![TokenTree::atom("domain"), TokenTree::atom("depot")]),
                list(vec![
                    TokenTree::atom(":requirements"),
                    TokenTree::atom(":typing")
                ]),
            ])
        );
    }

    #[test]
    fn empty_lists_and_padding() {
        let tree = read_token_tree("  ( ( )  x ) \n").unwrap();
        assert_eq!(tree, list(vec![list(vec![]), TokenTree::atom("x")]));
    }

    #[test]
    fn comments_are_stripped() {
        let tree = read_token_tree("; header\n(a ; inline ( not a list\n b) ; done").unwrap();
        assert_eq!(tree, list(vec![TokenTree::atom("a"), TokenTree::atom("b")]));
    }

    #[test]
    fn case_is_normalised() {
        let tree = read_token_tree("(Drive Truck0)").unwrap();
        assert_eq!(
            tree,
            list(vec![TokenTree::atom("drive"), TokenTree::atom("truck0")])
        );
    }

    #[test]
    fn missing_close_parenthesis() {
        assert_eq!(
            read_token_tree("(a\n (b)"),
            Err(StructuralError::MissingCloseParenthesis { line: 1, column: 1 })
        );
    }

    #[test]
    fn missing_open_parenthesis() {
        assert_eq!(
            read_token_tree("(a (b)))"),
            Err(StructuralError::MissingOpenParenthesis { line: 1, column: 8 })
        );
    }

    #[test]
    fn more_than_one_tree_is_malformed() {
        assert_eq!(
            read_token_tree("(a) (b)"),
            Err(StructuralError::MalformedExpression(2))
        );
        assert_eq!(
            read_token_tree("; nothing here"),
            Err(StructuralError::MalformedExpression(0))
        );
    }

    #[test]
    fn reads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(define (problem p1))").unwrap();
        let tree = read_token_tree_from_path(file.path()).unwrap();
        assert_eq!(tree.head(), Some(Name::new("define")));

        let missing = read_token_tree_from_path(Path::new("/nonexistent/domain.pddl"));
        assert!(matches!(missing, Err(ModelError::Io { .. })));
    }
}
