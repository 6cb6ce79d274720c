//! Reads declarative domain/problem text into a [`TokenTree`] and walks the
//! tree into the [model](crate::parsed_types).
//!
//! [`TokenTree`]: crate::parsed_types::TokenTree

mod action_definition;
mod comments;
mod domain;
mod literal;
mod predicate_definition;
mod problem;
mod requirements;
mod token_tree;
mod type_definitions;
mod typed_list;
mod utilities;

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

// Reader
pub use comments::ignore_single_line_comment;
pub use token_tree::{parse_atom, parse_token_tree, read_token_tree, read_token_tree_from_path};

// Model builders
pub use action_definition::parse_action_definition;
pub use domain::parse_domain;
pub use literal::{parse_literal, split_literals};
pub use predicate_definition::parse_predicate_definition;
pub use problem::parse_problem;
pub use requirements::parse_requirements;
pub use type_definitions::parse_type_definitions;
pub use typed_list::parse_typed_list;

pub(crate) use utilities::{leading_whitespace, whitespace};
