//! Contains the [`TokenTree`] produced by the reader.

use crate::parsed_types::Name;
use std::fmt::{Display, Formatter};

/// A node of a parenthesised expression: either an atom or an ordered list
/// of child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenTree {
    Atom(Name),
    List(Vec<TokenTree>),
}

impl TokenTree {
    pub fn atom(name: &str) -> Self {
        Self::Atom(Name::new(name))
    }

    pub fn as_atom(&self) -> Option<Name> {
        match self {
            Self::Atom(name) => Some(*name),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[TokenTree]> {
        match self {
            Self::Atom(_) => None,
            Self::List(children) => Some(children.as_slice()),
        }
    }

    /// The leading atom of a list, e.g. `define` in `(define ...)`.
    pub fn head(&self) -> Option<Name> {
        self.as_list()?.first()?.as_atom()
    }

    /// Whether this is an atom equal to `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Self::Atom(name) if name == keyword)
    }
}

impl Display for TokenTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(name) => write!(f, "{}", name),
            Self::List(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_shape() {
        let tree = TokenTree::List(vec![
            TokenTree::atom("on"),
            TokenTree::atom("a"),
            TokenTree::List(vec![]),
        ]);
        assert_eq!(tree.to_string(), "(on a ())");
        assert_eq!(tree.head(), Some(Name::new("on")));
    }
}
