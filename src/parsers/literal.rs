//! Provides parsers for literals and literal conjunctions.

use crate::errors::{ModelError, StructuralError};
use crate::parsed_types::{Atom, TokenTree};

/// Parses a single atom, e.g. `(on ?x ?y)`.
pub fn parse_literal(tree: &TokenTree, context: &str) -> Result<Atom, StructuralError> {
    let expected_name = || StructuralError::ExpectedName(context.to_string());
    let (head, arguments) = tree
        .as_list()
        .ok_or_else(|| StructuralError::ExpectedList(context.to_string()))?
        .split_first()
        .ok_or_else(expected_name)?;
    let predicate = head.as_atom().ok_or_else(expected_name)?;
    let arguments = arguments
        .iter()
        .map(|argument| argument.as_atom().ok_or_else(expected_name))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Atom::new(predicate, arguments))
}

/// Splits a precondition, effect or goal into its positive and negative
/// literals. A top-level `and` is unwrapped, any other expression is treated
/// as a single literal, and `(not <literal>)` goes to the negative list.
///
/// ## Example
/// ```
/// # use graphplan::parsers::{read_token_tree, split_literals};
/// # use graphplan::parsed_types::Atom;
/// let tree = read_token_tree("(and (moved ?a) (not (clear ?a)))").unwrap();
/// let (positive, negative) = split_literals(&tree, "move effects").unwrap();
/// assert_eq!(positive, vec![Atom::from_strs("moved", &["?a"])]);
/// assert_eq!(negative, vec![Atom::from_strs("clear", &["?a"])]);
/// ```
pub fn split_literals(
    tree: &TokenTree,
    context: &str,
) -> Result<(Vec<Atom>, Vec<Atom>), ModelError> {
    let items = tree
        .as_list()
        .ok_or_else(|| StructuralError::ExpectedList(context.to_string()))?;
    let literals: &[TokenTree] = match items.first() {
        None => &[],
        Some(head) if head.is_keyword("and") => &items[1..],
        Some(_) => std::slice::from_ref(tree),
    };

    let mut positive = vec![];
    let mut negative = vec![];
    for literal in literals {
        match literal.as_list() {
            Some([head, rest @ ..]) if head.is_keyword("not") => match rest {
                [inner] => negative.push(parse_literal(inner, context)?),
                _ => {
                    return Err(ModelError::LiteralShape {
                        context: context.to_string(),
                        arity: rest.len(),
                    })
                }
            },
            _ => positive.push(parse_literal(literal, context)?),
        }
    }
    Ok((positive, negative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::read_token_tree;

    fn split(text: &str) -> Result<(Vec<Atom>, Vec<Atom>), ModelError> {
        split_literals(&read_token_tree(text).unwrap(), "test")
    }

    #[test]
    fn single_literal_is_a_singleton() {
        let (positive, negative) = split("(clear b1)").unwrap();
        assert_eq!(positive, vec![Atom::from_strs("clear", &["b1"])]);
        assert!(negative.is_empty());
    }

    #[test]
    fn single_negation() {
        let (positive, negative) = split("(not (clear b1))").unwrap();
        assert!(positive.is_empty());
        assert_eq!(negative, vec![Atom::from_strs("clear", &["b1"])]);
    }

    #[test]
    fn empty_conjunction() {
        assert_eq!(split("()").unwrap(), (vec![], vec![]));
        assert_eq!(split("(and)").unwrap(), (vec![], vec![]));
    }

    #[test]
    fn negation_arity_is_checked() {
        let result = split("(and (not (clear b1) (clear b2)))");
        assert!(matches!(
            result,
            Err(ModelError::LiteralShape { arity: 2, .. })
        ));
        assert!(matches!(
            split("(not)"),
            Err(ModelError::LiteralShape { arity: 0, .. })
        ));
    }

    #[test]
    fn atom_instead_of_list() {
        let result = split_literals(&TokenTree::atom("clear"), "test");
        assert!(matches!(
            result,
            Err(ModelError::Structural(StructuralError::ExpectedList(_)))
        ));
    }

    #[test]
    fn nullary_literal() {
        let (positive, _) = split("(and (handempty))").unwrap();
        assert_eq!(positive, vec![Atom::from_strs("handempty", &[])]);
    }
}
