//! Provides parsers for predicate definitions.

use crate::errors::StructuralError;
use crate::parsed_types::{PredicateDefinition, TokenTree};
use crate::parsers::parse_typed_list;

/// Parses a predicate definition, e.g. `(at ?x - locatable ?y - place)`.
///
/// ## Example
/// ```
/// # use graphplan::parsers::{parse_predicate_definition, read_token_tree};
/// # use graphplan::parsed_types::Name;
/// let tree = read_token_tree("(at ?x - locatable ?y - place)").unwrap();
/// let predicate = parse_predicate_definition(&tree).unwrap();
/// assert_eq!(predicate.name(), Name::from("at"));
/// assert_eq!(predicate.arity(), 2);
/// ```
pub fn parse_predicate_definition(tree: &TokenTree) -> Result<PredicateDefinition, StructuralError> {
    let context = "predicates";
    let (name, parameters) = tree
        .as_list()
        .ok_or_else(|| StructuralError::ExpectedList(context.to_string()))?
        .split_first()
        .ok_or_else(|| StructuralError::ExpectedName(context.to_string()))?;
    let name = name
        .as_atom()
        .ok_or_else(|| StructuralError::ExpectedName(context.to_string()))?;
    Ok(PredicateDefinition::new(
        name,
        parse_typed_list(parameters, context)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::Name;
    use crate::parsers::read_token_tree;

    #[test]
    fn untyped_parameters_default_to_object() {
        let tree = read_token_tree("(on ?x ?y)").unwrap();
        let predicate = parse_predicate_definition(&tree).unwrap();
        assert!(predicate
            .parameters()
            .iter()
            .all(|parameter| parameter.type_() == Name::object()));
    }

    #[test]
    fn nullary_predicate() {
        let tree = read_token_tree("(handempty)").unwrap();
        assert_eq!(parse_predicate_definition(&tree).unwrap().arity(), 0);
    }

    #[test]
    fn unexpected_hyphen() {
        let tree = read_token_tree("(on - block)").unwrap();
        assert_eq!(
            parse_predicate_definition(&tree),
            Err(StructuralError::UnexpectedHyphen("predicates".to_string()))
        );
    }
}
