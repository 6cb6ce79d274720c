//! Provides the typed list walker shared by parameters, predicates and
//! objects.

use crate::errors::StructuralError;
use crate::parsed_types::{TokenTree, Typed, TypedList};

/// Parses a typed list, i.e. `a b - t1 c - t2 d`. Each run of names takes
/// the type following the next hyphen; trailing names are of type `object`.
///
/// ## Example
/// ```
/// # use graphplan::parsers::{parse_typed_list, read_token_tree};
/// # use graphplan::parsed_types::Name;
/// let tree = read_token_tree("(?x ?y - truck ?z)").unwrap();
/// let list = parse_typed_list(tree.as_list().unwrap(), "parameters").unwrap();
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[1].type_(), Name::from("truck"));
/// assert_eq!(list[2].type_(), Name::from("object"));
/// ```
pub fn parse_typed_list(tokens: &[TokenTree], context: &str) -> Result<TypedList, StructuralError> {
    let mut list = vec![];
    let mut pending = vec![];
    let mut tokens = tokens.iter();
    while let Some(token) = tokens.next() {
        let name = token
            .as_atom()
            .ok_or_else(|| StructuralError::ExpectedName(context.to_string()))?;
        if name == "-" {
            if pending.is_empty() {
                return Err(StructuralError::UnexpectedHyphen(context.to_string()));
            }
            let type_ = tokens
                .next()
                .and_then(TokenTree::as_atom)
                .ok_or_else(|| StructuralError::MissingType(context.to_string()))?;
            list.extend(pending.drain(..).map(|value| Typed::new(value, type_)));
        } else {
            pending.push(name);
        }
    }
    list.extend(pending.into_iter().map(Typed::untyped));
    Ok(TypedList::new(list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::Name;
    use crate::parsers::read_token_tree;

    fn parse(text: &str) -> Result<TypedList, StructuralError> {
        let tree = read_token_tree(text).unwrap();
        parse_typed_list(tree.as_list().unwrap(), "test")
    }

    #[test]
    fn groups_take_following_type() {
        let list = parse("(truck0 truck1 - truck pallet0 - pallet)").unwrap();
        let pairs: Vec<_> = list
            .iter()
            .map(|typed| (typed.value().to_string(), typed.type_().to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("truck0".to_string(), "truck".to_string()),
                ("truck1".to_string(), "truck".to_string()),
                ("pallet0".to_string(), "pallet".to_string()),
            ]
        );
    }

    #[test]
    fn untyped_names_are_objects() {
        let list = parse("(a b)").unwrap();
        assert!(list.iter().all(|typed| typed.type_() == Name::object()));
    }

    #[test]
    fn empty_list() {
        assert!(parse("()").unwrap().is_empty());
    }

    #[test]
    fn leading_hyphen_is_rejected() {
        assert_eq!(
            parse("(- truck)"),
            Err(StructuralError::UnexpectedHyphen("test".to_string()))
        );
    }

    #[test]
    fn trailing_hyphen_is_rejected() {
        assert_eq!(
            parse("(a -)"),
            Err(StructuralError::MissingType("test".to_string()))
        );
    }

    #[test]
    fn either_types_are_rejected() {
        assert_eq!(
            parse("(a - (either b c))"),
            Err(StructuralError::MissingType("test".to_string()))
        );
    }
}
