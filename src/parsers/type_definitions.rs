//! Provides the parser for type definitions.

use crate::errors::StructuralError;
use crate::parsed_types::{TokenTree, TypeHierarchy};

/// Parses the body of a `(:types ...)` section, i.e. runs of names each
/// followed by `- supertype`. A type keeps the first supertype it is given,
/// and names never given one become children of `object`.
///
/// ## Example
/// ```
/// # use graphplan::parsers::{parse_type_definitions, read_token_tree};
/// # use graphplan::parsed_types::Name;
/// let tree = read_token_tree("(place locatable - object depot distributor - place)").unwrap();
/// let types = parse_type_definitions(tree.as_list().unwrap()).unwrap();
/// assert_eq!(types.len(), 4);
/// assert_eq!(
///     types.subtypes(Name::from("place")),
///     &[Name::from("depot"), Name::from("distributor")]
/// );
/// ```
pub fn parse_type_definitions(tokens: &[TokenTree]) -> Result<TypeHierarchy, StructuralError> {
    let context = || "types".to_string();
    let mut types = TypeHierarchy::default();
    let mut pending = vec![];
    let mut tokens = tokens.iter();
    while let Some(token) = tokens.next() {
        let name = token
            .as_atom()
            .ok_or_else(|| StructuralError::ExpectedName(context()))?;
        if name == "-" {
            if pending.is_empty() {
                return Err(StructuralError::UnexpectedHyphen(context()));
            }
            let supertype = tokens
                .next()
                .and_then(TokenTree::as_atom)
                .ok_or_else(|| StructuralError::MissingType(context()))?;
            for subtype in pending.drain(..) {
                types.assign(subtype, supertype);
            }
        } else {
            types.declare(name);
            pending.push(name);
        }
    }
    types.attach_orphans();
    Ok(types)
}
