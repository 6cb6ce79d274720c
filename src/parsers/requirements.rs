//! Provides parsers for requirements.

use crate::errors::{ModelError, StructuralError};
use crate::parsed_types::{Requirement, TokenTree};
use std::str::FromStr;

/// Parses the keys of a `(:requirements <require-key>⁺)` section. Every key
/// must be a supported requirement.
///
/// ## Example
/// ```
/// # use graphplan::parsers::{parse_requirements, read_token_tree};
/// # use graphplan::parsed_types::Requirement;
/// let tree = read_token_tree("(:strips :typing)").unwrap();
/// assert_eq!(
///     parse_requirements(tree.as_list().unwrap()).unwrap(),
///     vec![Requirement::Strips, Requirement::Typing]
/// );
///
/// let tree = read_token_tree("(:strips :adl)").unwrap();
/// assert!(parse_requirements(tree.as_list().unwrap()).is_err());
/// ```
pub fn parse_requirements(keys: &[TokenTree]) -> Result<Vec<Requirement>, ModelError> {
    keys.iter()
        .map(|key| {
            let key = key
                .as_atom()
                .ok_or_else(|| StructuralError::ExpectedName("requirements".to_string()))?;
            match Requirement::from_str(key.as_str()) {
                Ok(requirement) if requirement.is_supported() => Ok(requirement),
                _ => Err(ModelError::UnsupportedFeature(key.to_string())),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::read_token_tree;

    fn parse(text: &str) -> Result<Vec<Requirement>, ModelError> {
        parse_requirements(read_token_tree(text).unwrap().as_list().unwrap())
    }

    #[test]
    fn known_but_unsupported() {
        match parse("(:typing :negative-preconditions)") {
            Err(ModelError::UnsupportedFeature(key)) => assert_eq!(key, ":negative-preconditions"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn unknown_key() {
        assert!(matches!(
            parse("(:teleport)"),
            Err(ModelError::UnsupportedFeature(_))
        ));
    }

    #[test]
    fn empty_section() {
        assert_eq!(parse("()").unwrap(), vec![]);
    }
}
