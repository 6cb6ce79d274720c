//! Provides parsers for domain definitions.

use crate::errors::{DefinitionKind, ModelError, StructuralError};
use crate::parsed_types::{ActionDefinition, Domain, Name, PredicateDefinition, TokenTree};
use crate::parsers::{
    parse_action_definition, parse_predicate_definition, parse_requirements,
    parse_type_definitions, read_token_tree, read_token_tree_from_path,
};
use std::path::Path;
use tracing::warn;

/// Walks a `(define (domain <name>) <section>*)` token tree. Sections are
/// recognised by their leading keyword; unknown sections are reported as
/// warnings and skipped.
pub fn parse_domain(tree: &TokenTree) -> Result<Domain, ModelError> {
    let sections = match tree.as_list() {
        Some([head, sections @ ..]) if head.is_keyword("define") => sections,
        _ => return Err(StructuralError::UnexpectedPattern("domain").into()),
    };

    let mut name = Name::new("unknown");
    let mut requirements = vec![];
    let mut types = None;
    let mut predicates: Vec<PredicateDefinition> = vec![];
    let mut actions: Vec<ActionDefinition> = vec![];

    for section in sections {
        let (keyword, body) = section_parts(section, "domain")?;
        match keyword.as_str() {
            "domain" => {
                name = body
                    .first()
                    .and_then(TokenTree::as_atom)
                    .ok_or_else(|| StructuralError::ExpectedName("domain".to_string()))?;
            }
            ":requirements" => requirements = parse_requirements(body)?,
            ":types" => types = Some(parse_type_definitions(body)?),
            ":predicates" => {
                for definition in body {
                    let predicate = parse_predicate_definition(definition)?;
                    if predicates
                        .iter()
                        .any(|existing| existing.name() == predicate.name())
                    {
                        return Err(ModelError::Redefinition {
                            kind: DefinitionKind::Predicate,
                            name: predicate.name(),
                        });
                    }
                    predicates.push(predicate);
                }
            }
            ":action" => {
                let action = parse_action_definition(body)?;
                if actions
                    .iter()
                    .any(|existing| existing.name() == action.name())
                {
                    return Err(ModelError::Redefinition {
                        kind: DefinitionKind::Action,
                        name: action.name(),
                    });
                }
                actions.push(action);
            }
            _ => warn!("{} is not recognized in domain", keyword),
        }
    }

    let mut domain = Domain::builder(name)
        .with_requirements(requirements)
        .with_predicates(predicates)
        .with_actions(actions);
    if let Some(types) = types {
        domain = domain.with_types(types);
    }
    Ok(domain)
}

/// Splits a section such as `(:types ...)` into its keyword and body.
pub(crate) fn section_parts<'a>(
    section: &'a TokenTree,
    pattern: &str,
) -> Result<(Name, &'a [TokenTree]), StructuralError> {
    match section.as_list() {
        Some([TokenTree::Atom(keyword), body @ ..]) => Ok((*keyword, body)),
        _ => Err(StructuralError::ExpectedList(pattern.to_string())),
    }
}

impl Domain {
    /// Parses domain text.
    pub fn from_str(input: &str) -> Result<Self, ModelError> {
        parse_domain(&read_token_tree(input)?)
    }

    /// Parses the domain file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        parse_domain(&read_token_tree_from_path(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::Requirement;
    use crate::test_utils::*;

    #[test]
    fn depots() {
        let domain = Domain::from_str(DEPOTS_DOMAIN_TEXT).unwrap();
        assert_eq!(domain.name(), Name::new("depot"));
        assert_eq!(domain.requirements(), &[Requirement::Typing]);
        assert_eq!(domain.types().len(), 9);
        assert_eq!(domain.predicates().len(), 6);
        assert_eq!(domain.actions().len(), 5);
        let drive = domain.action(Name::new("drive")).unwrap();
        assert_eq!(drive.parameters().len(), 3);
    }

    #[test]
    fn untyped_domain_has_only_object() {
        let domain = Domain::from_str(BLOCKS_DOMAIN_TEXT).unwrap();
        assert!(domain.types().is_empty());
        assert!(domain.types().contains(Name::object()));
    }

    #[test]
    fn not_a_domain() {
        assert!(matches!(
            Domain::from_str("(problem x)"),
            Err(ModelError::Structural(StructuralError::UnexpectedPattern(
                "domain"
            )))
        ));
    }

    #[test]
    fn predicate_redefinition() {
        let result = Domain::from_str(
            "(define (domain d) (:predicates (clear ?x) (on ?x ?y) (clear ?y)))",
        );
        assert!(matches!(
            result,
            Err(ModelError::Redefinition {
                kind: DefinitionKind::Predicate,
                ..
            })
        ));
    }

    #[test]
    fn action_redefinition() {
        let result = Domain::from_str(
            "(define (domain d)
               (:action a :effect (p))
               (:action a :effect (q)))",
        );
        assert!(matches!(
            result,
            Err(ModelError::Redefinition {
                kind: DefinitionKind::Action,
                ..
            })
        ));
    }

    #[test]
    fn unsupported_requirement() {
        let result = Domain::from_str("(define (domain d) (:requirements :strips :adl))");
        assert!(matches!(result, Err(ModelError::UnsupportedFeature(key)) if key == ":adl"));
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let domain =
            Domain::from_str("(define (domain d) (:constants c1 c2) (:predicates (p)))").unwrap();
        assert_eq!(domain.predicates().len(), 1);
    }

    #[test]
    fn unbalanced_domain_text() {
        assert!(matches!(
            Domain::from_str("(define (domain d)"),
            Err(ModelError::Structural(
                StructuralError::MissingCloseParenthesis { .. }
            ))
        ));
    }
}
