//! Provides parsers for problem definitions.

use crate::errors::{ModelError, StructuralError};
use crate::parsed_types::{Domain, FlattenedSubtype, Name, ObjectCatalog, Problem, TokenTree, TypedList};
use crate::parsers::domain::section_parts;
use crate::parsers::{
    parse_literal, parse_typed_list, read_token_tree, read_token_tree_from_path, split_literals,
};
use std::path::Path;
use tracing::{debug, warn};

/// Walks a `(define (problem <name>) <section>*)` token tree against an
/// already parsed domain. The object catalog is closed over the domain's
/// type hierarchy, with the given opt-in flattening exceptions.
///
/// ## Example
/// ```
/// # use graphplan::parsers::{parse_problem, read_token_tree};
/// # use graphplan::parsed_types::{Atom, Domain, Name};
/// let domain = Domain::from_str(
///     "(define (domain blocks) (:types block)
///        (:predicates (clear ?a - block) (moved ?a - block)))",
/// )
/// .unwrap();
/// let tree = read_token_tree(
///     "(define (problem two) (:domain blocks)
///        (:objects b1 b2 - block)
///        (:init (clear b1) (clear b2))
///        (:goal (and (moved b1) (not (clear b2)))))",
/// )
/// .unwrap();
/// let problem = parse_problem(&tree, &domain, &[]).unwrap();
/// assert_eq!(problem.name(), Name::new("two"));
/// assert_eq!(problem.catalog().objects_of(Name::new("block")).unwrap().len(), 2);
/// assert_eq!(problem.init().len(), 2);
/// assert_eq!(problem.positive_goals(), &[Atom::from_strs("moved", &["b1"])]);
/// assert_eq!(problem.negative_goals(), &[Atom::from_strs("clear", &["b2"])]);
/// ```
pub fn parse_problem(
    tree: &TokenTree,
    domain: &Domain,
    flattened: &[FlattenedSubtype],
) -> Result<Problem, ModelError> {
    let sections = match tree.as_list() {
        Some([head, sections @ ..]) if head.is_keyword("define") => sections,
        _ => return Err(StructuralError::UnexpectedPattern("problem").into()),
    };

    let mut name = Name::new("unknown");
    let mut objects = TypedList::default();
    let mut init = vec![];
    let mut goals = (vec![], vec![]);

    for section in sections {
        let (keyword, body) = section_parts(section, "problem")?;
        match keyword.as_str() {
            "problem" => name = last_name(body, "problem")?,
            ":domain" => {
                let referenced = last_name(body, "domain")?;
                if referenced != domain.name() {
                    return Err(ModelError::DomainMismatch {
                        expected: domain.name(),
                        found: referenced,
                    });
                }
            }
            ":requirements" => debug!("ignoring requirements in problem, the domain declares them"),
            ":objects" => objects = parse_typed_list(body, "objects")?,
            ":init" => {
                init = body
                    .iter()
                    .map(|literal| parse_literal(literal, "init"))
                    .collect::<Result<_, _>>()?;
            }
            ":goal" => {
                let goal = body
                    .first()
                    .ok_or_else(|| StructuralError::ExpectedList("goals".to_string()))?;
                goals = split_literals(goal, "goals")?;
            }
            _ => warn!("{} is not recognized in problem", keyword),
        }
    }

    let catalog = ObjectCatalog::close(domain.types(), &objects, flattened)?;
    Ok(Problem::builder(name, domain.name())
        .with_objects(objects, catalog)
        .with_init(init)
        .with_goals(goals.0, goals.1))
}

fn last_name(body: &[TokenTree], context: &str) -> Result<Name, StructuralError> {
    body.last()
        .and_then(TokenTree::as_atom)
        .ok_or_else(|| StructuralError::ExpectedName(context.to_string()))
}

impl Problem {
    /// Parses problem text against `domain`, with the plain catalog closure.
    pub fn from_str(input: &str, domain: &Domain) -> Result<Self, ModelError> {
        parse_problem(&read_token_tree(input)?, domain, &[])
    }

    /// Parses the problem file at `path` against `domain`.
    pub fn from_path(
        path: &Path,
        domain: &Domain,
        flattened: &[FlattenedSubtype],
    ) -> Result<Self, ModelError> {
        parse_problem(&read_token_tree_from_path(path)?, domain, flattened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::Atom;
    use crate::test_utils::*;

    fn depots() -> Domain {
        Domain::from_str(DEPOTS_DOMAIN_TEXT).unwrap()
    }

    #[test]
    fn depots_problem() {
        let domain = depots();
        let problem = Problem::from_str(DEPOTS_PROBLEM01_TEXT, &domain).unwrap();

        assert_eq!(problem.name(), Name::new("depotprob1818"));
        assert_eq!(problem.domain(), Name::new("depot"));
        assert_eq!(problem.objects().len(), 13);
        assert_eq!(problem.init().len(), 18);
        assert_eq!(
            problem.positive_goals(),
            &[
                Atom::from_strs("on", &["crate0", "pallet2"]),
                Atom::from_strs("on", &["crate1", "pallet1"])
            ]
        );
        assert!(problem.negative_goals().is_empty());

        let catalog = problem.catalog();
        let count = |type_: &str| catalog.objects_of(Name::new(type_)).unwrap().len();
        assert_eq!(count("place"), 3);
        assert_eq!(count("surface"), 5);
        assert_eq!(count("locatable"), 10);
        assert_eq!(count("object"), 13);
    }

    #[test]
    fn domain_mismatch() {
        let domain = depots();
        let result = Problem::from_str(
            "(define (problem p) (:domain logistics) (:objects a))",
            &domain,
        );
        assert!(matches!(
            result,
            Err(ModelError::DomainMismatch { expected, found })
                if expected == "depot" && found == "logistics"
        ));
    }

    #[test]
    fn untyped_objects() {
        let domain = Domain::from_str(BLOCKS_DOMAIN_TEXT).unwrap();
        let problem = Problem::from_str(BLOCKS_PROBLEM_TEXT, &domain).unwrap();
        assert_eq!(problem.catalog().all_objects().len(), 3);
    }

    #[test]
    fn goal_negation_shape() {
        let domain = depots();
        let result = Problem::from_str(
            "(define (problem p) (:domain depot) (:goal (not (clear a) (clear b))))",
            &domain,
        );
        assert!(matches!(result, Err(ModelError::LiteralShape { arity: 2, .. })));
    }

    #[test]
    fn not_a_problem() {
        let domain = depots();
        assert!(matches!(
            Problem::from_str("((problem p))", &domain),
            Err(ModelError::Structural(StructuralError::UnexpectedPattern(
                "problem"
            )))
        ));
    }
}
