use crate::errors::{ConfigurationError, ModelError};
use crate::grounding::{AssignmentFilter, GroundAction};
use crate::parsed_types::{ActionDefinition, Domain, Name, ObjectCatalog};
use itertools::{Either, Itertools};
use std::iter;
use tracing::{debug, info};

/// Enumerates the ground instances of one action schema: every parameter is
/// substituted with every object of its declared type, minus the assignments
/// rejected by the [`AssignmentFilter`].
///
/// The enumeration is lazy and [`ActionGrounder::iter`] can be called any
/// number of times, each call starting over.
///
/// ## Example
/// ```
/// # use graphplan::grounding::{ActionGrounder, NoPruning};
/// # use graphplan::parsed_types::{Domain, Problem};
/// let domain = Domain::from_str(
///     "(define (domain d) (:types block)
///        (:action move :parameters (?a - block)
///           :precondition (clear ?a) :effect (and (moved ?a) (not (clear ?a)))))",
/// )
/// .unwrap();
/// let problem = Problem::from_str(
///     "(define (problem p) (:domain d) (:objects b1 b2 - block))",
///     &domain,
/// )
/// .unwrap();
///
/// let grounder = ActionGrounder::new(&domain.actions()[0], problem.catalog(), &NoPruning).unwrap();
/// let names: Vec<String> = grounder.iter().map(|action| action.to_string()).collect();
/// assert_eq!(names, vec!["(move b1)", "(move b2)"]);
/// ```
#[derive(Debug)]
pub struct ActionGrounder<'a> {
    schema: &'a ActionDefinition,
    variables: Vec<Name>,
    candidates: Vec<&'a [Name]>,
    filter: &'a dyn AssignmentFilter,
}

impl<'a> ActionGrounder<'a> {
    /// Looks up the candidate objects of every parameter. Fails if a
    /// parameter's type is not declared.
    pub fn new(
        schema: &'a ActionDefinition,
        catalog: &'a ObjectCatalog,
        filter: &'a dyn AssignmentFilter,
    ) -> Result<Self, ConfigurationError> {
        let candidates = schema
            .parameters()
            .iter()
            .map(|parameter| {
                catalog.objects_of(parameter.type_()).ok_or_else(|| {
                    ConfigurationError::UndeclaredType {
                        type_name: parameter.type_(),
                        context: format!("parameter {} of action {}", parameter.value(), schema.name()),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        filter.check(schema);

        Ok(Self {
            schema,
            variables: schema.parameters().values().collect(),
            candidates,
            filter,
        })
    }

    /// The number of assignments before pruning.
    pub fn upper_bound(&self) -> usize {
        self.candidates.iter().map(|objects| objects.len()).product()
    }

    pub fn iter(&self) -> impl Iterator<Item = GroundAction> + '_ {
        if self.variables.is_empty() {
            return Either::Left(iter::once(GroundAction::instantiate(self.schema, &[], &[])));
        }

        let name = self.schema.name();
        Either::Right(
            self.candidates
                .iter()
                .map(|objects| objects.iter().copied())
                .multi_cartesian_product()
                .filter(move |assignment| !self.filter.rejects(name, assignment))
                .map(move |assignment| {
                    GroundAction::instantiate(self.schema, &self.variables, &assignment)
                }),
        )
    }
}

/// Grounds every action schema of `domain`, in schema order. The result is
/// the task's immutable ground action list, indexed by
/// [`ActionId`](crate::grounding::ActionId).
pub fn ground_all(
    domain: &Domain,
    catalog: &ObjectCatalog,
    filter: &dyn AssignmentFilter,
) -> Result<Vec<GroundAction>, ModelError> {
    let mut actions = vec![];
    for schema in domain.actions() {
        let grounder = ActionGrounder::new(schema, catalog, filter)?;
        let before = actions.len();
        actions.extend(grounder.iter());
        debug!(
            action = %schema.name(),
            candidates = grounder.upper_bound(),
            grounded = actions.len() - before,
            "grounded action schema"
        );
    }
    info!(ground_actions = actions.len(), "grounding finished");
    Ok(actions)
}
