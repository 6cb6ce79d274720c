//! Contains the [`Domain`] type.

use crate::parsed_types::{ActionDefinition, Name, PredicateDefinition, Requirement, TypeHierarchy};

/// The `Domain` type specifies a problem domain in which to plan.
///
/// ## Usage
/// This is the top-level type of a domain description. See also
/// [`Problem`](crate::parsed_types::Problem).
///
/// ## Example
/// ```
/// # use graphplan::parsed_types::{Domain, Name};
/// let input = r#"
/// (define
///     (domain blocks)
///     (:requirements :strips :typing)
///     (:types block)
///     (:predicates (clear ?a - block) (moved ?a - block))
///     (:action move
///         :parameters (?a - block)
///         :precondition (clear ?a)
///         :effect (and (moved ?a) (not (clear ?a)))))
/// "#;
///
/// let domain = Domain::from_str(input).unwrap();
///
/// assert_eq!(domain.name(), Name::new("blocks"));
/// assert_eq!(domain.requirements().len(), 2);
/// assert_eq!(domain.types().len(), 1);
/// assert_eq!(domain.predicates().len(), 2);
/// assert_eq!(domain.actions().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    /// The domain name.
    name: Name,
    /// The specified requirements.
    requirements: Vec<Requirement>,
    /// The type hierarchy, just `object` for untyped domains.
    types: TypeHierarchy,
    /// The predicate definitions.
    predicates: Vec<PredicateDefinition>,
    /// The action definitions.
    actions: Vec<ActionDefinition>,
}

impl Domain {
    /// Creates a builder to easily construct [`Domain`] instances.
    pub fn builder(name: Name) -> Self {
        Self {
            name,
            requirements: Vec::default(),
            types: TypeHierarchy::default(),
            predicates: Vec::default(),
            actions: Vec::default(),
        }
    }

    /// Adds a list of optional domain requirements.
    pub fn with_requirements(mut self, requirements: Vec<Requirement>) -> Self {
        self.requirements = requirements;
        self
    }

    /// Adds the type hierarchy.
    pub fn with_types(mut self, types: TypeHierarchy) -> Self {
        self.types = types;
        self
    }

    /// Adds a list of predicate definitions.
    pub fn with_predicates(mut self, predicates: Vec<PredicateDefinition>) -> Self {
        self.predicates = predicates;
        self
    }

    /// Adds a list of action definitions.
    pub fn with_actions(mut self, actions: Vec<ActionDefinition>) -> Self {
        self.actions = actions;
        self
    }

    /// Gets the domain name.
    pub const fn name(&self) -> Name {
        self.name
    }

    /// Returns the domain requirements.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Returns the type hierarchy.
    pub const fn types(&self) -> &TypeHierarchy {
        &self.types
    }

    /// Returns the predicate definitions.
    pub fn predicates(&self) -> &[PredicateDefinition] {
        &self.predicates
    }

    /// Returns the action definitions.
    pub fn actions(&self) -> &[ActionDefinition] {
        &self.actions
    }

    pub fn predicate(&self, name: Name) -> Option<&PredicateDefinition> {
        self.predicates.iter().find(|predicate| predicate.name() == name)
    }

    pub fn action(&self, name: Name) -> Option<&ActionDefinition> {
        self.actions.iter().find(|action| action.name() == name)
    }
}
