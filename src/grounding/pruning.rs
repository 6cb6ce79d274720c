//! Duplicate-parameter pruning applied while grounding.

use crate::parsed_types::{ActionDefinition, Name};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::warn;

/// Decides which parameter assignments the grounder skips.
pub trait AssignmentFilter: Debug {
    /// Whether assigning `objects` (in parameter order) to `action` is
    /// skipped.
    fn rejects(&self, action: Name, objects: &[Name]) -> bool;

    /// Reports rules that can never apply to `schema`. The default does
    /// nothing.
    fn check(&self, _schema: &ActionDefinition) {}
}

/// Keeps every assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPruning;

impl AssignmentFilter for NoPruning {
    fn rejects(&self, _action: Name, _objects: &[Name]) -> bool {
        false
    }
}

/// Skips assignments of `action` where the parameters at the two
/// `positions` (0-based) are the same object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DuplicateParameterRule {
    pub action: Name,
    pub positions: (usize, usize),
}

impl DuplicateParameterRule {
    pub fn new(action: &str, first: usize, second: usize) -> Self {
        Self {
            action: Name::new(action),
            positions: (first, second),
        }
    }
}

/// An [`AssignmentFilter`] made of [`DuplicateParameterRule`]s. The default
/// rules skip `drive` to the place it starts from and `lift`/`drop` of a
/// crate onto itself, i.e. positions 1 and 2 of each.
///
/// ## Example
/// ```
/// # use graphplan::grounding::{AssignmentFilter, DuplicateParameterPruning};
/// # use graphplan::parsed_types::Name;
/// let pruning = DuplicateParameterPruning::default();
/// let objects = ["truck0", "depot0", "depot0"].map(Name::new);
/// assert!(pruning.rejects(Name::new("drive"), &objects));
/// assert!(!pruning.rejects(Name::new("load"), &objects));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateParameterPruning {
    rules: Vec<DuplicateParameterRule>,
}

impl DuplicateParameterPruning {
    pub fn new(rules: Vec<DuplicateParameterRule>) -> Self {
        Self { rules }
    }

    pub fn default_rules() -> Vec<DuplicateParameterRule> {
        ["drive", "lift", "drop"]
            .into_iter()
            .map(|action| DuplicateParameterRule::new(action, 1, 2))
            .collect()
    }

    pub fn rules(&self) -> &[DuplicateParameterRule] {
        &self.rules
    }
}

impl Default for DuplicateParameterPruning {
    fn default() -> Self {
        Self::new(Self::default_rules())
    }
}

impl AssignmentFilter for DuplicateParameterPruning {
    fn rejects(&self, action: Name, objects: &[Name]) -> bool {
        self.rules
            .iter()
            .filter(|rule| rule.action == action)
            .any(|rule| {
                let (first, second) = rule.positions;
                match (objects.get(first), objects.get(second)) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            })
    }

    fn check(&self, schema: &ActionDefinition) {
        let arity = schema.parameters().len();
        for rule in self.rules.iter().filter(|rule| rule.action == schema.name()) {
            let (first, second) = rule.positions;
            if first >= arity || second >= arity {
                warn!(
                    action = %schema.name(),
                    arity,
                    "pruning positions ({}, {}) out of range, rule ignored",
                    first,
                    second
                );
            }
        }
    }
}
