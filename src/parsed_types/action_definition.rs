//! Contains action definitions via the [`ActionDefinition`] type.

use crate::parsed_types::{Atom, Name, TypedList};
use serde::Serialize;

/// An action schema. Preconditions and effects are kept as four flat literal
/// lists, which is all the STRIPS fragment needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDefinition {
    name: Name,
    parameters: TypedList,
    positive_preconditions: Vec<Atom>,
    negative_preconditions: Vec<Atom>,
    add_effects: Vec<Atom>,
    delete_effects: Vec<Atom>,
}

impl ActionDefinition {
    pub fn builder(name: Name, parameters: TypedList) -> Self {
        Self {
            name,
            parameters,
            positive_preconditions: vec![],
            negative_preconditions: vec![],
            add_effects: vec![],
            delete_effects: vec![],
        }
    }

    pub fn with_preconditions(mut self, positive: Vec<Atom>, negative: Vec<Atom>) -> Self {
        self.positive_preconditions = positive;
        self.negative_preconditions = negative;
        self
    }

    pub fn with_effects(mut self, add: Vec<Atom>, delete: Vec<Atom>) -> Self {
        self.add_effects = add;
        self.delete_effects = delete;
        self
    }

    pub const fn name(&self) -> Name {
        self.name
    }

    pub fn parameters(&self) -> &TypedList {
        &self.parameters
    }

    pub fn positive_preconditions(&self) -> &[Atom] {
        &self.positive_preconditions
    }

    pub fn negative_preconditions(&self) -> &[Atom] {
        &self.negative_preconditions
    }

    pub fn add_effects(&self) -> &[Atom] {
        &self.add_effects
    }

    pub fn delete_effects(&self) -> &[Atom] {
        &self.delete_effects
    }
}
