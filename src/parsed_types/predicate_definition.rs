//! Contains predicate definitions via the [`PredicateDefinition`] type.

use crate::parsed_types::{Name, TypedList};
use serde::Serialize;

/// A predicate schema, e.g. `(on ?x - crate ?y - surface)`. Untyped
/// parameters have type `object`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredicateDefinition {
    name: Name,
    parameters: TypedList,
}

impl PredicateDefinition {
    pub const fn new(name: Name, parameters: TypedList) -> Self {
        Self { name, parameters }
    }

    pub const fn name(&self) -> Name {
        self.name
    }

    pub fn parameters(&self) -> &TypedList {
        &self.parameters
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}
