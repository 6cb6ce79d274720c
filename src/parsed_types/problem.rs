//! Contains the [`Problem`] type.

use crate::parsed_types::{Atom, Name, ObjectCatalog, TypedList};

/// A problem instance of a [`Domain`](crate::parsed_types::Domain): the
/// objects, the initial state and the goal. The object catalog is already
/// closed over the domain's type hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    name: Name,
    domain: Name,
    objects: TypedList,
    catalog: ObjectCatalog,
    init: Vec<Atom>,
    positive_goals: Vec<Atom>,
    negative_goals: Vec<Atom>,
}

impl Problem {
    pub fn builder(name: Name, domain: Name) -> Self {
        Self {
            name,
            domain,
            objects: TypedList::default(),
            catalog: ObjectCatalog::default(),
            init: vec![],
            positive_goals: vec![],
            negative_goals: vec![],
        }
    }

    pub fn with_objects(mut self, objects: TypedList, catalog: ObjectCatalog) -> Self {
        self.objects = objects;
        self.catalog = catalog;
        self
    }

    pub fn with_init(mut self, init: Vec<Atom>) -> Self {
        self.init = init;
        self
    }

    pub fn with_goals(mut self, positive: Vec<Atom>, negative: Vec<Atom>) -> Self {
        self.positive_goals = positive;
        self.negative_goals = negative;
        self
    }

    pub const fn name(&self) -> Name {
        self.name
    }

    /// The name of the domain this problem refers to.
    pub const fn domain(&self) -> Name {
        self.domain
    }

    /// The objects as declared, with their direct types.
    pub fn objects(&self) -> &TypedList {
        &self.objects
    }

    pub fn catalog(&self) -> &ObjectCatalog {
        &self.catalog
    }

    pub fn init(&self) -> &[Atom] {
        &self.init
    }

    pub fn positive_goals(&self) -> &[Atom] {
        &self.positive_goals
    }

    pub fn negative_goals(&self) -> &[Atom] {
        &self.negative_goals
    }
}
