//! The domain and problem model, as produced by the [parsers](crate::parsers).

mod action_definition;
mod atom;
mod domain;
mod name;
mod negatable;
mod objects;
mod predicate_definition;
mod problem;
mod requirement;
mod token_tree;
mod typed_list;
mod types;

pub use action_definition::ActionDefinition;
pub use atom::{Arguments, Atom, TYPICAL_NUM_ARGUMENTS};
pub use domain::Domain;
pub use name::{Name, OBJECT_TYPE};
pub use negatable::{Fact, Negatable};
pub use objects::{FlattenedSubtype, ObjectCatalog};
pub use predicate_definition::PredicateDefinition;
pub use problem::Problem;
pub use requirement::Requirement;
pub use token_tree::TokenTree;
pub use typed_list::{Typed, TypedList};
pub use types::TypeHierarchy;
