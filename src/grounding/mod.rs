//! Instantiates action schemas and predicates with the problem's objects.

mod ground_action;
mod ground_facts;
mod grounder;
mod pruning;

pub use ground_action::{ActionId, GroundAction};
pub use ground_facts::ground_facts;
pub use grounder::{ground_all, ActionGrounder};
pub use pruning::{
    AssignmentFilter, DuplicateParameterPruning, DuplicateParameterRule, NoPruning,
};
