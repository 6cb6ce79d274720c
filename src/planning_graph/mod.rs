//! Forward expansion of the planning graph and its mutex analysis, plus the
//! delete-relaxed variant.

mod graph;
mod mutex;
mod relaxation;
mod state;

pub use graph::{Layer, PlanningGraph, Termination};
pub use mutex::{ActionPair, EffectMutex, MutexAnalysis, MutexRelation, SupportMutex};
pub use relaxation::{CostLayer, RelaxedLayer, RelaxedPlanningGraph};
pub use state::State;
