#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

// Crate dependencies used in binary but not in library. Unfortunately cargo
// does not yet allow specifying dependencies for binaries only.
use humantime as _;
use tracing_subscriber as _;

mod config;
mod errors;
pub mod grounding;
pub mod parsed_types;
pub mod parsers;
pub mod planning_graph;
pub mod report;
mod task;
mod verbosity;

pub use config::PlannerConfig;
pub use errors::{ConfigurationError, DefinitionKind, ModelError, StructuralError};
pub use task::Task;
pub use verbosity::Verbosity;

#[cfg(test)]
mod test_utils;
