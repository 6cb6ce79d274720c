//! Contains atoms via the [`Atom`] type.

use crate::parsed_types::Name;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};

pub const TYPICAL_NUM_ARGUMENTS: usize = 4;

/// The argument tuple of an atom or a ground action.
pub type Arguments = SmallVec<[Name; TYPICAL_NUM_ARGUMENTS]>;

/// An atom, i.e. a predicate name applied to an ordered list of arguments.
/// In an action schema the arguments are parameter names or constants, once
/// ground every argument is an object name. Equality and hashing are by
/// `(predicate, arguments)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Atom {
    predicate: Name,
    arguments: Arguments,
}

impl Atom {
    pub fn new<I: IntoIterator<Item = Name>>(predicate: Name, arguments: I) -> Self {
        Self {
            predicate,
            arguments: arguments.into_iter().collect(),
        }
    }

    /// Shorthand used mostly by tests, e.g. `Atom::from_strs("on", &["a", "b"])`.
    pub fn from_strs(predicate: &str, arguments: &[&str]) -> Self {
        Self::new(
            Name::new(predicate),
            arguments.iter().map(|argument| Name::new(argument)),
        )
    }

    #[inline(always)]
    pub fn predicate(&self) -> Name {
        self.predicate
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[Name] {
        &self.arguments
    }

    /// Replaces every argument equal to `variables[i]` by `values[i]`. Every
    /// occurrence is replaced, so an atom may mention a variable twice.
    pub fn substitute(&self, variables: &[Name], values: &[Name]) -> Self {
        debug_assert_eq!(variables.len(), values.len());
        let arguments = self
            .arguments
            .iter()
            .map(|argument| {
                variables
                    .iter()
                    .position(|variable| variable == argument)
                    .map_or(*argument, |index| values[index])
            })
            .collect();
        Self {
            predicate: self.predicate,
            arguments,
        }
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.predicate)?;
        for argument in &self.arguments {
            write!(f, " {}", argument)?;
        }
        write!(f, ")")
    }
}
