use crate::parsed_types::Atom;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Wrapper around a type to indicate that it can be negated. In a planning
/// graph state, [`Negatable::Negative`] marks an atom that some action has
/// made false, carried alongside the atoms that hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "polarity", content = "atom", rename_all = "lowercase")]
pub enum Negatable<T> {
    Positive(T),
    Negative(T),
}

impl<T> Negatable<T> {
    pub fn new(negated: bool, value: T) -> Self {
        if negated {
            Self::Negative(value)
        } else {
            Self::Positive(value)
        }
    }

    #[inline(always)]
    pub fn underlying(&self) -> &T {
        match self {
            Self::Positive(value) => value,
            Self::Negative(value) => value,
        }
    }
}

impl<T: Clone> Negatable<T> {
    /// The same value with the opposite polarity.
    pub fn negated(&self) -> Self {
        match self {
            Self::Positive(value) => Self::Negative(value.clone()),
            Self::Negative(value) => Self::Positive(value.clone()),
        }
    }
}

impl<T> From<T> for Negatable<T> {
    fn from(value: T) -> Self {
        Self::Positive(value)
    }
}

/// A state entry: an atom that holds, or the record that an atom was deleted.
pub type Fact = Negatable<Atom>;

impl Display for Fact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive(atom) => write!(f, "{}", atom),
            Self::Negative(atom) => write!(f, "(not {})", atom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_is_a_distinct_fact() {
        let atom = Atom::from_strs("clear", &["b1"]);
        let positive = Fact::from(atom.clone());
        let negative = Fact::new(true, atom);
        assert_ne!(positive, negative);
        assert_eq!(positive.negated(), negative);
        assert_eq!(positive.underlying(), negative.underlying());
        assert_eq!(negative.to_string(), "(not (clear b1))");
    }
}
