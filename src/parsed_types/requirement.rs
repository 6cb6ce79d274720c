//! Contains requirements via the [`Requirement`] type.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A domain requirement key.
///
/// Only [`Requirement::Strips`] and [`Requirement::Typing`] are supported by
/// the planning graph, every other key is recognised so it can be reported
/// by name.
///
/// ## Example
/// ```
/// # use graphplan::parsed_types::Requirement;
/// # use std::str::FromStr;
/// assert_eq!(Requirement::from_str(":typing").unwrap(), Requirement::Typing);
/// assert!(Requirement::Strips.is_supported());
/// assert!(!Requirement::Adl.is_supported());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
pub enum Requirement {
    #[strum(serialize = ":strips")]
    Strips,
    #[strum(serialize = ":typing")]
    Typing,
    #[strum(serialize = ":negative-preconditions")]
    NegativePreconditions,
    #[strum(serialize = ":disjunctive-preconditions")]
    DisjunctivePreconditions,
    #[strum(serialize = ":equality")]
    Equality,
    #[strum(serialize = ":existential-preconditions")]
    ExistentialPreconditions,
    #[strum(serialize = ":universal-preconditions")]
    UniversalPreconditions,
    #[strum(serialize = ":quantified-preconditions")]
    QuantifiedPreconditions,
    #[strum(serialize = ":conditional-effects")]
    ConditionalEffects,
    #[strum(serialize = ":fluents")]
    Fluents,
    #[strum(serialize = ":numeric-fluents")]
    NumericFluents,
    #[strum(serialize = ":object-fluents")]
    ObjectFluents,
    #[strum(serialize = ":adl")]
    Adl,
    #[strum(serialize = ":durative-actions")]
    DurativeActions,
    #[strum(serialize = ":duration-inequalities")]
    DurationInequalities,
    #[strum(serialize = ":continuous-effects")]
    ContinuousEffects,
    #[strum(serialize = ":derived-predicates")]
    DerivedPredicates,
    #[strum(serialize = ":timed-initial-literals")]
    TimedInitialLiterals,
    #[strum(serialize = ":preferences")]
    Preferences,
    #[strum(serialize = ":constraints")]
    Constraints,
    #[strum(serialize = ":action-costs")]
    ActionCosts,
}

impl Requirement {
    pub const SUPPORTED: [Requirement; 2] = [Requirement::Strips, Requirement::Typing];

    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn keys_round_trip() {
        for requirement in Requirement::iter() {
            assert_eq!(
                Requirement::from_str(requirement.as_ref()).unwrap(),
                requirement
            );
        }
    }

    #[test]
    fn only_basic_keys_supported() {
        let supported: Vec<_> = Requirement::iter().filter(|r| r.is_supported()).collect();
        assert_eq!(supported, vec![Requirement::Strips, Requirement::Typing]);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(Requirement::from_str(":teleportation").is_err());
    }
}
