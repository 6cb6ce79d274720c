use crate::grounding::GroundAction;
use crate::parsed_types::{Atom, Fact, Negatable};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// The literals holding at one level of the planning graph. Everything
/// absent is false; a [`Negatable::Negative`] entry records that an action
/// at an earlier level deleted the atom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct State {
    facts: BTreeSet<Fact>,
}

impl State {
    /// The state made of the given atoms, all positive.
    pub fn from_atoms<'a, I: IntoIterator<Item = &'a Atom>>(atoms: I) -> Self {
        Self {
            facts: atoms.into_iter().cloned().map(Negatable::Positive).collect(),
        }
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    /// Whether `atom` holds, i.e. is present without the negation tag.
    pub fn holds(&self, atom: &Atom) -> bool {
        self.facts.contains(&Negatable::Positive(atom.clone()))
    }

    /// An action is enabled iff all its positive preconditions hold.
    pub fn enables(&self, action: &GroundAction) -> bool {
        action
            .positive_preconditions()
            .iter()
            .all(|atom| self.holds(atom))
    }

    /// Adds the action's delete effects as negated facts and its add effects
    /// as positive ones.
    pub fn apply(&mut self, action: &GroundAction) {
        self.facts.extend(
            action
                .delete_effects()
                .iter()
                .cloned()
                .map(Negatable::Negative),
        );
        self.facts.extend(
            action
                .add_effects()
                .iter()
                .cloned()
                .map(Negatable::Positive),
        );
    }

    pub fn insert(&mut self, fact: Fact) -> bool {
        self.facts.insert(fact)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fact> + '_ {
        self.facts.iter()
    }

    pub fn is_subset(&self, other: &State) -> bool {
        self.facts.is_subset(&other.facts)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for fact in &self.facts {
            writeln!(f, "{}", fact)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{ActionDefinition, Name, TypedList};

    fn toggle() -> GroundAction {
        let schema = ActionDefinition::builder(Name::new("toggle"), TypedList::default())
            .with_preconditions(vec![Atom::from_strs("off", &[])], vec![])
            .with_effects(vec![Atom::from_strs("on", &[])], vec![Atom::from_strs("off", &[])]);
        GroundAction::instantiate(&schema, &[], &[])
    }

    #[test]
    fn apply_keeps_deleted_atoms_and_tags_them() {
        let mut state = State::from_atoms(&[Atom::from_strs("off", &[])]);
        let action = toggle();
        assert!(state.enables(&action));

        state.apply(&action);
        assert_eq!(state.len(), 3);
        assert!(state.holds(&Atom::from_strs("off", &[])));
        assert!(state.holds(&Atom::from_strs("on", &[])));
        assert!(state.contains(&Negatable::Negative(Atom::from_strs("off", &[]))));
    }

    #[test]
    fn negated_fact_does_not_enable() {
        let mut state = State::default();
        state.insert(Negatable::Negative(Atom::from_strs("off", &[])));
        assert!(!state.enables(&toggle()));
    }
}
