//! Mutual exclusion relations between actions and facts of a planning graph.

use crate::grounding::{ActionId, GroundAction};
use crate::parsed_types::{Atom, Fact, Negatable};
use crate::planning_graph::State;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::debug;

/// A pair of actions, stored with the smaller id first so that both
/// orderings map to the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ActionPair(pub ActionId, pub ActionId);

impl ActionPair {
    pub fn new(a: ActionId, b: ActionId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// An inconsistent-effects mutex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectMutex {
    /// One action deletes an atom the other adds.
    Actions(ActionPair),
    /// The action deletes an atom that holds at the level.
    ActionFact(ActionId, Atom),
}

/// An inconsistent-support mutex: an atom that holds alongside its own
/// negation. The first fact is always the positive one.
pub type SupportMutex = (Fact, Fact);

/// One mutex relation. Every pair is recorded once, at the level where it was
/// first detected, and is never removed.
#[derive(Debug, Clone, Serialize)]
pub struct MutexRelation<T: Ord> {
    per_level: Vec<BTreeSet<T>>,
    all_time: BTreeSet<T>,
}

impl<T: Ord> Default for MutexRelation<T> {
    fn default() -> Self {
        Self {
            per_level: vec![],
            all_time: BTreeSet::new(),
        }
    }
}

impl<T: Ord + Clone> MutexRelation<T> {
    /// Opens the (possibly empty) set of `level` and of every level before it.
    fn begin_level(&mut self, level: usize) {
        if self.per_level.len() <= level {
            self.per_level.resize_with(level + 1, BTreeSet::new);
        }
    }

    /// Records `pair` at `level` unless it was recorded before. Returns
    /// whether it is new.
    fn record(&mut self, level: usize, pair: T) -> bool {
        if self.all_time.contains(&pair) {
            return false;
        }
        self.begin_level(level);
        self.per_level[level].insert(pair.clone());
        self.all_time.insert(pair)
    }

    /// The pairs first detected at `level`.
    pub fn at_level(&self, level: usize) -> impl Iterator<Item = &T> + '_ {
        self.per_level.get(level).into_iter().flatten()
    }

    /// The number of pairs first detected at `level`.
    pub fn count_at_level(&self, level: usize) -> usize {
        self.per_level.get(level).map_or(0, BTreeSet::len)
    }

    /// Every pair detected up to and including `level`.
    pub fn up_to_level(&self, level: usize) -> BTreeSet<&T> {
        self.per_level.iter().take(level + 1).flatten().collect()
    }

    pub fn all_time(&self) -> &BTreeSet<T> {
        &self.all_time
    }

    pub fn contains(&self, pair: &T) -> bool {
        self.all_time.contains(pair)
    }

    pub fn len(&self) -> usize {
        self.all_time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_time.is_empty()
    }

    /// The number of levels analysed so far.
    pub fn num_levels(&self) -> usize {
        self.per_level.len()
    }
}

/// The three mutex relations, accumulated while the planning graph grows.
///
/// Action mutexes are computed over every action enabled at any level so far,
/// not only over the current action layer. A pair of actions found
/// incompatible once therefore stays flagged at every later level.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MutexAnalysis {
    inconsistent_effects: MutexRelation<EffectMutex>,
    interference: MutexRelation<ActionPair>,
    inconsistent_support: MutexRelation<SupportMutex>,
    #[serde(skip)]
    history: Vec<ActionId>,
    #[serde(skip)]
    in_history: HashSet<ActionId>,
    /// Actions of the history by added atom.
    #[serde(skip)]
    adders: HashMap<Atom, Vec<ActionId>>,
    /// Actions of the history by positive precondition.
    #[serde(skip)]
    requirers: HashMap<Atom, Vec<ActionId>>,
}

impl MutexAnalysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `layer` to the action history and records every mutex holding at
    /// `level`, whose state is `state`.
    pub fn analyse(
        &mut self,
        level: usize,
        state: &State,
        layer: &[ActionId],
        actions: &[GroundAction],
    ) {
        self.inconsistent_effects.begin_level(level);
        self.interference.begin_level(level);
        self.inconsistent_support.begin_level(level);

        for &id in layer {
            if self.in_history.insert(id) {
                self.history.push(id);
                let action = &actions[id.0];
                for atom in action.add_effects() {
                    self.adders.entry(atom.clone()).or_default().push(id);
                }
                for atom in action.positive_preconditions() {
                    self.requirers.entry(atom.clone()).or_default().push(id);
                }
            }
        }

        self.record_inconsistent_effects(level, state, actions);
        self.record_interference(level, actions);
        self.record_inconsistent_support(level, state);

        debug!(
            level,
            history = self.history.len(),
            inconsistent_effects = self.inconsistent_effects.count_at_level(level),
            interference = self.interference.count_at_level(level),
            inconsistent_support = self.inconsistent_support.count_at_level(level),
            "mutexes updated"
        );
    }

    fn record_inconsistent_effects(&mut self, level: usize, state: &State, actions: &[GroundAction]) {
        for &a1 in &self.history {
            for atom in actions[a1.0].delete_effects() {
                for &a2 in self.adders.get(atom).into_iter().flatten() {
                    if a1 != a2 {
                        self.inconsistent_effects
                            .record(level, EffectMutex::Actions(ActionPair::new(a1, a2)));
                    }
                }
                if state.holds(atom) {
                    self.inconsistent_effects
                        .record(level, EffectMutex::ActionFact(a1, atom.clone()));
                }
            }
        }
    }

    fn record_interference(&mut self, level: usize, actions: &[GroundAction]) {
        for &a1 in &self.history {
            for atom in actions[a1.0].delete_effects() {
                for &a2 in self.requirers.get(atom).into_iter().flatten() {
                    if a1 != a2 {
                        self.interference.record(level, ActionPair::new(a1, a2));
                    }
                }
            }
        }
    }

    fn record_inconsistent_support(&mut self, level: usize, state: &State) {
        for fact in state.iter() {
            if let Negatable::Positive(atom) = fact {
                let negation = Negatable::Negative(atom.clone());
                if state.contains(&negation) {
                    self.inconsistent_support
                        .record(level, (fact.clone(), negation));
                }
            }
        }
    }

    pub fn inconsistent_effects(&self) -> &MutexRelation<EffectMutex> {
        &self.inconsistent_effects
    }

    pub fn interference(&self) -> &MutexRelation<ActionPair> {
        &self.interference
    }

    pub fn inconsistent_support(&self) -> &MutexRelation<SupportMutex> {
        &self.inconsistent_support
    }

    /// Every action enabled at some analysed level, in order of first
    /// appearance.
    pub fn history(&self) -> &[ActionId] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{ActionDefinition, Name, TypedList};

    fn action(name: &str, pre: &[&str], add: &[&str], del: &[&str]) -> GroundAction {
        let atoms = |names: &[&str]| -> Vec<Atom> {
            names.iter().map(|name| Atom::from_strs(name, &["b1"])).collect()
        };
        let schema = ActionDefinition::builder(Name::new(name), TypedList::default())
            .with_preconditions(atoms(pre), vec![])
            .with_effects(atoms(add), atoms(del));
        GroundAction::instantiate(&schema, &[], &[])
    }

    fn clear_b1() -> Atom {
        Atom::from_strs("clear", &["b1"])
    }

    #[test]
    fn inconsistent_effects_between_actions() {
        // a deletes (clear b1), b adds it
        let actions = vec![
            action("a", &["clear", "held"], &["held"], &["clear"]),
            action("b", &["held"], &["clear"], &["held"]),
        ];
        let mut state = State::from_atoms(&[clear_b1(), Atom::from_strs("held", &["b1"])]);
        state.insert(Negatable::Negative(clear_b1()));

        let mut analysis = MutexAnalysis::new();
        analysis.analyse(0, &state, &[ActionId(0), ActionId(1)], &actions);

        let effects = analysis.inconsistent_effects();
        assert!(effects.contains(&EffectMutex::Actions(ActionPair::new(ActionId(0), ActionId(1)))));
        assert!(effects.contains(&EffectMutex::Actions(ActionPair::new(ActionId(1), ActionId(0)))));
        assert!(effects.contains(&EffectMutex::ActionFact(ActionId(0), clear_b1())));
        // Both orderings of the pair are one entry.
        assert_eq!(
            effects
                .all_time()
                .iter()
                .filter(|mutex| matches!(mutex, EffectMutex::Actions(_)))
                .count(),
            1
        );

        assert!(analysis
            .interference()
            .contains(&ActionPair::new(ActionId(0), ActionId(1))));
        assert_eq!(
            analysis.inconsistent_support().all_time().iter().next(),
            Some(&(Negatable::Positive(clear_b1()), Negatable::Negative(clear_b1())))
        );
    }

    #[test]
    fn an_action_is_not_mutex_with_itself() {
        let actions = vec![action("a", &["clear"], &["clear"], &["clear"])];
        let state = State::from_atoms(&[clear_b1()]);
        let mut analysis = MutexAnalysis::new();
        analysis.analyse(0, &state, &[ActionId(0)], &actions);

        assert!(analysis.interference().is_empty());
        assert_eq!(analysis.inconsistent_effects().len(), 1);
    }

    #[test]
    fn pairs_are_recorded_once_at_their_first_level() {
        let actions = vec![
            action("a", &["clear", "held"], &["held"], &["clear"]),
            action("b", &["held"], &["clear"], &["held"]),
        ];
        let state = State::from_atoms(&[clear_b1()]);
        let mut analysis = MutexAnalysis::new();
        analysis.analyse(0, &state, &[ActionId(0)], &actions);
        assert_eq!(analysis.interference().count_at_level(0), 0);

        // b joins the history at level 1, a stays in it.
        analysis.analyse(1, &state, &[ActionId(1)], &actions);
        let pair = ActionPair::new(ActionId(0), ActionId(1));
        assert_eq!(analysis.interference().at_level(1).collect::<Vec<_>>(), vec![&pair]);

        analysis.analyse(2, &state, &[ActionId(0), ActionId(1)], &actions);
        assert_eq!(analysis.interference().count_at_level(2), 0);
        assert_eq!(analysis.interference().at_level(2).count(), 0);
        assert_eq!(analysis.inconsistent_support().num_levels(), 3);
        assert_eq!(analysis.interference().len(), 1);
        assert_eq!(analysis.history(), &[ActionId(0), ActionId(1)]);
    }
}
