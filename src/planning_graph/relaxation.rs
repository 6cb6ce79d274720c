//! The delete relaxation of the planning graph: actions only add atoms, and
//! every atom carries its additive cost (h_add).

use crate::grounding::{ActionId, GroundAction};
use crate::parsed_types::Atom;
use crate::planning_graph::Termination;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Atom costs at one level of the relaxed graph.
pub type CostLayer = BTreeMap<Atom, u32>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelaxedLayer {
    level: usize,
    #[serde(serialize_with = "serialize_costs")]
    costs: CostLayer,
    actions: Vec<ActionId>,
}

impl RelaxedLayer {
    pub const fn level(&self) -> usize {
        self.level
    }

    pub fn costs(&self) -> &CostLayer {
        &self.costs
    }

    /// The actions enabled at the previous level.
    pub fn actions(&self) -> &[ActionId] {
        &self.actions
    }
}

#[derive(Serialize)]
struct AtomCost<'a> {
    atom: &'a Atom,
    cost: u32,
}

/// Costs are written as a list of `{atom, cost}` records.
fn serialize_costs<S: Serializer>(costs: &CostLayer, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(costs.iter().map(|(atom, &cost)| AtomCost { atom, cost }))
}

/// The h_add fixpoint over a set of ground actions.
///
/// Initial atoms cost 0. An action enabled at a level costs its own cost plus
/// the costs of its positive preconditions at that level, and each of its add
/// effects costs the cheapest such action. Levels are added until nothing is
/// reached and no cost drops.
///
/// ## Example
/// ```
/// # use graphplan::planning_graph::RelaxedPlanningGraph;
/// # use graphplan::Task;
/// let task = Task::from_text(
///     "(define (domain d) (:types block)
///        (:action move :parameters (?a - block)
///           :precondition (clear ?a) :effect (and (moved ?a) (not (clear ?a)))))",
///     "(define (problem p) (:domain d) (:objects b1 b2 - block)
///        (:init (clear b1) (clear b2)) (:goal (and (moved b1) (moved b2))))",
/// )
/// .unwrap();
///
/// let relaxed = RelaxedPlanningGraph::build(task.actions(), task.problem().init());
/// assert_eq!(relaxed.goal_value(task.problem().positive_goals()), Some(2));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct RelaxedPlanningGraph {
    layers: Vec<RelaxedLayer>,
    termination: Termination,
}

impl RelaxedPlanningGraph {
    pub fn build(actions: &[GroundAction], init: &[Atom]) -> Self {
        let mut layers = vec![RelaxedLayer {
            level: 0,
            costs: init.iter().map(|atom| (atom.clone(), 0)).collect(),
            actions: vec![],
        }];

        let termination = loop {
            let level = layers.len() - 1;
            let current = &layers[level].costs;

            let mut next = current.clone();
            let mut enabled = vec![];
            for (index, action) in actions.iter().enumerate() {
                let Some(precondition_cost) = saturating_sum(
                    action
                        .positive_preconditions()
                        .iter()
                        .map(|atom| current.get(atom).copied()),
                ) else {
                    continue;
                };
                enabled.push(ActionId(index));

                let cost = action.cost().saturating_add(precondition_cost);
                for atom in action.add_effects() {
                    next.entry(atom.clone())
                        .and_modify(|known| *known = (*known).min(cost))
                        .or_insert(cost);
                }
            }

            if enabled.is_empty() {
                break Termination::DeadEnd { level };
            }
            if next == *current {
                break Termination::Fixpoint { level };
            }

            debug!(level, enabled = enabled.len(), atoms = next.len(), "relaxed level");
            layers.push(RelaxedLayer {
                level: level + 1,
                costs: next,
                actions: enabled,
            });
        };

        info!(%termination, level = termination.level(), "relaxed planning graph built");
        Self {
            layers,
            termination,
        }
    }

    pub fn layers(&self) -> &[RelaxedLayer] {
        &self.layers
    }

    pub const fn termination(&self) -> Termination {
        self.termination
    }

    /// The atom costs at the last level.
    pub fn final_costs(&self) -> &CostLayer {
        // There is always a level 0.
        &self.layers[self.layers.len() - 1].costs
    }

    /// The cost of `atom`, if it is reachable at all.
    pub fn cost(&self, atom: &Atom) -> Option<u32> {
        self.final_costs().get(atom).copied()
    }

    /// The first level where every goal atom is reached.
    pub fn goal_level(&self, goals: &[Atom]) -> Option<usize> {
        self.layers
            .iter()
            .find(|layer| goals.iter().all(|goal| layer.costs.contains_key(goal)))
            .map(RelaxedLayer::level)
    }

    /// The sum of the goal atoms' costs, or `None` if some goal is never
    /// reached.
    pub fn goal_value(&self, goals: &[Atom]) -> Option<u32> {
        saturating_sum(goals.iter().map(|goal| self.cost(goal)))
    }
}

/// Sums costs, capping at `u32::MAX`. `None` if any cost is `None`.
fn saturating_sum<I: Iterator<Item = Option<u32>>>(costs: I) -> Option<u32> {
    costs
        .into_iter()
        .try_fold(0u32, |total, cost| cost.map(|cost| total.saturating_add(cost)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use crate::Task;

    #[test]
    fn costs_accumulate_along_chains() {
        let task = Task::from_text(
            "(define (domain chain)
               (:action first :precondition (a) :effect (b))
               (:action second :precondition (b) :effect (c))
               (:action both :precondition (and (b) (c)) :effect (d))
               (:action shortcut :precondition (a) :effect (d)))",
            "(define (problem chain1) (:domain chain) (:init (a)) (:goal (and (c) (d))))",
        )
        .unwrap();
        let relaxed = RelaxedPlanningGraph::build(task.actions(), task.problem().init());

        let atom = |name: &str| Atom::from_strs(name, &[]);
        assert_eq!(relaxed.cost(&atom("a")), Some(0));
        assert_eq!(relaxed.cost(&atom("b")), Some(1));
        assert_eq!(relaxed.cost(&atom("c")), Some(2));
        // The shortcut beats first + second + both.
        assert_eq!(relaxed.cost(&atom("d")), Some(1));
        assert_eq!(relaxed.goal_level(task.problem().positive_goals()), Some(2));
        assert_eq!(relaxed.goal_value(task.problem().positive_goals()), Some(3));
        assert_eq!(relaxed.termination(), Termination::Fixpoint { level: 2 });
    }

    #[test]
    fn costs_saturate_on_long_chains() {
        // Every step needs both atoms of the previous one, so costs double.
        let steps = 40;
        let mut domain = String::from("(define (domain doubling)");
        for i in 0..steps {
            domain.push_str(&format!(
                " (:action s{i} :precondition (and (p{i}) (q{i})) :effect (and (p{j}) (q{j})))",
                i = i,
                j = i + 1
            ));
        }
        domain.push(')');
        let problem = format!(
            "(define (problem doubling1) (:domain doubling) (:init (p0) (q0)) (:goal (and (p{n}) (q{n}))))",
            n = steps
        );
        let task = Task::from_text(&domain, &problem).unwrap();
        let relaxed = RelaxedPlanningGraph::build(task.actions(), task.problem().init());

        let atom = |name: String| Atom::from_strs(&name, &[]);
        assert_eq!(relaxed.cost(&atom("p1".to_string())), Some(1));
        assert_eq!(relaxed.cost(&atom("p2".to_string())), Some(3));
        assert_eq!(relaxed.cost(&atom(format!("p{}", steps))), Some(u32::MAX));
        assert_eq!(relaxed.goal_value(task.problem().positive_goals()), Some(u32::MAX));
        assert_eq!(relaxed.goal_level(task.problem().positive_goals()), Some(steps));
    }

    #[test]
    fn unreached_goal_has_no_value() {
        let task = Task::from_text(
            MOVE_DOMAIN_TEXT,
            "(define (problem stuck) (:domain move-blocks) (:objects b1 - block)
               (:init (moved b1)) (:goal (clear b1)))",
        )
        .unwrap();
        let relaxed = RelaxedPlanningGraph::build(task.actions(), task.problem().init());
        assert_eq!(relaxed.termination(), Termination::DeadEnd { level: 0 });
        assert_eq!(relaxed.goal_value(task.problem().positive_goals()), None);
        assert_eq!(relaxed.goal_level(task.problem().positive_goals()), None);
    }

    #[test]
    fn depots_goal_value() {
        let task = Task::from_text(DEPOTS_DOMAIN_TEXT, DEPOTS_PROBLEM01_TEXT).unwrap();
        let relaxed = RelaxedPlanningGraph::build(task.actions(), task.problem().init());
        let goals = task.problem().positive_goals();

        assert!(matches!(relaxed.termination(), Termination::Fixpoint { .. }));
        assert!(relaxed.goal_level(goals).is_some());
        let value = relaxed.goal_value(goals).unwrap();
        assert!(value >= goals.len() as u32);
        for layer in relaxed.layers() {
            for (atom, cost) in layer.costs() {
                assert!(relaxed.cost(atom).unwrap() <= *cost);
            }
        }
    }
}
