use crate::grounding::{ActionId, GroundAction};
use crate::parsed_types::Atom;
use crate::planning_graph::{MutexAnalysis, State};
use serde::Serialize;
use strum_macros::Display;
use tracing::{debug, info};

/// How the expansion of a planning graph stopped. Both outcomes are regular
/// results, `level` is the last level of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Termination {
    /// Some actions were enabled but they produced nothing new.
    #[strum(serialize = "fixpoint")]
    Fixpoint { level: usize },
    /// No action was enabled.
    #[strum(serialize = "dead end")]
    DeadEnd { level: usize },
}

impl Termination {
    pub const fn level(&self) -> usize {
        match self {
            Self::Fixpoint { level } | Self::DeadEnd { level } => *level,
        }
    }
}

/// One level of the planning graph: the state at `level` and the actions
/// whose preconditions held at the previous level. Level 0 has no actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layer {
    level: usize,
    state: State,
    actions: Vec<ActionId>,
}

impl Layer {
    pub const fn level(&self) -> usize {
        self.level
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// The action layer feeding this level.
    pub fn actions(&self) -> &[ActionId] {
        &self.actions
    }
}

/// A planning graph grown from the initial state until no level adds
/// anything new, with the mutexes of every level.
///
/// ## Example
/// ```
/// # use graphplan::planning_graph::{PlanningGraph, Termination};
/// # use graphplan::Task;
/// let task = Task::from_text(
///     "(define (domain d) (:types block)
///        (:action move :parameters (?a - block)
///           :precondition (clear ?a) :effect (and (moved ?a) (not (clear ?a)))))",
///     "(define (problem p) (:domain d) (:objects b1 - block)
///        (:init (clear b1)) (:goal (moved b1)))",
/// )
/// .unwrap();
///
/// let graph = PlanningGraph::build(task.actions(), task.problem().init());
/// assert_eq!(graph.termination(), Termination::Fixpoint { level: 1 });
/// assert_eq!(graph.state(1).unwrap().len(), 3);
/// assert_eq!(graph.goal_level(task.problem().positive_goals()), Some(1));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct PlanningGraph {
    layers: Vec<Layer>,
    termination: Termination,
    mutexes: MutexAnalysis,
}

impl PlanningGraph {
    /// Expands the graph over the ground `actions`, starting from `init`.
    pub fn build(actions: &[GroundAction], init: &[Atom]) -> Self {
        let mut layers = vec![Layer {
            level: 0,
            state: State::from_atoms(init),
            actions: vec![],
        }];
        let mut mutexes = MutexAnalysis::new();

        let termination = loop {
            let level = layers.len() - 1;
            let current = &layers[level].state;

            let mut next = current.clone();
            let mut enabled = vec![];
            for (index, action) in actions.iter().enumerate() {
                if current.enables(action) {
                    next.apply(action);
                    enabled.push(ActionId(index));
                }
            }

            if enabled.is_empty() {
                break Termination::DeadEnd { level };
            }
            if next == *current {
                break Termination::Fixpoint { level };
            }

            debug!(
                level,
                facts = current.len(),
                enabled = enabled.len(),
                next_facts = next.len(),
                "expanded level"
            );
            mutexes.analyse(level, current, &enabled, actions);
            layers.push(Layer {
                level: level + 1,
                state: next,
                actions: enabled,
            });
        };

        info!(
            %termination,
            level = termination.level(),
            facts = layers[termination.level()].state.len(),
            "planning graph built"
        );
        Self {
            layers,
            termination,
            mutexes,
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, level: usize) -> Option<&Layer> {
        self.layers.get(level)
    }

    pub fn state(&self, level: usize) -> Option<&State> {
        self.layers.get(level).map(Layer::state)
    }

    /// The actions enabled at `level`, i.e. the layer feeding `level + 1`.
    /// Empty for the last level.
    pub fn enabled_actions(&self, level: usize) -> &[ActionId] {
        self.layers.get(level + 1).map_or(&[], Layer::actions)
    }

    pub const fn termination(&self) -> Termination {
        self.termination
    }

    pub fn last_level(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn mutexes(&self) -> &MutexAnalysis {
        &self.mutexes
    }

    /// The first level where every goal atom holds. Mutexes are not
    /// consulted.
    pub fn goal_level(&self, goals: &[Atom]) -> Option<usize> {
        self.layers
            .iter()
            .find(|layer| goals.iter().all(|goal| layer.state.holds(goal)))
            .map(Layer::level)
    }
}
