//! Writes planning graph results to an output directory, as plain text or
//! JSON.

use crate::errors::ModelError;
use crate::grounding::{ActionId, GroundAction};
use crate::parsed_types::{Atom, Fact, Name};
use crate::planning_graph::{EffectMutex, MutexRelation, PlanningGraph, RelaxedPlanningGraph, Termination};
use crate::Task;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumString};
use tracing::info;

const SHORT_RULE: &str = "--------------------------------------------------";
const LONG_RULE: &str =
    "----------------------------------------------------------------------------------------------------";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

/// Ground facts (each followed by its negation) and ground actions.
pub fn ground_facts_and_actions(facts: &[Atom], actions: &[GroundAction]) -> String {
    let mut text = format!("Ground facts:\n{}\n", SHORT_RULE);
    for atom in facts {
        let fact = Fact::from(atom.clone());
        text.push_str(&format!("{}\n{}\n", fact, fact.negated()));
    }
    text.push_str(&format!("Ground actions:\n{}\n", SHORT_RULE));
    for action in actions {
        text.push_str(&action.describe());
    }
    text
}

fn push_actions(text: &mut String, task: &Task, ids: &[ActionId]) {
    text.push_str("\nActions:\n");
    for &id in ids {
        text.push_str(&task.action(id).describe());
    }
}

/// The state of every level and the actions enabled at it.
pub fn states_and_actions(task: &Task, graph: &PlanningGraph) -> String {
    let mut text = format!("Actions and states per level\n{}\n", SHORT_RULE);
    for layer in graph.layers() {
        let enabled = graph.enabled_actions(layer.level());
        if layer.level() < graph.last_level() {
            text.push_str(&format!(
                "At level {} we had {} facts and {} enabled actions\n",
                layer.level(),
                layer.state().len(),
                enabled.len()
            ));
        } else {
            text.push_str(&format!(
                "At level {} we had {} facts\n",
                layer.level(),
                layer.state().len()
            ));
        }
        text.push_str(&format!("\nFacts:\n{}", layer.state()));
        if !enabled.is_empty() {
            push_actions(&mut text, task, enabled);
        }
        text.push_str(&format!("{}\n", LONG_RULE));
    }
    text.push_str(&format!(
        "Expansion stopped: {} at level {}\n",
        graph.termination(),
        graph.termination().level()
    ));
    match graph.goal_level(task.problem().positive_goals()) {
        Some(level) => text.push_str(&format!("All positive goals hold from level {}\n", level)),
        None => text.push_str("Some positive goals are never reached\n"),
    }
    text
}

fn push_relation<T: Ord + Clone>(
    text: &mut String,
    title: &str,
    relation: &MutexRelation<T>,
    levels: usize,
    describe: impl Fn(&T) -> String,
) {
    text.push_str(&format!("{}:\n", title));
    for level in 0..levels {
        text.push_str(&format!("At level {}:\n", level));
        if relation.count_at_level(level) == 0 {
            text.push_str(&format!("No mutexes\n{}\n", LONG_RULE));
        }
        for mutex in relation.at_level(level) {
            text.push_str(&format!("{}\n{}\n", describe(mutex), LONG_RULE));
        }
    }
    text.push('\n');
}

/// The mutexes first detected at each level, per relation.
pub fn mutexes(task: &Task, graph: &PlanningGraph) -> String {
    // Mutexes are analysed at every level that enabled actions.
    let levels = graph.last_level();
    let analysis = graph.mutexes();
    let mut text = String::from("Mutexes found:\n");
    push_relation(&mut text, "Inconsistent effects", analysis.inconsistent_effects(), levels, |mutex| {
        match mutex {
            EffectMutex::Actions(pair) => format!("{}\t\t{}", task.action(pair.0), task.action(pair.1)),
            EffectMutex::ActionFact(id, atom) => format!("{}\t\t{}", task.action(*id), atom),
        }
    });
    push_relation(&mut text, "Interference", analysis.interference(), levels, |pair| {
        format!("{}\t\t{}", task.action(pair.0), task.action(pair.1))
    });
    push_relation(
        &mut text,
        "Inconsistent support",
        analysis.inconsistent_support(),
        levels,
        |(first, second)| format!("{}\t\t{}", first, second),
    );
    text
}

/// The relaxed graph's atom costs per level and the goal value.
pub fn relaxed_states_and_actions(task: &Task, relaxed: &RelaxedPlanningGraph) -> String {
    let mut text = format!("Actions and states per level\n{}\n", SHORT_RULE);
    let layers = relaxed.layers();
    for (index, layer) in layers.iter().enumerate() {
        let enabled = layers.get(index + 1).map_or(&[][..], |next| next.actions());
        text.push_str(&format!(
            "At level {} we had {} facts and {} enabled actions\n",
            layer.level(),
            layer.costs().len(),
            enabled.len()
        ));
        text.push_str("\nFacts:\n");
        for (atom, cost) in layer.costs() {
            text.push_str(&format!("{} - hadd value: {}\n", atom, cost));
        }
        if !enabled.is_empty() {
            push_actions(&mut text, task, enabled);
        }
        text.push_str(&format!("{}\n", LONG_RULE));
    }
    match relaxed.goal_value(task.problem().positive_goals()) {
        Some(value) => text.push_str(&format!("Goal hadd value = {}\n", value)),
        None => text.push_str("Some positive goals are never reached, no goal value\n"),
    }
    text
}

#[derive(Debug, Serialize)]
struct GraphplanReport<'a> {
    domain: Name,
    problem: Name,
    ground_facts: Vec<Fact>,
    ground_actions: &'a [GroundAction],
    graph: &'a PlanningGraph,
    goal_level: Option<usize>,
}

#[derive(Debug, Serialize)]
struct RelaxationReport<'a> {
    domain: Name,
    problem: Name,
    ground_actions: &'a [GroundAction],
    graph: &'a RelaxedPlanningGraph,
    termination: Termination,
    goal_level: Option<usize>,
    goal_value: Option<u32>,
}

fn write_file(path: PathBuf, contents: &str) -> Result<PathBuf, ModelError> {
    fs::write(&path, contents).map_err(|source| ModelError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "wrote report");
    Ok(path)
}


/// Writes the planning graph report into `dir`, returning the written files.
pub fn write_graphplan(
    dir: &Path,
    format: ReportFormat,
    task: &Task,
    graph: &PlanningGraph,
) -> Result<Vec<PathBuf>, ModelError> {
    fs::create_dir_all(dir).map_err(|source| ModelError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let facts = task.ground_facts()?;
    match format {
        ReportFormat::Text => Ok(vec![
            write_file(
                dir.join("ground_facts_actions.txt"),
                &ground_facts_and_actions(&facts, task.actions()),
            )?,
            write_file(dir.join("graphplan_states_actions.txt"), &states_and_actions(task, graph))?,
            write_file(dir.join("graphplan_mutexes.txt"), &mutexes(task, graph))?,
        ]),
        ReportFormat::Json => {
            let report = GraphplanReport {
                domain: task.domain().name(),
                problem: task.problem().name(),
                ground_facts: facts
                    .into_iter()
                    .flat_map(|atom| {
                        let fact = Fact::from(atom);
                        [fact.clone(), fact.negated()]
                    })
                    .collect(),
                ground_actions: task.actions(),
                graph,
                goal_level: graph.goal_level(task.problem().positive_goals()),
            };
            Ok(vec![write_file(dir.join("graphplan.json"), &serde_json::to_string_pretty(&report)?)?])
        }
    }
}

/// Writes the relaxation report into `dir`, returning the written files.
pub fn write_relaxation(
    dir: &Path,
    format: ReportFormat,
    task: &Task,
    relaxed: &RelaxedPlanningGraph,
) -> Result<Vec<PathBuf>, ModelError> {
    fs::create_dir_all(dir).map_err(|source| ModelError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    match format {
        ReportFormat::Text => Ok(vec![write_file(
            dir.join("relaxation_results.txt"),
            &relaxed_states_and_actions(task, relaxed),
        )?]),
        ReportFormat::Json => {
            let goals = task.problem().positive_goals();
            let report = RelaxationReport {
                domain: task.domain().name(),
                problem: task.problem().name(),
                ground_actions: task.actions(),
                graph: relaxed,
                termination: relaxed.termination(),
                goal_level: relaxed.goal_level(goals),
                goal_value: relaxed.goal_value(goals),
            };
            Ok(vec![write_file(dir.join("relaxation.json"), &serde_json::to_string_pretty(&report)?)?])
        }
    }
}
