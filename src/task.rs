use crate::config::PlannerConfig;
use crate::errors::ModelError;
use crate::grounding::{ground_all, ground_facts, ActionId, GroundAction};
use crate::parsed_types::{Atom, Domain, Problem};
use crate::parsers::{parse_problem, read_token_tree, read_token_tree_from_path};
use std::path::Path;
use tracing::info;

/// A parsed domain and problem together with the ground actions. The
/// ground action list is built once and [`ActionId`]s index into it.
#[derive(Debug, Clone)]
pub struct Task {
    domain: Domain,
    problem: Problem,
    actions: Vec<GroundAction>,
}

impl Task {
    pub fn from_path(
        domain_path: &Path,
        problem_path: &Path,
        config: &PlannerConfig,
    ) -> Result<Self, ModelError> {
        let domain = Domain::from_path(domain_path)?;
        let problem = parse_problem(
            &read_token_tree_from_path(problem_path)?,
            &domain,
            &config.flattened_subtypes,
        )?;
        Self::new(domain, problem, config)
    }

    /// Builds a task with the default [`PlannerConfig`].
    pub fn from_text(domain_text: &str, problem_text: &str) -> Result<Self, ModelError> {
        Self::from_text_with_config(domain_text, problem_text, &PlannerConfig::default())
    }

    pub fn from_text_with_config(
        domain_text: &str,
        problem_text: &str,
        config: &PlannerConfig,
    ) -> Result<Self, ModelError> {
        let domain = Domain::from_str(domain_text)?;
        let problem = parse_problem(
            &read_token_tree(problem_text)?,
            &domain,
            &config.flattened_subtypes,
        )?;
        Self::new(domain, problem, config)
    }

    fn new(domain: Domain, problem: Problem, config: &PlannerConfig) -> Result<Self, ModelError> {
        info!(
            domain = %domain.name(),
            problem = %problem.name(),
            objects = problem.objects().len(),
            init = problem.init().len(),
            "parsed task"
        );
        let actions = ground_all(&domain, problem.catalog(), &config.pruning())?;
        Ok(Self {
            domain,
            problem,
            actions,
        })
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn actions(&self) -> &[GroundAction] {
        &self.actions
    }

    /// Panics if `id` does not come from this task.
    pub fn action(&self, id: ActionId) -> &GroundAction {
        &self.actions[id.0]
    }

    /// Every ground atom the domain's predicates can form over the problem's
    /// objects.
    pub fn ground_facts(&self) -> Result<Vec<Atom>, ModelError> {
        Ok(ground_facts(&self.domain, self.problem.catalog())?)
    }
}
