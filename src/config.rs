use crate::errors::ModelError;
use crate::grounding::{DuplicateParameterPruning, DuplicateParameterRule};
use crate::parsed_types::FlattenedSubtype;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Planner settings, read from a TOML file such as
///
/// ```toml
/// [[pruning]]
/// action = "drive"
/// positions = [1, 2]
///
/// [[flattened-subtypes]]
/// type = "surface"
/// subtype = "pallet"
/// ```
///
/// A missing `pruning` table keeps the default rules. An empty list turns
/// pruning off.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PlannerConfig {
    #[serde(default = "DuplicateParameterPruning::default_rules")]
    pub pruning: Vec<DuplicateParameterRule>,
    #[serde(default)]
    pub flattened_subtypes: Vec<FlattenedSubtype>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            pruning: DuplicateParameterPruning::default_rules(),
            flattened_subtypes: vec![],
        }
    }
}

impl PlannerConfig {
    pub fn from_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let text = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&text).map_err(|source| ModelError::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn pruning(&self) -> DuplicateParameterPruning {
        DuplicateParameterPruning::new(self.pruning.clone())
    }
}
