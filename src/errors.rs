//! Errors raised while reading, modelling and grounding a planning task. All
//! of them are fatal: nothing downstream runs on a partially parsed task.

use crate::parsed_types::Name;
use std::path::PathBuf;
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Structural(#[from] StructuralError),
    #[error("requirement {0} not supported")]
    UnsupportedFeature(String),
    #[error("{kind} {name} redefined")]
    Redefinition { kind: DefinitionKind, name: Name },
    #[error("problem refers to domain {found}, but the parsed domain is {expected}")]
    DomainMismatch { expected: Name, found: Name },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("unexpected not in {context}: negation takes exactly one literal, found {arity}")]
    LiteralShape { context: String, arity: usize },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
    #[error("invalid config {}: {source}", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DefinitionKind {
    Predicate,
    Action,
}

/// Malformed token trees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("missing open parenthesis at line {line}, column {column}")]
    MissingOpenParenthesis { line: u32, column: usize },
    #[error("missing close parenthesis for the expression opened at line {line}, column {column}")]
    MissingCloseParenthesis { line: u32, column: usize },
    #[error("malformed expression: expected exactly one top-level expression, found {0}")]
    MalformedExpression(usize),
    #[error("input does not match the {0} pattern")]
    UnexpectedPattern(&'static str),
    #[error("expected a list in {0}")]
    ExpectedList(String),
    #[error("expected a name in {0}")]
    ExpectedName(String),
    #[error("unexpected hyphen in {0}")]
    UnexpectedHyphen(String),
    #[error("hyphen without a type in {0}")]
    MissingType(String),
    #[error("action without name definition")]
    MissingActionName,
}

/// Schemas that cannot be grounded against the declared types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("{context} refers to undeclared type {type_name}")]
    UndeclaredType { type_name: Name, context: String },
    #[error("malformed parameter list in action {0}")]
    MalformedParameters(Name),
    #[error("type hierarchy contains a cycle through {0}")]
    CyclicTypeHierarchy(Name),
}
