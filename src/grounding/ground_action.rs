use crate::parsed_types::{ActionDefinition, Arguments, Atom, Name};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Index of a [`GroundAction`] in the task's ground action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ActionId(pub usize);

/// An action schema instantiated with one object per parameter.
///
/// Two ground actions are equal iff they have the same name and the same
/// parameter tuple.
#[derive(Debug, Clone, Serialize)]
pub struct GroundAction {
    name: Name,
    parameters: Arguments,
    positive_preconditions: Vec<Atom>,
    negative_preconditions: Vec<Atom>,
    add_effects: Vec<Atom>,
    delete_effects: Vec<Atom>,
    /// Only used by the delete relaxation.
    cost: u32,
}

impl GroundAction {
    pub const DEFAULT_COST: u32 = 1;

    /// Substitutes `values` for the schema's parameters in every literal.
    pub fn instantiate(schema: &ActionDefinition, variables: &[Name], values: &[Name]) -> Self {
        let substitute = |atoms: &[Atom]| -> Vec<Atom> {
            atoms
                .iter()
                .map(|atom| atom.substitute(variables, values))
                .collect()
        };
        Self {
            name: schema.name(),
            parameters: values.iter().copied().collect(),
            positive_preconditions: substitute(schema.positive_preconditions()),
            negative_preconditions: substitute(schema.negative_preconditions()),
            add_effects: substitute(schema.add_effects()),
            delete_effects: substitute(schema.delete_effects()),
            cost: Self::DEFAULT_COST,
        }
    }

    pub const fn name(&self) -> Name {
        self.name
    }

    pub fn parameters(&self) -> &[Name] {
        &self.parameters
    }

    pub fn positive_preconditions(&self) -> &[Atom] {
        &self.positive_preconditions
    }

    pub fn negative_preconditions(&self) -> &[Atom] {
        &self.negative_preconditions
    }

    pub fn add_effects(&self) -> &[Atom] {
        &self.add_effects
    }

    pub fn delete_effects(&self) -> &[Atom] {
        &self.delete_effects
    }

    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Human readable multi-line description.
    pub fn describe(&self) -> String {
        let join = |atoms: &[Atom]| -> String {
            atoms
                .iter()
                .map(Atom::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!(
            "action: {}\n  parameters: {}\n  positive_preconditions: {}\n  add_effects: {}\n  del_effects: {}\n",
            self.name,
            self.parameters
                .iter()
                .map(Name::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            join(&self.positive_preconditions),
            join(&self.add_effects),
            join(&self.delete_effects),
        )
    }
}

impl PartialEq for GroundAction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.parameters == other.parameters
    }
}

impl Eq for GroundAction {}

impl Hash for GroundAction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.parameters.hash(state);
    }
}

impl Display for GroundAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.name)?;
        for parameter in &self.parameters {
            write!(f, " {}", parameter)?;
        }
        write!(f, ")")
    }
}
