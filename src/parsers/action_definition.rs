//! Provides parsers for action definitions.

use crate::errors::{ConfigurationError, ModelError, StructuralError};
use crate::parsed_types::{ActionDefinition, TokenTree, TypedList};
use crate::parsers::{parse_typed_list, split_literals};
use tracing::warn;

/// Parses the body of an action definition, i.e. everything after
/// `:action` in
/// `(:action <name> :parameters (...) :precondition <gd> :effect <effect>)`.
///
/// ## Example
/// ```
/// # use graphplan::parsers::{parse_action_definition, read_token_tree};
/// # use graphplan::parsed_types::{Atom, Name};
/// let tree = read_token_tree(
///     "(move :parameters (?a - block) :precondition (clear ?a)
///            :effect (and (moved ?a) (not (clear ?a))))",
/// )
/// .unwrap();
/// let action = parse_action_definition(tree.as_list().unwrap()).unwrap();
/// assert_eq!(action.name(), Name::from("move"));
/// assert_eq!(action.parameters().len(), 1);
/// assert_eq!(action.positive_preconditions(), &[Atom::from_strs("clear", &["?a"])]);
/// assert_eq!(action.delete_effects(), &[Atom::from_strs("clear", &["?a"])]);
/// ```
pub fn parse_action_definition(tokens: &[TokenTree]) -> Result<ActionDefinition, ModelError> {
    let (name, body) = tokens
        .split_first()
        .ok_or(StructuralError::MissingActionName)?;
    let name = name.as_atom().ok_or(StructuralError::MissingActionName)?;

    let mut parameters = TypedList::default();
    let mut preconditions = (vec![], vec![]);
    let mut effects = (vec![], vec![]);

    let mut body = body.iter();
    while let Some(token) = body.next() {
        let key = token.as_atom();
        match key.as_ref().map(|key| key.as_str()) {
            Some(":parameters") => {
                let list = body
                    .next()
                    .and_then(TokenTree::as_list)
                    .ok_or(ConfigurationError::MalformedParameters(name))?;
                parameters = parse_typed_list(list, &format!("{} parameters", name))
                    .map_err(|_| ConfigurationError::MalformedParameters(name))?;
            }
            Some(":precondition") => {
                let context = format!("{} preconditions", name);
                let tree = body
                    .next()
                    .ok_or_else(|| StructuralError::ExpectedList(context.clone()))?;
                preconditions = split_literals(tree, &context)?;
            }
            Some(":effect") => {
                let context = format!("{} effects", name);
                let tree = body
                    .next()
                    .ok_or_else(|| StructuralError::ExpectedList(context.clone()))?;
                effects = split_literals(tree, &context)?;
            }
            _ => warn!(action = %name, "{} is not recognized in action", token),
        }
    }

    Ok(ActionDefinition::builder(name, parameters)
        .with_preconditions(preconditions.0, preconditions.1)
        .with_effects(effects.0, effects.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{Atom, Name};
    use crate::parsers::read_token_tree;

    fn parse(text: &str) -> Result<ActionDefinition, ModelError> {
        parse_action_definition(read_token_tree(text).unwrap().as_list().unwrap())
    }

    #[test]
    fn depots_lift() {
        let action = parse(
            "(lift
              :parameters (?x - hoist ?y - crate ?z - surface ?p - place)
              :precondition (and (at ?x ?p) (available ?x) (at ?y ?p) (on ?y ?z) (clear ?y))
              :effect (and (not (at ?y ?p)) (lifting ?x ?y) (not (clear ?y))
                           (not (available ?x)) (clear ?z) (not (on ?y ?z))))",
        )
        .unwrap();
        assert_eq!(action.parameters().len(), 4);
        assert_eq!(action.parameters()[3].type_(), Name::from("place"));
        assert_eq!(action.positive_preconditions().len(), 5);
        assert!(action.negative_preconditions().is_empty());
        assert_eq!(
            action.add_effects(),
            &[
                Atom::from_strs("lifting", &["?x", "?y"]),
                Atom::from_strs("clear", &["?z"])
            ]
        );
        assert_eq!(action.delete_effects().len(), 4);
    }

    #[test]
    fn no_parameters() {
        let action = parse("(noop :effect (done))").unwrap();
        assert!(action.parameters().is_empty());
        assert!(action.positive_preconditions().is_empty());
        assert_eq!(action.add_effects(), &[Atom::from_strs("done", &[])]);
    }

    #[test]
    fn missing_name() {
        assert!(matches!(
            parse("((move) :parameters ())"),
            Err(ModelError::Structural(StructuralError::MissingActionName))
        ));
        assert!(matches!(
            parse("()"),
            Err(ModelError::Structural(StructuralError::MissingActionName))
        ));
    }

    #[test]
    fn parameters_must_be_a_list() {
        assert!(matches!(
            parse("(move :parameters ?a)"),
            Err(ModelError::Configuration(
                ConfigurationError::MalformedParameters(_)
            ))
        ));
        assert!(matches!(
            parse("(move :parameters (- block))"),
            Err(ModelError::Configuration(
                ConfigurationError::MalformedParameters(_)
            ))
        ));
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let action = parse("(move :duration 5 :effect (moved))").unwrap();
        assert_eq!(action.add_effects(), &[Atom::from_strs("moved", &[])]);
    }
}
