use crate::errors::ConfigurationError;
use crate::parsed_types::{Atom, Domain, Name, ObjectCatalog};
use itertools::Itertools;

/// Instantiates every predicate of `domain` over the objects of its
/// parameter types, in predicate order.
///
/// Nullary predicates yield a single atom.
pub fn ground_facts(domain: &Domain, catalog: &ObjectCatalog) -> Result<Vec<Atom>, ConfigurationError> {
    let mut facts = vec![];
    for predicate in domain.predicates() {
        if predicate.arity() == 0 {
            facts.push(Atom::new(predicate.name(), []));
            continue;
        }

        let candidates = predicate
            .parameters()
            .iter()
            .map(|parameter| {
                catalog.objects_of(parameter.type_()).ok_or_else(|| {
                    ConfigurationError::UndeclaredType {
                        type_name: parameter.type_(),
                        context: format!("parameter {} of predicate {}", parameter.value(), predicate.name()),
                    }
                })
            })
            .collect::<Result<Vec<&[Name]>, _>>()?;

        facts.extend(
            candidates
                .into_iter()
                .map(|objects| objects.iter().copied())
                .multi_cartesian_product()
                .map(|arguments| Atom::new(predicate.name(), arguments)),
        );
    }
    Ok(facts)
}
