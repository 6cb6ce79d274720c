//! Provides the type hierarchy.

use crate::parsed_types::Name;
use std::collections::HashMap;

/// A type hierarchy, mapping every declared type to its immediate subtypes.
/// The hierarchy is rooted at the universal type `object`; a declared type
/// without an explicit supertype is a child of `object`.
///
/// ## Example
/// ```
/// # use graphplan::parsed_types::{Name, TypeHierarchy};
/// let mut types = TypeHierarchy::default();
/// types.assign(Name::from("surface"), Name::from("locatable"));
/// types.assign(Name::from("locatable"), Name::object());
/// types.assign(Name::from("pallet"), Name::from("surface"));
///
/// assert_eq!(types.subtypes(Name::from("surface")), &[Name::from("pallet")]);
/// assert!(types.is_leaf(Name::from("pallet")));
/// assert_eq!(types.parent(Name::from("surface")), Some(Name::from("locatable")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeHierarchy {
    /// Every known type in declaration order, `object` first.
    order: Vec<Name>,
    subtypes: HashMap<Name, Vec<Name>>,
    parents: HashMap<Name, Name>,
}

impl Default for TypeHierarchy {
    fn default() -> Self {
        let object = Name::object();
        Self {
            order: vec![object],
            subtypes: HashMap::from([(object, vec![])]),
            parents: HashMap::new(),
        }
    }
}

impl TypeHierarchy {
    /// Makes `name` a known type without giving it a supertype yet.
    pub fn declare(&mut self, name: Name) {
        if !self.subtypes.contains_key(&name) {
            self.order.push(name);
            self.subtypes.insert(name, vec![]);
        }
    }

    /// Records `subtype` as an immediate subtype of `supertype`. A type keeps
    /// the first supertype it is assigned to; later assignments are ignored.
    /// Returns whether the assignment was recorded.
    pub fn assign(&mut self, subtype: Name, supertype: Name) -> bool {
        self.declare(subtype);
        self.declare(supertype);
        if subtype == Name::object() || self.parents.contains_key(&subtype) {
            return false;
        }
        self.parents.insert(subtype, supertype);
        if let Some(children) = self.subtypes.get_mut(&supertype) {
            children.push(subtype);
        }
        true
    }

    /// Gives every declared type that still has no supertype the parent
    /// `object`.
    pub fn attach_orphans(&mut self) {
        let orphans: Vec<Name> = self
            .order
            .iter()
            .copied()
            .filter(|name| *name != Name::object() && !self.parents.contains_key(name))
            .collect();
        for orphan in orphans {
            self.assign(orphan, Name::object());
        }
    }

    pub fn contains(&self, name: Name) -> bool {
        self.subtypes.contains_key(&name)
    }

    /// Immediate subtypes of `name`, empty for leaves and unknown types.
    pub fn subtypes(&self, name: Name) -> &[Name] {
        self.subtypes.get(&name).map_or(&[], Vec::as_slice)
    }

    pub fn parent(&self, name: Name) -> Option<Name> {
        self.parents.get(&name).copied()
    }

    pub fn is_leaf(&self, name: Name) -> bool {
        self.subtypes(name).is_empty()
    }

    /// All known types, in declaration order.
    pub fn types(&self) -> &[Name] {
        &self.order
    }

    /// Number of declared types, not counting `object`.
    pub fn len(&self) -> usize {
        self.order.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The strict ancestors of `name`, nearest first.
    pub fn ancestors(&self, name: Name) -> Vec<Name> {
        let mut ancestors = vec![];
        let mut current = name;
        while let Some(parent) = self.parent(current) {
            if parent == name || ancestors.contains(&parent) {
                break;
            }
            ancestors.push(parent);
            current = parent;
        }
        ancestors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_assignment_wins() {
        let mut types = TypeHierarchy::default();
        assert!(types.assign(Name::from("truck"), Name::from("vehicle")));
        assert!(!types.assign(Name::from("truck"), Name::from("locatable")));
        assert_eq!(types.parent(Name::from("truck")), Some(Name::from("vehicle")));
        assert!(types.subtypes(Name::from("locatable")).is_empty());
    }

    #[test]
    fn orphans_attach_to_object() {
        let mut types = TypeHierarchy::default();
        types.declare(Name::from("block"));
        types.assign(Name::from("table"), Name::from("furniture"));
        types.attach_orphans();
        assert_eq!(
            types.subtypes(Name::object()),
            &[Name::from("block"), Name::from("furniture")]
        );
        assert_eq!(types.len(), 3);
    }

    #[test]
    fn ancestors_nearest_first() {
        let mut types = TypeHierarchy::default();
        types.assign(Name::from("crate"), Name::from("surface"));
        types.assign(Name::from("surface"), Name::from("locatable"));
        types.attach_orphans();
        assert_eq!(
            types.ancestors(Name::from("crate")),
            vec![Name::from("surface"), Name::from("locatable"), Name::object()]
        );
    }
}
