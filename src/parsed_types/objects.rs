//! Contains the [`ObjectCatalog`], the objects available for each type.

use crate::errors::ConfigurationError;
use crate::parsed_types::{Name, TypeHierarchy, TypedList};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Opt-in exception to the catalog closure: when closing `type_`, the direct
/// objects of `subtype` are skipped and only the objects of `subtype`'s own
/// subtypes are taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FlattenedSubtype {
    #[serde(rename = "type")]
    pub type_: Name,
    pub subtype: Name,
}

/// Maps every known type to the objects belonging to it. An object of a
/// subtype belongs to every ancestor type as well, and `object` holds every
/// declared object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectCatalog {
    types: Vec<Name>,
    objects: HashMap<Name, Vec<Name>>,
}

impl ObjectCatalog {
    /// Builds the catalog from the problem's object declarations, closed over
    /// the domain's type hierarchy. Types only mentioned by object
    /// declarations are treated as children of `object`.
    pub fn close(
        hierarchy: &TypeHierarchy,
        declarations: &TypedList,
        flattened: &[FlattenedSubtype],
    ) -> Result<Self, ConfigurationError> {
        let mut hierarchy = hierarchy.clone();
        let mut direct: HashMap<Name, Vec<Name>> = HashMap::new();
        for declaration in declarations.iter() {
            hierarchy.declare(declaration.type_());
            direct
                .entry(declaration.type_())
                .or_default()
                .push(declaration.value());
        }
        hierarchy.attach_orphans();

        let mut closure = Closure {
            hierarchy: &hierarchy,
            direct: &direct,
            flattened,
            resolved: HashMap::new(),
            visiting: HashSet::new(),
        };
        for &type_ in hierarchy.types() {
            closure.resolve(type_)?;
        }

        Ok(Self {
            types: hierarchy.types().to_vec(),
            objects: closure.resolved,
        })
    }

    /// The objects of `type_`, or `None` if the type is not declared.
    pub fn objects_of(&self, type_: Name) -> Option<&[Name]> {
        self.objects.get(&type_).map(Vec::as_slice)
    }

    /// Every declared object.
    pub fn all_objects(&self) -> &[Name] {
        self.objects_of(Name::object()).unwrap_or_default()
    }

    /// Types with their objects, in hierarchy order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &[Name])> + '_ {
        self.types
            .iter()
            .map(|type_| (*type_, self.objects[type_].as_slice()))
    }
}

struct Closure<'a> {
    hierarchy: &'a TypeHierarchy,
    direct: &'a HashMap<Name, Vec<Name>>,
    flattened: &'a [FlattenedSubtype],
    resolved: HashMap<Name, Vec<Name>>,
    visiting: HashSet<Name>,
}

impl Closure<'_> {
    fn resolve(&mut self, type_: Name) -> Result<Vec<Name>, ConfigurationError> {
        if let Some(objects) = self.resolved.get(&type_) {
            return Ok(objects.clone());
        }
        if !self.visiting.insert(type_) {
            return Err(ConfigurationError::CyclicTypeHierarchy(type_));
        }

        let mut objects = self.direct.get(&type_).cloned().unwrap_or_default();
        for &subtype in self.hierarchy.subtypes(type_) {
            if self.is_flattened(type_, subtype) {
                for &nested in self.hierarchy.subtypes(subtype) {
                    objects.extend(self.resolve(nested)?);
                }
            } else {
                objects.extend(self.resolve(subtype)?);
            }
        }
        let mut seen = HashSet::new();
        objects.retain(|object| seen.insert(*object));

        self.visiting.remove(&type_);
        self.resolved.insert(type_, objects.clone());
        Ok(objects)
    }

    fn is_flattened(&self, type_: Name, subtype: Name) -> bool {
        self.flattened
            .iter()
            .any(|rule| rule.type_ == type_ && rule.subtype == subtype)
    }
}
