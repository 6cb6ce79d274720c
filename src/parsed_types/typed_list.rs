use crate::parsed_types::Name;
use serde::Serialize;
use std::ops::Deref;

/// A name with its declared type, e.g. `?x - block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Typed {
    value: Name,
    #[serde(rename = "type")]
    type_: Name,
}

impl Typed {
    pub const fn new(value: Name, type_: Name) -> Self {
        Self { value, type_ }
    }

    /// A name without an explicit type belongs to `object`.
    pub fn untyped(value: Name) -> Self {
        Self::new(value, Name::object())
    }

    pub const fn value(&self) -> Name {
        self.value
    }

    pub const fn type_(&self) -> Name {
        self.type_
    }
}

/// A list of typed elements, kept in declaration order.
///
/// ## Example
/// ```
/// # use graphplan::parsed_types::{Name, TypedList, Typed};
/// let tl = TypedList::from_iter([
///     Typed::new(Name::from("?x"), Name::from("truck")),
///     Typed::untyped(Name::from("?y")),
/// ]);
///
/// assert_eq!(tl.len(), 2);
/// assert_eq!(tl[0].type_(), Name::from("truck"));
/// assert_eq!(tl[1].type_(), Name::from("object"));
/// ```
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
pub struct TypedList(Vec<Typed>);

impl TypedList {
    pub const fn new(list: Vec<Typed>) -> Self {
        Self(list)
    }

    /// Gets the values.
    pub fn values(&self) -> impl Iterator<Item = Name> + '_ {
        self.0.iter().map(Typed::value)
    }
}

impl FromIterator<Typed> for TypedList {
    fn from_iter<I: IntoIterator<Item = Typed>>(iter: I) -> Self {
        TypedList::new(iter.into_iter().collect())
    }
}

impl Deref for TypedList {
    type Target = [Typed];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl IntoIterator for TypedList {
    type Item = Typed;
    type IntoIter = std::vec::IntoIter<Typed>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
