//! Core type definitions describing the types a mapping is inferred from

use bitflags::bitflags;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Fully qualified name of a type, e.g. `com.example.model.Order`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Create a type name from its qualified form
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The qualified name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name without its package
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rsplit_once('.').map_or(self.0.as_str(), |(_, simple)| simple)
    }

    /// The package part of the name, if any
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(package, _)| package)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Broad category of a type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    /// A concrete or abstract class
    #[default]
    Class,
    /// An interface
    Interface,
    /// An enumeration
    Enum,
}

/// Where a type is declared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nesting {
    /// Declared directly in a package
    #[default]
    TopLevel,
    /// Declared as a member of another type
    Member,
    /// Declared inside a method body
    Local,
    /// Anonymous type
    Anonymous,
}

bitflags! {
    /// Modifier flags of a member
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        /// Class-level member
        const STATIC = 1 << 0;
        /// Excluded from persistence
        const TRANSIENT = 1 << 1;
        /// Not reassignable
        const FINAL = 1 << 2;
    }
}

/// Declared type of a member, with at most one level of type arguments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldType {
    /// The raw type, e.g. `java.util.List`
    pub raw: TypeName,

    /// Type arguments, e.g. `[com.example.model.Order]`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeName>,

    /// Set when an argument is itself parameterized; `arguments` is then empty
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nested_arguments: bool,
}

impl FieldType {
    /// A non-parameterized type
    pub fn plain(raw: impl Into<TypeName>) -> Self {
        Self {
            raw: raw.into(),
            arguments: Vec::new(),
            nested_arguments: false,
        }
    }

    /// A type with a single type argument
    pub fn parameterized(raw: impl Into<TypeName>, argument: impl Into<TypeName>) -> Self {
        Self {
            raw: raw.into(),
            arguments: vec![argument.into()],
            nested_arguments: false,
        }
    }

    /// A type whose arguments are themselves parameterized, e.g.
    /// `List<List<Integer>>`
    pub fn nested(raw: impl Into<TypeName>) -> Self {
        Self {
            raw: raw.into(),
            arguments: Vec::new(),
            nested_arguments: true,
        }
    }

    /// The element type of a parameterized collection
    #[must_use]
    pub fn element_type(&self) -> Option<&TypeName> {
        self.arguments.first()
    }

    /// Whether this declared type is literally `ty`, without type arguments
    #[must_use]
    pub fn is_exactly(&self, ty: &TypeName) -> bool {
        self.arguments.is_empty() && !self.nested_arguments && &self.raw == ty
    }
}

/// A member (field) declared by a type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Member name
    pub name: String,

    /// Type that declares the member
    pub declaring_type: TypeName,

    /// Declared type of the member
    pub field_type: FieldType,

    /// Modifier flags
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl MemberDescriptor {
    /// Create a member without modifiers
    pub fn new(
        name: impl Into<String>,
        declaring_type: impl Into<TypeName>,
        field_type: FieldType,
    ) -> Self {
        Self {
            name: name.into(),
            declaring_type: declaring_type.into(),
            field_type,
            modifiers: Modifiers::empty(),
        }
    }

    /// Replace the modifier flags
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether the member is static
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }

    /// Whether the member is transient
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.modifiers.contains(Modifiers::TRANSIENT)
    }
}

/// Everything known about a single type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Qualified name
    pub name: TypeName,

    /// Class, interface or enum
    #[serde(default)]
    pub category: TypeCategory,

    /// Declaration site
    #[serde(default)]
    pub nesting: Nesting,

    /// Whether the type is abstract
    #[serde(default)]
    pub is_abstract: bool,

    /// Direct superclass, `None` for types extending the root type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<TypeName>,

    /// Declared members in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberDescriptor>,

    /// Readable properties declared by this type itself
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derived_properties: Vec<String>,
}

impl TypeDescriptor {
    /// Create a top-level, concrete class without members
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            category: TypeCategory::Class,
            nesting: Nesting::TopLevel,
            is_abstract: false,
            superclass: None,
            members: Vec::new(),
            derived_properties: Vec::new(),
        }
    }

    /// Look up a declared member by name
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// The ordered set of types eligible for mapping in one generation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    types: IndexSet<TypeName>,
}

impl CandidateSet {
    /// Create an empty candidate set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type; returns `false` if it was already present
    pub fn insert(&mut self, ty: impl Into<TypeName>) -> bool {
        self.types.insert(ty.into())
    }

    /// Whether `ty` is a candidate
    #[must_use]
    pub fn contains(&self, ty: &TypeName) -> bool {
        self.types.contains(ty)
    }

    /// Candidates in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TypeName> {
        self.types.iter()
    }

    /// Number of candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<T: Into<TypeName>> FromIterator<T> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a TypeName;
    type IntoIter = indexmap::set::Iter<'a, TypeName>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
