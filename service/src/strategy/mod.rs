//! Mapping classification
//!
//! A [`RenderStrategy`] answers every question the generator asks about a
//! type or member: whether it is mapped at all, as what, with which
//! inheritance layout, and how its collections relate to other types.

pub mod default;

pub use default::DefaultRenderStrategy;

use ormgen_core::types::{CandidateSet, MemberDescriptor, TypeName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a mapped type is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderKind {
    /// Abstract base contributing attributes to its subclasses
    MappedSuperclass,
    /// Independently persisted type with an identifier
    Entity,
    /// Value type inlined into its owner
    Embeddable,
}

impl RenderKind {
    /// Emission order of the per-type elements in a document
    pub const ORDERED: [Self; 3] = [Self::MappedSuperclass, Self::Entity, Self::Embeddable];

    /// Element name in the mapping document
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::MappedSuperclass => "mapped-superclass",
            Self::Entity => "entity",
            Self::Embeddable => "embeddable",
        }
    }

    /// Position in [`Self::ORDERED`]
    #[must_use]
    pub const fn priority(self) -> usize {
        match self {
            Self::MappedSuperclass => 0,
            Self::Entity => 1,
            Self::Embeddable => 2,
        }
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Inheritance layout of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InheritanceKind {
    /// Not part of an entity hierarchy
    NoHierarchy,
    /// Root of a single-table hierarchy
    SingleTableBase,
    /// Subclass of an entity, distinguished by a discriminator value
    DiscriminatedSubclass,
}

/// How a collection member is mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    /// Collection of scalar values
    Simple,
    /// Inverse side of a reference held by the element type
    OneToMany,
    /// Association through a join table
    ManyToMany,
}

/// Decisions driving mapping generation
pub trait RenderStrategy {
    /// Whether `ty` gets an entry in the mapping document
    fn needs_mapping(&self, ty: &TypeName) -> bool;

    /// Rendering kind of `ty`, `None` when it is not mapped
    fn render_kind(&self, ty: &TypeName) -> Option<RenderKind>;

    /// Identifier member of `ty`, searched through its ancestors too
    fn identifier_field(&self, ty: &TypeName) -> Option<&MemberDescriptor>;

    /// Whether `member` is rendered as a single-valued reference
    fn needs_to_one_mapping(&self, member: &MemberDescriptor) -> bool;

    /// Inheritance layout of `ty` among `candidates`
    fn inheritance_kind(&self, ty: &TypeName, candidates: &CandidateSet) -> InheritanceKind;

    /// Mapping of a collection member, `None` when its element type is unknown
    fn collection_kind(&self, member: &MemberDescriptor) -> Option<CollectionKind>;

    /// Members of the element type of `member` that reference the owner,
    /// in scan order; the first one is the owning side
    fn back_references(&self, member: &MemberDescriptor) -> Vec<&MemberDescriptor>;
}
