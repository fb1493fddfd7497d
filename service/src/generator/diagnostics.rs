//! Generation report and diagnostics

use crate::strategy::RenderKind;
use ormgen_core::types::TypeName;
use serde::Serialize;
use std::fmt;

/// Shape problem found while generating mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Reference to a type that is not mapped as an entity
    UnmappedReference,
    /// Collection whose element type is not mapped as an entity
    UnmappedCollectionElement,
    /// Identifier whose type is neither simple nor embeddable
    NonEmbeddableIdentifier,
    /// Collection without type arguments, rendered as transient
    UnparameterizedCollection,
    /// Several members could own a one-to-many collection
    AmbiguousBackReference,
    /// Map-typed member, left unmapped
    UnsupportedMap,
    /// Array-typed member, left unmapped
    UnsupportedArray,
    /// Member with nested type arguments, left unmapped
    UnsupportedNestedGeneric,
}

/// A single warning attached to a type or member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub type_name: TypeName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic about `member` of `type_name`
    pub fn member(
        kind: DiagnosticKind,
        type_name: &TypeName,
        member: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            type_name: type_name.clone(),
            member: Some(member.to_string()),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(f, "{}.{}: {}", self.type_name, member, self.message),
            None => write!(f, "{}: {}", self.type_name, self.message),
        }
    }
}

/// Outcome of one generation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Mapped types with their rendering kind, in processing order
    pub mapped: Vec<(TypeName, RenderKind)>,
    /// Candidates that need no mapping
    pub skipped: Vec<TypeName>,
    /// Warnings, in the order they were raised
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    /// Log and record a diagnostic
    pub fn warn(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            kind = ?diagnostic.kind,
            type_name = %diagnostic.type_name,
            member = diagnostic.member.as_deref().unwrap_or_default(),
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics of one kind
    pub fn diagnostics_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }

    /// Rendering kind assigned to `ty`, if it was mapped
    #[must_use]
    pub fn kind_of(&self, ty: &str) -> Option<RenderKind> {
        self.mapped
            .iter()
            .find(|(name, _)| name.as_str() == ty)
            .map(|(_, kind)| *kind)
    }

    /// Whether no diagnostic was raised
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
