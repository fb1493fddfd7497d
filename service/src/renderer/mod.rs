//! Mapping document accumulation
//!
//! The generator drives a [`MappingRenderer`] with low-level "render X for
//! type T" calls; the renderer groups the fragments per type and turns them
//! into canonically ordered documents on demand.

pub mod elements;
pub mod format;
pub mod record;
pub mod xml;

pub use elements::{AttributeKind, AttributeMapping, ClassElement};
pub use record::MappingRecord;
pub use xml::XmlMappingRenderer;

use crate::strategy::RenderKind;
use indexmap::IndexMap;
use ormgen_core::error::Result;
use ormgen_core::types::TypeName;
use std::path::PathBuf;

/// Append-only accumulator of per-type mapping fragments
///
/// The rendering kind of a type must be set before any content is added to
/// it; content calls for a type without a kind fail with
/// [`MappingError::RenderingKindNotSet`](ormgen_core::MappingError::RenderingKindNotSet).
pub trait MappingRenderer {
    /// Set the rendering kind of `ty`; a later call overwrites an earlier one
    fn set_rendering_kind(&mut self, ty: &TypeName, kind: RenderKind);

    /// Append a class-level fragment, in call order
    ///
    /// # Errors
    ///
    /// Fails if the rendering kind of `ty` has not been set.
    fn append_class_content(&mut self, ty: &TypeName, fragment: &str) -> Result<()>;

    /// Append an attribute fragment to the bucket `kind`, in call order
    ///
    /// # Errors
    ///
    /// Fails if the rendering kind of `ty` has not been set.
    fn append_attribute(&mut self, ty: &TypeName, kind: &AttributeKind, fragment: &str)
    -> Result<()>;

    /// Documents built from the current state, keyed by output identifier
    ///
    /// Repeated calls without intervening mutation return identical text.
    ///
    /// # Errors
    ///
    /// Fails if a document cannot be formatted.
    fn serialize_all(&self) -> Result<IndexMap<String, String>>;

    /// Write every document of [`serialize_all`](Self::serialize_all) and
    /// return the written paths
    ///
    /// Documents written before a failure are left in place.
    ///
    /// # Errors
    ///
    /// Fails with the underlying I/O error of the first write that fails.
    fn materialize(&self) -> Result<Vec<PathBuf>>;

    /// Append a typed class-level element
    ///
    /// # Errors
    ///
    /// Fails if the rendering kind of `ty` has not been set.
    fn add_class_element(&mut self, ty: &TypeName, element: &ClassElement) -> Result<()> {
        self.append_class_content(ty, &element.to_xml())
    }

    /// Append a typed attribute mapping to its bucket
    ///
    /// # Errors
    ///
    /// Fails if the rendering kind of `ty` has not been set.
    fn add_attribute(&mut self, ty: &TypeName, mapping: &AttributeMapping) -> Result<()> {
        self.append_attribute(ty, &mapping.kind(), &mapping.to_xml())
    }
}
