//! In-memory type model
//!
//! [`ModelRegistry`] is the bundled [`TypeMetadataProvider`]: it holds the
//! descriptors of the application types and classifies everything else
//! (platform types, collections, maps) from a [`TypeCatalogConfig`].

pub mod builder;
pub mod loader;

pub use builder::{ModelBuilder, TypeBuilder};
pub use loader::ModelLoader;

use indexmap::IndexMap;
use ormgen_core::config::TypeCatalogConfig;
use ormgen_core::error::{MappingError, Result};
use ormgen_core::traits::TypeMetadataProvider;
use ormgen_core::types::{CandidateSet, TypeDescriptor, TypeName};
use std::collections::HashSet;

/// Registry of type descriptors, in registration order
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    types: IndexMap<TypeName, TypeDescriptor>,
    catalog: TypeCatalogConfig,
}

impl ModelRegistry {
    /// Create an empty registry using the default type catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry using `catalog` for undescribed types
    #[must_use]
    pub fn with_catalog(catalog: TypeCatalogConfig) -> Self {
        Self {
            types: IndexMap::new(),
            catalog,
        }
    }

    /// Add a type descriptor
    ///
    /// # Errors
    ///
    /// Returns a model error if the type is already registered or one of its
    /// members names a different declaring type.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Result<()> {
        if self.types.contains_key(&descriptor.name) {
            return Err(MappingError::model_at(
                "type registered twice",
                descriptor.name.as_str(),
            ));
        }

        if let Some(stray) = descriptor
            .members
            .iter()
            .find(|m| m.declaring_type != descriptor.name)
        {
            return Err(MappingError::model_at(
                format!(
                    "member '{}' is declared by '{}'",
                    stray.name, stray.declaring_type
                ),
                descriptor.name.as_str(),
            ));
        }

        tracing::trace!(type_name = %descriptor.name, members = descriptor.members.len(), "Registered type");
        self.types.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    /// Check the registry as a whole
    ///
    /// # Errors
    ///
    /// Returns a model error for the first type whose superclass chain loops
    /// back on itself.
    pub fn validate(&self) -> Result<()> {
        for name in self.types.keys() {
            let mut seen: HashSet<&TypeName> = HashSet::from([name]);
            let mut current = self.superclass_of(name);
            while let Some(parent) = current {
                if !seen.insert(parent) {
                    return Err(MappingError::model_at(
                        format!("superclass chain cycles through '{parent}'"),
                        name.as_str(),
                    ));
                }
                current = self.superclass_of(parent);
            }
        }
        Ok(())
    }

    /// Descriptor of a registered type
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Registered descriptors, in registration order
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    /// Number of registered types
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The catalog used for undescribed types
    #[must_use]
    pub fn catalog(&self) -> &TypeCatalogConfig {
        &self.catalog
    }

    /// Every registered type, in registration order
    #[must_use]
    pub fn candidate_set(&self) -> CandidateSet {
        self.types.keys().cloned().collect()
    }

    /// Registered types declared directly in one of `packages`
    ///
    /// Sub-packages are not included.
    #[must_use]
    pub fn candidates_in_packages(&self, packages: &[&str]) -> CandidateSet {
        self.types
            .keys()
            .filter(|name| name.package().is_some_and(|p| packages.contains(&p)))
            .cloned()
            .collect()
    }
}

impl TypeMetadataProvider for ModelRegistry {
    fn describe(&self, ty: &TypeName) -> Option<&TypeDescriptor> {
        self.types.get(ty)
    }

    fn is_simple(&self, ty: &TypeName) -> bool {
        let name = ty.as_str();
        self.catalog.simple_types.iter().any(|t| t == name)
            || self
                .catalog
                .simple_prefixes
                .iter()
                .any(|p| name.starts_with(p.as_str()))
    }

    fn is_standard_library(&self, ty: &TypeName) -> bool {
        self.catalog
            .standard_prefixes
            .iter()
            .any(|p| ty.as_str().starts_with(p.as_str()))
    }

    fn is_collection(&self, ty: &TypeName) -> bool {
        self.catalog.collection_types.iter().any(|t| t == ty.as_str())
    }

    fn is_map(&self, ty: &TypeName) -> bool {
        self.catalog.map_types.iter().any(|t| t == ty.as_str())
    }

    fn is_array(&self, ty: &TypeName) -> bool {
        ty.as_str().ends_with("[]")
    }

    fn superclass_of(&self, ty: &TypeName) -> Option<&TypeName> {
        self.types
            .get(ty)
            .and_then(|d| d.superclass.as_ref())
            .filter(|parent| parent.as_str() != self.catalog.root_type)
    }
}
