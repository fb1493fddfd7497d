//! Model builder
//!
//! Provides a fluent API for constructing a [`ModelRegistry`] in code.

use super::ModelRegistry;
use ormgen_core::config::TypeCatalogConfig;
use ormgen_core::error::Result;
use ormgen_core::types::{
    FieldType, MemberDescriptor, Modifiers, Nesting, TypeCategory, TypeDescriptor, TypeName,
};

/// Builder for constructing type models programmatically
///
/// # Example
///
/// ```rust
/// use ormgen_service::model::ModelBuilder;
///
/// let registry = ModelBuilder::new()
///     .add_type("shop.Customer")
///         .field("customerId", "java.lang.String")
///         .field("homeAddress", "shop.Address")
///         .collection("orders", "java.util.List", "shop.Order")
///         .finish()
///     .add_type("shop.Address")
///         .field("street", "java.lang.String")
///         .finish()
///     .build()
///     .expect("valid model");
///
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ModelBuilder {
    catalog: TypeCatalogConfig,
    types: Vec<TypeDescriptor>,
}

impl ModelBuilder {
    /// Create a new model builder using the default type catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify undescribed types with `catalog`
    #[must_use]
    pub fn with_catalog(mut self, catalog: TypeCatalogConfig) -> Self {
        self.catalog = catalog;
        self
    }

    /// Start describing a type
    pub fn add_type(self, name: impl Into<TypeName>) -> TypeBuilder {
        TypeBuilder::new(self, name.into())
    }

    /// Add a finished descriptor as is
    #[must_use]
    pub fn add_descriptor(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.push(descriptor);
        self
    }

    /// Build and validate the registry
    ///
    /// # Errors
    ///
    /// Returns a model error if a type is described twice, a member names a
    /// foreign declaring type, or a superclass chain is cyclic.
    pub fn build(self) -> Result<ModelRegistry> {
        let mut registry = ModelRegistry::with_catalog(self.catalog);
        for descriptor in self.types {
            registry.register(descriptor)?;
        }
        registry.validate()?;
        Ok(registry)
    }
}

/// Builder for a single type
#[derive(Debug)]
pub struct TypeBuilder {
    model_builder: ModelBuilder,
    descriptor: TypeDescriptor,
}

impl TypeBuilder {
    fn new(model_builder: ModelBuilder, name: TypeName) -> Self {
        Self {
            model_builder,
            descriptor: TypeDescriptor::new(name),
        }
    }

    /// Mark the type as abstract
    #[must_use]
    pub fn abstract_(mut self) -> Self {
        self.descriptor.is_abstract = true;
        self
    }

    /// Mark the type as an interface
    #[must_use]
    pub fn interface(mut self) -> Self {
        self.descriptor.category = TypeCategory::Interface;
        self
    }

    /// Mark the type as an enumeration
    #[must_use]
    pub fn enumeration(mut self) -> Self {
        self.descriptor.category = TypeCategory::Enum;
        self
    }

    #[must_use]
    pub fn nesting(mut self, nesting: Nesting) -> Self {
        self.descriptor.nesting = nesting;
        self
    }

    /// Set the direct superclass
    #[must_use]
    pub fn extends(mut self, parent: impl Into<TypeName>) -> Self {
        self.descriptor.superclass = Some(parent.into());
        self
    }

    /// Add a plain field
    #[must_use]
    pub fn field(self, name: impl Into<String>, ty: impl Into<TypeName>) -> Self {
        self.member(name, FieldType::plain(ty), Modifiers::empty())
    }

    /// Add a collection field with its element type
    #[must_use]
    pub fn collection(
        self,
        name: impl Into<String>,
        collection: impl Into<TypeName>,
        element: impl Into<TypeName>,
    ) -> Self {
        self.member(
            name,
            FieldType::parameterized(collection, element),
            Modifiers::empty(),
        )
    }

    /// Add a collection field without type arguments
    #[must_use]
    pub fn raw_collection(self, name: impl Into<String>, collection: impl Into<TypeName>) -> Self {
        self.field(name, collection)
    }

    /// Add a field with explicit type and modifiers
    #[must_use]
    pub fn member(mut self, name: impl Into<String>, ty: FieldType, modifiers: Modifiers) -> Self {
        let member = MemberDescriptor::new(name, self.descriptor.name.clone(), ty)
            .with_modifiers(modifiers);
        self.descriptor.members.push(member);
        self
    }

    /// Add a readable property declared by this type
    #[must_use]
    pub fn derived(mut self, property: impl Into<String>) -> Self {
        self.descriptor.derived_properties.push(property.into());
        self
    }

    /// Finish this type and return to the model builder
    #[must_use]
    pub fn finish(self) -> ModelBuilder {
        self.model_builder.add_descriptor(self.descriptor)
    }
}
