//! # ormgen service
//!
//! Infers a JPA `orm.xml` mapping document from the shape of an application
//! data model.
//!
//! ## Overview
//!
//! Given a closed set of candidate types, the service decides for each one
//! whether it is an entity, an embeddable or a mapped superclass, which
//! inheritance layout it uses, and how each of its members maps: identifier,
//! embedded value, to-one reference, or one of three kinds of collection.
//! The result is a deterministic, canonically ordered document.
//!
//! - [`model`]: the bundled type metadata provider, with a builder and a
//!   YAML loader
//! - [`strategy`]: the classification rules
//! - [`renderer`]: the document accumulator
//! - [`generator`]: the pass tying them together
//!
//! ## Quick Start
//!
//! ```rust
//! use ormgen_core::MappingConfig;
//! use ormgen_service::generate_mappings;
//! use ormgen_service::model::ModelBuilder;
//! use ormgen_service::renderer::MappingRenderer;
//!
//! # fn main() -> ormgen_core::Result<()> {
//! let registry = ModelBuilder::new()
//!     .add_type("shop.Customer")
//!         .field("id", "java.lang.Long")
//!         .field("homeAddress", "shop.Address")
//!         .finish()
//!     .add_type("shop.Address")
//!         .field("street", "java.lang.String")
//!         .finish()
//!     .build()?;
//!
//! let (renderer, report) =
//!     generate_mappings(&registry, &registry.candidate_set(), &MappingConfig::default())?;
//! assert!(report.is_clean());
//!
//! let documents = renderer.serialize_all()?;
//! assert!(documents["META-INF/orm.xml"].contains(r#"<embedded name="homeAddress"/>"#));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Mapping generation pass and its report
pub mod generator;

/// In-memory type model
pub mod model;

/// Mapping document accumulation and output
pub mod renderer;

/// Classification rules
pub mod strategy;

pub use generator::{
    Diagnostic, DiagnosticKind, GenerationReport, MappingGenerator, generate_mappings,
};
pub use model::{ModelBuilder, ModelLoader, ModelRegistry};
pub use renderer::{MappingRenderer, XmlMappingRenderer};
pub use strategy::{DefaultRenderStrategy, RenderKind, RenderStrategy};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::generator::*;
    pub use crate::model::*;
    pub use crate::renderer::*;
    pub use crate::strategy::*;
    pub use ormgen_core::prelude::*;
}
