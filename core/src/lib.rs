//! # ormgen core
//!
//! Core types and traits for inferring relational mapping documents from
//! the shape of an application data model.
//!
//! This crate provides the type model the inference engine reads, the
//! metadata provider seam, the naming transforms, configuration and error
//! handling. The engine itself lives in `ormgen-service`.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types for mapping operations
pub mod error;

/// Type metadata provider trait
pub mod traits;

/// Type, member and candidate set definitions
pub mod types;

/// Configuration types for mapping generation
pub mod config;

/// Schema and instance naming transforms
pub mod naming;

// Re-export commonly used types
pub use config::{MappingConfig, MappingDefaults, OutputConfig, TypeCatalogConfig};
pub use error::{MappingError, Result};
pub use traits::TypeMetadataProvider;
pub use types::{
    CandidateSet, FieldType, MemberDescriptor, Modifiers, Nesting, TypeCategory, TypeDescriptor,
    TypeName,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::{MappingError, Result};
    pub use crate::naming::{instance_name, join_table_name, schema_name};
    pub use crate::traits::*;
    pub use crate::types::*;
}
