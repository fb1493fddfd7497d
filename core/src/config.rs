//! Configuration types for mapping generation

use crate::error::{MappingError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted pretty-print indent
pub const MAX_INDENT: usize = 8;

/// Main configuration for mapping generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Output document configuration
    pub output: OutputConfig,

    /// Values written into generated mappings
    pub defaults: MappingDefaults,

    /// Classification of types that have no descriptor
    pub catalog: TypeCatalogConfig,
}

/// Output document configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Identifier (relative path) of the generated document
    pub file_id: String,

    /// Spaces per nesting level when pretty printing
    pub indent: usize,

    /// `version` attribute of the `entity-mappings` root
    pub schema_version: String,

    /// Default access type of the persistence unit
    pub access: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_id: "META-INF/orm.xml".to_string(),
            indent: 2,
            schema_version: "2.0".to_string(),
            access: "PROPERTY".to_string(),
        }
    }
}

/// Values written into generated mappings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingDefaults {
    /// Generated-value strategy of simple identifiers
    pub id_generation_strategy: String,

    /// Fetch type of many-to-one references
    pub fetch_type: String,

    /// Inheritance strategy of hierarchy roots
    pub inheritance_strategy: String,

    /// Discriminator column of hierarchy roots
    pub discriminator_column: String,

    /// Suffix appended to join column names
    pub join_column_suffix: String,
}

impl Default for MappingDefaults {
    fn default() -> Self {
        Self {
            id_generation_strategy: "AUTO".to_string(),
            fetch_type: "LAZY".to_string(),
            inheritance_strategy: "SINGLE_TABLE".to_string(),
            discriminator_column: "DISCRIMINATOR".to_string(),
            join_column_suffix: "_ID".to_string(),
        }
    }
}

/// Classification of types that have no descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeCatalogConfig {
    /// Universal root type, never reported as a superclass
    pub root_type: String,

    /// Value types matched by exact name
    pub simple_types: Vec<String>,

    /// Value types matched by package prefix
    pub simple_prefixes: Vec<String>,

    /// Prefixes of standard library types
    pub standard_prefixes: Vec<String>,

    /// Collection types matched by exact name
    pub collection_types: Vec<String>,

    /// Map types matched by exact name
    pub map_types: Vec<String>,
}

impl Default for TypeCatalogConfig {
    fn default() -> Self {
        let owned = |names: &[&str]| names.iter().map(|s| (*s).to_string()).collect();
        Self {
            root_type: "java.lang.Object".to_string(),
            simple_types: owned(&[
                "boolean",
                "byte",
                "char",
                "short",
                "int",
                "long",
                "float",
                "double",
                "java.math.BigDecimal",
                "java.math.BigInteger",
                "java.util.Date",
                "java.util.Calendar",
            ]),
            simple_prefixes: owned(&["java.lang."]),
            standard_prefixes: owned(&["java.", "javax."]),
            collection_types: owned(&[
                "java.util.Collection",
                "java.util.List",
                "java.util.Set",
                "java.util.SortedSet",
                "java.util.Queue",
                "java.util.ArrayList",
                "java.util.LinkedList",
                "java.util.HashSet",
                "java.util.LinkedHashSet",
                "java.util.TreeSet",
            ]),
            map_types: owned(&[
                "java.util.Map",
                "java.util.SortedMap",
                "java.util.HashMap",
                "java.util.LinkedHashMap",
                "java.util.TreeMap",
            ]),
        }
    }
}

impl MappingConfig {
    /// Parse a configuration document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid YAML or fails
    /// [`validate`](Self::validate).
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| MappingError::config(format!("Invalid configuration document: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration document from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| MappingError::io_at(path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Check the configuration values
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.output.file_id.trim().is_empty() {
            return Err(MappingError::config("output.file_id must not be empty"));
        }
        if self.output.indent > MAX_INDENT {
            return Err(MappingError::config(format!(
                "output.indent must be at most {MAX_INDENT}, got {}",
                self.output.indent
            )));
        }

        let required = [
            ("output.schema_version", &self.output.schema_version),
            ("output.access", &self.output.access),
            (
                "defaults.id_generation_strategy",
                &self.defaults.id_generation_strategy,
            ),
            ("defaults.fetch_type", &self.defaults.fetch_type),
            (
                "defaults.inheritance_strategy",
                &self.defaults.inheritance_strategy,
            ),
            (
                "defaults.discriminator_column",
                &self.defaults.discriminator_column,
            ),
            ("catalog.root_type", &self.catalog.root_type),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(MappingError::config(format!("{key} must not be empty")));
            }
        }

        // Values are written verbatim into the document
        let written = required.into_iter().chain([
            ("output.file_id", &self.output.file_id),
            (
                "defaults.join_column_suffix",
                &self.defaults.join_column_suffix,
            ),
        ]);
        for (key, value) in written {
            if value.trim() != value.as_str() {
                return Err(MappingError::config(format!(
                    "{key} must not have leading or trailing whitespace, got '{value}'"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_valid() {
        let config = MappingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.file_id, "META-INF/orm.xml");
        assert_eq!(config.defaults.join_column_suffix, "_ID");
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = MappingConfig::from_yaml_str(
            "output:\n  indent: 4\ndefaults:\n  fetch_type: EAGER\n",
        )
        .expect("Test operation failed");

        assert_eq!(config.output.indent, 4);
        assert_eq!(config.output.access, "PROPERTY");
        assert_eq!(config.defaults.fetch_type, "EAGER");
        assert_eq!(config.defaults.id_generation_strategy, "AUTO");
        assert!(config.catalog.collection_types.iter().any(|t| t == "java.util.List"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = MappingConfig::from_yaml_str("output:\n  indent: 12\n").unwrap_err();
        assert!(matches!(err, MappingError::ConfigError(_)));

        let err = MappingConfig::from_yaml_str("output:\n  file_id: ''\n").unwrap_err();
        assert!(err.to_string().contains("file_id"));

        let err = MappingConfig::from_yaml_str("defaults:\n  discriminator_column: ' '\n")
            .unwrap_err();
        assert!(err.to_string().contains("discriminator_column"));
    }

    #[test]
    fn test_padded_values_rejected() {
        let err = MappingConfig::from_yaml_str("output:\n  access: ' FIELD '\n").unwrap_err();
        assert!(matches!(err, MappingError::ConfigError(_)));
        assert!(err.to_string().contains("output.access"));

        let mut config = MappingConfig::default();
        config.defaults.join_column_suffix = "_ID ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("join_column_suffix"));

        config.defaults.join_column_suffix = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().expect("Test operation failed");
        let path = dir.path().join("ormgen.yaml");
        std::fs::write(&path, "output:\n  file_id: orm/custom.xml\n")
            .expect("Test operation failed");

        let config = MappingConfig::from_file(&path).expect("Test operation failed");
        assert_eq!(config.output.file_id, "orm/custom.xml");

        let missing = MappingConfig::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, MappingError::Io { .. }));
    }
}
