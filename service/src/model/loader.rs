//! YAML model documents
//!
//! ```yaml
//! types:
//!   - name: shop.Order
//!     extends: shop.PersistentObject
//!     derived: [displayName]
//!     fields:
//!       - { name: customer, type: shop.Customer }
//!       - { name: lines, type: "java.util.List<shop.OrderLine>" }
//!       - { name: tags, type: java.util.Set, arguments: [java.lang.String] }
//!       - { name: log, type: org.slf4j.Logger, static: true, transient: true }
//!   - name: shop.Status
//!     kind: enum
//! ```

use super::ModelRegistry;
use ormgen_core::config::TypeCatalogConfig;
use ormgen_core::error::{MappingError, Result};
use ormgen_core::types::{
    FieldType, MemberDescriptor, Modifiers, Nesting, TypeCategory, TypeDescriptor, TypeName,
};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelDocument {
    #[serde(default)]
    types: Vec<TypeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TypeEntry {
    name: String,
    #[serde(default)]
    kind: TypeCategory,
    #[serde(default, rename = "abstract")]
    is_abstract: bool,
    #[serde(default)]
    nesting: Nesting,
    #[serde(default)]
    extends: Option<String>,
    #[serde(default)]
    derived: Vec<String>,
    #[serde(default)]
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldEntry {
    name: String,
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    arguments: Vec<String>,
    #[serde(default, rename = "static")]
    is_static: bool,
    #[serde(default, rename = "transient")]
    is_transient: bool,
    #[serde(default, rename = "final")]
    is_final: bool,
}

/// Loads model documents into a validated [`ModelRegistry`]
#[derive(Debug, Clone, Default)]
pub struct ModelLoader {
    catalog: TypeCatalogConfig,
}

impl ModelLoader {
    /// Create a loader using the default type catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader classifying undescribed types with `catalog`
    #[must_use]
    pub fn with_catalog(catalog: TypeCatalogConfig) -> Self {
        Self { catalog }
    }

    /// Load a model document from a string
    ///
    /// # Errors
    ///
    /// Returns a model error if the document cannot be parsed, a field type
    /// is malformed, or the resulting model is inconsistent.
    pub fn load_str(&self, yaml: &str) -> Result<ModelRegistry> {
        let document: ModelDocument = serde_yaml::from_str(yaml)
            .map_err(|e| MappingError::model(format!("Invalid model document: {e}")))?;

        let mut registry = ModelRegistry::with_catalog(self.catalog.clone());
        for entry in document.types {
            registry.register(Self::descriptor(entry)?)?;
        }
        registry.validate()?;

        debug!(types = registry.len(), "Loaded type model");
        Ok(registry)
    }

    /// Load a model document from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<ModelRegistry> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| MappingError::io_at(path, e))?;
        self.load_str(&content).map_err(|err| match err {
            MappingError::ModelError {
                message,
                location: None,
            } => MappingError::model_at(message, path.display().to_string()),
            other => other,
        })
    }

    fn descriptor(entry: TypeEntry) -> Result<TypeDescriptor> {
        let name = TypeName::new(entry.name);
        let members = entry
            .fields
            .into_iter()
            .map(|field| Self::member(&name, field))
            .collect::<Result<Vec<_>>>()?;

        Ok(TypeDescriptor {
            category: entry.kind,
            nesting: entry.nesting,
            is_abstract: entry.is_abstract,
            superclass: entry.extends.map(TypeName::new),
            members,
            derived_properties: entry.derived,
            name,
        })
    }

    fn member(owner: &TypeName, field: FieldEntry) -> Result<MemberDescriptor> {
        let location = format!("{owner}.{}", field.name);
        let mut field_type = parse_field_type(&field.ty).map_err(|message| {
            MappingError::model_at(message, location.clone())
        })?;

        if !field.arguments.is_empty() {
            if !field_type.arguments.is_empty() || field_type.nested_arguments {
                return Err(MappingError::model_at(
                    "type arguments given both inline and as a list",
                    location,
                ));
            }
            if field.arguments.iter().any(|a| a.contains(['<', '>'])) {
                field_type = FieldType::nested(field_type.raw);
            } else {
                field_type.arguments = field.arguments.into_iter().map(TypeName::new).collect();
            }
        }

        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::STATIC, field.is_static);
        modifiers.set(Modifiers::TRANSIENT, field.is_transient);
        modifiers.set(Modifiers::FINAL, field.is_final);

        Ok(MemberDescriptor::new(field.name, owner.clone(), field_type).with_modifiers(modifiers))
    }
}

/// Parse `raw` or `raw<argument, ...>`
///
/// Arguments that are themselves parameterized are not kept; the result is
/// flagged as [`FieldType::nested`] so generation can report the member.
fn parse_field_type(ty: &str) -> std::result::Result<FieldType, String> {
    let ty = ty.trim();
    let Some((raw, rest)) = ty.split_once('<') else {
        return Ok(FieldType::plain(ty));
    };

    let Some(arguments) = rest.strip_suffix('>') else {
        return Err(format!("unterminated type arguments in '{ty}'"));
    };
    if arguments.contains(['<', '>']) {
        let mut depth = 0usize;
        for c in arguments.chars() {
            match c {
                '<' => depth += 1,
                '>' => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| format!("unbalanced type arguments in '{ty}'"))?;
                }
                _ => {}
            }
        }
        if depth != 0 {
            return Err(format!("unbalanced type arguments in '{ty}'"));
        }
        return Ok(FieldType::nested(raw.trim()));
    }

    let arguments = arguments
        .split(',')
        .map(str::trim)
        .map(|a| {
            if a.is_empty() {
                Err(format!("empty type argument in '{ty}'"))
            } else {
                Ok(TypeName::new(a))
            }
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(FieldType {
        raw: TypeName::new(raw.trim()),
        arguments,
        nested_arguments: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ormgen_core::traits::TypeMetadataProvider;

    const MODEL: &str = r#"
types:
  - name: shop.PersistentObject
    abstract: true
    fields:
      - { name: id, type: java.lang.Long }
  - name: shop.Order
    extends: shop.PersistentObject
    derived: [displayName]
    fields:
      - { name: lines, type: "java.util.List<shop.OrderLine>" }
      - { name: tags, type: java.util.Set, arguments: [java.lang.String] }
      - { name: log, type: org.slf4j.Logger, static: true, transient: true }
  - name: shop.Status
    kind: enum
  - name: shop.Order.Builder
    nesting: member
"#;

    #[test]
    fn test_load_model_document() {
        let registry = ModelLoader::new()
            .load_str(MODEL)
            .expect("Test operation failed");

        assert_eq!(registry.len(), 4);
        let order = TypeName::new("shop.Order");
        assert_eq!(
            registry.superclass_of(&order),
            Some(&TypeName::new("shop.PersistentObject"))
        );
        assert!(registry.is_abstract(&TypeName::new("shop.PersistentObject")));
        assert!(registry.is_enum(&TypeName::new("shop.Status")));
        assert_eq!(
            registry.nesting(&TypeName::new("shop.Order.Builder")),
            Nesting::Member
        );

        let descriptor = registry.get("shop.Order").expect("Test operation failed");
        let lines = descriptor.member("lines").expect("Test operation failed");
        assert_eq!(
            lines.field_type,
            FieldType::parameterized("java.util.List", "shop.OrderLine")
        );
        let tags = descriptor.member("tags").expect("Test operation failed");
        assert_eq!(tags.field_type.element_type(), Some(&TypeName::new("java.lang.String")));
        let log = descriptor.member("log").expect("Test operation failed");
        assert!(log.is_static() && log.is_transient());
        assert_eq!(descriptor.derived_properties, vec!["displayName".to_string()]);
    }

    #[test]
    fn test_nested_arguments_are_flagged() {
        let yaml = r#"
types:
  - name: shop.Order
    fields:
      - { name: matrix, type: "java.util.List<java.util.List<java.lang.Integer>>" }
      - { name: grid, type: java.util.List, arguments: ["java.util.Set<java.lang.Long>"] }
"#;
        let registry = ModelLoader::new()
            .load_str(yaml)
            .expect("Test operation failed");
        let order = registry.get("shop.Order").expect("Test operation failed");

        for name in ["matrix", "grid"] {
            let member = order.member(name).expect("Test operation failed");
            assert_eq!(member.field_type, FieldType::nested("java.util.List"));
        }
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = ModelLoader::new()
            .load_str("types:\n  - name: shop.Order\n    colour: blue\n")
            .unwrap_err();
        assert!(matches!(err, MappingError::ModelError { .. }));
    }

    #[test]
    fn test_load_file_reports_path() {
        let dir = tempfile::tempdir().expect("Test operation failed");
        let path = dir.path().join("model.yaml");
        std::fs::write(&path, "types: [").expect("Test operation failed");

        match ModelLoader::new().load_file(&path) {
            Err(MappingError::ModelError { location, .. }) => {
                assert_eq!(location, Some(path.display().to_string()));
            }
            other => panic!("Expected model error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_field_type() {
        assert_eq!(
            parse_field_type(" shop.Order "),
            Ok(FieldType::plain("shop.Order"))
        );
        assert!(parse_field_type("java.util.List<shop.Order").is_err());
        assert!(parse_field_type("java.util.List<>").is_err());
        assert!(parse_field_type("java.util.List<java.util.List<shop.Order>").is_err());
        assert!(parse_field_type("java.util.List<shop.A>, shop.B<shop.C>").is_err());
        assert_eq!(
            parse_field_type("java.util.Map<java.lang.String, java.util.List<shop.Order>>"),
            Ok(FieldType::nested("java.util.Map"))
        );
    }
}
