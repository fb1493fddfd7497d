//! Core trait definitions
//!
//! The mapping engine never inspects types itself; everything it knows
//! about a type comes through [`TypeMetadataProvider`].

use crate::types::{MemberDescriptor, Nesting, TypeCategory, TypeDescriptor, TypeName};
use std::collections::HashSet;

/// Source of type metadata consumed by the classifier and the generator
///
/// Only [`describe`](Self::describe) and the category predicates for
/// undescribed types are required; everything else is derived from the
/// descriptors. A type without a descriptor behaves like a concrete,
/// top-level class with no members.
pub trait TypeMetadataProvider {
    /// Descriptor of `ty`, if the provider knows it
    fn describe(&self, ty: &TypeName) -> Option<&TypeDescriptor>;

    /// Primitive, boxed, numeric or date-like value type
    fn is_simple(&self, ty: &TypeName) -> bool;

    /// Type shipped with the host platform's standard library
    fn is_standard_library(&self, ty: &TypeName) -> bool;

    /// Collection type (list, set, ...)
    fn is_collection(&self, ty: &TypeName) -> bool;

    /// Map type
    fn is_map(&self, ty: &TypeName) -> bool;

    /// Array type
    fn is_array(&self, ty: &TypeName) -> bool;

    /// Direct superclass, excluding the universal root type
    fn superclass_of(&self, ty: &TypeName) -> Option<&TypeName> {
        self.describe(ty).and_then(|d| d.superclass.as_ref())
    }

    fn is_abstract(&self, ty: &TypeName) -> bool {
        self.describe(ty).is_some_and(|d| d.is_abstract)
    }

    fn is_enum(&self, ty: &TypeName) -> bool {
        self.describe(ty)
            .is_some_and(|d| d.category == TypeCategory::Enum)
    }

    fn is_interface(&self, ty: &TypeName) -> bool {
        self.describe(ty)
            .is_some_and(|d| d.category == TypeCategory::Interface)
    }

    fn nesting(&self, ty: &TypeName) -> Nesting {
        self.describe(ty).map_or(Nesting::TopLevel, |d| d.nesting)
    }

    /// Members declared by `ty` itself, in declaration order
    fn declared_members(&self, ty: &TypeName) -> Vec<&MemberDescriptor> {
        self.describe(ty)
            .map(|d| d.members.iter().collect())
            .unwrap_or_default()
    }

    /// Readable properties declared by `ty` itself
    fn derived_properties(&self, ty: &TypeName) -> Vec<&str> {
        self.describe(ty)
            .map(|d| d.derived_properties.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Superclass chain of `ty`, nearest first
    ///
    /// A cyclic chain is cut at the first repeated type.
    fn ancestors(&self, ty: &TypeName) -> Vec<&TypeName> {
        let mut chain = Vec::new();
        let mut seen: HashSet<&TypeName> = HashSet::new();
        let mut current = self.superclass_of(ty);

        while let Some(parent) = current {
            if parent == ty || !seen.insert(parent) {
                tracing::warn!(type_name = %ty, "Superclass cycle detected at '{parent}'");
                break;
            }
            chain.push(parent);
            current = self.superclass_of(parent);
        }

        chain
    }

    /// Members of the ancestors (nearest first) followed by the members
    /// declared by `ty`
    ///
    /// This is the scan order every first-match rule relies on.
    fn all_members(&self, ty: &TypeName) -> Vec<&MemberDescriptor> {
        let mut members = Vec::new();
        for ancestor in self.ancestors(ty) {
            members.extend(self.declared_members(ancestor));
        }
        members.extend(self.declared_members(ty));
        members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldType;
    use std::collections::HashMap;

    struct MapProvider {
        types: HashMap<TypeName, TypeDescriptor>,
    }

    impl MapProvider {
        fn new(descriptors: Vec<TypeDescriptor>) -> Self {
            Self {
                types: descriptors.into_iter().map(|d| (d.name.clone(), d)).collect(),
            }
        }
    }

    impl TypeMetadataProvider for MapProvider {
        fn describe(&self, ty: &TypeName) -> Option<&TypeDescriptor> {
            self.types.get(ty)
        }
        fn is_simple(&self, ty: &TypeName) -> bool {
            ty.as_str().starts_with("java.lang.")
        }
        fn is_standard_library(&self, ty: &TypeName) -> bool {
            ty.as_str().starts_with("java.")
        }
        fn is_collection(&self, ty: &TypeName) -> bool {
            ty.as_str() == "java.util.List"
        }
        fn is_map(&self, ty: &TypeName) -> bool {
            ty.as_str() == "java.util.Map"
        }
        fn is_array(&self, ty: &TypeName) -> bool {
            ty.as_str().ends_with("[]")
        }
    }

    fn class(name: &str, superclass: Option<&str>, fields: &[&str]) -> TypeDescriptor {
        let mut descriptor = TypeDescriptor::new(name);
        descriptor.superclass = superclass.map(TypeName::from);
        descriptor.members = fields
            .iter()
            .map(|f| MemberDescriptor::new(*f, name, FieldType::plain("java.lang.String")))
            .collect();
        descriptor
    }

    #[test]
    fn test_all_members_lists_nearest_ancestor_first() {
        let provider = MapProvider::new(vec![
            class("m.Root", None, &["id"]),
            class("m.Middle", Some("m.Root"), &["middleName"]),
            class("m.Leaf", Some("m.Middle"), &["leafName"]),
        ]);

        let names: Vec<&str> = provider
            .all_members(&TypeName::new("m.Leaf"))
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["middleName", "id", "leafName"]);
    }

    #[test]
    fn test_ancestors_stop_on_cycle() {
        let provider = MapProvider::new(vec![
            class("m.A", Some("m.B"), &["a"]),
            class("m.B", Some("m.A"), &["b"]),
        ]);

        let ancestors = provider.ancestors(&TypeName::new("m.A"));
        assert_eq!(ancestors, vec![&TypeName::new("m.B")]);
    }

    #[test]
    fn test_undescribed_type_defaults() {
        let provider = MapProvider::new(Vec::new());
        let ty = TypeName::new("java.lang.String");
        assert!(!provider.is_abstract(&ty));
        assert!(!provider.is_enum(&ty));
        assert_eq!(provider.nesting(&ty), Nesting::TopLevel);
        assert!(provider.declared_members(&ty).is_empty());
        assert!(provider.all_members(&ty).is_empty());
    }
}
