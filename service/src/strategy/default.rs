//! Default classification rules

use super::{CollectionKind, InheritanceKind, RenderKind, RenderStrategy};
use ormgen_core::traits::TypeMetadataProvider;
use ormgen_core::types::{CandidateSet, MemberDescriptor, Nesting, TypeName};

/// Name of the conventional identifier member
const ID: &str = "id";

/// Shape-based classification over a borrowed metadata provider
///
/// - abstract types become mapped superclasses
/// - types with an identifier member become entities
/// - every other mapped type becomes an embeddable
pub struct DefaultRenderStrategy<'a, P: ?Sized> {
    provider: &'a P,
}

impl<'a, P: TypeMetadataProvider + ?Sized> DefaultRenderStrategy<'a, P> {
    /// Create a strategy reading metadata from `provider`
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// The underlying metadata provider
    pub fn provider(&self) -> &'a P {
        self.provider
    }

    fn is_nested(&self, ty: &TypeName) -> bool {
        self.provider.nesting(ty) != Nesting::TopLevel
    }
}

impl<P: TypeMetadataProvider + ?Sized> RenderStrategy for DefaultRenderStrategy<'_, P> {
    fn needs_mapping(&self, ty: &TypeName) -> bool {
        !self.provider.is_enum(ty) && !self.provider.is_interface(ty) && !self.is_nested(ty)
    }

    fn render_kind(&self, ty: &TypeName) -> Option<RenderKind> {
        if !self.needs_mapping(ty) {
            return None;
        }

        let kind = if self.provider.is_abstract(ty) {
            RenderKind::MappedSuperclass
        } else if self.identifier_field(ty).is_some() {
            RenderKind::Entity
        } else {
            RenderKind::Embeddable
        };
        Some(kind)
    }

    fn identifier_field(&self, ty: &TypeName) -> Option<&MemberDescriptor> {
        let mut own_id_candidate = None;

        for member in self.provider.all_members(ty) {
            let name = member.name.to_lowercase();
            if name == ID {
                return Some(member);
            }
            if own_id_candidate.is_none()
                && name == format!("{}{ID}", member.declaring_type.simple_name().to_lowercase())
            {
                own_id_candidate = Some(member);
            }
        }

        own_id_candidate
    }

    fn needs_to_one_mapping(&self, member: &MemberDescriptor) -> bool {
        let ty = &member.field_type.raw;
        let excluded = self.provider.is_simple(ty)
            || self.provider.is_standard_library(ty)
            || self.provider.is_array(ty)
            || self.provider.is_enum(ty)
            || self.is_nested(ty)
            || member.is_transient()
            || member.is_static();
        !excluded
    }

    fn inheritance_kind(&self, ty: &TypeName, candidates: &CandidateSet) -> InheritanceKind {
        if self.render_kind(ty) != Some(RenderKind::Entity) {
            return InheritanceKind::NoHierarchy;
        }

        let parent_is_entity = self
            .provider
            .superclass_of(ty)
            .is_some_and(|parent| self.render_kind(parent) == Some(RenderKind::Entity));
        if parent_is_entity {
            return InheritanceKind::DiscriminatedSubclass;
        }

        let has_subclass = candidates
            .iter()
            .any(|other| self.provider.superclass_of(other) == Some(ty));
        if has_subclass {
            InheritanceKind::SingleTableBase
        } else {
            InheritanceKind::NoHierarchy
        }
    }

    fn collection_kind(&self, member: &MemberDescriptor) -> Option<CollectionKind> {
        let element = member.field_type.element_type()?;

        let kind = if !self.back_references(member).is_empty() {
            CollectionKind::OneToMany
        } else if self.provider.is_simple(element) || self.provider.is_enum(element) {
            CollectionKind::Simple
        } else {
            CollectionKind::ManyToMany
        };
        Some(kind)
    }

    fn back_references(&self, member: &MemberDescriptor) -> Vec<&MemberDescriptor> {
        let Some(element) = member.field_type.element_type() else {
            return Vec::new();
        };
        let owner = &member.declaring_type;

        self.provider
            .all_members(element)
            .into_iter()
            .filter(|candidate| candidate.field_type.is_exactly(owner))
            .collect()
    }
}
