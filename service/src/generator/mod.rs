//! Mapping generation
//!
//! [`MappingGenerator`] walks a candidate set, asks its [`RenderStrategy`]
//! what each type and member is, and issues the matching calls on a
//! [`MappingRenderer`]. It makes no classification decisions of its own.

pub mod diagnostics;

pub use diagnostics::{Diagnostic, DiagnosticKind, GenerationReport};

use crate::renderer::{AttributeMapping, ClassElement, MappingRenderer, XmlMappingRenderer};
use crate::strategy::{
    CollectionKind, DefaultRenderStrategy, InheritanceKind, RenderKind, RenderStrategy,
};
use ormgen_core::config::{MappingConfig, MappingDefaults};
use ormgen_core::error::{MappingError, Result};
use ormgen_core::naming::{join_table_name, schema_name};
use ormgen_core::traits::TypeMetadataProvider;
use ormgen_core::types::{CandidateSet, MemberDescriptor, TypeName};
use tracing::{debug, info};

/// Drives a renderer from the decisions of a render strategy
pub struct MappingGenerator<'a, P: ?Sized, R, S = DefaultRenderStrategy<'a, P>> {
    provider: &'a P,
    renderer: R,
    strategy: S,
    defaults: MappingDefaults,
}

impl<'a, P, R> MappingGenerator<'a, P, R>
where
    P: TypeMetadataProvider + ?Sized,
    R: MappingRenderer,
{
    /// Create a generator using the default classification rules
    pub fn new(provider: &'a P, renderer: R) -> Self {
        Self::with_strategy(provider, renderer, DefaultRenderStrategy::new(provider))
    }
}

impl<'a, P, R, S> MappingGenerator<'a, P, R, S>
where
    P: TypeMetadataProvider + ?Sized,
    R: MappingRenderer,
    S: RenderStrategy,
{
    /// Create a generator using a custom strategy
    pub fn with_strategy(provider: &'a P, renderer: R, strategy: S) -> Self {
        Self {
            provider,
            renderer,
            strategy,
            defaults: MappingDefaults::default(),
        }
    }

    /// Use `defaults` for generated values and column names
    #[must_use]
    pub fn with_defaults(mut self, defaults: MappingDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Give up the generator, keeping the accumulated renderer
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Generate mappings for every type of `candidates`, in set order
    ///
    /// Shape problems are reported in the returned report and never abort
    /// the pass.
    ///
    /// # Errors
    ///
    /// Fails when the strategy contradicts itself or the renderer rejects a
    /// call; both indicate a programming error rather than bad input.
    pub fn generate(&mut self, candidates: &CandidateSet) -> Result<GenerationReport> {
        debug!(candidates = candidates.len(), "Generating mappings");
        let mut report = GenerationReport::default();

        for ty in candidates {
            if !self.strategy.needs_mapping(ty) {
                info!(type_name = %ty, "Ignoring type that needs no mapping");
                report.skipped.push(ty.clone());
                continue;
            }

            let kind = self.strategy.render_kind(ty).ok_or_else(|| {
                MappingError::classifier_mismatch(
                    ty.as_str(),
                    "type needs mapping but has no rendering kind",
                )
            })?;
            debug!(type_name = %ty, %kind, "Creating mapping");

            self.renderer.set_rendering_kind(ty, kind);
            if kind == RenderKind::Entity {
                self.render_entity_elements(ty, candidates)?;
            }
            self.render_attributes(ty, candidates, &mut report)?;

            report.mapped.push((ty.clone(), kind));
        }

        debug!(
            mapped = report.mapped.len(),
            skipped = report.skipped.len(),
            diagnostics = report.diagnostics.len(),
            "Finished generating mappings"
        );
        Ok(report)
    }

    fn render_entity_elements(&mut self, ty: &TypeName, candidates: &CandidateSet) -> Result<()> {
        let table = schema_name(ty.simple_name());
        let inheritance = self.strategy.inheritance_kind(ty, candidates);
        debug!(type_name = %ty, ?inheritance, "Resolved inheritance");

        let elements = match inheritance {
            InheritanceKind::DiscriminatedSubclass => vec![ClassElement::DiscriminatorValue(table)],
            InheritanceKind::NoHierarchy => vec![ClassElement::Table { name: table }],
            InheritanceKind::SingleTableBase => vec![
                ClassElement::Table {
                    name: table.clone(),
                },
                ClassElement::Inheritance {
                    strategy: self.defaults.inheritance_strategy.clone(),
                },
                ClassElement::DiscriminatorValue(table),
                ClassElement::DiscriminatorColumn {
                    name: self.defaults.discriminator_column.clone(),
                },
            ],
        };

        for element in &elements {
            self.renderer.add_class_element(ty, element)?;
        }
        Ok(())
    }

    fn render_attributes(
        &mut self,
        ty: &TypeName,
        candidates: &CandidateSet,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let provider = self.provider;
        let identifier = self.strategy.identifier_field(ty).cloned();

        for member in provider.declared_members(ty) {
            if identifier.as_ref() == Some(member) {
                self.render_identifier(ty, member, report)?;
            } else if member.field_type.nested_arguments {
                report.warn(Diagnostic::member(
                    DiagnosticKind::UnsupportedNestedGeneric,
                    ty,
                    &member.name,
                    "nested type arguments are not supported; manual mapping required",
                ));
            } else if provider.is_collection(&member.field_type.raw) {
                self.render_collection(ty, member, candidates, report)?;
            } else if provider.is_map(&member.field_type.raw) {
                report.warn(Diagnostic::member(
                    DiagnosticKind::UnsupportedMap,
                    ty,
                    &member.name,
                    "map-typed members are not supported; manual mapping required",
                ));
            } else if provider.is_array(&member.field_type.raw) {
                report.warn(Diagnostic::member(
                    DiagnosticKind::UnsupportedArray,
                    ty,
                    &member.name,
                    "array-typed members are not supported; manual mapping required",
                ));
            } else if self.strategy.needs_to_one_mapping(member) {
                self.render_reference(ty, member, candidates, report)?;
            }
        }

        let all_members = provider.all_members(ty);
        for property in provider.derived_properties(ty) {
            if !all_members.iter().any(|m| m.name == property) {
                self.renderer.add_attribute(
                    ty,
                    &AttributeMapping::Transient {
                        name: property.to_string(),
                    },
                )?;
            }
        }
        Ok(())
    }

    fn render_identifier(
        &mut self,
        ty: &TypeName,
        member: &MemberDescriptor,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let id_type = &member.field_type.raw;
        let mapping = if self.provider.is_simple(id_type) {
            AttributeMapping::Id {
                name: member.name.clone(),
                generation_strategy: Some(self.defaults.id_generation_strategy.clone()),
            }
        } else {
            if self.strategy.render_kind(id_type) != Some(RenderKind::Embeddable) {
                report.warn(Diagnostic::member(
                    DiagnosticKind::NonEmbeddableIdentifier,
                    ty,
                    &member.name,
                    format!(
                        "identifier type '{id_type}' is neither simple nor embeddable; \
                         mapped as embedded-id, manual mapping required"
                    ),
                ));
            }
            AttributeMapping::EmbeddedId {
                name: member.name.clone(),
            }
        };
        self.renderer.add_attribute(ty, &mapping)
    }

    fn render_collection(
        &mut self,
        ty: &TypeName,
        member: &MemberDescriptor,
        candidates: &CandidateSet,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let Some(kind) = self.strategy.collection_kind(member) else {
            report.warn(Diagnostic::member(
                DiagnosticKind::UnparameterizedCollection,
                ty,
                &member.name,
                "collection has no element type and cannot be mapped; rendered as transient",
            ));
            return self.renderer.add_attribute(
                ty,
                &AttributeMapping::Transient {
                    name: member.name.clone(),
                },
            );
        };

        let element = member.field_type.element_type().ok_or_else(|| {
            MappingError::classifier_mismatch(
                ty.as_str(),
                format!("collection '{}' was classified without an element type", member.name),
            )
        })?;
        let owner_table = schema_name(ty.simple_name());
        let suffix = &self.defaults.join_column_suffix;

        let mapping = match kind {
            CollectionKind::Simple => AttributeMapping::ElementCollection {
                name: member.name.clone(),
                column: schema_name(&member.name),
                collection_table: format!("{owner_table}_{}", schema_name(&member.name)),
            },
            CollectionKind::ManyToMany => {
                self.check_element_is_entity(ty, member, element, candidates, report);
                AttributeMapping::ManyToMany {
                    name: member.name.clone(),
                    join_table: join_table_name(ty.simple_name(), element.simple_name()),
                    join_column: format!("{owner_table}{suffix}"),
                    inverse_join_column: format!("{}{suffix}", schema_name(element.simple_name())),
                }
            }
            CollectionKind::OneToMany => {
                self.check_element_is_entity(ty, member, element, candidates, report);
                let owners: Vec<String> = self
                    .strategy
                    .back_references(member)
                    .iter()
                    .map(|m| m.name.clone())
                    .collect();
                let Some(mapped_by) = owners.first().cloned() else {
                    return Err(MappingError::classifier_mismatch(
                        ty.as_str(),
                        format!("one-to-many '{}' has no owning member", member.name),
                    ));
                };
                if owners.len() > 1 {
                    report.warn(Diagnostic::member(
                        DiagnosticKind::AmbiguousBackReference,
                        ty,
                        &member.name,
                        format!(
                            "'{element}' has several members referencing '{ty}' ({}); using '{mapped_by}'",
                            owners.join(", ")
                        ),
                    ));
                }
                AttributeMapping::OneToMany {
                    name: member.name.clone(),
                    mapped_by,
                }
            }
        };
        self.renderer.add_attribute(ty, &mapping)
    }

    fn render_reference(
        &mut self,
        ty: &TypeName,
        member: &MemberDescriptor,
        candidates: &CandidateSet,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let target = &member.field_type.raw;
        let mapping = if self.strategy.render_kind(target) == Some(RenderKind::Embeddable) {
            AttributeMapping::Embedded {
                name: member.name.clone(),
            }
        } else {
            if !self.will_be_entity(target, candidates) {
                report.warn(Diagnostic::member(
                    DiagnosticKind::UnmappedReference,
                    ty,
                    &member.name,
                    format!("referenced type '{target}' is not mapped; manual mapping required"),
                ));
            }
            AttributeMapping::ManyToOne {
                name: member.name.clone(),
                fetch: self.defaults.fetch_type.clone(),
                join_column: format!(
                    "{}{}",
                    schema_name(&member.name),
                    self.defaults.join_column_suffix
                ),
            }
        };
        self.renderer.add_attribute(ty, &mapping)
    }

    fn check_element_is_entity(
        &self,
        ty: &TypeName,
        member: &MemberDescriptor,
        element: &TypeName,
        candidates: &CandidateSet,
        report: &mut GenerationReport,
    ) {
        if !self.will_be_entity(element, candidates) {
            report.warn(Diagnostic::member(
                DiagnosticKind::UnmappedCollectionElement,
                ty,
                &member.name,
                format!("element type '{element}' is not mapped; manual mapping required"),
            ));
        }
    }

    fn will_be_entity(&self, ty: &TypeName, candidates: &CandidateSet) -> bool {
        candidates.contains(ty) && self.strategy.render_kind(ty) == Some(RenderKind::Entity)
    }
}

/// Generate the mapping document for `candidates` with the given settings
///
/// # Errors
///
/// Fails if `config` is invalid or generation hits a contract violation.
pub fn generate_mappings<P>(
    provider: &P,
    candidates: &CandidateSet,
    config: &MappingConfig,
) -> Result<(XmlMappingRenderer, GenerationReport)>
where
    P: TypeMetadataProvider + ?Sized,
{
    config.validate()?;
    let renderer = XmlMappingRenderer::from_config(&config.output);
    let mut generator =
        MappingGenerator::new(provider, renderer).with_defaults(config.defaults.clone());
    let report = generator.generate(candidates)?;
    Ok((generator.into_renderer(), report))
}
