//! JPA `orm.xml` renderer

use super::elements::AttributeKind;
use super::format::pretty_print;
use super::record::MappingRecord;
use super::MappingRenderer;
use crate::strategy::RenderKind;
use indexmap::IndexMap;
use ormgen_core::config::OutputConfig;
use ormgen_core::error::{MappingError, Result};
use ormgen_core::types::TypeName;
use quick_xml::escape::escape;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

const ORM_NAMESPACE: &str = "http://java.sun.com/xml/ns/persistence/orm";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Accumulates mappings into a single `entity-mappings` document
///
/// Records live in an arena indexed by type name, so encounter order is
/// the order in which types were first referenced.
#[derive(Debug, Clone)]
pub struct XmlMappingRenderer {
    file_id: String,
    output_dir: PathBuf,
    indent: usize,
    schema_version: String,
    access: String,
    index: HashMap<TypeName, usize>,
    records: Vec<MappingRecord>,
}

impl XmlMappingRenderer {
    /// Create a renderer for the document `file_id`, with default output settings
    pub fn new(file_id: impl Into<String>) -> Self {
        let config = OutputConfig {
            file_id: file_id.into(),
            ..OutputConfig::default()
        };
        Self::from_config(&config)
    }

    /// Create a renderer from output settings
    #[must_use]
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            file_id: config.file_id.clone(),
            output_dir: PathBuf::from("."),
            indent: config.indent,
            schema_version: config.schema_version.clone(),
            access: config.access.clone(),
            index: HashMap::new(),
            records: Vec::new(),
        }
    }

    /// Resolve document identifiers against `dir` when materializing
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Identifier of the generated document
    #[must_use]
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// Record of `ty`, if it was ever referenced
    #[must_use]
    pub fn record(&self, ty: &TypeName) -> Option<&MappingRecord> {
        self.index.get(ty).map(|&i| &self.records[i])
    }

    /// All records, in encounter order
    #[must_use]
    pub fn records(&self) -> &[MappingRecord] {
        &self.records
    }

    fn record_mut(&mut self, ty: &TypeName) -> &mut MappingRecord {
        let next = self.records.len();
        let index = *self.index.entry(ty.clone()).or_insert(next);
        if index == next {
            self.records.push(MappingRecord::new(ty.clone()));
        }
        &mut self.records[index]
    }

    fn kinded_record_mut(
        &mut self,
        ty: &TypeName,
        operation: &'static str,
    ) -> Result<&mut MappingRecord> {
        match self.index.get(ty) {
            Some(&index) if self.records[index].kind().is_some() => Ok(&mut self.records[index]),
            _ => Err(MappingError::kind_not_set(ty.as_str(), operation)),
        }
    }

    fn preamble(&self) -> String {
        let version = escape(&self.schema_version);
        let schema_file = format!("orm_{}.xsd", self.schema_version.replace('.', "_"));
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<entity-mappings xmlns="{ns}" xmlns:xsi="{xsi}" "#,
                r#"xsi:schemaLocation="{ns} {schema}" version="{version}">"#,
                "<persistence-unit-metadata><xml-mapping-metadata-complete/>",
                "<persistence-unit-defaults><access>{access}</access></persistence-unit-defaults>",
                "</persistence-unit-metadata>"
            ),
            ns = ORM_NAMESPACE,
            xsi = XSI_NAMESPACE,
            schema = escape(&schema_file),
            version = version,
            access = escape(&self.access),
        )
    }

    /// Compact document text before pretty printing
    fn compact_document(&self) -> String {
        let mut out = self.preamble();
        for kind in RenderKind::ORDERED {
            for record in self.records.iter().filter(|r| r.kind() == Some(kind)) {
                if let Some(xml) = record.to_xml() {
                    out.push_str(&xml);
                }
            }
        }

        let unset = self.records.iter().filter(|r| r.kind().is_none()).count();
        if unset > 0 {
            debug!(records = unset, "Leaving out records without a rendering kind");
        }

        out.push_str("</entity-mappings>");
        out
    }
}

impl MappingRenderer for XmlMappingRenderer {
    fn set_rendering_kind(&mut self, ty: &TypeName, kind: RenderKind) {
        self.record_mut(ty).set_kind(kind);
    }

    fn append_class_content(&mut self, ty: &TypeName, fragment: &str) -> Result<()> {
        self.kinded_record_mut(ty, "append class content")?
            .push_class_content(fragment);
        Ok(())
    }

    fn append_attribute(
        &mut self,
        ty: &TypeName,
        kind: &AttributeKind,
        fragment: &str,
    ) -> Result<()> {
        self.kinded_record_mut(ty, "append attribute")?
            .push_attribute(kind, fragment);
        Ok(())
    }

    fn serialize_all(&self) -> Result<IndexMap<String, String>> {
        let document = pretty_print(&self.compact_document(), self.indent)?;
        let mut files = IndexMap::new();
        files.insert(self.file_id.clone(), document);
        Ok(files)
    }

    fn materialize(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for (file_id, text) in self.serialize_all()? {
            let path = self.output_dir.join(&file_id);
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).map_err(|e| MappingError::io_at(parent, e))?;
            }
            fs::write(&path, text).map_err(|e| MappingError::io_at(&path, e))?;
            info!(path = %path.display(), "Wrote mapping document");
            written.push(path);
        }
        Ok(written)
    }
}
