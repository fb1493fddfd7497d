//! Per-type accumulator state

use super::elements::{AttributeKind, KNOWN_KINDS};
use crate::strategy::RenderKind;
use ormgen_core::types::TypeName;
use quick_xml::escape::escape;

/// Everything accumulated for one type
#[derive(Debug, Clone)]
pub struct MappingRecord {
    type_name: TypeName,
    kind: Option<RenderKind>,
    class_content: String,
    attributes: [String; KNOWN_KINDS],
    catch_all: String,
}

impl MappingRecord {
    pub(crate) fn new(type_name: TypeName) -> Self {
        Self {
            type_name,
            kind: None,
            class_content: String::new(),
            attributes: Default::default(),
            catch_all: String::new(),
        }
    }

    /// Type this record describes
    #[must_use]
    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    /// Rendering kind, if set
    #[must_use]
    pub fn kind(&self) -> Option<RenderKind> {
        self.kind
    }

    /// Accumulated class-level content
    #[must_use]
    pub fn class_content(&self) -> &str {
        &self.class_content
    }

    /// Accumulated content of one attribute bucket
    #[must_use]
    pub fn attribute_content(&self, kind: &AttributeKind) -> &str {
        match kind.priority() {
            Some(index) => &self.attributes[index],
            None => &self.catch_all,
        }
    }

    pub(crate) fn set_kind(&mut self, kind: RenderKind) {
        self.kind = Some(kind);
    }

    pub(crate) fn push_class_content(&mut self, fragment: &str) {
        self.class_content.push_str(fragment);
    }

    pub(crate) fn push_attribute(&mut self, kind: &AttributeKind, fragment: &str) {
        match kind.priority() {
            Some(index) => self.attributes[index].push_str(fragment),
            None => self.catch_all.push_str(fragment),
        }
    }

    /// Attribute buckets concatenated in emission order
    fn attributes_xml(&self) -> String {
        let mut out = String::new();
        for content in &self.attributes {
            out.push_str(content);
        }
        out.push_str(&self.catch_all);
        out
    }

    /// Compact XML of this record, `None` when its kind was never set
    pub(crate) fn to_xml(&self) -> Option<String> {
        let tag = self.kind?.tag();
        let class = escape(self.type_name.as_str());
        let attributes = self.attributes_xml();

        if self.class_content.is_empty() && attributes.is_empty() {
            return Some(format!(r#"<{tag} class="{class}"/>"#));
        }

        let mut out = format!(r#"<{tag} class="{class}">"#);
        out.push_str(&self.class_content);
        if !attributes.is_empty() {
            out.push_str("<attributes>");
            out.push_str(&attributes);
            out.push_str("</attributes>");
        }
        out.push_str(&format!("</{tag}>"));
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_emit_in_fixed_order() {
        let mut record = MappingRecord::new(TypeName::new("m.Order"));
        record.set_kind(RenderKind::Entity);
        record.push_attribute(&AttributeKind::from_key("version"), "<version name=\"v\"/>");
        record.push_attribute(&AttributeKind::Transient, "<transient name=\"t\"/>");
        record.push_attribute(&AttributeKind::Id, "<id name=\"id\"/>");
        record.push_class_content("<table name=\"ORDER\"/>");

        assert_eq!(
            record.to_xml().as_deref(),
            Some(concat!(
                r#"<entity class="m.Order"><table name="ORDER"/>"#,
                r#"<attributes><id name="id"/><transient name="t"/><version name="v"/></attributes>"#,
                "</entity>"
            ))
        );
    }

    #[test]
    fn test_empty_record_is_self_closing() {
        let mut record = MappingRecord::new(TypeName::new("m.Address"));
        assert_eq!(record.to_xml(), None);

        record.set_kind(RenderKind::Embeddable);
        assert_eq!(
            record.to_xml().as_deref(),
            Some(r#"<embeddable class="m.Address"/>"#)
        );
    }
}
