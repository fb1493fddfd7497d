//! Typed mapping document fragments

use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute bucket a fragment is grouped under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Id,
    EmbeddedId,
    ManyToOne,
    ManyToMany,
    OneToMany,
    ElementCollection,
    Embedded,
    Transient,
    /// Unrecognized key, emitted after every known bucket
    Other(String),
}

/// Number of known attribute buckets
pub const KNOWN_KINDS: usize = 8;

impl AttributeKind {
    /// Emission order of the known buckets
    pub const ORDERED: [Self; KNOWN_KINDS] = [
        Self::Id,
        Self::EmbeddedId,
        Self::ManyToOne,
        Self::ManyToMany,
        Self::OneToMany,
        Self::ElementCollection,
        Self::Embedded,
        Self::Transient,
    ];

    /// Parse a bucket key; unknown keys land in [`AttributeKind::Other`]
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "id" => Self::Id,
            "embedded-id" => Self::EmbeddedId,
            "many-to-one" => Self::ManyToOne,
            "many-to-many" => Self::ManyToMany,
            "one-to-many" => Self::OneToMany,
            "element-collection" => Self::ElementCollection,
            "embedded" => Self::Embedded,
            "transient" => Self::Transient,
            other => Self::Other(other.to_string()),
        }
    }

    /// The bucket key, equal to the element name of known kinds
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Id => "id",
            Self::EmbeddedId => "embedded-id",
            Self::ManyToOne => "many-to-one",
            Self::ManyToMany => "many-to-many",
            Self::OneToMany => "one-to-many",
            Self::ElementCollection => "element-collection",
            Self::Embedded => "embedded",
            Self::Transient => "transient",
            Self::Other(key) => key,
        }
    }

    /// Position in [`Self::ORDERED`], `None` for the catch-all bucket
    #[must_use]
    pub fn priority(&self) -> Option<usize> {
        match self {
            Self::Id => Some(0),
            Self::EmbeddedId => Some(1),
            Self::ManyToOne => Some(2),
            Self::ManyToMany => Some(3),
            Self::OneToMany => Some(4),
            Self::ElementCollection => Some(5),
            Self::Embedded => Some(6),
            Self::Transient => Some(7),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Class-level element of an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassElement {
    Table { name: String },
    Inheritance { strategy: String },
    DiscriminatorValue(String),
    DiscriminatorColumn { name: String },
}

impl ClassElement {
    /// XML fragment of this element
    #[must_use]
    pub fn to_xml(&self) -> String {
        match self {
            Self::Table { name } => format!(r#"<table name="{}"/>"#, escape(name)),
            Self::Inheritance { strategy } => {
                format!(r#"<inheritance strategy="{}"/>"#, escape(strategy))
            }
            Self::DiscriminatorValue(value) => {
                format!("<discriminator-value>{}</discriminator-value>", escape(value))
            }
            Self::DiscriminatorColumn { name } => {
                format!(r#"<discriminator-column name="{}"/>"#, escape(name))
            }
        }
    }
}

/// Mapping of a single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeMapping {
    /// Simple identifier, optionally with a generated value
    Id {
        name: String,
        generation_strategy: Option<String>,
    },
    /// Identifier held by an embeddable value
    EmbeddedId { name: String },
    ManyToOne {
        name: String,
        fetch: String,
        join_column: String,
    },
    ManyToMany {
        name: String,
        join_table: String,
        join_column: String,
        inverse_join_column: String,
    },
    /// Inverse side of a reference named by `mapped_by`
    OneToMany { name: String, mapped_by: String },
    /// Collection of scalar values stored in `collection_table`
    ElementCollection {
        name: String,
        column: String,
        collection_table: String,
    },
    Embedded { name: String },
    /// Attribute excluded from persistence
    Transient { name: String },
}

impl AttributeMapping {
    /// Bucket this mapping belongs to
    #[must_use]
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Id { .. } => AttributeKind::Id,
            Self::EmbeddedId { .. } => AttributeKind::EmbeddedId,
            Self::ManyToOne { .. } => AttributeKind::ManyToOne,
            Self::ManyToMany { .. } => AttributeKind::ManyToMany,
            Self::OneToMany { .. } => AttributeKind::OneToMany,
            Self::ElementCollection { .. } => AttributeKind::ElementCollection,
            Self::Embedded { .. } => AttributeKind::Embedded,
            Self::Transient { .. } => AttributeKind::Transient,
        }
    }

    /// Name of the mapped attribute
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Id { name, .. }
            | Self::EmbeddedId { name }
            | Self::ManyToOne { name, .. }
            | Self::ManyToMany { name, .. }
            | Self::OneToMany { name, .. }
            | Self::ElementCollection { name, .. }
            | Self::Embedded { name }
            | Self::Transient { name } => name,
        }
    }

    /// XML fragment of this mapping
    #[must_use]
    pub fn to_xml(&self) -> String {
        let name = escape(self.name());
        match self {
            Self::Id {
                generation_strategy: Some(strategy),
                ..
            } => format!(
                r#"<id name="{name}"><generated-value strategy="{}"/></id>"#,
                escape(strategy)
            ),
            Self::Id {
                generation_strategy: None,
                ..
            } => format!(r#"<id name="{name}"/>"#),
            Self::EmbeddedId { .. } => format!(r#"<embedded-id name="{name}"/>"#),
            Self::ManyToOne {
                fetch, join_column, ..
            } => format!(
                r#"<many-to-one name="{name}" fetch="{}"><join-column name="{}"/></many-to-one>"#,
                escape(fetch),
                escape(join_column)
            ),
            Self::ManyToMany {
                join_table,
                join_column,
                inverse_join_column,
                ..
            } => format!(
                concat!(
                    r#"<many-to-many name="{}"><join-table name="{}">"#,
                    r#"<join-column name="{}"/><inverse-join-column name="{}"/>"#,
                    "</join-table></many-to-many>"
                ),
                name,
                escape(join_table),
                escape(join_column),
                escape(inverse_join_column)
            ),
            Self::OneToMany { mapped_by, .. } => format!(
                r#"<one-to-many name="{name}" mapped-by="{}"/>"#,
                escape(mapped_by)
            ),
            Self::ElementCollection {
                column,
                collection_table,
                ..
            } => format!(
                concat!(
                    r#"<element-collection name="{}"><column name="{}"/>"#,
                    r#"<collection-table name="{}"/></element-collection>"#
                ),
                name,
                escape(column),
                escape(collection_table)
            ),
            Self::Embedded { .. } => format!(r#"<embedded name="{name}"/>"#),
            Self::Transient { .. } => format!(r#"<transient name="{name}"/>"#),
        }
    }
}
