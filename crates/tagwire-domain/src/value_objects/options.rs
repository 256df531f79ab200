//! Resolved consumer options

use crate::constants::{INDEX_BY_CLASS, INDEX_BY_KEY};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How collected dependencies are indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexMode {
    /// Index by a target-tag attribute
    Key,
    /// Index by the component's declared class
    Class,
}

impl IndexMode {
    /// Parse an `index-by` attribute value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            INDEX_BY_KEY => Some(Self::Key),
            INDEX_BY_CLASS => Some(Self::Class),
            _ => None,
        }
    }

    /// Attribute value naming this mode
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Key => INDEX_BY_KEY,
            Self::Class => INDEX_BY_CLASS,
        }
    }
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value Object: Resolved Options
///
/// Normalized form of one consumer-tag declaration.
///
/// ## Business Rules
///
/// - `index_mode == Some(IndexMode::Key)` implies `key_attribute.is_some()`
/// - `multiple` only matters when `index_mode` is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOptions {
    /// Tag whose components are collected
    pub target_tag: String,
    /// Indexing mode, if any
    pub index_mode: Option<IndexMode>,
    /// Target-tag attribute holding the index key
    pub key_attribute: Option<String>,
    /// Inject references rather than bare ids
    pub use_reference: bool,
    /// Type every collected component must satisfy
    pub required_type: Option<String>,
    /// Keep every component per index value
    pub multiple: bool,
}

impl ResolvedOptions {
    /// Options collecting `target_tag` as a plain sequence of references
    pub fn new(target_tag: impl Into<String>) -> Self {
        Self {
            target_tag: target_tag.into(),
            index_mode: None,
            key_attribute: None,
            use_reference: true,
            required_type: None,
            multiple: false,
        }
    }
}
