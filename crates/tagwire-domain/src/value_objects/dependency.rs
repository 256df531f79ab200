//! Dependency handles and collections
//!
//! The dependency collector turns the components declaring a tag into a
//! [`DependencyCollection`] of [`DependencyHandle`]s. The collection shape
//! depends on the consumer's indexing options.

use super::component::ComponentId;
use super::wiring::WiringValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object: Dependency Handle
///
/// Either a lazy reference to a component, resolved when the consumer is
/// instantiated, or the bare id when the consumer only needs to know which
/// component matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyHandle {
    /// Lazy pointer to the component instance
    Reference(ComponentId),
    /// Bare component id
    Identity(ComponentId),
}

impl DependencyHandle {
    /// Build a handle in the requested mode
    pub fn new(id: ComponentId, reference: bool) -> Self {
        if reference {
            Self::Reference(id)
        } else {
            Self::Identity(id)
        }
    }

    /// Id of the component behind the handle
    pub fn component_id(&self) -> &ComponentId {
        match self {
            Self::Reference(id) | Self::Identity(id) => id,
        }
    }

    /// Whether this is a lazy reference
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

impl fmt::Display for DependencyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(id) => write!(f, "@{id}"),
            Self::Identity(id) => write!(f, "{id}"),
        }
    }
}

/// Name of an entry in a dependency collection
///
/// Sequences name their entries by position, indexed collections by key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum EntryName {
    /// Zero-based position in a sequence
    Position(usize),
    /// Index key
    Key(String),
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(p) => write!(f, "{p}"),
            Self::Key(k) => f.write_str(k),
        }
    }
}

/// Value Object: Dependency Collection
///
/// Ordered result of collecting the components declaring a tag.
///
/// | Variant | Produced when |
/// |---------|---------------|
/// | `Sequence` | no `index-by` |
/// | `Indexed` | indexing with `multiple = false` |
/// | `Grouped` | indexing with `multiple = true` |
///
/// Index maps keep the position of the first insertion of a key; a later
/// overwrite only replaces the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DependencyCollection {
    /// Handles in collection order
    Sequence(Vec<DependencyHandle>),
    /// One handle per index value
    Indexed(IndexMap<String, DependencyHandle>),
    /// Every handle per index value
    Grouped(IndexMap<String, Vec<DependencyHandle>>),
}

impl DependencyCollection {
    /// Number of entries (index values for indexed shapes)
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(v) => v.len(),
            Self::Indexed(m) => m.len(),
            Self::Grouped(m) => m.len(),
        }
    }

    /// Whether the collection has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries as `(name, value)` pairs in collection order
    pub fn entries(&self) -> Vec<(EntryName, WiringValue)> {
        match self {
            Self::Sequence(v) => v
                .iter()
                .enumerate()
                .map(|(i, h)| (EntryName::Position(i), WiringValue::Handle(h.clone())))
                .collect(),
            Self::Indexed(m) => m
                .iter()
                .map(|(k, h)| (EntryName::Key(k.clone()), WiringValue::Handle(h.clone())))
                .collect(),
            Self::Grouped(m) => m
                .iter()
                .map(|(k, hs)| (EntryName::Key(k.clone()), WiringValue::Handles(hs.clone())))
                .collect(),
        }
    }

    /// Every handle, flattened in collection order
    pub fn handles(&self) -> Vec<&DependencyHandle> {
        match self {
            Self::Sequence(v) => v.iter().collect(),
            Self::Indexed(m) => m.values().collect(),
            Self::Grouped(m) => m.values().flatten().collect(),
        }
    }
}
