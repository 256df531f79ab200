//! Component registry port

use crate::error::Result;
use crate::value_objects::{ComponentId, Tag};
use indexmap::IndexMap;

/// Components declaring a tag, with every occurrence of that tag, in
/// registry order
pub type TaggedComponents = IndexMap<ComponentId, Vec<Tag>>;

/// Read-only view of the registered components
///
/// Implementations must iterate in a stable order: the engine's output is
/// only deterministic if `find_by_tag` is.
pub trait ComponentRegistry {
    /// Find every component declaring `tag`, in registry order
    ///
    /// Components declaring the tag several times return one entry per
    /// occurrence. Components without the tag are absent.
    fn find_by_tag(&self, tag: &str) -> TaggedComponents;

    /// Declared class of a component
    fn declared_class(&self, id: &ComponentId) -> Result<String>;

    /// Whether `class` is `required` or one of its subtypes or implementers
    fn is_subtype_of(&self, class: &str, required: &str) -> bool;
}
