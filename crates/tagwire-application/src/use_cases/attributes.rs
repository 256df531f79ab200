//! Attribute Accessor
//!
//! Reads attributes off a tag with default-or-fail semantics. This is the
//! single place where mandatory attributes are enforced, so every missing
//! attribute error names the component, the attribute and the tag.

use tagwire_domain::error::{Error, Result};
use tagwire_domain::value_objects::{ComponentId, Tag, TagValue};

/// Typed attribute access for one tag occurrence of one component
#[derive(Debug, Clone, Copy)]
pub struct AttributeAccessor<'a> {
    component: &'a ComponentId,
    tag: &'a Tag,
}

impl<'a> AttributeAccessor<'a> {
    /// Create an accessor for `tag` as declared on `component`
    pub fn new(component: &'a ComponentId, tag: &'a Tag) -> Self {
        Self { component, tag }
    }

    /// Read `name`, falling back to `default` when one is supplied
    ///
    /// An explicit default, even `false`, is returned as-is. Without a
    /// default a missing attribute is an [`Error::AttributeMissing`].
    pub fn get(&self, name: &str, default: Option<TagValue>) -> Result<TagValue> {
        match (self.tag.get(name), default) {
            (Some(value), _) => Ok(value.clone()),
            (None, Some(default)) => Ok(default),
            (None, None) => Err(self.missing(name)),
        }
    }

    /// Read `name` if present
    pub fn optional(&self, name: &str) -> Option<&'a TagValue> {
        self.tag.get(name)
    }

    /// Read a mandatory attribute rendered as a string
    pub fn string(&self, name: &str) -> Result<String> {
        self.get(name, None).map(|value| value.to_string())
    }

    /// Read an optional attribute rendered as a string
    pub fn optional_string(&self, name: &str) -> Option<String> {
        self.optional(name).map(ToString::to_string)
    }

    /// Read a boolean attribute, `default` when absent
    pub fn boolean(&self, name: &str, default: bool) -> Result<bool> {
        let value = self.get(name, Some(TagValue::Boolean(default)))?;
        self.flag(name, &value)
    }

    /// Read a boolean attribute if present
    ///
    /// Distinguishes "absent" from "explicitly false", which the wirer needs
    /// for `bulk`.
    pub fn optional_boolean(&self, name: &str) -> Result<Option<bool>> {
        self.optional(name)
            .map(|value| self.flag(name, value))
            .transpose()
    }

    fn flag(&self, name: &str, value: &TagValue) -> Result<bool> {
        value.as_bool().ok_or_else(|| {
            Error::invalid_configuration(
                self.component.as_str(),
                format!(
                    "attribute \"{name}\" of tag \"{}\" must be a boolean, got \"{value}\"",
                    self.tag.name()
                ),
            )
        })
    }

    fn missing(&self, name: &str) -> Error {
        Error::attribute_missing(self.component.as_str(), name, self.tag.name())
    }
}
