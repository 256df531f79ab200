//! Component identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object: Component Identifier
///
/// Opaque name of a registered component, unique within a registry.
///
/// ## Example
///
/// ```rust
/// use tagwire_domain::value_objects::ComponentId;
///
/// let id = ComponentId::new("app.mailer");
/// assert_eq!(id.as_str(), "app.mailer");
/// assert_eq!(id.to_string(), "app.mailer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Create a component id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ComponentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
