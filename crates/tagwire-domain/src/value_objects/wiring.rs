//! Wiring values and directives

use super::dependency::{DependencyCollection, DependencyHandle, EntryName};
use serde::Serialize;

/// Value injected into a consumer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WiringValue {
    /// A single dependency
    Handle(DependencyHandle),
    /// Every dependency sharing one index value
    Handles(Vec<DependencyHandle>),
    /// The whole collection (bulk injection)
    Collection(DependencyCollection),
    /// Name of the entry passed alongside its value
    Name(EntryName),
}

/// A single mutation of a consumer's wiring target
///
/// Directives are planned from the collected dependencies and applied to the
/// target afterwards, so a failing consumer never ends up half wired.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WiringDirective {
    /// Call `method` with `arguments` after construction
    MethodCall {
        /// Method name
        method: String,
        /// Call arguments
        arguments: Vec<WiringValue>,
    },
    /// Append a positional constructor argument
    Argument {
        /// Argument value
        value: WiringValue,
    },
}

impl WiringDirective {
    /// Create a method call directive
    pub fn method_call(method: impl Into<String>, arguments: Vec<WiringValue>) -> Self {
        Self::MethodCall {
            method: method.into(),
            arguments,
        }
    }

    /// Create a positional argument directive
    pub fn argument(value: WiringValue) -> Self {
        Self::Argument { value }
    }
}
