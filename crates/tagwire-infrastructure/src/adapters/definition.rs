//! Recording wiring target
//!
//! [`ComponentDefinition`] is the in-memory description of a component that
//! the wiring pass mutates: a declared class, positional constructor
//! arguments and post-construction method calls.

use crate::error_ext::ErrorContext;
use serde::Serialize;
use tagwire_domain::error::Result;
use tagwire_domain::ports::WiringTarget;
use tagwire_domain::value_objects::WiringValue;

/// A recorded post-construction method call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodCall {
    /// Method name
    pub method: String,
    /// Call arguments
    pub arguments: Vec<WiringValue>,
}

/// Mutable description of a registered component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDefinition {
    class: String,
    arguments: Vec<WiringValue>,
    method_calls: Vec<MethodCall>,
}

impl ComponentDefinition {
    /// Create an empty definition for `class`
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            arguments: Vec::new(),
            method_calls: Vec::new(),
        }
    }

    /// Declared class
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Positional constructor arguments in insertion order
    pub fn arguments(&self) -> &[WiringValue] {
        &self.arguments
    }

    /// Method calls in insertion order
    pub fn method_calls(&self) -> &[MethodCall] {
        &self.method_calls
    }

    /// Whether the wiring pass left the definition untouched
    pub fn is_unwired(&self) -> bool {
        self.arguments.is_empty() && self.method_calls.is_empty()
    }

    /// Render the definition as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize component definition")
    }
}

impl WiringTarget for ComponentDefinition {
    fn add_method_call(&mut self, method: &str, arguments: Vec<WiringValue>) {
        self.method_calls.push(MethodCall {
            method: method.to_string(),
            arguments,
        });
    }

    fn add_argument(&mut self, value: WiringValue) {
        self.arguments.push(value);
    }
}
