//! Wiring target ports

use crate::error::Result;
use crate::value_objects::{ComponentId, WiringDirective, WiringValue};

/// Mutable description of a consumer component
pub trait WiringTarget {
    /// Record a call to `method` with `arguments`
    fn add_method_call(&mut self, method: &str, arguments: Vec<WiringValue>);

    /// Append a positional constructor argument
    fn add_argument(&mut self, value: WiringValue);

    /// Apply a planned directive
    fn apply(&mut self, directive: WiringDirective) {
        match directive {
            WiringDirective::MethodCall { method, arguments } => {
                self.add_method_call(&method, arguments);
            }
            WiringDirective::Argument { value } => self.add_argument(value),
        }
    }
}

/// Access to the wiring target of each registered component
pub trait WiringTargets {
    /// Concrete wiring target type
    type Target: WiringTarget;

    /// Wiring target of the component `id`
    fn wiring_target(&mut self, id: &ComponentId) -> Result<&mut Self::Target>;
}
