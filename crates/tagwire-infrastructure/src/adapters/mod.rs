//! Port adapters
//!
//! | Adapter | Port |
//! |---------|------|
//! | [`InMemoryRegistry`] | `ComponentRegistry` + `WiringTargets` |
//! | [`ComponentDefinition`] | `WiringTarget` |

pub mod definition;
pub mod memory_registry;

pub use definition::{ComponentDefinition, MethodCall};
pub use memory_registry::{ComponentBuilder, InMemoryRegistry};
