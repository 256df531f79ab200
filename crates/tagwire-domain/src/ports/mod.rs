//! Domain Port Interfaces
//!
//! Contracts between the wiring engine and its two collaborators: the
//! component registry it reads from and the wiring targets it writes to.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ComponentRegistry`] | Tag lookup, declared classes, subtype checks |
//! | [`WiringTarget`] | Mutable consumer description |
//! | [`WiringTargets`] | Access to each component's wiring target |

/// Component registry port
pub mod registry;
/// Wiring target ports
pub mod wiring;

pub use registry::{ComponentRegistry, TaggedComponents};
pub use wiring::{WiringTarget, WiringTargets};
