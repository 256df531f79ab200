//! Domain Value Objects
//!
//! Immutable values exchanged between the registry, the engine and the
//! wiring targets.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ComponentId`] | Opaque component identifier |
//! | [`Tag`] / [`TagValue`] | Named attribute bag attached to a component |
//! | [`Order`] | Exact numeric `order` attribute value |
//! | [`DependencyHandle`] | Reference to or identity of a collected component |
//! | [`DependencyCollection`] | Ordered, optionally indexed set of handles |
//! | [`ResolvedOptions`] | Normalized consumer-tag declaration |
//! | [`WiringDirective`] | Mutation applied to a consumer |

/// Component identity
pub mod component;
/// Dependency handles and collections
pub mod dependency;
/// Resolved consumer options
pub mod options;
/// Tag metadata
pub mod tag;
/// Wiring values and directives
pub mod wiring;

pub use component::ComponentId;
pub use dependency::{DependencyCollection, DependencyHandle, EntryName};
pub use options::{IndexMode, ResolvedOptions};
pub use tag::{Order, Tag, TagValue};
pub use wiring::{WiringDirective, WiringValue};
