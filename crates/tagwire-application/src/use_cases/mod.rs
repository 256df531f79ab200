//! Wiring engine use cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`attributes`] | Default-or-fail attribute access |
//! | [`options`] | Consumer-tag option resolution |
//! | [`collector`] | Tagged component collection, ordering and indexing |
//! | [`wirer`] | Consumer wiring directives |
//! | [`pass`] | Orchestration over every consumer |

pub mod attributes;
pub mod collector;
pub mod options;
pub mod pass;
pub mod wirer;

pub use attributes::AttributeAccessor;
pub use collector::DependencyCollector;
pub use options::resolve_options;
pub use pass::{ConsumerPlan, PassReport, TaggedConsumerPass, WiringPlan};
pub use wirer::ConsumerWirer;
