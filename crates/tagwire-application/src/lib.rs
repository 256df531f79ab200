//! Application Layer - tagwire
//!
//! The wiring engine: discovers the components declaring a tag, orders and
//! indexes them, and injects the result into consumer components.
//!
//! ## Architecture
//!
//! ```text
//! TaggedConsumerPass
//!   └─ per consumer tag ─► resolve_options ─► DependencyCollector ─► ConsumerWirer
//! ```
//!
//! The layer depends only on `tagwire-domain` ports, so any registry and
//! wiring target implementation can drive it.

pub mod use_cases;

pub use use_cases::*;
