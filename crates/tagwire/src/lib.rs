//! # tagwire
//!
//! A tag-based dependency aggregation and wiring engine.
//!
//! Components in a registry carry metadata tags. Consumer components declare,
//! through a dedicated consumer tag, which tag they want collected. The engine
//! finds every component declaring that tag, optionally validates its type,
//! orders and indexes the matches, and injects the result into the consumer
//! as method calls or constructor arguments.
//!
//! ## Example
//!
//! ```rust
//! use tagwire::adapters::InMemoryRegistry;
//! use tagwire::application::TaggedConsumerPass;
//! use tagwire::domain::{ComponentId, Tag};
//!
//! let mut registry = InMemoryRegistry::new();
//! registry
//!     .register("app.chain", "App\\Chain")
//!     .tag(Tag::new("tag.consumer").with("tag", "app.handler").with("method", "add"));
//! registry
//!     .register("app.first", "App\\First")
//!     .tag(Tag::new("app.handler").with("order", 1));
//!
//! let report = TaggedConsumerPass::default().process(&mut registry).unwrap();
//! assert_eq!(report.directives, 1);
//!
//! let chain = registry.definition(&ComponentId::new("app.chain")).unwrap();
//! assert_eq!(chain.method_calls()[0].method, "add");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, ports and errors
//! - `application` - the wiring pass and its steps
//! - `infrastructure` - in-memory adapters, configuration and logging

/// Domain layer - value objects, ports and errors
pub mod domain {
    pub use tagwire_domain::*;
}

/// Application layer - the wiring engine
pub mod application {
    pub use tagwire_application::*;
}

/// Infrastructure layer - adapters, configuration and logging
pub mod infrastructure {
    pub use tagwire_infrastructure::*;
}

/// In-memory adapters
pub mod adapters {
    pub use tagwire_infrastructure::adapters::*;
}

pub use application::{PassReport, TaggedConsumerPass, WiringPlan};
pub use domain::{Error, Result};
