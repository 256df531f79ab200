//! # Infrastructure Layer
//!
//! Technical concerns around the wiring engine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | In-memory registry and recording wiring target |
//! | [`bootstrap`] | Configured pass construction |
//! | [`config`] | Figment configuration loading |
//! | [`constants`] | Configuration and logging constants |
//! | [`error_ext`] | Error context extensions |
//! | [`logging`] | Structured logging with tracing |

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use adapters::{ComponentDefinition, InMemoryRegistry};
pub use bootstrap::{create_pass, run_pass};
pub use config::{ConfigLoader, EngineConfig, LoggingConfig};
pub use error_ext::ErrorContext;
