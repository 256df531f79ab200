//! Engine configuration
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | `EngineConfig` and `LoggingConfig` |
//! | [`loader`] | Figment-based loading from TOML and environment |

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, LoggingConfig};
