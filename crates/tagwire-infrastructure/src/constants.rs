//! Infrastructure layer constants
//!
//! Domain-specific constants (tag and attribute names) are defined in
//! `tagwire_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tagwire.toml";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TAGWIRE";

/// Separator between nested keys in environment variables
/// (e.g. `TAGWIRE_LOGGING__LEVEL`)
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "TAGWIRE_LOG";
