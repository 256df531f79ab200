//! Domain layer constants
//!
//! Tag and attribute names understood by the wiring engine.

// ============================================================================
// CONSUMER TAG
// ============================================================================

/// Default name of the tag marking consumer components
pub const DEFAULT_CONSUMER_TAG: &str = "tag.consumer";

// ============================================================================
// CONSUMER TAG ATTRIBUTES
// ============================================================================

/// Name of the tag whose components are collected (mandatory)
pub const ATTR_TAG: &str = "tag";

/// Method receiving the dependencies
pub const ATTR_METHOD: &str = "method";

/// Inject the whole collection at once
pub const ATTR_BULK: &str = "bulk";

/// Target-tag attribute used as index key
pub const ATTR_KEY: &str = "key";

/// Indexing mode (`key` or `class`)
pub const ATTR_INDEX_BY: &str = "index-by";

/// Inject references instead of bare component ids
pub const ATTR_REFERENCE: &str = "reference";

/// Type every collected component must satisfy
pub const ATTR_INSTANCEOF: &str = "instanceof";

/// Keep every component per index value instead of the last one
pub const ATTR_MULTIPLE: &str = "multiple";

// ============================================================================
// TARGET TAG ATTRIBUTES
// ============================================================================

/// Numeric priority of a tagged component
pub const ATTR_ORDER: &str = "order";

// ============================================================================
// INDEX MODES
// ============================================================================

/// `index-by` value selecting a tag attribute as index
pub const INDEX_BY_KEY: &str = "key";

/// `index-by` value selecting the declared class as index
pub const INDEX_BY_CLASS: &str = "class";
