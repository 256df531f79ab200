//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the tagwire engine
///
/// Every wiring error is a build-time configuration defect: the pass stops at
/// the first one and nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// A mandatory tag attribute is absent
    #[error(
        "Component \"{component}\": attribute \"{attribute}\" is missing on tag \"{tag}\""
    )]
    AttributeMissing {
        /// Component carrying the tag
        component: String,
        /// Name of the missing attribute
        attribute: String,
        /// Name of the tag the attribute was read from
        tag: String,
    },

    /// A consumer tag combines attributes in an unsupported way
    #[error("Component \"{component}\": invalid configuration: {message}")]
    InvalidConfiguration {
        /// Component carrying the consumer tag
        component: String,
        /// Description of the problem
        message: String,
    },

    /// A tagged component does not satisfy the consumer's `instanceof` constraint
    #[error(
        "Component \"{component}\" of class \"{class}\" is not an instance of \"{required}\""
    )]
    TypeMismatch {
        /// Offending component
        component: String,
        /// Declared class of the component
        class: String,
        /// Type required by the consumer
        required: String,
    },

    /// Registry lookup on an unknown component id
    #[error("Component not found: {component}")]
    ComponentNotFound {
        /// The id that was looked up
        component: String,
    },

    /// Engine configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal failure outside the wiring rules (e.g. serialization)
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Wiring error creation methods
impl Error {
    /// Create an attribute missing error
    pub fn attribute_missing<C, A, T>(component: C, attribute: A, tag: T) -> Self
    where
        C: Into<String>,
        A: Into<String>,
        T: Into<String>,
    {
        Self::AttributeMissing {
            component: component.into(),
            attribute: attribute.into(),
            tag: tag.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration<C: Into<String>, S: Into<String>>(
        component: C,
        message: S,
    ) -> Self {
        Self::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<C, K, R>(component: C, class: K, required: R) -> Self
    where
        C: Into<String>,
        K: Into<String>,
        R: Into<String>,
    {
        Self::TypeMismatch {
            component: component.into(),
            class: class.into(),
            required: required.into(),
        }
    }

    /// Create a component not found error
    pub fn component_not_found<S: Into<String>>(component: S) -> Self {
        Self::ComponentNotFound {
            component: component.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Internal error creation methods
impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error with source
    pub fn internal_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
