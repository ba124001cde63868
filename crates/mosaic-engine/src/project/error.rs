//! Project and configuration errors

use thiserror::Error;

/// Errors raised by configuration lookups and deserialization.
///
/// None of these are fatal: lookups that fail leave the configuration
/// untouched, and callers are free to drop the error.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The configuration's type is not known to the registry
    #[error("Unknown composite type: {0}")]
    UnresolvedType(String),

    /// The type does not declare the requested child object
    #[error("Tried to get the configuration of a child-object: {child} that doesn't exist in the composite type: {type_name}")]
    UnknownChild {
        /// Composite type that was queried
        type_name: String,
        /// Requested child name
        child: String,
    },

    /// The serialized tree does not have the expected shape
    #[error("Malformed configuration tree: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors raised while loading or editing a project
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The project file could not be parsed
    #[error("Failed to parse project: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Two composite types share a fully-qualified name
    #[error("Duplicate composite type: {0}")]
    DuplicateType(String),

    /// The project file could not be read
    #[error("Failed to read project: {0}")]
    Io(#[from] std::io::Error),

    /// A child object's default configuration could not be built
    #[error("Invalid default configuration for child `{child}` of {type_name}: {source}")]
    InvalidChild {
        /// Composite type declaring the child
        type_name: String,
        /// Child name
        child: String,
        /// Underlying failure
        #[source]
        source: ConfigurationError,
    },
}
