//! The registry error taxonomy.

use thiserror::Error;

use crate::value::AttrKind;

/// Errors from declaring, validating, or reading component kinds.
///
/// None of these are fatal. Configuration errors are caller mistakes,
/// so nothing in the registry retries them.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The kind name was never registered in this family.
    #[error("unknown {family}: {kind}")]
    NotFound {
        /// Family searched, e.g. `"executor"`.
        family: String,
        /// The kind name that was not found.
        kind: String,
    },

    /// The declared schema was violated: duplicate or unknown attribute
    /// name, or a default whose kind disagrees with its option.
    #[error("schema error in {kind}: {message}")]
    Schema {
        /// The kind whose schema was violated.
        kind: String,
        /// What went wrong.
        message: String,
    },

    /// A value's kind disagrees with the declared or requested kind.
    #[error("attribute {attr} expected {expected}, got {actual}")]
    Type {
        /// Attribute name.
        attr: String,
        /// Declared (or requested) kind.
        expected: AttrKind,
        /// Kind actually supplied or stored.
        actual: AttrKind,
    },

    /// Untyped configuration could not be turned into attribute values.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The process-wide registry for this family was already installed.
    #[error("{0} registry already initialized")]
    AlreadyInitialized(String),

    /// The process-wide registry for this family has not been installed yet.
    #[error("{0} registry not initialized")]
    NotInitialized(String),
}

impl RegistryError {
    /// Shorthand for a [`RegistryError::Schema`].
    pub fn schema(kind: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Schema {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`RegistryError::NotFound`].
    pub fn not_found(family: impl Into<String>, kind: impl Into<String>) -> Self {
        RegistryError::NotFound {
            family: family.into(),
            kind: kind.into(),
        }
    }
}
