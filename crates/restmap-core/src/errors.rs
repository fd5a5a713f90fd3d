use thiserror::Error;

/// Result type alias using RestmapError
pub type Result<T> = std::result::Result<T, RestmapError>;

/// Error taxonomy for restmap operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RestmapError {
    // ===== Model Errors =====
    /// A method was constructed with an empty or blank name
    #[error("Method name must not be empty or blank")]
    EmptyMethodName,

    /// Two methods with different names were combined (programmer error:
    /// callers only combine methods already matched by name)
    #[error("Cannot combine method '{left}' with method '{right}': names differ")]
    MethodNameMismatch { left: String, right: String },

    // ===== Query Errors =====
    /// Resource not found in the store
    #[error("Resource not found: {name}")]
    ResourceNotFound { name: String },

    // ===== Snapshot Errors =====
    /// Serialization or deserialization failed
    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    /// A restored snapshot disagrees with its recorded semantic digest
    #[error("Snapshot digest mismatch: expected {expected}, got {actual}")]
    DigestMismatch { expected: String, actual: String },
}

impl From<serde_json::Error> for RestmapError {
    fn from(err: serde_json::Error) -> Self {
        RestmapError::Serialization {
            message: err.to_string(),
        }
    }
}
