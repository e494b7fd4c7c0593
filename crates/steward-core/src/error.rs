use thiserror::Error;

/// Core error types for steward operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("instance {namespace}/{name} carries no uid; cannot own derived resources")]
    MissingOwnerUid { namespace: String, name: String },
}

impl CoreError {
    /// Create a new MissingOwnerUid error
    pub fn missing_owner_uid(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::MissingOwnerUid {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
