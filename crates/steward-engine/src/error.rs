use steward_core::CoreError;
use steward_platform::{PlatformError, ResourceKind};
use thiserror::Error;

/// Errors surfaced by a convergence pass.
///
/// Nothing here is retried locally; every failure carries the resource kind,
/// namespace, name and operation so the outer control loop can diagnose and
/// re-trigger.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The network endpoint prerequisite does not exist. Fatal to the
    /// caller: it signals a missing prerequisite, not a transient condition.
    #[error("network endpoint {namespace}/{name} not found")]
    PrerequisiteMissing { namespace: String, name: String },

    /// Attaching the owning instance failed; a configuration-level error.
    #[error("failed to attach owner to {kind} {namespace}/{name}")]
    OwnershipSetup {
        kind: ResourceKind,
        namespace: String,
        name: String,
        #[source]
        source: CoreError,
    },

    #[error("failed to read {kind} {namespace}/{name}")]
    StoreRead {
        kind: ResourceKind,
        namespace: String,
        name: String,
        #[source]
        source: PlatformError,
    },

    #[error("failed to create {kind} {namespace}/{name}")]
    CreateFailed {
        kind: ResourceKind,
        namespace: String,
        name: String,
        #[source]
        source: PlatformError,
    },

    #[error("failed to update {kind} {namespace}/{name}")]
    UpdateFailed {
        kind: ResourceKind,
        namespace: String,
        name: String,
        #[source]
        source: PlatformError,
    },
}

impl EngineError {
    /// Creates a new `PrerequisiteMissing` error.
    #[must_use]
    pub fn prerequisite_missing(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::PrerequisiteMissing {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Creates a new `OwnershipSetup` error.
    #[must_use]
    pub fn ownership_setup(
        kind: ResourceKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
        source: CoreError,
    ) -> Self {
        Self::OwnershipSetup {
            kind,
            namespace: namespace.into(),
            name: name.into(),
            source,
        }
    }

    /// Creates a new `StoreRead` error.
    #[must_use]
    pub fn store_read(
        kind: ResourceKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
        source: PlatformError,
    ) -> Self {
        Self::StoreRead {
            kind,
            namespace: namespace.into(),
            name: name.into(),
            source,
        }
    }

    /// Creates a new `CreateFailed` error.
    #[must_use]
    pub fn create_failed(
        kind: ResourceKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
        source: PlatformError,
    ) -> Self {
        Self::CreateFailed {
            kind,
            namespace: namespace.into(),
            name: name.into(),
            source,
        }
    }

    /// Creates a new `UpdateFailed` error.
    #[must_use]
    pub fn update_failed(
        kind: ResourceKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
        source: PlatformError,
    ) -> Self {
        Self::UpdateFailed {
            kind,
            namespace: namespace.into(),
            name: name.into(),
            source,
        }
    }

    /// Returns `true` if this is a missing-prerequisite error.
    #[must_use]
    pub fn is_prerequisite_missing(&self) -> bool {
        matches!(self, Self::PrerequisiteMissing { .. })
    }

    /// Returns `true` if this is an ownership-setup error.
    #[must_use]
    pub fn is_ownership_setup(&self) -> bool {
        matches!(self, Self::OwnershipSetup { .. })
    }
}
