//! Error types for platform store operations.

use crate::kind::ResourceKind;
use std::fmt;

/// Errors that can occur while talking to the platform store.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The requested resource was not found.
    #[error("{kind} {namespace}/{name} not found")]
    NotFound {
        kind: ResourceKind,
        namespace: String,
        name: String,
    },

    /// Attempted to create a resource that already exists.
    #[error("{kind} {namespace}/{name} already exists")]
    AlreadyExists {
        kind: ResourceKind,
        namespace: String,
        name: String,
    },

    /// A stale write was rejected by the store's conflict detection.
    #[error("stale write to {kind} {namespace}/{name}: resourceVersion {submitted} is behind {current}")]
    Conflict {
        kind: ResourceKind,
        namespace: String,
        name: String,
        submitted: String,
        current: String,
    },

    /// The store returned a resource of a different kind than requested.
    #[error("expected a {expected}, store returned a {actual}")]
    KindMismatch {
        expected: ResourceKind,
        actual: ResourceKind,
    },

    /// Failed to reach the platform store.
    #[error("connection error: {message}")]
    Connection { message: String },

    /// An internal store error occurred.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl PlatformError {
    /// Creates a new `NotFound` error.
    #[must_use]
    pub fn not_found(
        kind: ResourceKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            kind,
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Creates a new `AlreadyExists` error.
    #[must_use]
    pub fn already_exists(
        kind: ResourceKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::AlreadyExists {
            kind,
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Creates a new `Conflict` error.
    #[must_use]
    pub fn conflict(
        kind: ResourceKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
        submitted: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        Self::Conflict {
            kind,
            namespace: namespace.into(),
            name: name.into(),
            submitted: submitted.into(),
            current: current.into(),
        }
    }

    /// Creates a new `KindMismatch` error.
    #[must_use]
    pub fn kind_mismatch(expected: ResourceKind, actual: ResourceKind) -> Self {
        Self::KindMismatch { expected, actual }
    }

    /// Creates a new `Connection` error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is an already exists error.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Returns `true` if this is a stale-write conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::AlreadyExists { .. } | Self::Conflict { .. } => ErrorCategory::Conflict,
            Self::KindMismatch { .. } => ErrorCategory::Validation,
            Self::Connection { .. } => ErrorCategory::Infrastructure,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Categories of platform errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    NotFound,
    Conflict,
    Validation,
    Infrastructure,
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::Validation => write!(f, "validation"),
            Self::Infrastructure => write!(f, "infrastructure"),
            Self::Internal => write!(f, "internal"),
        }
    }
}
