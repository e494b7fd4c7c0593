//! In-memory platform store backend for the steward convergence engine.
//!
//! This crate provides an in-memory implementation of the `PlatformStore`
//! trait from `steward-platform`, using papaya lock-free HashMap for
//! concurrent access. It assigns the system-managed metadata a real platform
//! would (uid, resourceVersion, creation timestamp) and rejects stale writes,
//! so engine tests exercise the same contract they would see in production.

mod store;

// Re-export the PlatformStore trait for convenience
pub use steward_platform::{DynPlatformStore, PlatformError, PlatformStore};

pub use store::{InMemoryPlatform, StoreKey};

/// Creates a new in-memory platform store instance.
pub fn create_platform_store() -> DynPlatformStore {
    std::sync::Arc::new(InMemoryPlatform::new())
}
