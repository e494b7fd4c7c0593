//! # steward-platform
//!
//! Platform store abstraction for the steward convergence engine.
//!
//! This crate defines the traits and types the engine consumes to reach the
//! platform's resource store. It does not contain any implementations - those
//! are provided by separate crates.
//!
//! ## Overview
//!
//! The main trait is [`PlatformStore`], which defines the typed CRUD contract
//! for derived resources keyed by kind + namespace + name:
//! - `get` returns `Ok(None)` when the resource is absent
//! - `create` / `update` return the stored resource with its system-managed
//!   metadata (uid, resourceVersion) filled in
//! - `delete` exists on the surface but is never called by the engine;
//!   removal of derived resources is the platform's cascade-on-owner-delete
//!   mechanism
//!
//! ## Example
//!
//! ```ignore
//! use steward_platform::{PlatformStore, ResourceKind};
//!
//! async fn endpoint_exists(
//!     store: &dyn PlatformStore,
//!     namespace: &str,
//!     name: &str,
//! ) -> Result<bool, PlatformError> {
//!     let live = store
//!         .get(ResourceKind::NetworkEndpoint, namespace, name)
//!         .await?;
//!     Ok(live.is_some())
//! }
//! ```

mod error;
mod kind;
mod resource;
mod traits;

pub use error::{ErrorCategory, PlatformError};
pub use kind::ResourceKind;
pub use resource::DerivedResource;
pub use traits::PlatformStore;

/// Type alias for a platform store result.
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Type alias for a boxed platform store trait object.
pub type DynPlatformStore = std::sync::Arc<dyn PlatformStore>;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use steward_platform::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ErrorCategory, PlatformError};
    pub use crate::kind::ResourceKind;
    pub use crate::resource::DerivedResource;
    pub use crate::traits::PlatformStore;
    pub use crate::{DynPlatformStore, PlatformResult};
}
