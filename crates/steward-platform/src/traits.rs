//! The store trait every platform backend must implement.

use async_trait::async_trait;

use crate::error::PlatformError;
use crate::kind::ResourceKind;
use crate::resource::DerivedResource;

/// Typed CRUD access to the platform's resource store.
///
/// Implementations must be thread-safe (`Send + Sync`). All calls are
/// async and cancel-safe; timeouts and retries are the caller's concern.
///
/// # Example
///
/// ```ignore
/// use steward_platform::{PlatformStore, PlatformError, ResourceKind};
///
/// async fn fetch_endpoint(
///     store: &dyn PlatformStore,
///     namespace: &str,
///     name: &str,
/// ) -> Result<DerivedResource, PlatformError> {
///     store
///         .get(ResourceKind::NetworkEndpoint, namespace, name)
///         .await?
///         .ok_or_else(|| PlatformError::not_found(ResourceKind::NetworkEndpoint, namespace, name))
/// }
/// ```
#[async_trait]
pub trait PlatformStore: Send + Sync {
    /// Reads a resource by kind, namespace and name.
    ///
    /// Returns `None` if the resource does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues, not for missing
    /// resources.
    async fn get(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> Result<Option<DerivedResource>, PlatformError>;

    /// Creates a new resource in the store.
    ///
    /// The store assigns system-managed metadata (uid, resourceVersion,
    /// creation timestamp) and returns the stored copy.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::AlreadyExists` if a resource with the same
    /// kind, namespace and name exists.
    async fn create(&self, resource: DerivedResource) -> Result<DerivedResource, PlatformError>;

    /// Updates an existing resource.
    ///
    /// When the submitted resource carries a `resourceVersion`, the update
    /// only succeeds if it matches the live version; a stale version is
    /// rejected with `PlatformError::Conflict`.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::NotFound` if the resource does not exist.
    /// Returns `PlatformError::Conflict` on a stale write.
    async fn update(&self, resource: DerivedResource) -> Result<DerivedResource, PlatformError>;

    /// Deletes a resource by kind, namespace and name.
    ///
    /// Part of the consumed CRUD surface; the convergence engine never calls
    /// this (derived resources are removed by the platform's cascading
    /// deletion when their owner goes away).
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::NotFound` if the resource does not exist.
    async fn delete(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> Result<(), PlatformError>;
}
