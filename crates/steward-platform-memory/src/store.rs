use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use papaya::HashMap as PapayaHashMap;
use time::OffsetDateTime;

use steward_platform::{DerivedResource, PlatformError, PlatformStore, ResourceKind};

pub type StoreKey = String; // Format: "Kind/namespace/name"

pub(crate) fn make_store_key(kind: ResourceKind, namespace: &str, name: &str) -> StoreKey {
    format!("{kind}/{namespace}/{name}")
}

/// In-memory platform store using papaya lock-free HashMap.
///
/// Behaves like the real platform store for the engine's purposes:
/// - assigns uid, resourceVersion and creation timestamp on create
/// - bumps resourceVersion on update while preserving uid and creation time
/// - rejects writes carrying a stale resourceVersion
#[derive(Debug)]
pub struct InMemoryPlatform {
    data: Arc<PapayaHashMap<StoreKey, DerivedResource>>,
    version_counter: AtomicU64,
}

impl InMemoryPlatform {
    pub fn new() -> Self {
        Self {
            data: Arc::new(PapayaHashMap::new()),
            version_counter: AtomicU64::new(1),
        }
    }

    /// Generates the next resource version.
    fn next_version(&self) -> String {
        self.version_counter
            .fetch_add(1, Ordering::SeqCst)
            .to_string()
    }

    /// Inserts a resource as if the platform had created it at some earlier
    /// point, filling any unset system-managed metadata. Used to stage
    /// pre-existing fixtures (e.g. an endpoint whose host the router has
    /// already assigned). Returns the stored copy.
    pub fn seed(&self, mut resource: DerivedResource) -> DerivedResource {
        {
            let meta = resource.metadata_mut();
            if meta.uid.is_none() {
                meta.uid = Some(uuid::Uuid::new_v4().to_string());
            }
            if meta.resource_version.is_none() {
                meta.resource_version = Some(self.next_version());
            }
            if meta.creation_timestamp.is_none() {
                meta.creation_timestamp = Some(OffsetDateTime::now_utc());
            }
        }
        let key = make_store_key(resource.kind(), resource.namespace(), resource.name());
        let guard = self.data.pin();
        guard.insert(key, resource.clone());
        resource
    }

    pub fn len(&self) -> usize {
        let guard = self.data.pin();
        guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryPlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformStore for InMemoryPlatform {
    async fn get(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> Result<Option<DerivedResource>, PlatformError> {
        let key = make_store_key(kind, namespace, name);
        let guard = self.data.pin();
        Ok(guard.get(&key).cloned())
    }

    async fn create(&self, mut resource: DerivedResource) -> Result<DerivedResource, PlatformError> {
        let kind = resource.kind();
        let key = make_store_key(kind, resource.namespace(), resource.name());

        {
            let meta = resource.metadata_mut();
            meta.uid = Some(uuid::Uuid::new_v4().to_string());
            meta.resource_version = Some(self.next_version());
            meta.creation_timestamp = Some(OffsetDateTime::now_utc());
        }

        let guard = self.data.pin();
        if guard.get(&key).is_some() {
            return Err(PlatformError::already_exists(
                kind,
                resource.namespace(),
                resource.name(),
            ));
        }
        guard.insert(key, resource.clone());

        Ok(resource)
    }

    async fn update(&self, mut resource: DerivedResource) -> Result<DerivedResource, PlatformError> {
        let kind = resource.kind();
        let namespace = resource.namespace().to_string();
        let name = resource.name().to_string();
        let key = make_store_key(kind, &namespace, &name);

        let guard = self.data.pin();

        let (live_uid, live_created, current_version) = {
            let live = guard
                .get(&key)
                .ok_or_else(|| PlatformError::not_found(kind, &namespace, &name))?;
            let meta = live.metadata();
            (
                meta.uid.clone(),
                meta.creation_timestamp,
                meta.resource_version.clone().unwrap_or_else(|| "0".to_string()),
            )
        };

        if let Some(submitted) = resource.metadata().resource_version.clone() {
            if submitted != current_version {
                return Err(PlatformError::conflict(
                    kind,
                    &namespace,
                    &name,
                    submitted,
                    current_version,
                ));
            }
        }

        {
            let meta = resource.metadata_mut();
            meta.uid = live_uid;
            meta.creation_timestamp = live_created;
            meta.resource_version = Some(self.next_version());
        }
        guard.insert(key, resource.clone());

        Ok(resource)
    }

    async fn delete(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> Result<(), PlatformError> {
        let key = make_store_key(kind, namespace, name);
        let guard = self.data.pin();
        guard
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| PlatformError::not_found(kind, namespace, name))
    }
}
