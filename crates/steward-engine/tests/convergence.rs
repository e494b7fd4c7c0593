//! End-to-end convergence scenarios against the in-memory platform store.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use steward_core::{Instance, InsecureEdgePolicy, TlsTermination};
use steward_engine::build::desired_endpoint;
use steward_engine::{Applied, ConvergenceEngine};
use steward_platform::{DerivedResource, PlatformError, PlatformStore, ResourceKind};
use steward_platform_memory::InMemoryPlatform;

/// Store decorator counting writes, so tests can assert that a converged
/// pass issues none.
struct RecordingStore {
    inner: InMemoryPlatform,
    creates: AtomicUsize,
    updates: AtomicUsize,
}

impl RecordingStore {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryPlatform::new(),
            creates: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
        })
    }

    fn writes(&self) -> usize {
        self.creates.load(Ordering::SeqCst) + self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlatformStore for RecordingStore {
    async fn get(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> Result<Option<DerivedResource>, PlatformError> {
        self.inner.get(kind, namespace, name).await
    }

    async fn create(&self, resource: DerivedResource) -> Result<DerivedResource, PlatformError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(resource).await
    }

    async fn update(&self, resource: DerivedResource) -> Result<DerivedResource, PlatformError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(resource).await
    }

    async fn delete(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> Result<(), PlatformError> {
        self.inner.delete(kind, namespace, name).await
    }
}

fn instance() -> Instance {
    Instance::new("ci", "team-a", "jenkins", "2.3").with_uid("u-ci")
}

/// Stage an endpoint the way the platform router would leave it: spec as
/// built, host assigned.
fn seed_endpoint(store: &RecordingStore, instance: &Instance, host: &str, tls: bool) {
    let mut endpoint = desired_endpoint(instance);
    endpoint.spec.host = Some(host.to_string());
    if !tls {
        endpoint.spec.tls = None;
    }
    store.inner.seed(DerivedResource::from(endpoint));
}

async fn fetch(
    store: &RecordingStore,
    kind: ResourceKind,
) -> DerivedResource {
    store
        .inner
        .get(kind, "team-a", "ci")
        .await
        .unwrap()
        .expect("resource should exist")
}

#[tokio::test]
async fn first_pass_creates_then_unchanged() {
    let store = RecordingStore::new();
    let engine = ConvergenceEngine::new(store.clone());
    let instance = instance();

    let first = engine.converge(&instance).await.unwrap();
    assert_eq!(first.endpoint, Applied::Created);
    assert_eq!(first.workload, Applied::Created);
    assert_eq!(store.writes(), 2);

    let endpoint_before = fetch(&store, ResourceKind::NetworkEndpoint).await;
    let workload_before = fetch(&store, ResourceKind::WorkloadDefinition).await;

    let second = engine.converge(&instance).await.unwrap();
    assert_eq!(second.endpoint, Applied::Unchanged);
    assert_eq!(second.workload, Applied::Unchanged);

    // No writes were issued and the live state did not move.
    assert_eq!(store.writes(), 2);
    assert_eq!(fetch(&store, ResourceKind::NetworkEndpoint).await, endpoint_before);
    assert_eq!(
        fetch(&store, ResourceKind::WorkloadDefinition).await,
        workload_before
    );
}

#[tokio::test]
async fn workload_embeds_secure_endpoint_url() {
    let store = RecordingStore::new();
    let engine = ConvergenceEngine::new(store.clone());
    let instance = instance();

    seed_endpoint(&store, &instance, "ci.example.com", true);

    let resolved = engine.resolver().resolve("team-a", "ci").await.unwrap();
    assert_eq!(resolved.external_url(), "https://ci.example.com");

    assert_eq!(
        engine.reconcile_workload(&instance).await.unwrap(),
        Applied::Created
    );
    let workload = fetch(&store, ResourceKind::WorkloadDefinition)
        .await
        .into_workload()
        .unwrap();
    let url = workload.spec.template.spec.containers[0]
        .env
        .iter()
        .find(|e| e.name == "JENKINS_UI_URL")
        .and_then(|e| e.value.clone());
    assert_eq!(url.as_deref(), Some("https://ci.example.com"));

    assert_eq!(
        engine.reconcile_workload(&instance).await.unwrap(),
        Applied::Unchanged
    );
}

#[tokio::test]
async fn workload_embeds_plain_endpoint_url() {
    let store = RecordingStore::new();
    let engine = ConvergenceEngine::new(store.clone());
    let instance = instance();

    seed_endpoint(&store, &instance, "ci.example.com", false);

    let resolved = engine.resolver().resolve("team-a", "ci").await.unwrap();
    assert_eq!(resolved.external_url(), "http://ci.example.com");

    engine.reconcile_workload(&instance).await.unwrap();
    let workload = fetch(&store, ResourceKind::WorkloadDefinition)
        .await
        .into_workload()
        .unwrap();
    let url = workload.spec.template.spec.containers[0]
        .env
        .iter()
        .find(|e| e.name == "JENKINS_UI_URL")
        .and_then(|e| e.value.clone());
    assert_eq!(url.as_deref(), Some("http://ci.example.com"));
}

#[tokio::test]
async fn drifted_workload_is_folded_back() {
    let store = RecordingStore::new();
    let engine = ConvergenceEngine::new(store.clone());
    let instance = instance();

    engine.converge(&instance).await.unwrap();

    // Someone scales the workload by hand.
    let mut drifted = fetch(&store, ResourceKind::WorkloadDefinition)
        .await
        .into_workload()
        .unwrap();
    drifted.spec.replicas = 3;
    store
        .inner
        .update(DerivedResource::from(drifted))
        .await
        .unwrap();

    let report = engine.converge(&instance).await.unwrap();
    assert_eq!(report.endpoint, Applied::Unchanged);
    assert_eq!(report.workload, Applied::Updated);

    let live = fetch(&store, ResourceKind::WorkloadDefinition)
        .await
        .into_workload()
        .unwrap();
    assert_eq!(live.spec.replicas, 1);
}

#[tokio::test]
async fn endpoint_update_preserves_assigned_host() {
    let store = RecordingStore::new();
    let engine = ConvergenceEngine::new(store.clone());
    let instance = instance();

    // Endpoint drifted to plain transport, but the router already assigned
    // a host.
    seed_endpoint(&store, &instance, "ci.example.com", false);

    assert_eq!(
        engine.reconcile_endpoint(&instance).await.unwrap(),
        Applied::Updated
    );

    let live = fetch(&store, ResourceKind::NetworkEndpoint)
        .await
        .into_endpoint()
        .unwrap();
    assert_eq!(live.spec.host.as_deref(), Some("ci.example.com"));
    let tls = live.spec.tls.unwrap();
    assert_eq!(tls.termination, TlsTermination::Edge);
    assert_eq!(tls.insecure_edge_termination_policy, InsecureEdgePolicy::Redirect);

    // Converged now; a further pass leaves it alone.
    assert_eq!(
        engine.reconcile_endpoint(&instance).await.unwrap(),
        Applied::Unchanged
    );
}

#[tokio::test]
async fn workload_without_endpoint_fails_before_any_write() {
    let store = RecordingStore::new();
    let engine = ConvergenceEngine::new(store.clone());
    let instance = instance();

    let err = engine.reconcile_workload(&instance).await.unwrap_err();
    assert!(err.is_prerequisite_missing());
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn created_resources_are_owned_by_the_instance() {
    let store = RecordingStore::new();
    let engine = ConvergenceEngine::new(store.clone());
    let instance = instance();

    engine.converge(&instance).await.unwrap();

    for kind in [ResourceKind::NetworkEndpoint, ResourceKind::WorkloadDefinition] {
        let resource = fetch(&store, kind).await;
        let owner = resource
            .metadata()
            .controller_reference()
            .expect("controller reference should be attached");
        assert_eq!(owner.name, "ci");
        assert_eq!(owner.uid, "u-ci");
        assert_eq!(owner.kind, "JenkinsInstance");
        assert!(owner.block_owner_deletion);
    }
}

#[tokio::test]
async fn instance_without_uid_cannot_own_resources() {
    let store = RecordingStore::new();
    let engine = ConvergenceEngine::new(store.clone());
    let instance = Instance::new("ci", "team-a", "jenkins", "2.3");

    let err = engine.converge(&instance).await.unwrap_err();
    assert!(err.is_ownership_setup());
    assert_eq!(store.writes(), 0);
}
