use std::fmt;

use steward_core::{
    Instance, NetworkEndpoint, ObjectMeta, WorkloadDefinition, set_controller_reference,
};
use steward_platform::{DerivedResource, DynPlatformStore, PlatformError, ResourceKind};
use tracing::{debug, info, instrument};

use crate::build::{desired_endpoint, desired_workload};
use crate::error::EngineError;
use crate::resolver::EndpointResolver;

/// What a reconcile pass did to one derived resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Created,
    Updated,
    Unchanged,
}

impl fmt::Display for Applied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Outcome of a full convergence pass over both derived resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvergeReport {
    pub endpoint: Applied,
    pub workload: Applied,
}

/// Per-kind plumbing for the reconcile algorithm: which builder-controlled
/// fields participate in the equality check and how they are folded into
/// the live object.
trait Reconcilable: Sized {
    const KIND: ResourceKind;

    fn metadata(&self) -> &ObjectMeta;
    fn metadata_mut(&mut self) -> &mut ObjectMeta;
    fn from_resource(resource: DerivedResource) -> Result<Self, PlatformError>;
    fn into_resource(self) -> DerivedResource;

    /// Structural equality over builder-controlled fields only. Fields the
    /// builder never sets (resource versions, timestamps, platform-assigned
    /// values) must not participate, or every pass would see a false diff.
    fn converged(&self, live: &Self) -> bool;

    /// Fold the desired builder-controlled fields into the live object,
    /// leaving its system-managed state untouched.
    fn apply_to(&self, live: &mut Self);
}

impl Reconcilable for WorkloadDefinition {
    const KIND: ResourceKind = ResourceKind::WorkloadDefinition;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }

    fn from_resource(resource: DerivedResource) -> Result<Self, PlatformError> {
        resource.into_workload()
    }

    fn into_resource(self) -> DerivedResource {
        self.into()
    }

    fn converged(&self, live: &Self) -> bool {
        // Every workload spec field is builder-controlled.
        self.spec == live.spec
    }

    fn apply_to(&self, live: &mut Self) {
        live.spec = self.spec.clone();
    }
}

impl Reconcilable for NetworkEndpoint {
    const KIND: ResourceKind = ResourceKind::NetworkEndpoint;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }

    fn from_resource(resource: DerivedResource) -> Result<Self, PlatformError> {
        resource.into_endpoint()
    }

    fn into_resource(self) -> DerivedResource {
        self.into()
    }

    fn converged(&self, live: &Self) -> bool {
        // `host` is platform-assigned after creation: excluded from the
        // diff, or every pass against a routed endpoint would report drift.
        self.spec.tls == live.spec.tls
            && self.spec.to == live.spec.to
            && self.spec.port == live.spec.port
    }

    fn apply_to(&self, live: &mut Self) {
        live.spec.tls = self.spec.tls.clone();
        live.spec.to = self.spec.to.clone();
        live.spec.port = self.spec.port.clone();
    }
}

/// Drives an instance's derived resources to convergence against the
/// platform store.
///
/// Holds only the narrow store interface. Safe to call repeatedly in any
/// state: absent resources are created, drifted resources updated in place,
/// converged resources left untouched without a write.
pub struct ConvergenceEngine {
    store: DynPlatformStore,
    resolver: EndpointResolver,
}

impl ConvergenceEngine {
    pub fn new(store: DynPlatformStore) -> Self {
        let resolver = EndpointResolver::new(store.clone());
        Self { store, resolver }
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    /// One full convergence pass: endpoint first, then the workload, whose
    /// desired spec embeds the endpoint's externally visible URL.
    #[instrument(skip(self, instance), fields(namespace = %instance.namespace, name = %instance.name))]
    pub async fn converge(&self, instance: &Instance) -> Result<ConvergeReport, EngineError> {
        let endpoint = self.reconcile_endpoint(instance).await?;
        let workload = self.reconcile_workload(instance).await?;
        Ok(ConvergeReport { endpoint, workload })
    }

    /// Reconciles the instance's network endpoint.
    #[instrument(skip(self, instance), fields(namespace = %instance.namespace, name = %instance.name))]
    pub async fn reconcile_endpoint(&self, instance: &Instance) -> Result<Applied, EngineError> {
        self.reconcile(instance, desired_endpoint(instance)).await
    }

    /// Reconciles the instance's workload definition.
    ///
    /// Resolves the endpoint first; a missing endpoint fails the call with
    /// `PrerequisiteMissing` before any workload store interaction.
    #[instrument(skip(self, instance), fields(namespace = %instance.namespace, name = %instance.name))]
    pub async fn reconcile_workload(&self, instance: &Instance) -> Result<Applied, EngineError> {
        let resolved = self
            .resolver
            .resolve(&instance.namespace, &instance.name)
            .await?;
        self.reconcile(instance, desired_workload(instance, &resolved))
            .await
    }

    /// The get-or-create-or-update convergence step for one derived
    /// resource.
    async fn reconcile<R: Reconcilable>(
        &self,
        instance: &Instance,
        mut desired: R,
    ) -> Result<Applied, EngineError> {
        let namespace = desired.metadata().namespace.clone();
        let name = desired.metadata().name.clone();

        set_controller_reference(instance, desired.metadata_mut())
            .map_err(|e| EngineError::ownership_setup(R::KIND, &namespace, &name, e))?;

        let live = self
            .store
            .get(R::KIND, &namespace, &name)
            .await
            .map_err(|e| EngineError::store_read(R::KIND, &namespace, &name, e))?;

        match live {
            None => {
                debug!(kind = %R::KIND, "derived resource absent, creating");
                self.store
                    .create(desired.into_resource())
                    .await
                    .map_err(|e| EngineError::create_failed(R::KIND, &namespace, &name, e))?;
                info!(kind = %R::KIND, "derived resource created");
                Ok(Applied::Created)
            }
            Some(resource) => {
                let mut live = R::from_resource(resource)
                    .map_err(|e| EngineError::store_read(R::KIND, &namespace, &name, e))?;

                if desired.converged(&live) {
                    debug!(kind = %R::KIND, "derived resource already converged");
                    return Ok(Applied::Unchanged);
                }

                desired.apply_to(&mut live);
                self.store
                    .update(live.into_resource())
                    .await
                    .map_err(|e| EngineError::update_failed(R::KIND, &namespace, &name, e))?;
                info!(kind = %R::KIND, "derived resource updated");
                Ok(Applied::Updated)
            }
        }
    }
}
