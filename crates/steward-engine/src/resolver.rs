use std::fmt;

use steward_platform::{DynPlatformStore, ResourceKind};
use tracing::{debug, instrument};

use crate::error::EngineError;

/// Access protocol of a resolved endpoint, derived from whether transport
/// encryption is terminated at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The externally reachable address of an instance's endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub host: String,
    pub protocol: Protocol,
}

impl ResolvedEndpoint {
    /// Externally visible URL, `<protocol>://<host>`.
    #[must_use]
    pub fn external_url(&self) -> String {
        format!("{}://{}", self.protocol, self.host)
    }
}

/// Read-only lookup of an instance's network endpoint.
#[derive(Clone)]
pub struct EndpointResolver {
    store: DynPlatformStore,
}

impl EndpointResolver {
    pub fn new(store: DynPlatformStore) -> Self {
        Self { store }
    }

    /// Looks up the endpoint for `namespace`/`name` and derives its access
    /// protocol: TLS termination configured means `https`, otherwise `http`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::PrerequisiteMissing` when the endpoint does not
    /// exist - fatal to the caller, since the workload cannot be assembled
    /// without it. Read failures propagate as `EngineError::StoreRead`.
    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ResolvedEndpoint, EngineError> {
        let live = self
            .store
            .get(ResourceKind::NetworkEndpoint, namespace, name)
            .await
            .map_err(|e| EngineError::store_read(ResourceKind::NetworkEndpoint, namespace, name, e))?;

        let Some(resource) = live else {
            return Err(EngineError::prerequisite_missing(namespace, name));
        };
        let endpoint = resource
            .into_endpoint()
            .map_err(|e| EngineError::store_read(ResourceKind::NetworkEndpoint, namespace, name, e))?;

        let protocol = if endpoint.spec.tls.is_some() {
            Protocol::Https
        } else {
            Protocol::Http
        };
        let host = endpoint.spec.host.unwrap_or_default();
        debug!(%protocol, %host, "resolved endpoint");

        Ok(ResolvedEndpoint { host, protocol })
    }
}
