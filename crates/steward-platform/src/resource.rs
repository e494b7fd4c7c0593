use crate::error::PlatformError;
use crate::kind::ResourceKind;
use serde::{Deserialize, Serialize};
use steward_core::{NetworkEndpoint, ObjectMeta, WorkloadDefinition};

/// Envelope over the derived-resource kinds the store accepts and returns.
///
/// Serialized with a `kind` discriminator so a stored object is
/// self-describing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DerivedResource {
    WorkloadDefinition(WorkloadDefinition),
    NetworkEndpoint(NetworkEndpoint),
}

impl DerivedResource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::WorkloadDefinition(_) => ResourceKind::WorkloadDefinition,
            Self::NetworkEndpoint(_) => ResourceKind::NetworkEndpoint,
        }
    }

    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            Self::WorkloadDefinition(w) => &w.metadata,
            Self::NetworkEndpoint(e) => &e.metadata,
        }
    }

    pub fn metadata_mut(&mut self) -> &mut ObjectMeta {
        match self {
            Self::WorkloadDefinition(w) => &mut w.metadata,
            Self::NetworkEndpoint(e) => &mut e.metadata,
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata().name
    }

    pub fn namespace(&self) -> &str {
        &self.metadata().namespace
    }

    /// Checked downcast to a workload definition.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::KindMismatch` when the envelope holds another
    /// kind.
    pub fn into_workload(self) -> Result<WorkloadDefinition, PlatformError> {
        match self {
            Self::WorkloadDefinition(w) => Ok(w),
            other => Err(PlatformError::kind_mismatch(
                ResourceKind::WorkloadDefinition,
                other.kind(),
            )),
        }
    }

    /// Checked downcast to a network endpoint.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::KindMismatch` when the envelope holds another
    /// kind.
    pub fn into_endpoint(self) -> Result<NetworkEndpoint, PlatformError> {
        match self {
            Self::NetworkEndpoint(e) => Ok(e),
            other => Err(PlatformError::kind_mismatch(
                ResourceKind::NetworkEndpoint,
                other.kind(),
            )),
        }
    }
}

impl From<WorkloadDefinition> for DerivedResource {
    fn from(workload: WorkloadDefinition) -> Self {
        Self::WorkloadDefinition(workload)
    }
}

impl From<NetworkEndpoint> for DerivedResource {
    fn from(endpoint: NetworkEndpoint) -> Self {
        Self::NetworkEndpoint(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_core::{EndpointPort, EndpointSpec, TargetReference};

    fn endpoint() -> NetworkEndpoint {
        NetworkEndpoint {
            metadata: ObjectMeta::new("ci", "team-a"),
            spec: EndpointSpec {
                host: None,
                tls: None,
                to: TargetReference {
                    kind: "Service".to_string(),
                    name: "ci".to_string(),
                },
                port: EndpointPort { target_port: 8080 },
            },
        }
    }

    #[test]
    fn test_kind_and_identity_accessors() {
        let resource = DerivedResource::from(endpoint());
        assert_eq!(resource.kind(), ResourceKind::NetworkEndpoint);
        assert_eq!(resource.name(), "ci");
        assert_eq!(resource.namespace(), "team-a");
    }

    #[test]
    fn test_checked_downcast() {
        let resource = DerivedResource::from(endpoint());
        assert!(resource.clone().into_endpoint().is_ok());

        let err = resource.into_workload().unwrap_err();
        assert!(matches!(err, PlatformError::KindMismatch { .. }));
    }

    #[test]
    fn test_envelope_serialization_carries_kind() {
        let json = serde_json::to_value(DerivedResource::from(endpoint())).unwrap();
        assert_eq!(json["kind"], "NetworkEndpoint");
        assert_eq!(json["metadata"]["name"], "ci");
    }
}
