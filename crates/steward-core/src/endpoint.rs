use crate::meta::ObjectMeta;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEndpoint {
    pub metadata: ObjectMeta,
    pub spec: EndpointSpec,
}

/// Externally reachable ingress for an instance.
///
/// `host` is assigned by the platform router after creation; builders never
/// set it. Absence of `tls` means plain transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsConfig>,
    pub to: TargetReference,
    pub port: EndpointPort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsConfig {
    pub termination: TlsTermination,
    pub insecure_edge_termination_policy: InsecureEdgePolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsTermination {
    Edge,
    Passthrough,
    Reencrypt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsecureEdgePolicy {
    Redirect,
    Allow,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetReference {
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointPort {
    pub target_port: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint_spec(tls: Option<TlsConfig>) -> EndpointSpec {
        EndpointSpec {
            host: None,
            tls,
            to: TargetReference {
                kind: "Service".to_string(),
                name: "ci".to_string(),
            },
            port: EndpointPort { target_port: 8080 },
        }
    }

    #[test]
    fn test_plain_endpoint_omits_tls_and_host() {
        let json = serde_json::to_value(endpoint_spec(None)).unwrap();
        assert!(json.get("tls").is_none());
        assert!(json.get("host").is_none());
        assert_eq!(json["to"]["kind"], "Service");
        assert_eq!(json["port"]["targetPort"], 8080);
    }

    #[test]
    fn test_tls_wire_names() {
        let spec = endpoint_spec(Some(TlsConfig {
            termination: TlsTermination::Edge,
            insecure_edge_termination_policy: InsecureEdgePolicy::Redirect,
        }));
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(json["tls"]["termination"], "edge");
        assert_eq!(json["tls"]["insecureEdgeTerminationPolicy"], "Redirect");
    }

    #[test]
    fn test_endpoint_roundtrip() {
        let spec = endpoint_spec(Some(TlsConfig {
            termination: TlsTermination::Edge,
            insecure_edge_termination_policy: InsecureEdgePolicy::Redirect,
        }));
        let json = serde_json::to_value(&spec).unwrap();
        let back: EndpointSpec = serde_json::from_value(json).unwrap();
        assert_eq!(spec, back);
    }
}
