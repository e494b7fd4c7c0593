//! Pure desired-state builders.
//!
//! No I/O happens here: the desired spec of each derived resource is a
//! deterministic function of the instance (and, for the workload, the
//! resolved endpoint), so two builds from the same inputs are structurally
//! identical. All naming is string concatenation on the instance name; the
//! store's uniqueness constraint is the backstop against collisions.

use std::collections::BTreeMap;

use steward_core::{
    Container, ContainerPort, DnsPolicy, EndpointPort, EndpointSpec, EnvVar, HttpGetAction,
    InsecureEdgePolicy, Instance, NetworkEndpoint, ObjectMeta, PersistentVolumeClaimSource,
    PodSpec, PodTemplateSpec, PortProtocol, Probe, PullPolicy, ResourceRequirements,
    RestartPolicy, RolloutStrategy, SecurityContext, StrategyType, TargetReference, TlsConfig,
    TlsTermination, TriggerPolicy, UriScheme, Volume, VolumeMount, WorkloadDefinition,
    WorkloadSpec, labels_for,
};

use crate::defaults;
use crate::resolver::ResolvedEndpoint;

/// Desired workload definition for an instance.
///
/// Single replica, recreate rollout, an init step that normalizes
/// credential-file permissions, and the main container wired to the
/// resolved endpoint URL, the conventionally named password secret and the
/// instance's data claim.
pub fn desired_workload(instance: &Instance, endpoint: &ResolvedEndpoint) -> WorkloadDefinition {
    let labels = labels_for(&instance.name);
    let data_volume = format!("{}-jenkins-data", instance.name);

    let init_command = vec![
        "sh".to_string(),
        "-c".to_string(),
        "if [ -d /var/lib/jenkins/.ssh/ ]; then cd /var/lib/jenkins/.ssh/; \
         for file in config id_rsa jenkins-slave-id_rsa; \
         do if [ -f $file ]; then chmod 400 $file; fi; done; fi;"
            .to_string(),
    ];

    WorkloadDefinition {
        metadata: ObjectMeta::new(&instance.name, &instance.namespace)
            .with_labels(labels.clone()),
        spec: WorkloadSpec {
            replicas: 1,
            triggers: vec![TriggerPolicy::ConfigChange],
            strategy: RolloutStrategy {
                strategy_type: StrategyType::Recreate,
                recreate_timeout_seconds: Some(defaults::RECREATE_TIMEOUT_SECONDS),
                active_deadline_seconds: Some(defaults::ROLLOUT_DEADLINE_SECONDS),
            },
            selector: labels.clone(),
            template: PodTemplateSpec {
                labels,
                spec: PodSpec {
                    service_account_name: instance.name.clone(),
                    restart_policy: RestartPolicy::Always,
                    dns_policy: DnsPolicy::ClusterFirst,
                    termination_grace_period_seconds: Some(
                        defaults::TERMINATION_GRACE_PERIOD_SECONDS,
                    ),
                    security_context: Some(SecurityContext::default()),
                    init_containers: vec![Container {
                        name: defaults::INIT_CONTAINER_NAME.to_string(),
                        image: defaults::INIT_CONTAINER_IMAGE.to_string(),
                        image_pull_policy: PullPolicy::IfNotPresent,
                        command: init_command,
                        env: Vec::new(),
                        ports: Vec::new(),
                        readiness_probe: None,
                        volume_mounts: Vec::new(),
                        resources: None,
                        security_context: None,
                    }],
                    containers: vec![Container {
                        name: instance.name.clone(),
                        image: instance.image_ref(),
                        image_pull_policy: PullPolicy::Always,
                        command: Vec::new(),
                        env: environment(instance, endpoint),
                        ports: vec![ContainerPort {
                            container_port: defaults::UI_PORT,
                            protocol: PortProtocol::Tcp,
                        }],
                        readiness_probe: Some(readiness_probe()),
                        volume_mounts: vec![VolumeMount {
                            name: data_volume.clone(),
                            mount_path: defaults::DATA_MOUNT_PATH.to_string(),
                            read_only: false,
                        }],
                        resources: Some(ResourceRequirements {
                            requests: memory_request(),
                        }),
                        security_context: None,
                    }],
                    volumes: vec![Volume {
                        name: data_volume,
                        persistent_volume_claim: PersistentVolumeClaimSource {
                            claim_name: format!("{}-data", instance.name),
                        },
                    }],
                },
            },
        },
    }
}

/// Desired network endpoint: edge TLS termination redirecting insecure
/// traffic, targeting the instance's service on the UI port.
pub fn desired_endpoint(instance: &Instance) -> NetworkEndpoint {
    NetworkEndpoint {
        metadata: ObjectMeta::new(&instance.name, &instance.namespace)
            .with_labels(labels_for(&instance.name)),
        spec: EndpointSpec {
            host: None,
            tls: Some(TlsConfig {
                termination: TlsTermination::Edge,
                insecure_edge_termination_policy: InsecureEdgePolicy::Redirect,
            }),
            to: TargetReference {
                kind: "Service".to_string(),
                name: instance.name.clone(),
            },
            port: EndpointPort {
                target_port: defaults::UI_PORT,
            },
        },
    }
}

fn environment(instance: &Instance, endpoint: &ResolvedEndpoint) -> Vec<EnvVar> {
    vec![
        EnvVar::literal("OPENSHIFT_ENABLE_OAUTH", "false"),
        EnvVar::literal("OPENSHIFT_ENABLE_REDIRECT_PROMPT", "true"),
        EnvVar::literal("KUBERNETES_MASTER", "https://kubernetes.default:443"),
        EnvVar::literal("KUBERNETES_TRUST_CERTIFICATES", "true"),
        EnvVar::literal("JNLP_SERVICE_NAME", format!("{}-jnlp", instance.name)),
        EnvVar::from_secret(
            "JENKINS_PASSWORD",
            format!("{}-{}", instance.name, defaults::PASSWORD_SECRET_SUFFIX),
            defaults::PASSWORD_SECRET_KEY,
        ),
        EnvVar::literal("JENKINS_UI_URL", endpoint.external_url()),
    ]
}

fn readiness_probe() -> Probe {
    Probe {
        http_get: HttpGetAction {
            path: defaults::READINESS_PATH.to_string(),
            port: defaults::UI_PORT,
            scheme: UriScheme::Http,
        },
        timeout_seconds: 10,
        initial_delay_seconds: 60,
        success_threshold: 1,
        period_seconds: 10,
        failure_threshold: 3,
    }
}

fn memory_request() -> BTreeMap<String, String> {
    let mut requests = BTreeMap::new();
    requests.insert("memory".to_string(), defaults::MEMORY_REQUEST.to_string());
    requests
}
