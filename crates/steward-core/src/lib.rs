pub mod endpoint;
pub mod error;
pub mod instance;
pub mod labels;
pub mod meta;
pub mod ownership;
pub mod workload;

pub use endpoint::{
    EndpointPort, EndpointSpec, InsecureEdgePolicy, NetworkEndpoint, TargetReference, TlsConfig,
    TlsTermination,
};
pub use error::{CoreError, Result};
pub use instance::{INSTANCE_API_VERSION, INSTANCE_KIND, Instance, InstanceSpec};
pub use labels::{APP_LABEL, labels_for};
pub use meta::{ObjectMeta, OwnerReference};
pub use ownership::set_controller_reference;
pub use workload::{
    Container, ContainerPort, DnsPolicy, EnvVar, EnvVarSource, HttpGetAction,
    PersistentVolumeClaimSource, PodSpec, PodTemplateSpec, PortProtocol, Probe, PullPolicy,
    ResourceRequirements, RestartPolicy, RolloutStrategy, SecretKeySelector, SecurityContext,
    StrategyType, TriggerPolicy, UriScheme, Volume, VolumeMount, WorkloadDefinition, WorkloadSpec,
};
