use serde::{Deserialize, Serialize};

/// API group/version recorded in owner references pointing at an instance.
pub const INSTANCE_API_VERSION: &str = "steward.dev/v1alpha1";

/// Kind recorded in owner references pointing at an instance.
pub const INSTANCE_KIND: &str = "JenkinsInstance";

/// The caller-supplied declared workload: one Jenkins installation.
///
/// Immutable from the engine's perspective; `uid` is the platform-assigned
/// identity and must be present before derived resources can be owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub name: String,
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub spec: InstanceSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceSpec {
    pub image: String,
    pub version: String,
}

impl Instance {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        image: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            uid: None,
            spec: InstanceSpec {
                image: image.into(),
                version: version.into(),
            },
        }
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Fully-qualified image reference, `<image>:<version>`.
    pub fn image_ref(&self) -> String {
        format!("{}:{}", self.spec.image, self.spec.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_ref() {
        let instance = Instance::new("ci", "team-a", "jenkins", "2.3");
        assert_eq!(instance.image_ref(), "jenkins:2.3");
    }

    #[test]
    fn test_instance_deserialization() {
        let json = json!({
            "name": "ci",
            "namespace": "team-a",
            "uid": "5b0c3a",
            "spec": {"image": "jenkins", "version": "2.3"}
        });

        let instance: Instance = serde_json::from_value(json).unwrap();
        assert_eq!(instance.name, "ci");
        assert_eq!(instance.uid.as_deref(), Some("5b0c3a"));
        assert_eq!(instance.spec.version, "2.3");
    }

    #[test]
    fn test_instance_uid_optional() {
        let json = json!({
            "name": "ci",
            "namespace": "team-a",
            "spec": {"image": "jenkins", "version": "2.3"}
        });

        let instance: Instance = serde_json::from_value(json).unwrap();
        assert!(instance.uid.is_none());
    }
}
