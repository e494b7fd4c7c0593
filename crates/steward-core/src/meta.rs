use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Identity and bookkeeping shared by every derived resource.
///
/// `uid`, `resource_version` and `creation_timestamp` are assigned by the
/// platform store; builders leave them unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owner_references: Vec<OwnerReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub creation_timestamp: Option<OffsetDateTime>,
}

impl ObjectMeta {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            labels: BTreeMap::new(),
            owner_references: Vec::new(),
            uid: None,
            resource_version: None,
            creation_timestamp: None,
        }
    }

    pub fn with_labels(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = labels;
        self
    }

    /// The controller owner reference, if one is attached.
    pub fn controller_reference(&self) -> Option<&OwnerReference> {
        self.owner_references.iter().find(|r| r.controller)
    }
}

/// A platform-tracked ownership relation enabling cascading deletion of
/// children when the owning instance is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReference {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub uid: String,
    pub controller: bool,
    pub block_owner_deletion: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_meta_new() {
        let meta = ObjectMeta::new("ci", "team-a");
        assert_eq!(meta.name, "ci");
        assert_eq!(meta.namespace, "team-a");
        assert!(meta.labels.is_empty());
        assert!(meta.owner_references.is_empty());
        assert!(meta.uid.is_none());
        assert!(meta.resource_version.is_none());
        assert!(meta.creation_timestamp.is_none());
    }

    #[test]
    fn test_object_meta_serialization_skips_unset_fields() {
        let meta = ObjectMeta::new("ci", "team-a");
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json, json!({"name": "ci", "namespace": "team-a"}));
    }

    #[test]
    fn test_object_meta_serialization_camel_case() {
        let mut meta = ObjectMeta::new("ci", "team-a");
        meta.resource_version = Some("7".to_string());
        meta.owner_references = vec![OwnerReference {
            api_version: "steward.dev/v1alpha1".to_string(),
            kind: "JenkinsInstance".to_string(),
            name: "ci".to_string(),
            uid: "u-1".to_string(),
            controller: true,
            block_owner_deletion: true,
        }];

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["resourceVersion"], "7");
        assert_eq!(json["ownerReferences"][0]["apiVersion"], "steward.dev/v1alpha1");
        assert_eq!(json["ownerReferences"][0]["blockOwnerDeletion"], true);
    }

    #[test]
    fn test_controller_reference_lookup() {
        let mut meta = ObjectMeta::new("ci", "team-a");
        assert!(meta.controller_reference().is_none());

        meta.owner_references = vec![OwnerReference {
            api_version: "steward.dev/v1alpha1".to_string(),
            kind: "JenkinsInstance".to_string(),
            name: "ci".to_string(),
            uid: "u-1".to_string(),
            controller: true,
            block_owner_deletion: true,
        }];
        assert_eq!(meta.controller_reference().unwrap().uid, "u-1");
    }

    #[test]
    fn test_object_meta_roundtrip() {
        let meta = ObjectMeta::new("ci", "team-a").with_labels(crate::labels::labels_for("ci"));
        let json = serde_json::to_value(&meta).unwrap();
        let back: ObjectMeta = serde_json::from_value(json).unwrap();
        assert_eq!(meta, back);
    }
}
