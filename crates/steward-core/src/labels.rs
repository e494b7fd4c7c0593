use std::collections::BTreeMap;

/// Selector label key applied to every derived resource.
pub const APP_LABEL: &str = "app";

/// Label set identifying a derived resource as belonging to an instance.
///
/// Ordered map, so label serialization is stable across calls.
pub fn labels_for(instance_name: &str) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert(APP_LABEL.to_string(), instance_name.to_string());
    labels
}
