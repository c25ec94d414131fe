//! Virtual machine templates and their classification.

use super::resource::Resource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label marking the kind of a template.
pub const TEMPLATE_TYPE_LABEL: &str = "template.kubevirt.io/type";

/// Value of [`TEMPLATE_TYPE_LABEL`] for platform-provided templates.
pub const TEMPLATE_TYPE_BASE: &str = "base";

/// Label prefix of workload profile markers, e.g.
/// `workload.template.kubevirt.io/server: "true"`.
pub const TEMPLATE_WORKLOAD_LABEL: &str = "workload.template.kubevirt.io";

/// Workload profile of templates that bypass the generic wizard.
pub const SAP_HANA_WORKLOAD: &str = "saphana";

/// Template classification used to pick the wizard flow.
pub trait VmTemplate: Resource {
    /// Whether the template ships with the platform rather than a tenant.
    fn is_common(&self) -> bool;

    /// Workload profile the template targets, if it declares one.
    fn workload_profile(&self) -> Option<String>;

    /// Whether the template must go through the dedicated instantiate flow.
    fn is_sap_hana(&self) -> bool {
        self.workload_profile().as_deref() == Some(SAP_HANA_WORKLOAD)
    }
}

/// Object metadata subset needed for routing decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

/// An OpenShift template object, reduced to its metadata.
///
/// Deserializes from the full object; other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub metadata: ObjectMeta,
}

impl Template {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta {
                name: name.into(),
                namespace: Some(namespace.into()),
                labels: BTreeMap::new(),
            },
        }
    }

    /// Adds a label, replacing an existing value for the same key.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.labels.insert(key.into(), value.into());
        self
    }

    /// Marks the template as platform-provided.
    pub fn common(self) -> Self {
        self.with_label(TEMPLATE_TYPE_LABEL, TEMPLATE_TYPE_BASE)
    }

    /// Declares the workload profile of the template.
    pub fn with_workload(self, profile: &str) -> Self {
        self.with_label(format!("{TEMPLATE_WORKLOAD_LABEL}/{profile}"), "true")
    }
}

impl Resource for Template {
    fn name(&self) -> &str {
        &self.metadata.name
    }

    fn namespace(&self) -> Option<&str> {
        self.metadata.namespace.as_deref()
    }
}

impl VmTemplate for Template {
    fn is_common(&self) -> bool {
        self.metadata
            .labels
            .get(TEMPLATE_TYPE_LABEL)
            .is_some_and(|value| value == TEMPLATE_TYPE_BASE)
    }

    fn workload_profile(&self) -> Option<String> {
        let prefix = format!("{TEMPLATE_WORKLOAD_LABEL}/");

        self.metadata
            .labels
            .iter()
            .find(|(key, value)| key.starts_with(&prefix) && value.as_str() == "true")
            .map(|(key, _)| key[prefix.len()..].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_template_detection() {
        let template = Template::new("fedora", "openshift").common();
        assert!(template.is_common());
    }

    #[test]
    fn test_user_template_detection() {
        let template = Template::new("mine", "team");
        assert!(!template.is_common());

        let other_type = Template::new("mine", "team").with_label(TEMPLATE_TYPE_LABEL, "vm");
        assert!(!other_type.is_common());
    }

    #[test]
    fn test_workload_profile_from_label() {
        let template = Template::new("rhel", "openshift").with_workload("server");
        assert_eq!(template.workload_profile().as_deref(), Some("server"));
        assert!(!template.is_sap_hana());
    }

    #[test]
    fn test_workload_profile_ignores_false_labels() {
        let template = Template::new("rhel", "openshift")
            .with_label("workload.template.kubevirt.io/desktop", "false");
        assert!(template.workload_profile().is_none());
    }

    #[test]
    fn test_workload_profile_first_in_label_order() {
        let template = Template::new("rhel", "openshift")
            .with_workload("server")
            .with_workload("desktop");
        assert_eq!(template.workload_profile().as_deref(), Some("desktop"));
    }

    #[test]
    fn test_sap_hana_template() {
        let template = Template::new("t1", "tns").with_workload(SAP_HANA_WORKLOAD);
        assert!(template.is_sap_hana());
    }

    #[test]
    fn test_deserialize_from_full_object() {
        let json = r#"{
            "apiVersion": "template.openshift.io/v1",
            "kind": "Template",
            "metadata": {
                "name": "fedora-server-small",
                "namespace": "openshift",
                "labels": {
                    "template.kubevirt.io/type": "base",
                    "workload.template.kubevirt.io/server": "true"
                }
            },
            "objects": []
        }"#;

        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(template.name(), "fedora-server-small");
        assert_eq!(template.namespace(), Some("openshift"));
        assert!(template.is_common());
        assert_eq!(template.workload_profile().as_deref(), Some("server"));
    }
}
