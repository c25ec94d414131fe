//! Console route layout.
//!
//! Every page the helpers link to is produced by a [`RouteBuilder`]. Builders
//! receive the namespace and an already-encoded query string (either empty or
//! starting with `?`) and own the path prefix convention of their page.

use crate::domain::wizard::{ListTab, VmTab};

/// Query parameter keys understood by the wizard pages.
pub mod url_params {
    pub const NAMESPACE: &str = "namespace";
    pub const MODE: &str = "mode";
    pub const VIEW: &str = "view";
    pub const INITIAL_DATA: &str = "initData";
    pub const TEMPLATE_NAMESPACE: &str = "template-ns";
    pub const TEMPLATE_NAME: &str = "template-name";
}

/// Path segment of the virtual machine pages.
pub const VIRTUALMACHINES_BASE_URL: &str = "virtualmachines";

/// Namespace used by wizard routes when the caller has none.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Builds the base paths of the pages the helpers navigate to.
pub trait RouteBuilder {
    /// Basic (guided) creation wizard.
    fn wizard(&self, namespace: Option<&str>, query: &str) -> String;

    /// Full customize/import wizard.
    fn customize_wizard(&self, namespace: Option<&str>, query: &str) -> String;

    /// YAML editor for a new virtual machine.
    fn yaml(&self, namespace: Option<&str>) -> String;

    /// Dedicated "instantiate template" form.
    fn instantiate_template(&self, namespace: Option<&str>, query: &str) -> String;

    /// Virtual machine list, optionally on a sub-tab.
    fn list(&self, namespace: Option<&str>, tab: ListTab) -> String;

    /// A tab of a single virtual machine's page.
    fn vm_tab(&self, namespace: Option<&str>, name: &str, tab: VmTab) -> String;
}

/// Route layout of the OpenShift console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleRoutes;

impl ConsoleRoutes {
    fn namespace_or_default(namespace: Option<&str>) -> &str {
        namespace
            .filter(|ns| !ns.is_empty())
            .unwrap_or(DEFAULT_NAMESPACE)
    }
}

impl RouteBuilder for ConsoleRoutes {
    fn wizard(&self, namespace: Option<&str>, query: &str) -> String {
        format!(
            "/k8s/ns/{}/{VIRTUALMACHINES_BASE_URL}/~new-wizard{query}",
            Self::namespace_or_default(namespace)
        )
    }

    fn customize_wizard(&self, namespace: Option<&str>, query: &str) -> String {
        format!(
            "/k8s/ns/{}/{VIRTUALMACHINES_BASE_URL}/~new{query}",
            Self::namespace_or_default(namespace)
        )
    }

    fn yaml(&self, namespace: Option<&str>) -> String {
        format!(
            "/k8s/ns/{}/{VIRTUALMACHINES_BASE_URL}/~new",
            Self::namespace_or_default(namespace)
        )
    }

    fn instantiate_template(&self, namespace: Option<&str>, query: &str) -> String {
        format!(
            "/k8s/ns/{}/templates/~new/form{query}",
            Self::namespace_or_default(namespace)
        )
    }

    fn list(&self, namespace: Option<&str>, tab: ListTab) -> String {
        match namespace.filter(|ns| !ns.is_empty()) {
            Some(ns) => format!("/k8s/ns/{ns}/{VIRTUALMACHINES_BASE_URL}/{tab}"),
            None => format!("/k8s/all-namespaces/{VIRTUALMACHINES_BASE_URL}/{tab}"),
        }
    }

    fn vm_tab(&self, namespace: Option<&str>, name: &str, tab: VmTab) -> String {
        format!(
            "/ns/{}/{VIRTUALMACHINES_BASE_URL}/{name}/{tab}",
            Self::namespace_or_default(namespace)
        )
    }
}
