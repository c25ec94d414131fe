//! Links into the virtual machine creation flows.
//!
//! A [`WizardLinkRequest`] is resolved once into a [`WizardFlow`], and each
//! flow has its own way of turning the request into a path and query:
//!
//! 1. [`WizardFlow::ShortcutTemplate`] - SAP HANA templates always open the
//!    instantiate template form, whatever else was requested.
//! 2. [`WizardFlow::BasicWizard`] - namespace and template reference only.
//! 3. [`WizardFlow::FullWizard`] - mode, view and the whole initial data.
//!
//! Everything beyond the mode and view travels as JSON in the single
//! `initData` parameter, see [`WizardInitialData`].

use crate::domain::entities::{
    BootSourceParams, TemplateReference, VmTemplate, WizardInitialData,
};
use crate::domain::wizard::{WizardKind, WizardMode, WizardView};
use crate::error::InitialDataError;
use crate::routes::{RouteBuilder, url_params};
use std::fmt;
use url::form_urlencoded;

/// Everything a caller may specify when linking to a creation flow.
///
/// Built with [`WizardLinkRequest::new`] and the `with_*` methods; unset
/// fields are left out of the link.
#[derive(Clone, Default)]
pub struct WizardLinkRequest<'a> {
    pub namespace: Option<String>,
    pub kind: WizardKind,
    pub mode: Option<WizardMode>,
    pub view: Option<WizardView>,
    pub template: Option<&'a dyn VmTemplate>,
    pub name: Option<String>,
    pub boot_source: Option<BootSourceParams>,
    pub start_vm: bool,
    pub storage_class: Option<String>,
    pub access_mode: Option<String>,
    pub volume_mode: Option<String>,
}

impl fmt::Debug for WizardLinkRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardLinkRequest")
            .field("namespace", &self.namespace)
            .field("kind", &self.kind)
            .field("mode", &self.mode)
            .field("view", &self.view)
            .field("template", &self.template.map(|t| t.name()))
            .field("name", &self.name)
            .field("boot_source", &self.boot_source)
            .field("start_vm", &self.start_vm)
            .field("storage_class", &self.storage_class)
            .field("access_mode", &self.access_mode)
            .field("volume_mode", &self.volume_mode)
            .finish()
    }
}

impl<'a> WizardLinkRequest<'a> {
    pub fn new(kind: WizardKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_mode(mut self, mode: WizardMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_view(mut self, view: WizardView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_template(mut self, template: &'a dyn VmTemplate) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_boot_source(mut self, source: BootSourceParams) -> Self {
        self.boot_source = Some(source);
        self
    }

    pub fn with_start_vm(mut self, start_vm: bool) -> Self {
        self.start_vm = start_vm;
        self
    }

    pub fn with_storage_class(mut self, storage_class: impl Into<String>) -> Self {
        self.storage_class = Some(storage_class.into());
        self
    }

    pub fn with_access_mode(mut self, access_mode: impl Into<String>) -> Self {
        self.access_mode = Some(access_mode.into());
        self
    }

    pub fn with_volume_mode(mut self, volume_mode: impl Into<String>) -> Self {
        self.volume_mode = Some(volume_mode.into());
        self
    }
}

/// The creation flow a request resolves to.
#[derive(Clone, Copy)]
pub enum WizardFlow<'a> {
    /// Dedicated instantiate form for templates that bypass the wizard.
    ShortcutTemplate { template: &'a dyn VmTemplate },
    /// Guided wizard.
    BasicWizard,
    /// Customize/import wizard, or the YAML editor when `yaml` is set.
    FullWizard {
        mode: Option<WizardMode>,
        view: Option<WizardView>,
        yaml: bool,
    },
}

impl fmt::Debug for WizardFlow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardFlow::ShortcutTemplate { template } => f
                .debug_struct("ShortcutTemplate")
                .field("template", &template.name())
                .finish(),
            WizardFlow::BasicWizard => f.write_str("BasicWizard"),
            WizardFlow::FullWizard { mode, view, yaml } => f
                .debug_struct("FullWizard")
                .field("mode", mode)
                .field("view", view)
                .field("yaml", yaml)
                .finish(),
        }
    }
}

impl<'a> WizardFlow<'a> {
    /// Picks the flow for a request. The first matching rule wins.
    pub fn resolve(request: &WizardLinkRequest<'a>) -> Self {
        if let Some(template) = request.template.filter(|t| t.is_sap_hana()) {
            return WizardFlow::ShortcutTemplate { template };
        }

        match request.kind {
            WizardKind::Basic => WizardFlow::BasicWizard,
            kind => WizardFlow::FullWizard {
                mode: request.mode,
                view: request.view,
                yaml: kind == WizardKind::Yaml,
            },
        }
    }
}

/// Classifies a template as common or user owned.
pub fn template_reference(template: &dyn VmTemplate) -> TemplateReference {
    if template.is_common() {
        TemplateReference::Common {
            name: template.name().to_string(),
        }
    } else {
        TemplateReference::User {
            name: template.name().to_string(),
            namespace: template.namespace().map(str::to_string),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Appends the serialized initial data, or logs and skips it when it cannot be
/// serialized.
fn append_initial_data(
    params: &mut form_urlencoded::Serializer<'_, String>,
    initial_data: &WizardInitialData,
) {
    match initial_data.to_query_value() {
        Ok(json) => {
            params.append_pair(url_params::INITIAL_DATA, &json);
        }
        Err(e) => tracing::warn!(error = %e, "dropping initial data from wizard link"),
    }
}

fn query_string(encoded: String) -> String {
    if encoded.is_empty() {
        encoded
    } else {
        format!("?{encoded}")
    }
}

/// Builds the link opening the creation flow described by `request`.
///
/// Never fails: unknown or irrelevant inputs are dropped from the link.
pub fn build_wizard_link(request: &WizardLinkRequest<'_>, routes: &dyn RouteBuilder) -> String {
    let flow = WizardFlow::resolve(request);
    tracing::debug!(?flow, namespace = ?request.namespace, "building wizard link");

    let namespace = request.namespace.as_deref();

    match flow {
        WizardFlow::ShortcutTemplate { template } => routes.instantiate_template(
            namespace,
            &format!(
                "?{}={}&{}={}",
                url_params::TEMPLATE_NAMESPACE,
                template.namespace().unwrap_or_default(),
                url_params::TEMPLATE_NAME,
                template.name()
            ),
        ),
        WizardFlow::BasicWizard => {
            let mut params = form_urlencoded::Serializer::new(String::new());

            if let Some(ns) = namespace.filter(|ns| !ns.is_empty()) {
                params.append_pair(url_params::NAMESPACE, ns);
            }

            if let Some(template) = request.template {
                let mut initial_data = WizardInitialData::default();
                initial_data.set_template(template_reference(template));
                append_initial_data(&mut params, &initial_data);
            }

            routes.wizard(namespace, &query_string(params.finish()))
        }
        WizardFlow::FullWizard { mode, view, yaml } => {
            let mut params = form_urlencoded::Serializer::new(String::new());

            if let Some(mode) = mode.filter(|m| *m != WizardMode::Vm) {
                params.append_pair(url_params::MODE, mode.as_str());
            }

            // Import + advanced is the only view the wizard can start in.
            if mode == Some(WizardMode::Import) && view == Some(WizardView::Advanced) {
                params.append_pair(url_params::VIEW, WizardView::Advanced.as_str());
            }

            let initial_data = full_wizard_initial_data(request);
            if !initial_data.is_empty() {
                append_initial_data(&mut params, &initial_data);
            }

            if yaml {
                routes.yaml(namespace)
            } else {
                routes.customize_wizard(namespace, &query_string(params.finish()))
            }
        }
    }
}

fn full_wizard_initial_data(request: &WizardLinkRequest<'_>) -> WizardInitialData {
    let mut initial_data = WizardInitialData::default();

    if let Some(template) = request.template {
        initial_data.set_template(template_reference(template));
    }

    initial_data.name = non_empty(&request.name);
    initial_data.start_vm = request.start_vm.then_some(true);
    initial_data.source = request.boot_source.clone();
    initial_data.storage_class = non_empty(&request.storage_class);
    initial_data.access_mode = non_empty(&request.access_mode);
    initial_data.volume_mode = non_empty(&request.volume_mode);

    initial_data
}

/// Decodes the JSON text of an `initData` parameter.
///
/// # Errors
///
/// Returns [`InitialDataError::Json`] when the text is not a JSON object with
/// the expected field types.
pub fn decode_initial_data(text: &str) -> Result<WizardInitialData, InitialDataError> {
    Ok(serde_json::from_str(text)?)
}

/// Reads the wizard initial data from a query string.
///
/// Accepts the query with or without its leading `?`. A missing parameter
/// yields the empty value; so does a malformed one, after logging a warning,
/// so that stale or hand-edited links still open the wizard with defaults.
pub fn parse_wizard_initial_data(query: &str) -> WizardInitialData {
    let query = query.strip_prefix('?').unwrap_or(query);

    let Some(raw) = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == url_params::INITIAL_DATA)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
    else {
        return WizardInitialData::default();
    };

    decode_initial_data(&raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Cannot parse wizard initial data, using defaults");
        WizardInitialData::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Template;
    use crate::domain::entities::template::SAP_HANA_WORKLOAD;
    use crate::routes::ConsoleRoutes;

    fn query_of(link: &str) -> &str {
        link.split_once('?').map(|(_, q)| q).unwrap_or_default()
    }

    fn pairs(link: &str) -> Vec<(String, String)> {
        form_urlencoded::parse(query_of(link).as_bytes())
            .into_owned()
            .collect()
    }

    #[test]
    fn test_sap_hana_template_uses_instantiate_form() {
        let template = Template::new("t1", "tns").with_workload(SAP_HANA_WORKLOAD);
        let request = WizardLinkRequest::new(WizardKind::Customize)
            .with_namespace("ns1")
            .with_template(&template)
            .with_mode(WizardMode::Import)
            .with_view(WizardView::Advanced)
            .with_name("ignored")
            .with_start_vm(true);

        let link = build_wizard_link(&request, &ConsoleRoutes);

        assert_eq!(
            link,
            "/k8s/ns/ns1/templates/~new/form?template-ns=tns&template-name=t1"
        );
    }

    #[test]
    fn test_sap_hana_wins_over_basic_kind() {
        let template = Template::new("t1", "tns").with_workload(SAP_HANA_WORKLOAD);
        let request = WizardLinkRequest::new(WizardKind::Basic)
            .with_namespace("ns1")
            .with_template(&template);

        assert!(matches!(
            WizardFlow::resolve(&request),
            WizardFlow::ShortcutTemplate { .. }
        ));
    }

    #[test]
    fn test_basic_wizard_with_common_template() {
        let template = Template::new("fedora", "openshift").common();
        let request = WizardLinkRequest::new(WizardKind::Basic)
            .with_namespace("ns1")
            .with_template(&template);

        let link = build_wizard_link(&request, &ConsoleRoutes);

        assert!(link.starts_with("/k8s/ns/ns1/virtualmachines/~new-wizard?"));
        assert_eq!(
            pairs(&link),
            vec![
                ("namespace".to_string(), "ns1".to_string()),
                (
                    "initData".to_string(),
                    r#"{"commonTemplateName":"fedora"}"#.to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_basic_wizard_with_user_template() {
        let template = Template::new("mine", "team");
        let request = WizardLinkRequest::new(WizardKind::Basic).with_template(&template);

        let link = build_wizard_link(&request, &ConsoleRoutes);
        let data = parse_wizard_initial_data(query_of(&link));

        assert_eq!(data.user_template_name.as_deref(), Some("mine"));
        assert_eq!(data.user_template_ns.as_deref(), Some("team"));
        assert!(data.common_template_name.is_none());
        assert!(!link.contains("namespace="));
    }

    #[test]
    fn test_basic_wizard_ignores_full_wizard_fields() {
        let request = WizardLinkRequest::new(WizardKind::Basic)
            .with_namespace("ns1")
            .with_mode(WizardMode::Import)
            .with_name("vm1")
            .with_start_vm(true);

        let link = build_wizard_link(&request, &ConsoleRoutes);
        assert_eq!(
            link,
            "/k8s/ns/ns1/virtualmachines/~new-wizard?namespace=ns1"
        );
    }

    #[test]
    fn test_basic_wizard_without_params_has_no_query() {
        let request = WizardLinkRequest::new(WizardKind::Basic);
        let link = build_wizard_link(&request, &ConsoleRoutes);
        assert_eq!(link, "/k8s/ns/default/virtualmachines/~new-wizard");
    }

    #[test]
    fn test_full_wizard_import_advanced_includes_view() {
        let request = WizardLinkRequest::new(WizardKind::Customize)
            .with_namespace("ns1")
            .with_mode(WizardMode::Import)
            .with_view(WizardView::Advanced);

        let link = build_wizard_link(&request, &ConsoleRoutes);
        assert_eq!(
            link,
            "/k8s/ns/ns1/virtualmachines/~new?mode=import&view=advanced"
        );
    }

    #[test]
    fn test_full_wizard_other_views_are_dropped() {
        let combinations = [
            (Some(WizardMode::Import), Some(WizardView::Simple)),
            (Some(WizardMode::Template), Some(WizardView::Advanced)),
            (Some(WizardMode::Vm), Some(WizardView::Advanced)),
            (None, Some(WizardView::Advanced)),
            (Some(WizardMode::Import), None),
        ];

        for (mode, view) in combinations {
            let request = WizardLinkRequest {
                kind: WizardKind::Customize,
                mode,
                view,
                ..WizardLinkRequest::default()
            };
            let link = build_wizard_link(&request, &ConsoleRoutes);
            assert!(
                !link.contains("view="),
                "{mode:?}/{view:?} should not carry a view: {link}"
            );
        }
    }

    #[test]
    fn test_full_wizard_vm_mode_is_implicit() {
        let request = WizardLinkRequest::new(WizardKind::Customize)
            .with_namespace("ns1")
            .with_mode(WizardMode::Vm);

        let link = build_wizard_link(&request, &ConsoleRoutes);
        assert_eq!(link, "/k8s/ns/ns1/virtualmachines/~new");
    }

    #[test]
    fn test_full_wizard_template_mode() {
        let request = WizardLinkRequest::new(WizardKind::Customize)
            .with_namespace("ns1")
            .with_mode(WizardMode::Template);

        let link = build_wizard_link(&request, &ConsoleRoutes);
        assert_eq!(link, "/k8s/ns/ns1/virtualmachines/~new?mode=template");
    }

    #[test]
    fn test_full_wizard_initial_data_fields() {
        let template = Template::new("mine", "team");
        let request = WizardLinkRequest::new(WizardKind::Customize)
            .with_namespace("ns1")
            .with_template(&template)
            .with_name("vm1")
            .with_start_vm(true)
            .with_boot_source(BootSourceParams::from_container("quay.io/kubevirt/fedora"))
            .with_storage_class("ocs")
            .with_access_mode("ReadWriteMany")
            .with_volume_mode("Block");

        let link = build_wizard_link(&request, &ConsoleRoutes);
        let data = parse_wizard_initial_data(query_of(&link));

        assert_eq!(
            data,
            WizardInitialData {
                common_template_name: None,
                user_template_name: Some("mine".to_string()),
                user_template_ns: Some("team".to_string()),
                name: Some("vm1".to_string()),
                start_vm: Some(true),
                source: Some(BootSourceParams::from_container("quay.io/kubevirt/fedora")),
                storage_class: Some("ocs".to_string()),
                access_mode: Some("ReadWriteMany".to_string()),
                volume_mode: Some("Block".to_string()),
            }
        );
    }

    #[test]
    fn test_full_wizard_skips_falsy_fields() {
        let request = WizardLinkRequest::new(WizardKind::Customize)
            .with_namespace("ns1")
            .with_name("")
            .with_start_vm(false)
            .with_storage_class("");

        let link = build_wizard_link(&request, &ConsoleRoutes);
        assert_eq!(link, "/k8s/ns/ns1/virtualmachines/~new");
    }

    #[test]
    fn test_full_wizard_param_order() {
        let request = WizardLinkRequest::new(WizardKind::Customize)
            .with_mode(WizardMode::Import)
            .with_view(WizardView::Advanced)
            .with_name("vm1");

        let link = build_wizard_link(&request, &ConsoleRoutes);
        let keys: Vec<String> = pairs(&link).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["mode", "view", "initData"]);
    }

    #[test]
    fn test_yaml_wizard_drops_query() {
        let template = Template::new("fedora", "openshift").common();
        let request = WizardLinkRequest::new(WizardKind::Yaml)
            .with_namespace("ns1")
            .with_template(&template)
            .with_mode(WizardMode::Import);

        assert!(matches!(
            WizardFlow::resolve(&request),
            WizardFlow::FullWizard { yaml: true, .. }
        ));
        assert_eq!(
            build_wizard_link(&request, &ConsoleRoutes),
            "/k8s/ns/ns1/virtualmachines/~new"
        );
    }

    #[test]
    fn test_initial_data_is_form_encoded() {
        let request = WizardLinkRequest::new(WizardKind::Customize).with_name("my vm");
        let link = build_wizard_link(&request, &ConsoleRoutes);
        assert_eq!(
            query_of(&link),
            "initData=%7B%22name%22%3A%22my+vm%22%7D"
        );
    }

    #[test]
    fn test_parse_missing_param_is_empty() {
        assert!(parse_wizard_initial_data("").is_empty());
        assert!(parse_wizard_initial_data("?namespace=ns1&mode=import").is_empty());
        assert!(parse_wizard_initial_data("initData=").is_empty());
    }

    #[test]
    fn test_parse_invalid_json_is_empty() {
        assert!(parse_wizard_initial_data("?initData=%7Bnot-json").is_empty());
        assert!(parse_wizard_initial_data("initData=42").is_empty());
        assert!(parse_wizard_initial_data("initData=null").is_empty());
    }

    #[test]
    fn test_parse_with_and_without_question_mark() {
        let query = "initData=%7B%22name%22%3A%22vm1%22%7D";
        let expected = WizardInitialData {
            name: Some("vm1".to_string()),
            ..WizardInitialData::default()
        };

        assert_eq!(parse_wizard_initial_data(query), expected);
        assert_eq!(parse_wizard_initial_data(&format!("?{query}")), expected);
    }

    #[test]
    fn test_decode_initial_data_reports_error() {
        let result = decode_initial_data("{\"startVM\":\"yes\"}");
        assert!(matches!(result, Err(InitialDataError::Json(_))));
    }

    #[test]
    fn test_template_reference_classification() {
        let common = Template::new("fedora", "openshift").common();
        let user = Template::new("mine", "team");

        assert_eq!(
            template_reference(&common),
            TemplateReference::Common {
                name: "fedora".to_string()
            }
        );
        assert_eq!(
            template_reference(&user),
            TemplateReference::User {
                name: "mine".to_string(),
                namespace: Some("team".to_string())
            }
        );
    }

    #[test]
    fn test_flow_debug_output() {
        let template = Template::new("t1", "tns").with_workload(SAP_HANA_WORKLOAD);
        let flow = WizardFlow::ShortcutTemplate {
            template: &template,
        };
        assert_eq!(format!("{flow:?}"), r#"ShortcutTemplate { template: "t1" }"#);
    }
}
