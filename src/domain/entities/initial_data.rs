//! State handed to the wizard through the `initData` query parameter.

use crate::error::InitialDataError;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Where the boot disk of the new virtual machine comes from.
///
/// At most one of the sources is expected to be set; the wizard decides
/// precedence, this type only carries the values.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootSourceParams {
    pub url: Option<String>,
    pub container: Option<String>,
    pub pvc_name: Option<String>,
    pub pvc_namespace: Option<String>,
}

impl BootSourceParams {
    /// Boot source importing a disk image over HTTP.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Boot source using a container disk image.
    pub fn from_container(image: impl Into<String>) -> Self {
        Self {
            container: Some(image.into()),
            ..Self::default()
        }
    }

    /// Boot source cloning an existing persistent volume claim.
    pub fn from_pvc(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            pvc_name: Some(name.into()),
            pvc_namespace: Some(namespace.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.container.is_none()
            && self.pvc_name.is_none()
            && self.pvc_namespace.is_none()
    }
}

/// Values pre-filled in the wizard when it is opened from a link.
///
/// Serialized as compact JSON with absent fields omitted, so an empty value
/// renders as `{}`. The common template name and the user template pair are
/// mutually exclusive: [`Self::set_template`] is the only writer in this crate
/// and always clears the other reference.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardInitialData {
    pub common_template_name: Option<String>,
    pub user_template_name: Option<String>,
    pub user_template_ns: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "startVM")]
    pub start_vm: Option<bool>,
    pub source: Option<BootSourceParams>,
    pub storage_class: Option<String>,
    pub access_mode: Option<String>,
    pub volume_mode: Option<String>,
}

/// Reference to the template the wizard should start from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateReference {
    /// Platform-provided template, looked up by name only.
    Common { name: String },
    /// Tenant template, looked up by name and namespace.
    User {
        name: String,
        namespace: Option<String>,
    },
}

impl WizardInitialData {
    /// Returns `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Compact JSON text placed in the `initData` query parameter.
    pub fn to_query_value(&self) -> Result<String, InitialDataError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Stores a template reference, replacing any previous one.
    pub fn set_template(&mut self, reference: TemplateReference) {
        match reference {
            TemplateReference::Common { name } => {
                self.common_template_name = Some(name);
                self.user_template_name = None;
                self.user_template_ns = None;
            }
            TemplateReference::User { name, namespace } => {
                self.common_template_name = None;
                self.user_template_name = Some(name);
                self.user_template_ns = namespace;
            }
        }
    }

    /// Returns the template reference carried by this payload, if any.
    ///
    /// A common template name wins if a hand-edited link sets both.
    pub fn template(&self) -> Option<TemplateReference> {
        if let Some(name) = &self.common_template_name {
            return Some(TemplateReference::Common { name: name.clone() });
        }

        self.user_template_name
            .as_ref()
            .map(|name| TemplateReference::User {
                name: name.clone(),
                namespace: self.user_template_ns.clone(),
            })
    }
}
