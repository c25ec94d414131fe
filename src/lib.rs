//! # VM Wizard Links
//!
//! URL construction and navigation rules for the virtual machine pages of the
//! OpenShift console.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Wizard selectors, initial data, templates and the navigator contract
//! - **Application Layer** ([`application`]) - Wizard link builder and redirect helpers
//! - **Routes** ([`routes`]) - Base paths of the console pages and query keys
//! - **Utilities** ([`utils`]) - URL elision for display and location helpers
//!
//! ## Features
//!
//! - Deterministic links into the basic, customize and YAML creation flows
//! - Wizard pre-fill state carried as JSON in one query parameter, with a
//!   lenient inverse parse
//! - Left-truncation of long hostnames and paths for display
//! - Redirect away from the page of a just-deleted resource
//!
//! ## Quick Start
//!
//! ```ignore
//! use vm_wizard_links::prelude::*;
//!
//! let template = Template::new("fedora", "openshift").common();
//! let request = WizardLinkRequest::new(WizardKind::Basic)
//!     .with_namespace("ns1")
//!     .with_template(&template);
//!
//! let link = build_wizard_link(&request, &ConsoleRoutes);
//! ```
//!
//! ## Configuration
//!
//! The `wizard-links` binary reads its settings from environment variables via
//! [`config::Config`]. The library itself takes all context as arguments.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod routes;
pub mod utils;

pub use error::{InitialDataError, ParseEnumError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::redirect::{
        redirect_if_viewing_deleted, redirect_to_tab, vm_tab_url,
    };
    pub use crate::application::wizard_link::{
        WizardFlow, WizardLinkRequest, build_wizard_link, parse_wizard_initial_data,
    };
    pub use crate::domain::entities::{
        BootSourceParams, Resource, ResourceRef, Template, TemplateReference, VmTemplate,
        WizardInitialData,
    };
    pub use crate::domain::navigator::{MemoryHistory, Navigator};
    pub use crate::domain::wizard::{ListTab, VmTab, WizardKind, WizardMode, WizardView};
    pub use crate::error::{InitialDataError, ParseEnumError};
    pub use crate::routes::{ConsoleRoutes, RouteBuilder};
    pub use crate::utils::url_elision::{UrlShorteningRequest, resolve_url};
}
