//! Domain entities.
//!
//! - [`initial_data`] - Wizard pre-fill payload carried in links
//! - [`resource`] - Name/namespace identity of cluster objects
//! - [`template`] - Virtual machine templates and their classification

pub mod initial_data;
pub mod resource;
pub mod template;

pub use initial_data::{BootSourceParams, TemplateReference, WizardInitialData};
pub use resource::{Resource, ResourceRef};
pub use template::{ObjectMeta, Template, VmTemplate};
