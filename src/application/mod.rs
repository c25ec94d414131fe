//! Application layer: link building and navigation rules.
//!
//! - [`wizard_link`] - Links into the creation wizards and their inverse parse
//! - [`redirect`] - Post-deletion redirect guard and tab navigation

pub mod redirect;
pub mod wizard_link;
