//! URL utilities.
//!
//! - [`url_elision`] - Hostname and pathname shortening for display
//! - [`location`] - URL parsing, HTTPS detection and console base path

pub mod location;
pub mod url_elision;
