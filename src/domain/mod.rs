//! Domain layer: wizard selectors, entities and the navigation contract.
//!
//! # Architecture
//!
//! - [`entities`] - Initial data payload, resources and templates
//! - [`wizard`] - Wizard kind/mode/view and tab selectors
//! - [`navigator`] - Router abstraction used by the redirect helpers
//!
//! Nothing here performs navigation or I/O; collaborators are expressed as
//! traits and implemented by callers (or by the in-memory types for tests).

pub mod entities;
pub mod navigator;
pub mod wizard;
