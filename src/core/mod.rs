//! Onboarding model: catalog, user draft, navigation and the controller
//! that owns them.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod catalog;
pub mod controller;
pub mod draft;
pub mod error;
pub mod nav;

pub use controller::Controller;
pub use error::FormError;
