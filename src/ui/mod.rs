//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer turns the onboarding state into cells on the terminal.  It
//! reads state and never changes it.

pub mod game_list;
pub mod layout;
pub mod popup;
pub mod screens;
pub mod tab_bar;
pub mod theme;
