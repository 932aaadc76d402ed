//! Application orchestration: terminal-side state plus the event loop
//! plumbing around it.

pub mod event;
pub mod handler;
pub mod state;
