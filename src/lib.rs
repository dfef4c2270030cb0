//! Users TUI - Terminal User Interface for a remote users collection
//!
//! A Ratatui-based TUI that lists, creates, edits and deletes users
//! through a REST resource.

pub mod api;
pub mod app;
pub mod config;
pub mod state;
pub mod ui;
