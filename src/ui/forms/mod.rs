//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `user_form`: User create/edit form

mod field_renderer;
mod user_form;

pub use user_form::draw_user_form;
