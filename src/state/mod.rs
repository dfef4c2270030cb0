//! Application state module

mod app_state;
mod field_path;
mod forms;
mod record;
mod sync;

pub use app_state::*;
pub use field_path::*;
pub use forms::*;
pub use record::*;
pub use sync::*;
