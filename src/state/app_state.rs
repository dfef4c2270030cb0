//! Application state definitions

use super::{User, UserForm, UserSync};

/// Which pane receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Form,
}

impl Focus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::List => Self::Form,
            Self::Form => Self::List,
        };
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Collection, loading flag and draft
    pub sync: UserSync,
    /// Cursor and validation feedback of the form
    pub form: UserForm,
    pub focus: Focus,

    // Selection
    pub selected_index: usize,

    // UI state
    pub status_message: Option<String>,
    /// Remote calls started but not yet applied
    pub in_flight: usize,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let max = self.sync.users().len();
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Keep the selection inside the collection after it shrank
    pub fn clamp_selection(&mut self) {
        let max = self.sync.users().len();
        if self.selected_index >= max {
            self.selected_index = max.saturating_sub(1);
        }
    }

    /// Currently highlighted user in the list
    pub fn selected_user(&self) -> Option<&User> {
        self.sync.users().get(self.selected_index)
    }

    /// Title of the submit button, derived from the draft mode
    pub fn submit_label(&self) -> &'static str {
        if self.sync.is_editing() {
            "Update User"
        } else {
            "Add User"
        }
    }
}
