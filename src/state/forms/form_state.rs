//! User form navigation and pre-submit validation

use super::field::{FieldKind, FormField, FIELDS, FIELD_COUNT};
use crate::state::{User, UserSync};
use thiserror::Error;

/// Why the form refused to submit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Missing { index: usize, label: &'static str },
    #[error("Email must look like name@example.com")]
    InvalidEmail { index: usize },
}

impl ValidationError {
    /// Index of the offending field in [`FIELDS`]
    pub fn field_index(&self) -> usize {
        match self {
            Self::Missing { index, .. } | Self::InvalidEmail { index } => *index,
        }
    }
}

/// Loose `local@domain` check, enough to catch typos
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Check that every field is filled and the email is plausible.
///
/// Reports the first problem in display order.
pub fn validate(user: &User) -> Result<(), ValidationError> {
    for (index, field) in FIELDS.iter().enumerate() {
        let value = field.value(user);
        if value.is_empty() {
            return Err(ValidationError::Missing {
                index,
                label: field.label,
            });
        }
        if field.kind == FieldKind::Email && !looks_like_email(value) {
            return Err(ValidationError::InvalidEmail { index });
        }
    }
    Ok(())
}

/// Cursor and feedback state of the user form.
///
/// Values live in the draft owned by [`UserSync`]; this only tracks which
/// field is active and the last validation failure.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    /// `0..FIELD_COUNT` are fields, `FIELD_COUNT` is the submit button
    pub active_field_index: usize,
    pub validation_error: Option<ValidationError>,
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of focus stops: every field plus the submit button
    pub fn stop_count(&self) -> usize {
        FIELD_COUNT + 1
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == FIELD_COUNT
    }

    /// The active field, `None` when the submit button is focused
    pub fn active_field(&self) -> Option<&'static FormField> {
        FIELDS.get(self.active_field_index)
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FIELD_COUNT);
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.stop_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.stop_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Back to the first field with no feedback shown
    pub fn reset(&mut self) {
        self.active_field_index = 0;
        self.validation_error = None;
    }

    /// Append a character to the active field of the draft
    pub fn input_char(&mut self, sync: &mut UserSync, c: char) {
        if let Some(field) = self.active_field() {
            let value = field.with_char(sync.draft(), c);
            sync.update_field(&field.path, value);
            self.validation_error = None;
        }
    }

    /// Remove the last character of the active field of the draft
    pub fn backspace(&mut self, sync: &mut UserSync) {
        if let Some(field) = self.active_field() {
            let value = field.without_last_char(sync.draft());
            sync.update_field(&field.path, value);
            self.validation_error = None;
        }
    }

    /// Validate the draft, moving focus to the offending field on failure
    pub fn check(&mut self, draft: &User) -> bool {
        match validate(draft) {
            Ok(()) => {
                self.validation_error = None;
                true
            }
            Err(err) => {
                tracing::debug!("Submit blocked: {err}");
                self.set_active_field(err.field_index());
                self.validation_error = Some(err);
                false
            }
        }
    }
}
