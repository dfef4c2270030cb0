//! Application state and core logic

use crate::api::UsersApi;
use crate::state::{AppState, Completion, Focus, Request};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Help text for the submit shortcut
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Remote users resource
    api: Arc<dyn UsersApi>,
    /// Finished remote calls are sent here by their tasks
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance and start loading the collection.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(api: Arc<dyn UsersApi>) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            state: AppState::default(),
            api,
            completion_tx,
            completion_rx,
            quit: false,
        };
        let request = app.state.sync.begin_load();
        app.dispatch(request);
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run `request` on a background task; its completion comes back through
    /// the channel and is applied by [`App::drain_completions`].
    fn dispatch(&mut self, request: Request) {
        tracing::debug!("Dispatching {request:?}");
        self.state.in_flight += 1;

        let api = Arc::clone(&self.api);
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let completion = request.execute(api.as_ref()).await;
            if tx.send(completion).is_err() {
                tracing::debug!("Completion dropped, app is shutting down");
            }
        });
    }

    /// Apply every completion that has arrived so far
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.apply_completion(completion);
            applied += 1;
        }
        applied
    }

    /// Wait for the next completion and apply it
    #[cfg(test)]
    pub async fn next_completion(&mut self) -> bool {
        match self.completion_rx.recv().await {
            Some(completion) => {
                self.apply_completion(completion);
                true
            }
            None => false,
        }
    }

    fn apply_completion(&mut self, completion: Completion) {
        self.state.in_flight = self.state.in_flight.saturating_sub(1);

        if completion.is_success() {
            let message = match &completion {
                Completion::Loaded(_) => None,
                Completion::Created(_) => Some("User added"),
                Completion::Updated { .. } => Some("User updated"),
                Completion::Deleted { .. } => Some("User deleted"),
            };
            if matches!(
                completion,
                Completion::Created(_) | Completion::Updated { .. }
            ) {
                self.state.form.reset();
            }
            self.state.status_message = message.map(str::to_string);
        }

        self.state.sync.apply(completion);
        self.state.clamp_selection();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.state.status_message = None;

        if self.state.sync.is_loading() {
            if matches!(key.code, KeyCode::Char('q')) {
                self.quit = true;
            }
            return;
        }

        match self.state.focus {
            Focus::List => self.handle_list_key(key),
            Focus::Form => self.handle_form_key(key),
        }
    }

    /// Handle keys while the user list is focused
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter | KeyCode::Char('e') => self.edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Tab => self.state.focus.toggle(),
            KeyCode::Char('n') => self.new_user(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys while the form is focused
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.state.focus = Focus::List,
            KeyCode::Backspace => self.state.form.backspace(&mut self.state.sync),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.form.input_char(&mut self.state.sync, c)
            }
            _ => {}
        }
    }

    /// Copy the selected user into the draft and move to the form
    fn edit_selected(&mut self) {
        if let Some(user) = self.state.selected_user().cloned() {
            self.state.sync.begin_edit(&user);
            self.state.form.reset();
            self.state.focus = Focus::Form;
        }
    }

    /// Start an empty draft in create mode and move to the form
    fn new_user(&mut self) {
        self.state.sync.reset_draft();
        self.state.form.reset();
        self.state.focus = Focus::Form;
    }

    /// Delete the selected user from the remote collection
    fn delete_selected(&mut self) {
        let Some(user) = self.state.selected_user() else {
            return;
        };
        let Some(id) = user.id else {
            tracing::warn!("Cannot delete {:?}: it has no id", user.display_name());
            return;
        };
        let request = self.state.sync.prepare_delete(id);
        self.dispatch(request);
    }

    /// Validate the draft and store it remotely
    fn submit(&mut self) {
        if !self.state.form.check(self.state.sync.draft()) {
            return;
        }
        let request = self.state.sync.prepare_submit();
        self.dispatch(request);
    }
}
