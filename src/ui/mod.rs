//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod users;
mod widgets;

use crate::app::App;
use ratatui::Frame;

pub use widgets::render_scrollable_list;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    if app.state.sync.is_loading() {
        layout::draw_loading(frame, content_area);
    } else {
        let (form_area, list_area) = layout::split_content(content_area);
        forms::draw_user_form(frame, form_area, app);
        users::draw_list(frame, list_area, app);
    }

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockUsersApi;
    use crate::state::{Focus, User};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn named(id: u64, name: &str) -> User {
        User {
            id: Some(id),
            name: name.to_string(),
            ..User::empty()
        }
    }

    async fn app_with(users: Vec<User>) -> App {
        let mut api = MockUsersApi::new();
        api.expect_list_users()
            .returning(move || Ok(users.clone()));
        let mut app = App::new(Arc::new(api));
        assert!(app.next_completion().await);
        app
    }

    #[tokio::test]
    async fn test_loading_screen_hides_form() {
        let mut api = MockUsersApi::new();
        api.expect_list_users().returning(|| Ok(vec![]));
        let app = App::new(Arc::new(api));

        let screen = render(&app);
        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("Add User"));
    }

    #[tokio::test]
    async fn test_loaded_screen_shows_form_and_list() {
        let app = app_with(vec![named(1, "Leanne Graham"), named(2, "Ervin Howell")]).await;

        let screen = render(&app);
        assert!(screen.contains("Add User"));
        assert!(screen.contains("Users (2)"));
        assert!(screen.contains("Leanne Graham"));
        assert!(screen.contains("Ervin Howell"));
    }

    #[tokio::test]
    async fn test_editing_switches_form_title_and_button() {
        let mut app = app_with(vec![named(7, "Kurtis")]).await;
        let user = app.state.sync.users()[0].clone();
        app.state.sync.begin_edit(&user);
        app.state.focus = Focus::Form;

        let screen = render(&app);
        assert!(screen.contains("Edit User #7"));
        assert!(screen.contains("Update User"));
        assert!(screen.contains("[editing]"));
    }

    #[tokio::test]
    async fn test_status_message_in_status_bar() {
        let mut app = app_with(vec![]).await;
        app.state.status_message = Some("User deleted".to_string());

        let screen = render(&app);
        assert!(screen.contains("User deleted"));
        assert!(screen.contains("No users found."));
    }
}
