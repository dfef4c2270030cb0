//! Users list and detail views

use super::render_scrollable_list;
use crate::app::App;
use crate::state::{Focus, User};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the users list with the selected user's details below it
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(17)])
        .split(area);

    draw_users_list_content(frame, chunks[0], app);
    draw_user_detail(frame, chunks[1], app.state.selected_user());
}

/// Draw the list itself (top)
fn draw_users_list_content(frame: &mut Frame, area: Rect, app: &App) {
    let users = app.state.sync.users();

    // Border color based on focus
    let border_color = match app.state.focus {
        Focus::List => Color::Cyan,
        Focus::Form => Color::DarkGray,
    };

    let block = Block::default()
        .title(format!(" Users ({}) ", users.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if users.is_empty() {
        let content = Paragraph::new("No users found.\nPress 'n' to add a new user.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    // Id of the user loaded into the form, highlighted in the list
    let editing_id = app.state.sync.draft().id;

    let items: Vec<ListItem> = users
        .iter()
        .enumerate()
        .map(|(idx, user)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸" } else { " " };
            let number = user
                .id
                .map(|id| format!("#{id:<3}"))
                .unwrap_or_else(|| "#?  ".to_string());

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let mut spans = vec![
                Span::styled(prefix, style),
                Span::styled(number, Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(user.display_name(), style),
                Span::raw("  "),
                Span::styled(&user.email, Style::default().fg(Color::DarkGray)),
            ];
            if editing_id.is_some() && user.id == editing_id {
                spans.push(Span::styled(
                    "  [editing]",
                    Style::default().fg(Color::Yellow),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, area, list, app.state.selected_index);
}

fn labeled<'a>(label: &'a str, value: &'a str, indent: usize) -> Line<'a> {
    Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        format!("{title}:"),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Draw every field of `user` (bottom)
fn draw_user_detail(frame: &mut Frame, area: Rect, user: Option<&User>) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(user) = user else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let content = vec![
        labeled("Name", &user.name, 0),
        labeled("Email", &user.email, 0),
        labeled("Phone", &user.phone, 0),
        section("Address"),
        labeled("Street", &user.address.street, 2),
        labeled("Suite", &user.address.suite, 2),
        labeled("City", &user.address.city, 2),
        labeled("Zipcode", &user.address.zipcode, 2),
        section("Company"),
        labeled("Name", &user.company.name, 2),
        labeled("Catch Phrase", &user.company.catch_phrase, 2),
        labeled("BS", &user.company.bs, 2),
        labeled("Website", &user.website, 0),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_detail(user: Option<&User>) -> String {
        let backend = TestBackend::new(50, 17);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_user_detail(frame, area, user);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_detail_shows_nested_groups() {
        let mut user = User::empty();
        user.name = "Leanne".to_string();
        user.address.city = "Gwenborough".to_string();
        user.company.catch_phrase = "Neural-net".to_string();

        let screen = render_detail(Some(&user));
        assert!(screen.contains("Name: Leanne"));
        assert!(screen.contains("City: Gwenborough"));
        assert!(screen.contains("Catch Phrase: Neural-net"));
    }

    #[test]
    fn test_detail_without_selection_is_blank() {
        let screen = render_detail(None);
        assert!(screen.contains("Details"));
        assert!(!screen.contains("Name:"));
    }
}
