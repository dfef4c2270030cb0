//! Layout components (content split, loading panel, status bar)

use crate::app::{App, SUBMIT_SHORTCUT};
use crate::state::Focus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the frame into content and a one-row status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Split the content area into form (left) and list (right)
pub fn split_content(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Shown in place of the form and list until the first load finishes
pub fn draw_loading(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Users ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let loading = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(loading, rows[1]);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Request activity
    let activity = match app.state.in_flight {
        0 => Span::styled(" ● ", Style::default().fg(Color::Green)),
        n => Span::styled(format!(" ◌ {n} "), Style::default().fg(Color::Yellow)),
    };
    spans.push(activity);

    let hints = get_focus_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whichever pane has focus
fn get_focus_hints(app: &App) -> String {
    if app.state.sync.is_loading() {
        return "q:quit".to_string();
    }
    match app.state.focus {
        Focus::List => "j/k:nav  Enter:edit  d:delete  n:new  q:quit".to_string(),
        Focus::Form => format!("Tab:next  S-Tab:prev  {SUBMIT_SHORTCUT}:submit  Esc:list"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_status_row() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_split_content_covers_width() {
        let (form, list) = split_content(Rect::new(0, 0, 100, 20));
        assert_eq!(form.width + list.width, 100);
        assert!(form.x < list.x);
    }
}
