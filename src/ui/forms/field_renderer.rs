//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width reserved for field labels
const LABEL_WIDTH: usize = 14;

/// Draw a single-row form field: `Label        value▌`
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, value: &str, is_active: bool) {
    let label_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let (display_value, value_style) = if value.is_empty() && !is_active {
        (field.label, Style::default().fg(Color::DarkGray))
    } else if is_active {
        (value, Style::default().fg(Color::White))
    } else {
        (value, Style::default())
    };

    let cursor = if is_active { "▌" } else { "" };

    // Keep the tail visible when the value is wider than the row
    let room = (area.width as usize).saturating_sub(LABEL_WIDTH + 2);
    let visible = tail(display_value, room);

    let line = Line::from(vec![
        Span::styled(format!("{:<LABEL_WIDTH$}", field.label), label_style),
        Span::styled(visible, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Last `max_chars` characters of `s`
fn tail(s: &str, max_chars: usize) -> &str {
    let count = s.chars().count();
    if count <= max_chars {
        return s;
    }
    let skip = count - max_chars;
    match s.char_indices().nth(skip) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}
