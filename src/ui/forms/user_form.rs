//! User form rendering (create and edit share one form)

use super::field_renderer::draw_field;
use crate::app::{App, SUBMIT_SHORTCUT};
use crate::state::{fields_in, FieldGroup, Focus, FIELDS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the user form. The title and button follow the draft mode.
pub fn draw_user_form(frame: &mut Frame, area: Rect, app: &App) {
    let form_focused = matches!(app.state.focus, Focus::Form);
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let title = match app.state.sync.draft().id {
        Some(id) => format!(" Edit User #{id} "),
        None => " Add User ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let address_rows = fields_in(FieldGroup::Address).count() as u16 + 2;
    let company_rows = fields_in(FieldGroup::Company).count() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Name
            Constraint::Length(1),             // Email
            Constraint::Length(1),             // Phone
            Constraint::Length(address_rows),  // Address
            Constraint::Length(company_rows),  // Company
            Constraint::Length(1),             // Website
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Validation / help
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let active = if form_focused {
        Some(app.state.form.active_field_index)
    } else {
        None
    };
    let draft = app.state.sync.draft();

    // Contact rows, then the website row after the groups
    for (slot, index) in [(0, 0), (1, 1), (2, 2), (5, 10)] {
        let field = &FIELDS[index];
        draw_field(
            frame,
            chunks[slot],
            field,
            field.value(draft),
            active == Some(index),
        );
    }

    for (slot, group) in [(3, FieldGroup::Address), (4, FieldGroup::Company)] {
        draw_group(frame, chunks[slot], app, group, active);
    }

    render_button(
        frame,
        chunks[6],
        app.state.submit_label(),
        form_focused && app.state.form.is_submit_active(),
        Color::Green,
    );

    draw_form_hint(frame, chunks[7], app);
}

/// Draw a bordered group of fields
fn draw_group(frame: &mut Frame, area: Rect, app: &App, group: FieldGroup, active: Option<usize>) {
    let group_active = active
        .and_then(|i| FIELDS.get(i))
        .is_some_and(|field| field.group == group);
    let block = Block::default()
        .title(format!(" {} ", group.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if group_active {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields: Vec<_> = fields_in(group).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); fields.len()])
        .split(inner);

    for ((index, field), row) in fields.into_iter().zip(rows.iter()) {
        draw_field(
            frame,
            *row,
            field,
            field.value(app.state.sync.draft()),
            active == Some(index),
        );
    }
}

/// Validation message when the last submit was blocked, key help otherwise
fn draw_form_hint(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.state.form.validation_error {
        Some(err) => Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field  "),
            Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
            Span::raw(": save  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": list"),
        ]),
    };
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
