//! Top-level frame layout

use ratatui::{prelude::*, widgets::Paragraph};

use super::banner::render_banner;
use super::fields::{render_buttons, render_fields};
use crate::app::{App, StatusKind};
use crate::models::Field;
use crate::theme::{CYAN_PRIMARY, GREEN_SUCCESS, RED_ERROR, TEXT_MUTED};

const KEY_HINTS: &str =
    " Tab/↑↓: Move | Enter: Next/Press | ←→/Space: Choose | Ctrl+S: Submit | Ctrl+D: Download | Esc: Quit ";

/// Last download result, else the record waiting to be downloaded
fn status_line(app: &App) -> Option<Span<'static>> {
    if let Some((kind, message)) = &app.status {
        let color = match kind {
            StatusKind::Info => GREEN_SUCCESS,
            StatusKind::Failure => RED_ERROR,
        };
        return Some(Span::styled(format!(" {}", message), Style::default().fg(color)));
    }

    let record = app.controller.state().record()?;
    Some(Span::styled(
        format!(" Ready: {} ({})", record.name.trim(), record.roll_number.trim()),
        Style::default().fg(TEXT_MUTED),
    ))
}

/// Draw the whole form
pub fn draw(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                            // Title
            Constraint::Length(3),                            // Banner
            Constraint::Length(Field::ALL.len() as u16 + 2), // Field rows + borders
            Constraint::Length(3),                            // Buttons
            Constraint::Length(1),                            // Status line
            Constraint::Min(0),
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Student Registration ",
        Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, main_layout[0]);

    render_banner(main_layout[1], &app.indicators, frame);

    let cursor = render_fields(main_layout[2], &app.inputs, app.focus, frame);
    render_buttons(main_layout[3], &app.indicators, app.focus, frame);

    if let Some(status) = status_line(app) {
        frame.render_widget(Paragraph::new(status), main_layout[4]);
    }

    let keybindings =
        Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::Black).bg(TEXT_MUTED));
    frame.render_widget(keybindings, main_layout[6]);

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}
