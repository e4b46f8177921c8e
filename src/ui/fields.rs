//! Form field rows and action buttons

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::form::{FormInputs, ScreenIndicators};
use crate::models::{Field, Focus, GENDER_OPTIONS};
use crate::theme::{
    BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PRIMARY, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::utils::tail_truncate;

/// Width of the label column, including the trailing gap
pub const LABEL_WIDTH: u16 = 16;

/// Radio group rendering, e.g. "( ) Male  (•) Female  ( ) Other"
pub fn choice_text(selected: Option<usize>) -> String {
    GENDER_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mark = if selected == Some(i) { "•" } else { " " };
            format!("({}) {}", mark, option)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render the eight field rows inside a bordered block.
///
/// Returns the terminal cursor position for the focused text field.
pub fn render_fields(
    area: Rect,
    inputs: &FormInputs,
    focus: Focus,
    frame: &mut Frame,
) -> Option<(u16, u16)> {
    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_width = inner.width.saturating_sub(LABEL_WIDTH + 1) as usize;
    let mut cursor = None;

    for (row, field) in Field::ALL.iter().enumerate() {
        let y = inner.y + row as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let focused = focus == Focus::Field(*field);

        let label_style = if focused {
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY)
        };
        let value_style = if focused {
            Style::default().fg(TEXT_PRIMARY).bg(BG_TERTIARY)
        } else {
            Style::default().fg(TEXT_PRIMARY)
        };

        let value = if field.is_choice() {
            choice_text(inputs.choice())
        } else {
            tail_truncate(inputs.value(*field), value_width)
        };

        let line = Line::from(vec![
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize),
                label_style,
            ),
            Span::styled(value.clone(), value_style),
        ]);
        frame.render_widget(Paragraph::new(line), Rect::new(inner.x, y, inner.width, 1));

        if focused && !field.is_choice() {
            let x = inner.x + LABEL_WIDTH + value.chars().count() as u16;
            cursor = Some((x.min(inner.x + inner.width.saturating_sub(1)), y));
        }
    }

    cursor
}

/// Render the Submit and Download buttons side by side
pub fn render_buttons(area: Rect, indicators: &ScreenIndicators, focus: Focus, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_button(layout[0], "Submit", true, focus == Focus::Submit, frame);
    render_button(
        layout[1],
        "Download CSV",
        indicators.download_enabled,
        focus == Focus::Download,
        frame,
    );
}

fn render_button(area: Rect, label: &str, enabled: bool, focused: bool, frame: &mut Frame) {
    // A focused disabled button keeps a muted border
    let (border_color, text_style) = match (enabled, focused) {
        (false, true) => (TEXT_MUTED, Style::default().fg(TEXT_MUTED)),
        (false, false) => (BORDER_SUBTLE, Style::default().fg(TEXT_MUTED)),
        (true, true) => (
            CYAN_PRIMARY,
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        (true, false) => (BORDER_SUBTLE, Style::default().fg(TEXT_PRIMARY)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_SECONDARY));

    let paragraph = Paragraph::new(Line::from(Span::styled(label.to_string(), text_style)))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
