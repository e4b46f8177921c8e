//! Success and error banner rendering

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::form::ScreenIndicators;
use crate::theme::{BG_SECONDARY, GREEN_SUCCESS, RED_ERROR};

pub const SUCCESS_TEXT: &str = "✓ Details validated. You can now download the CSV file.";
pub const ERROR_TEXT: &str = "✗ Please fill in all fields before submitting.";

/// Pick the banner to show, if any. The error banner wins when both are up.
pub fn banner_for(indicators: &ScreenIndicators) -> Option<(&'static str, Color)> {
    if indicators.error_visible {
        Some((ERROR_TEXT, RED_ERROR))
    } else if indicators.success_visible {
        Some((SUCCESS_TEXT, GREEN_SUCCESS))
    } else {
        None
    }
}

/// Render the visible banner (or nothing) in a given area
pub fn render_banner(area: Rect, indicators: &ScreenIndicators, frame: &mut Frame) {
    let Some((text, color)) = banner_for(indicators) else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(BG_SECONDARY));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(block)
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
