//! UI module for skills-tui
//!
//! Per-stage rendering for the questionnaire screens plus the shared
//! message line and key-hint bar.

pub mod greeting;
pub mod helpers;
mod rate;
mod select;

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::form::MSG_SUBMITTED;
use crate::models::Stage;
use crate::theme::{ACCENT_PRIMARY, BG_PRIMARY, GREEN_SUCCESS, RED_ERROR};

/// Render the whole frame for the current stage
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(BG_PRIMARY)),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Stage content
            Constraint::Length(1), // Transient message line
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    match app.form.stage {
        Stage::Greeting => greeting::render_greeting(frame, layout[0], app),
        Stage::Selecting => select::render_selection(frame, layout[0], app),
        Stage::Rating => rate::render_rating(frame, layout[0], app),
    }

    render_message_line(frame, layout[1], app);
    render_key_hints(frame, layout[2], app.form.stage);
}

/// Render the transient validation/success message, if any
fn render_message_line(frame: &mut Frame, area: Rect, app: &App) {
    let Some(message) = &app.form.message else {
        return;
    };
    let color = if message == MSG_SUBMITTED {
        GREEN_SUCCESS
    } else {
        RED_ERROR
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render the bottom key-hint bar for the current stage
fn render_key_hints(frame: &mut Frame, area: Rect, stage: Stage) {
    let hints = match stage {
        Stage::Greeting => " Enter: Begin | Esc: Back | q: Quit ",
        Stage::Selecting => " ↑/↓: Move | Space: Toggle | Enter: Continue | Esc: Back | q: Quit ",
        Stage::Rating => " ↑/↓: Skill | ←/→ or 0-5: Rate | Enter: Submit | Esc: Back | q: Quit ",
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(BG_PRIMARY).bg(ACCENT_PRIMARY));
    frame.render_widget(bar, area);
}
