//! Rating screen rendering
//!
//! One card per selected skill with a gauge for the 0-5 self-rating. The
//! focused card gets a highlighted border and a pulsing indicator.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::App;
use crate::form::{FormState, MAX_RATING};
use crate::theme::{
    pulse_color, ACCENT_DIM, ACCENT_PRIMARY, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE,
    GREEN_ACTIVE, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::ui::helpers::truncate_label;

/// Height of one skill card (border + title + gauge + border)
const CARD_HEIGHT: u16 = 4;

/// Render the rating screen into `area`
pub fn render_rating(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = app
        .form
        .selected
        .iter()
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, skill) in app.form.selected.iter().enumerate() {
        render_skill_card(
            frame,
            layout[i],
            skill,
            app.form.rating_of(skill),
            i == app.rate_cursor,
            app.animation_tick,
        );
    }
}

/// Render a single skill rating card
fn render_skill_card(
    frame: &mut Frame,
    area: Rect,
    skill: &str,
    rating: Option<u8>,
    focused: bool,
    tick: u64,
) {
    let (border_color, bg_color) = if focused {
        (ACCENT_PRIMARY, BG_TERTIARY)
    } else {
        (BORDER_SUBTLE, BG_SECONDARY)
    };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));
    let inner = card_block.inner(area);
    frame.render_widget(card_block, area);

    let inner_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title line
            Constraint::Length(1), // Gauge
        ])
        .split(inner);

    let indicator_color = if focused {
        pulse_color(tick, GREEN_ACTIVE, ACCENT_DIM)
    } else {
        TEXT_MUTED
    };
    let rating_text = match rating {
        Some(r) => format!("{}/{}", r, MAX_RATING),
        None => "-/5".to_string(),
    };

    let label_width = inner.width.saturating_sub(8) as usize;
    let title_line = Line::from(vec![
        Span::styled("● ", Style::default().fg(indicator_color)),
        Span::styled(
            truncate_label(skill, label_width),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", rating_text),
            Style::default().fg(TEXT_MUTED),
        ),
    ]);
    frame.render_widget(Paragraph::new(vec![title_line]), inner_layout[0]);

    let percent = rating.map(FormState::percentage).unwrap_or(0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(ACCENT_PRIMARY).bg(BG_SECONDARY))
        .percent(u16::from(percent))
        .label("");
    frame.render_widget(gauge, inner_layout[1]);
}
