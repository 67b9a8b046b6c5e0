//! Greeting screen rendering
//!
//! Intro card plus the decorative dot field. Dots are placed by bounded
//! rejection sampling so degenerate (tiny) areas never loop forever; the
//! field is cached on the App and regenerated only when the area resizes.

use rand::Rng;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::theme::{
    ACCENT_DIM, ACCENT_PRIMARY, BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_SECONDARY,
};
use crate::ui::helpers::wrap_text;

/// Dots per 1000 cells of area
const DOT_DENSITY: usize = 12;

/// No two dots closer than this (Chebyshev distance)
const MIN_DOT_DISTANCE: u16 = 3;

/// Attempts per dot before giving up on placing it
const MAX_PLACEMENT_ATTEMPTS: usize = 30;

const INTRO: &str = "Time for a skills check. Pick the 5 technical skills you \
                     are strongest in, covering code, planning and communication, \
                     then rate yourself on each. No pressure, no wrong answers.";

/// Place `count` dots inside a width x height area, keeping every pair at
/// least `min_dist` apart. Rejection sampling with a bounded retry count;
/// returns fewer dots when the area cannot fit them all.
pub fn scatter_dots<R: Rng>(
    rng: &mut R,
    width: u16,
    height: u16,
    count: usize,
    min_dist: u16,
) -> Vec<(u16, u16)> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut dots: Vec<(u16, u16)> = Vec::with_capacity(count);
    for _ in 0..count {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            let clear = dots.iter().all(|&(dx, dy)| {
                let far_x = x.abs_diff(dx) >= min_dist;
                let far_y = y.abs_diff(dy) >= min_dist;
                far_x || far_y
            });
            if clear {
                dots.push((x, y));
                break;
            }
        }
    }
    dots
}

/// Render the greeting screen into `area`
pub fn render_greeting(frame: &mut Frame, area: Rect, app: &mut App) {
    // Regenerate the dot field only when the area changes size
    if app.dots_size != (area.width, area.height) {
        let count = (area.width as usize * area.height as usize) * DOT_DENSITY / 1000;
        app.dots = scatter_dots(
            &mut rand::thread_rng(),
            area.width,
            area.height,
            count,
            MIN_DOT_DISTANCE,
        );
        app.dots_size = (area.width, area.height);
    }

    let buf = frame.buffer_mut();
    for &(dx, dy) in &app.dots {
        let pos = Position::new(area.x + dx, area.y + dy);
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char('·');
            cell.set_fg(ACCENT_DIM);
        }
    }

    // Centered intro card, never wider than the frame
    let card_width = area.width.min(56);
    let card_height = area.height.min(9);
    let card = Rect {
        x: area.x + (area.width.saturating_sub(card_width)) / 2,
        y: area.y + (area.height.saturating_sub(card_height)) / 2,
        width: card_width,
        height: card_height,
    };

    let block = Block::default()
        .title(" Hard Skills ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let inner_width = card_width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = vec![Line::default()];
    for text_line in wrap_text(INTRO, inner_width) {
        lines.push(Line::from(Span::styled(
            text_line,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(TEXT_MUTED)),
        Span::styled(
            "Enter",
            Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to begin", Style::default().fg(TEXT_MUTED)),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, card);
}
