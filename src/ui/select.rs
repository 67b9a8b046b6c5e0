//! Selection screen rendering
//!
//! Grouped skill list with toggles, plus the two stat cards: how many of
//! the 5 slots are filled and which category kinds are covered.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::form::MAX_SELECTED;
use crate::theme::{
    ACCENT_PRIMARY, BG_SECONDARY, BORDER_SUBTLE, GREEN_SUCCESS, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::truncate_label;

/// Render the selection screen into `area`
pub fn render_selection(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Stat cards
            Constraint::Min(3),    // Skill list
        ])
        .split(area);

    render_selection_cards(frame, layout[0], app);
    render_skill_list(frame, layout[1], app);
}

/// Render the selected-count and coverage stat cards
fn render_selection_cards(frame: &mut Frame, area: Rect, app: &App) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let card_block = || {
        Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_SECONDARY))
    };

    // Left card: selected count
    let count = app.form.selected.len();
    let count_color = if count == MAX_SELECTED {
        GREEN_SUCCESS
    } else {
        ACCENT_PRIMARY
    };
    let count_content = vec![
        Line::from(Span::styled(
            format!("{}/{}", count, MAX_SELECTED),
            Style::default().fg(count_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("SELECTED", Style::default().fg(TEXT_MUTED))),
    ];
    let count_paragraph = Paragraph::new(count_content)
        .block(card_block())
        .alignment(Alignment::Center);
    frame.render_widget(count_paragraph, card_layout[0]);

    // Right card: category coverage badges
    let coverage = app.form.coverage(&app.catalog);
    let badge = |label: &str, covered: bool| -> Vec<Span<'static>> {
        let (mark, color) = if covered {
            ("✓", GREEN_SUCCESS)
        } else {
            ("○", TEXT_MUTED)
        };
        vec![
            Span::styled(format!("{} ", mark), Style::default().fg(color)),
            Span::styled(
                format!("{}  ", label),
                Style::default().fg(if covered { TEXT_PRIMARY } else { TEXT_MUTED }),
            ),
        ]
    };

    let mut badge_spans = Vec::new();
    badge_spans.extend(badge("Code", coverage.code));
    badge_spans.extend(badge("Planning", coverage.planning));
    badge_spans.extend(badge("Comms", coverage.communication));

    let coverage_content = vec![
        Line::from(badge_spans),
        Line::from(Span::styled("COVERAGE", Style::default().fg(TEXT_MUTED))),
    ];
    let coverage_paragraph = Paragraph::new(coverage_content)
        .block(card_block())
        .alignment(Alignment::Center);
    frame.render_widget(coverage_paragraph, card_layout[1]);
}

/// Render the grouped skill list with the selection cursor
fn render_skill_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Pick your 5 strongest skills ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let at_cap = app.form.selected.len() == MAX_SELECTED;
    let label_width = inner.width.saturating_sub(8) as usize;

    let mut lines: Vec<Line> = Vec::new();
    let mut flat_index = 0usize;
    let mut cursor_line = 0usize;

    for category in &app.catalog.categories {
        lines.push(Line::from(vec![
            Span::styled(
                category.label.clone(),
                Style::default()
                    .fg(TEXT_SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", category.kind.label()),
                Style::default().fg(TEXT_MUTED),
            ),
        ]));

        for skill in &category.skills {
            let selected = app.form.is_selected(skill);
            let under_cursor = flat_index == app.select_cursor;
            if under_cursor {
                cursor_line = lines.len();
            }

            let mark = if selected { "[x]" } else { "[ ]" };
            // Grey out unselected entries once the cap is reached
            let text_color = if selected {
                ACCENT_PRIMARY
            } else if at_cap {
                TEXT_MUTED
            } else {
                TEXT_PRIMARY
            };
            let mut style = Style::default().fg(text_color);
            if under_cursor {
                style = style.bg(BG_SECONDARY).add_modifier(Modifier::BOLD);
            }

            lines.push(Line::from(vec![
                Span::styled(if under_cursor { " > " } else { "   " }, style),
                Span::styled(format!("{} ", mark), style),
                Span::styled(truncate_label(skill, label_width), style),
            ]));
            flat_index += 1;
        }
        lines.push(Line::default());
    }

    // Keep the cursor visible when the list is taller than the panel
    let visible = inner.height as usize;
    let scroll = cursor_line.saturating_sub(visible.saturating_sub(1));

    let paragraph = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(paragraph, inner);
}
