//! Workshop card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{CardState, Workshop};
use crate::theme::{
    ACCENT_PRIMARY, AMBER_BADGE, BG_CARD, BG_SELECTED, BORDER_SUBTLE, ROUNDED_BORDERS,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::wrap_text;
use crate::utils::truncate_text;

/// Height of one rendered card: border, title, two description lines,
/// meta line, border.
pub const CARD_HEIGHT: u16 = 6;

/// Render a single workshop card.
///
/// The selected card gets an accent border, a brighter background, and a
/// filled indicator; every other card stays subdued.
pub fn render_workshop_card(area: Rect, workshop: &Workshop, state: CardState, frame: &mut Frame) {
    let (indicator, border_color, bg_color) = match state {
        CardState::Selected => ("●", ACCENT_PRIMARY, BG_SELECTED),
        CardState::Normal => ("○", BORDER_SUBTLE, BG_CARD),
    };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));

    let inner_area = card_block.inner(area);
    frame.render_widget(card_block, area);

    let inner_width = inner_area.width.saturating_sub(2) as usize;
    let title_width = inner_width.saturating_sub(indicator.chars().count() + 1);
    let truncated_title = truncate_text(&workshop.name, title_width);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" {} ", indicator), Style::default().fg(border_color)),
        Span::styled(
            truncated_title,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    // Up to two wrapped description lines
    for desc_line in wrap_text(&workshop.description, inner_width).into_iter().take(2) {
        lines.push(Line::from(Span::styled(
            format!("   {}", desc_line),
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    while lines.len() < 3 {
        lines.push(Line::default());
    }

    lines.push(meta_line(workshop));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner_area);
}

/// Build the meta line: unit badge, week number, publication date
fn meta_line(workshop: &Workshop) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")];

    if let Some(unit) = &workshop.unit {
        spans.push(Span::styled(
            format!("[{}]", unit),
            Style::default().fg(AMBER_BADGE),
        ));
        spans.push(Span::raw(" "));
    }
    if let Some(week) = workshop.week {
        spans.push(Span::styled(
            format!("Semana {}", week),
            Style::default().fg(TEXT_MUTED),
        ));
        spans.push(Span::raw(" "));
    }
    if let Some(published) = &workshop.published {
        spans.push(Span::styled(
            published.clone(),
            Style::default().fg(TEXT_MUTED),
        ));
    }

    Line::from(spans)
}
