//! Grouped card list rendering

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::grouping::GroupedView;
use crate::models::{CardState, Registry};
use crate::theme::{ACCENT_PRIMARY, TEXT_MUTED};
use crate::ui::cards::{render_workshop_card, CARD_HEIGHT};
use crate::ui::sections::render_empty_state;

/// Render the card list arranged by the grouped view.
///
/// `selected` and `scroll` are positions in the flattened card order. Cards
/// before the scroll window are skipped; rendering stops when the area is
/// full. Section headings are shown only when grouping is enabled, and a
/// heading is suppressed when its whole group sits above the window.
#[allow(clippy::too_many_arguments)]
pub fn render_workshop_list(
    area: Rect,
    registry: &Registry,
    view: &GroupedView,
    show_headings: bool,
    selected: usize,
    scroll: usize,
    frame: &mut Frame,
) {
    if view.is_empty() {
        render_empty_state(area, frame);
        return;
    }

    let bottom = area.y + area.height;
    let mut y = area.y;
    let mut flat_pos = 0usize;

    for group in &view.groups {
        let group_end = flat_pos + group.items.len();
        if group_end <= scroll {
            flat_pos = group_end;
            continue;
        }

        if show_headings {
            if y + 1 > bottom {
                return;
            }
            let heading = Line::from(vec![
                Span::styled(
                    group.label.clone(),
                    Style::default()
                        .fg(ACCENT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({})", group.items.len()),
                    Style::default().fg(TEXT_MUTED),
                ),
            ]);
            let heading_area = Rect::new(area.x, y, area.width, 1);
            frame.render_widget(Paragraph::new(heading), heading_area);
            y += 1;
        }

        for &idx in &group.items {
            let pos = flat_pos;
            flat_pos += 1;
            if pos < scroll {
                continue;
            }
            if y + CARD_HEIGHT > bottom {
                return;
            }
            let state = if pos == selected {
                CardState::Selected
            } else {
                CardState::Normal
            };
            let card_area = Rect::new(area.x, y, area.width, CARD_HEIGHT);
            render_workshop_card(card_area, &registry.workshops[idx], state, frame);
            y += CARD_HEIGHT;
        }
    }
}
