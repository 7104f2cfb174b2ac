use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph},
};

use super::{
    readouts::{Readout, readout_lines},
    shared::panel_block,
};
use crate::{
    app::{
        instruments::{CARD_HEIGHT, CARD_WIDTH, Instrument},
        state::AppState,
    },
    ui::theme::{Chrome, ColorCapability, to_color},
};

/// Screen rect for a card, or `None` when it does not fit inside `area`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub(crate) fn card_rect(item: &Instrument, area: Rect) -> Option<Rect> {
    if item.x < 0 || item.y < 0 {
        return None;
    }
    let rect = Rect::new(
        area.x.saturating_add(item.x as u16),
        area.y.saturating_add(item.y as u16),
        CARD_WIDTH,
        CARD_HEIGHT,
    );
    (rect.right() <= area.right() && rect.bottom() <= area.bottom()).then_some(rect)
}

/// Cards back to front, so the highest `z` ends up on top.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    now: DateTime<Utc>,
    chrome: Chrome,
    capability: ColorCapability,
) {
    for item in state.instruments.draw_order() {
        let Some(rect) = card_rect(&item, area) else {
            continue;
        };
        let readout = Readout::from(item.kind);
        let dragging = state.instruments.dragging() == Some(item.id);
        let mut block = panel_block(readout.title(), chrome, capability)
            .title_top(Line::from("x ").right_aligned());
        if dragging {
            block = block.border_style(
                Style::default()
                    .fg(to_color(chrome.accent, capability))
                    .bg(to_color(chrome.surface, capability))
                    .add_modifier(Modifier::BOLD),
            );
        }
        let lines: Vec<Line> = readout_lines(readout, state.report.as_ref(), now)
            .into_iter()
            .map(Line::from)
            .collect();
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}
