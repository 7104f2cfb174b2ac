use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::shared::{centered_rect, panel_block};
use crate::{
    app::instruments::InstrumentKind,
    ui::theme::{Chrome, ColorCapability, to_color},
};

pub fn render(frame: &mut Frame, area: Rect, chrome: Chrome, capability: ColorCapability) {
    let key_style = Style::default()
        .fg(to_color(chrome.accent, capability))
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = InstrumentKind::ALL
        .iter()
        .enumerate()
        .map(|(idx, kind)| {
            Line::from(vec![
                Span::styled(format!(" {} ", idx + 1), key_style),
                Span::raw(kind.title()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Esc close",
        Style::default().fg(to_color(chrome.muted, capability)),
    )));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_rect(26, height, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(panel_block("Add instrument", chrome, capability)),
        popup,
    );
}
