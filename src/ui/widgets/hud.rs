use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::{AppMode, AppState},
    ui::theme::{Chrome, ColorCapability, to_color},
};

const HINTS: &str = "/ search  d dashboard  m instruments  q quit";

/// One-line summary across the top of the scene.
pub fn render_top_bar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    chrome: Chrome,
    capability: ColorCapability,
) {
    let bar = Rect { height: 1, ..area };
    let base = Style::default()
        .fg(to_color(chrome.text, capability))
        .bg(to_color(chrome.surface, capability));
    let muted = base.fg(to_color(chrome.muted, capability));

    let mut spans = Vec::new();
    if let Some(snapshot) = state.snapshot() {
        let category = state.scene.category;
        spans.push(Span::styled(
            format!(" {} ", category.icon(state.scene.day_phase)),
            base.fg(to_color(chrome.accent, capability)),
        ));
        spans.push(Span::styled(
            snapshot.display_name(),
            base.add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!("  {}°C", snapshot.current_temp()), base));
        spans.push(Span::styled(format!("  {}", snapshot.description), muted));
        spans.push(Span::styled(
            format!("  Humidity {:.0}%", snapshot.readings.humidity),
            muted,
        ));
    } else {
        spans.push(Span::styled(format!(" {}", state.city), base));
    }

    spans.push(Span::styled("  ", base));
    spans.push(status_span(state, base, chrome, capability));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), bar);
}

fn status_span(
    state: &AppState,
    base: Style,
    chrome: Chrome,
    capability: ColorCapability,
) -> Span<'static> {
    if let Some(error) = &state.last_error {
        return Span::styled(
            format!("⚠ {error}"),
            base.fg(to_color(chrome.danger, capability))
                .add_modifier(Modifier::BOLD),
        );
    }
    if state.fetch_in_flight || state.mode == AppMode::Loading {
        return Span::styled("Loading…", base.fg(to_color(chrome.accent, capability)));
    }
    Span::styled(HINTS, base.fg(to_color(chrome.muted, capability)))
}

/// Search prompt on the bottom row while the search line is open.
pub fn render_search_line(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    chrome: Chrome,
    capability: ColorCapability,
) {
    if !state.search_open || area.height == 0 {
        return;
    }
    let line_area = Rect {
        y: area.bottom() - 1,
        height: 1,
        ..area
    };
    let style = Style::default()
        .fg(to_color(chrome.text, capability))
        .bg(to_color(chrome.surface, capability));
    let line = Line::from(vec![
        Span::styled(" City: ", style.add_modifier(Modifier::BOLD)),
        Span::styled(format!("{}▏", state.search_query), style),
        Span::styled(
            "  Enter search  Esc cancel",
            style.fg(to_color(chrome.muted, capability)),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(style), line_area);
}
