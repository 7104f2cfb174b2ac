use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

use super::{
    readouts::{Readout, readout_lines},
    shared::{centered_rect, panel_block, panel_style},
};
use crate::{
    app::state::AppState,
    domain::weather::WeatherReport,
    ui::theme::{Chrome, ColorCapability, to_color},
};

const LOADING: &str = "Loading Dashboard Data...";

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    now: DateTime<Utc>,
    chrome: Chrome,
    capability: ColorCapability,
) {
    frame.render_widget(
        Block::default().style(panel_style(chrome, capability)),
        area,
    );

    let [header, body] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    render_header(frame, header, state, chrome, capability);

    let Some(report) = state.report.as_ref() else {
        let message = state.last_error.as_deref().unwrap_or(LOADING);
        let rect = centered_rect(
            u16::try_from(message.chars().count() + 4).unwrap_or(u16::MAX),
            3,
            body,
        );
        frame.render_widget(
            Paragraph::new(message)
                .centered()
                .block(panel_block("Dashboard", chrome, capability)),
            rect,
        );
        return;
    };

    let rows = Layout::vertical([Constraint::Ratio(1, 2); 2]).split(body);
    for (row_idx, row) in rows.iter().enumerate() {
        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(*row);
        for (col_idx, cell) in cells.iter().enumerate() {
            let readout = Readout::DASHBOARD[row_idx * 3 + col_idx];
            let lines: Vec<Line> = readout_lines(readout, Some(report), now)
                .into_iter()
                .map(Line::from)
                .collect();
            frame.render_widget(
                Paragraph::new(lines).block(panel_block(readout.title(), chrome, capability)),
                *cell,
            );
        }
    }
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    chrome: Chrome,
    capability: ColorCapability,
) {
    let title = state
        .snapshot()
        .map_or_else(|| state.city.clone(), |s| s.display_name());
    let status = match (&state.last_error, state.fetch_in_flight) {
        (Some(error), _) => format!("⚠ {error}"),
        (None, true) => "Loading…".to_string(),
        (None, false) => "d scene  / search  q quit".to_string(),
    };
    let lines = vec![
        Line::styled(
            format!(" {title}"),
            Style::default()
                .fg(to_color(chrome.accent, capability))
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!(" {status}"),
            Style::default().fg(to_color(chrome.muted, capability)),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Plain-text dashboard for `--one-shot`.
#[must_use]
pub fn dashboard_text(report: &WeatherReport, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for readout in Readout::DASHBOARD {
        out.push_str(&format!("[{}]\n", readout.title()));
        for line in readout_lines(readout, Some(report), now) {
            out.push_str("  ");
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{NOON_TS, sample_report};

    #[test]
    fn text_lists_every_card_in_order() {
        let now = DateTime::from_timestamp(NOON_TS, 0).unwrap_or_default();
        let text = dashboard_text(&sample_report(), now);
        let titles: Vec<&str> = text.lines().filter(|l| l.starts_with('[')).collect();
        assert_eq!(
            titles,
            vec![
                "[Location]",
                "[Atmosphere]",
                "[Wind]",
                "[Astronomy]",
                "[Air quality]",
                "[Precipitation]"
            ]
        );
        assert!(text.contains("  London, GB\n"));
        assert!(text.contains("  Visibility 10.0 km\n"));
    }
}
