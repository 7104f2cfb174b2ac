use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders},
};

use crate::ui::theme::{Chrome, ColorCapability, to_color};

pub(crate) fn panel_style(chrome: Chrome, capability: ColorCapability) -> Style {
    Style::default()
        .fg(to_color(chrome.text, capability))
        .bg(to_color(chrome.surface, capability))
}

pub(crate) fn panel_block<'a>(
    title: &'a str,
    chrome: Chrome,
    capability: ColorCapability,
) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(panel_style(chrome, capability))
        .border_style(
            Style::default()
                .fg(to_color(chrome.border, capability))
                .bg(to_color(chrome.surface, capability)),
        )
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
