pub mod theme;
pub mod widgets;

use chrono::Utc;
use ratatui::{
    Frame,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppState, ViewMode},
    cli::Cli,
};

use self::{
    theme::{chrome_for, detect_color_capability},
    widgets::scene::SceneCanvas,
};

pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

pub fn render(frame: &mut Frame, state: &AppState, cli: &Cli) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .block(Block::default().borders(Borders::ALL).title("weather-scene"));
        frame.render_widget(warning, area);
        return;
    }

    let capability = detect_color_capability(cli.effective_color_mode());
    let chrome = chrome_for(state.scene.palette(), state.scene.day_phase);
    let now = Utc::now();

    match state.view {
        ViewMode::Hud => {
            frame.render_widget(
                SceneCanvas {
                    scene: &state.scene,
                    time_s: state.scene_time(),
                    capability,
                },
                area,
            );
            widgets::hud::render_top_bar(frame, area, state, chrome, capability);
            widgets::instruments::render(frame, area, state, now, chrome, capability);
            if state.menu_open {
                widgets::menu::render(frame, area, chrome, capability);
            }
        }
        ViewMode::Dashboard => {
            widgets::dashboard::render(frame, area, state, now, chrome, capability);
        }
    }
    widgets::hud::render_search_line(frame, area, state, chrome, capability);
}
