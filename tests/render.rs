mod common;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use tokio::sync::mpsc;
use weather_scene::{
    app::{
        instruments::InstrumentKind,
        state::{AppMode, AppState, ViewMode},
    },
    cli::Cli,
    ui::{self, widgets::dashboard::dashboard_text},
};

use common::{NOON_TS, cli_with_key, now, report};

fn draw(state: &AppState, cli: &Cli, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, state, cli)).unwrap();
    rows(terminal.backend().buffer())
}

fn rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

#[tokio::test]
async fn hud_shows_summary_and_instruments() {
    let cli = cli_with_key(Some("test-key"));
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(8);
    state.apply_report_at(report(803, 5.0), NOON_TS, &tx);
    state.mode = AppMode::Ready;
    state.viewport = (120, 30);
    state.instruments.add(InstrumentKind::Wind, 120, 30);

    let screen = draw(&state, &cli, 120, 30);
    assert!(contains(&screen, "London, GB"));
    assert!(contains(&screen, "16°C"));
    assert!(contains(&screen, "Wind"));
    assert!(contains(&screen, "5.0 m/s W"));
    assert!(contains(&screen, "q quit"));
}

#[test]
fn dashboard_waits_for_data() {
    let cli = cli_with_key(Some("test-key"));
    let mut state = AppState::new(&cli);
    state.view = ViewMode::Dashboard;

    let screen = draw(&state, &cli, 80, 24);
    assert!(contains(&screen, "Loading Dashboard Data..."));
}

#[test]
fn dashboard_shows_error_before_first_report() {
    let cli = cli_with_key(None);
    let mut state = AppState::new(&cli);
    state.view = ViewMode::Dashboard;
    state.mode = AppMode::Error;
    state.last_error = Some("Missing API key".to_string());

    let screen = draw(&state, &cli, 80, 24);
    assert!(contains(&screen, "Missing API key"));
    assert!(!contains(&screen, "Loading Dashboard Data..."));
}

#[tokio::test]
async fn dashboard_grid_lists_every_card() {
    let cli = cli_with_key(Some("test-key"));
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(8);
    state.apply_report_at(report(803, 5.0), NOON_TS, &tx);
    state.view = ViewMode::Dashboard;

    let screen = draw(&state, &cli, 120, 30);
    for title in ["Location", "Atmosphere", "Wind", "Astronomy", "Air quality", "Precipitation"] {
        assert!(contains(&screen, title), "missing card {title}");
    }
    assert!(contains(&screen, "AQI 2 / 5"));
    assert!(contains(&screen, "Sunset 09:00 PM"));
}

#[test]
fn tiny_terminal_gets_a_warning() {
    let cli = cli_with_key(Some("test-key"));
    let state = AppState::new(&cli);
    let screen = draw(&state, &cli, 30, 8);
    assert!(contains(&screen, "Terminal too small"));
}

#[test]
fn search_line_is_drawn_when_open() {
    let cli = cli_with_key(Some("test-key"));
    let mut state = AppState::new(&cli);
    state.search_open = true;
    state.search_query = "Par".to_string();

    let screen = draw(&state, &cli, 80, 24);
    assert!(contains(&screen, "Par"));
}

#[test]
fn one_shot_text_snapshot() {
    let text = dashboard_text(&report(802, 4.0), now());
    insta::assert_snapshot!(text.trim_end(), @r"
[Location]
  London, GB
  16°C  scattered clouds
  Local time 01:00 PM
  51.51°, -0.13°
[Atmosphere]
  Feels like 15°C
  Humidity 71%
  Pressure 1012 hPa
  Visibility 10.0 km
[Wind]
  4.0 m/s W
  Direction 250°
  Gusts --
[Astronomy]
  Sunrise 06:00 AM
  Sunset 09:00 PM
  ◑ Waning Crescent
[Air quality]
  AQI 2 / 5
  Fair
[Precipitation]
  Rain 1h --
  Snow 1h --
");
}
