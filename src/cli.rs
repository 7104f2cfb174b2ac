#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const DEFAULT_CITY: &str = "London";
pub const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const AIR_QUALITY_URL: &str = "https://api.openweathermap.org/data/2.5/air_pollution";

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ViewArg {
    /// Animated scene with floating instruments
    #[default]
    Hud,
    /// Card grid of every reading
    Dashboard,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-scene",
    version,
    about = "Animated weather scene for the terminal"
)]
pub struct Cli {
    /// City to look up (default: London)
    pub city: Option<String>,

    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Freeze the scene (no particle or wave motion)
    #[arg(long)]
    pub no_animation: bool,

    /// Disable lightning flash
    #[arg(long)]
    pub no_flash: bool,

    /// Initial view
    #[arg(long, value_enum, default_value_t = ViewArg::Hud)]
    pub view: ViewArg,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Current-weather endpoint override
    #[arg(long)]
    pub weather_url: Option<String>,

    /// Air-pollution endpoint override
    #[arg(long)]
    pub air_quality_url: Option<String>,

    /// Write diagnostics to this file (RUST_LOG filters)
    #[arg(long, env = "WEATHER_SCENE_LOG")]
    pub log_file: Option<PathBuf>,

    /// Print the dashboard to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    #[must_use]
    pub fn default_city(&self) -> String {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .unwrap_or(DEFAULT_CITY)
            .to_string()
    }

    /// The configured key, treating a blank value as absent.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    #[must_use]
    pub fn weather_url(&self) -> &str {
        self.weather_url.as_deref().unwrap_or(WEATHER_URL)
    }

    #[must_use]
    pub fn air_quality_url(&self) -> &str {
        self.air_quality_url.as_deref().unwrap_or(AIR_QUALITY_URL)
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{AIR_QUALITY_URL, Cli, ColorArg, ViewArg, WEATHER_URL};

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["weather-scene"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn defaults_to_london_and_hud() {
        let cli = parse(&[]);
        assert_eq!(cli.default_city(), "London");
        assert_eq!(cli.view, ViewArg::Hud);
        assert_eq!(cli.fps, 30);
        assert_eq!(cli.weather_url(), WEATHER_URL);
        assert_eq!(cli.air_quality_url(), AIR_QUALITY_URL);
    }

    #[test]
    fn blank_city_falls_back_to_default() {
        let cli = parse(&["   "]);
        assert_eq!(cli.default_city(), "London");
        let cli = parse(&["Reykjavik"]);
        assert_eq!(cli.default_city(), "Reykjavik");
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let cli = parse(&["--api-key", "  "]);
        assert_eq!(cli.api_key(), None);
        let cli = parse(&["--api-key", "abc123"]);
        assert_eq!(cli.api_key(), Some("abc123"));
    }

    #[test]
    fn rejects_fps_out_of_range() {
        assert!(Cli::try_parse_from(["weather-scene", "--fps", "10"]).is_err());
        assert!(Cli::try_parse_from(["weather-scene", "--fps", "61"]).is_err());
        assert_eq!(parse(&["--fps", "60"]).fps, 60);
    }

    #[test]
    fn parses_dashboard_view() {
        let cli = parse(&["--view", "dashboard"]);
        assert_eq!(cli.view, ViewArg::Dashboard);
    }

    #[test]
    fn endpoint_overrides_win() {
        let cli = parse(&[
            "--weather-url",
            "http://127.0.0.1:1/w",
            "--air-quality-url",
            "http://127.0.0.1:1/a",
        ]);
        assert_eq!(cli.weather_url(), "http://127.0.0.1:1/w");
        assert_eq!(cli.air_quality_url(), "http://127.0.0.1:1/a");
    }

    #[test]
    fn rejects_color_and_no_color_together() {
        let err = Cli::try_parse_from(["weather-scene", "--color", "always", "--no-color"])
            .expect_err("expected conflict");
        let rendered = err.to_string();
        assert!(rendered.contains("--color"));
        assert!(rendered.contains("--no-color"));
    }

    #[test]
    fn effective_color_mode_prefers_no_color() {
        assert_eq!(parse(&["--no-color"]).effective_color_mode(), ColorArg::Never);
        assert_eq!(
            parse(&["--color", "always"]).effective_color_mode(),
            ColorArg::Always
        );
    }
}
