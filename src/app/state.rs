use anyhow::Result;
use chrono::Utc;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use tokio::{sync::mpsc, task::AbortHandle};
use tracing::{debug, info, warn};

use crate::{
    app::{
        events::{AppEvent, start_frame_task, start_lightning_task},
        instruments::{InstrumentBoard, InstrumentKind},
    },
    cli::{Cli, ViewArg},
    data::{FetchError, WeatherService},
    domain::weather::{WeatherReport, WeatherSnapshot},
    scene::{LightningPulse, SceneState, SceneUpdate, StormTransition, SystemRandom},
};

mod input;
mod methods_fetch;
mod methods_scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Hud,
    Dashboard,
}

impl ViewMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hud => Self::Dashboard,
            Self::Dashboard => Self::Hud,
        }
    }
}

impl From<ViewArg> for ViewMode {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Hud => Self::Hud,
            ViewArg::Dashboard => Self::Dashboard,
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub view: ViewMode,
    pub city: String,
    pub search_open: bool,
    pub search_query: String,
    pub menu_open: bool,
    pub last_error: Option<String>,
    pub report: Option<WeatherReport>,
    pub scene: SceneState,
    pub instruments: InstrumentBoard,
    pub fetch_in_flight: bool,
    pub frame_tick: u64,
    pub fps: u8,
    pub animate: bool,
    pub flash_enabled: bool,
    pub viewport: (u16, u16),
    lightning_task: Option<AbortHandle>,
    frame_task: Option<AbortHandle>,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        Self {
            mode: AppMode::Loading,
            running: true,
            view: cli.view.into(),
            city: cli.default_city(),
            search_open: false,
            search_query: String::new(),
            menu_open: false,
            last_error: None,
            report: None,
            scene: SceneState::new(&mut SystemRandom),
            instruments: InstrumentBoard::default(),
            fetch_in_flight: false,
            frame_tick: 0,
            fps: cli.fps,
            animate: !cli.no_animation,
            flash_enabled: !cli.no_flash,
            viewport: (80, 24),
            lightning_task: None,
            frame_task: None,
        }
    }

    /// Seconds of scene animation; frozen at zero when animation is off.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn scene_time(&self) -> f32 {
        if !self.animate {
            return 0.0;
        }
        self.frame_tick as f32 / f32::from(self.fps.max(1))
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.report.as_ref().map(|report| &report.snapshot)
    }

    #[must_use]
    pub fn lightning_armed(&self) -> bool {
        self.lightning_task.is_some()
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                if let Some(task) = self.frame_task.replace(start_frame_task(tx.clone(), cli.fps)) {
                    task.abort();
                }
                self.start_fetch(tx, cli).await?;
            }
            AppEvent::TickFrame => {
                self.frame_tick = self.frame_tick.saturating_add(1);
            }
            AppEvent::Input(event) => self.handle_input(event, tx, cli).await?,
            AppEvent::FetchStarted => {
                self.fetch_in_flight = true;
                self.last_error = None;
                if self.report.is_none() {
                    self.mode = AppMode::Loading;
                }
            }
            AppEvent::FetchSucceeded(report) => {
                self.fetch_in_flight = false;
                self.last_error = None;
                self.mode = AppMode::Ready;
                self.apply_report_at(report, Utc::now().timestamp(), tx);
            }
            AppEvent::FetchFailed(message) => {
                self.fetch_in_flight = false;
                self.last_error = Some(message);
                if self.report.is_none() {
                    self.mode = AppMode::Error;
                }
            }
            AppEvent::Lightning(pulse) => self.apply_lightning(pulse),
            AppEvent::Quit => {
                self.cancel_lightning();
                if let Some(task) = self.frame_task.take() {
                    task.abort();
                }
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }
}
