use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{
    sync::mpsc::Sender,
    task::AbortHandle,
    time::{interval, sleep},
};

use crate::{
    domain::weather::WeatherReport,
    scene::{FLASH_DURATION, Intensity, LightningPulse, SystemRandom, next_flash_delay},
};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    FetchStarted,
    FetchSucceeded(WeatherReport),
    FetchFailed(String),
    Lightning(LightningPulse),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn start_frame_task(tx: Sender<AppEvent>, fps: u8) -> AbortHandle {
    let fps = fps.max(15);
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(1000_u64 / u64::from(fps)));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    })
    .abort_handle()
}

/// Strikes immediately, then keeps striking at random gaps until aborted or
/// the receiver goes away. Every pulse carries `generation`.
pub fn start_lightning_task(
    tx: Sender<AppEvent>,
    intensity: Intensity,
    generation: u64,
) -> AbortHandle {
    tokio::spawn(async move {
        loop {
            let on = LightningPulse {
                generation,
                visible: true,
            };
            if tx.send(AppEvent::Lightning(on)).await.is_err() {
                break;
            }
            let gap = next_flash_delay(intensity, &mut SystemRandom);
            sleep(FLASH_DURATION).await;
            let off = LightningPulse {
                generation,
                visible: false,
            };
            if tx.send(AppEvent::Lightning(off)).await.is_err() {
                break;
            }
            sleep(gap.saturating_sub(FLASH_DURATION)).await;
        }
    })
    .abort_handle()
}
