use super::*;

impl AppState {
    /// Stores `report` and rebuilds the scene as seen at `now_ts`.
    pub fn apply_report_at(
        &mut self,
        report: WeatherReport,
        now_ts: i64,
        tx: &mpsc::Sender<AppEvent>,
    ) -> SceneUpdate {
        let update = self.scene.apply(&report.snapshot, now_ts, &mut SystemRandom);
        self.report = Some(report);
        match update.storm {
            StormTransition::Started { generation } | StormTransition::Restarted { generation } => {
                self.arm_lightning(tx, generation);
            }
            StormTransition::Stopped => self.cancel_lightning(),
            StormTransition::Unchanged => {}
        }
        update
    }

    fn arm_lightning(&mut self, tx: &mpsc::Sender<AppEvent>, generation: u64) {
        self.abort_lightning_task();
        if !self.flash_enabled {
            return;
        }
        debug!(generation, intensity = self.scene.intensity.value(), "lightning armed");
        self.lightning_task = Some(start_lightning_task(
            tx.clone(),
            self.scene.intensity,
            generation,
        ));
    }

    pub(crate) fn cancel_lightning(&mut self) {
        if self.abort_lightning_task() {
            debug!("lightning cancelled");
        }
        if self.scene.is_storm() || self.scene.flash_visible() {
            self.scene.lightning.cancel();
        }
    }

    fn abort_lightning_task(&mut self) -> bool {
        match self.lightning_task.take() {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }

    pub(crate) fn apply_lightning(&mut self, pulse: LightningPulse) {
        if !self.scene.apply_pulse(pulse) {
            debug!(generation = pulse.generation, "stale lightning pulse dropped");
        }
    }
}
