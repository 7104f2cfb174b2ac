use super::*;

impl AppState {
    /// Kicks off a background fetch for `self.city`. A missing key is
    /// reported straight away without touching the network.
    pub(crate) async fn start_fetch(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        if self.fetch_in_flight {
            debug!("fetch already in flight");
            return Ok(());
        }
        let Some(api_key) = cli.api_key() else {
            warn!("no API key configured; set OPENWEATHER_API_KEY or --api-key");
            self.fetch_in_flight = false;
            self.last_error = Some(FetchError::MissingApiKey.user_message().to_string());
            if self.report.is_none() {
                self.mode = AppMode::Error;
            }
            return Ok(());
        };

        tx.send(AppEvent::FetchStarted).await?;
        self.fetch_in_flight = true;

        let service = WeatherService::new(Some(api_key), cli.weather_url(), cli.air_quality_url());
        let city = self.city.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            match service.fetch_report(&city).await {
                Ok(report) => {
                    let _ = tx2.send(AppEvent::FetchSucceeded(report)).await;
                }
                Err(err) => {
                    warn!(city, error = %err, "weather fetch failed");
                    let _ = tx2
                        .send(AppEvent::FetchFailed(err.user_message().to_string()))
                        .await;
                }
            }
        });
        Ok(())
    }

    /// Takes the search line as the new city and fetches it. Blank input
    /// just closes the line.
    pub(crate) async fn submit_search(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        self.search_open = false;
        let query = self.search_query.trim().to_string();
        self.search_query.clear();
        if query.is_empty() {
            return Ok(());
        }
        info!(city = %query, "search submitted");
        self.city = query;
        self.start_fetch(tx, cli).await
    }
}
