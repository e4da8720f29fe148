use crate::api::base::DashboardApi;
use crate::errors::Result;
use crate::models::dashboard::StockSubscription;
use crate::panel::{self, Panel, CLEAR_SCREEN};
use log::{info, warn};
use serde_json::Value;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Fixed polling cadence, matching the dashboard page
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Dashboard poller/submitter: fans out the four dashboard fetches on a
/// fixed cadence and pushes form submissions, updating the shared panel.
#[derive(Clone)]
pub struct DashboardService {
    api: Arc<dyn DashboardApi + Send + Sync>,
    panel: Arc<Mutex<Panel>>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn DashboardApi + Send + Sync>) -> Self {
        Self {
            api,
            panel: Arc::new(Mutex::new(Panel::new())),
        }
    }

    pub fn panel(&self) -> Arc<Mutex<Panel>> {
        self.panel.clone()
    }

    /// One full cycle: fetch all four payloads concurrently, then update
    /// every region. If any fetch fails, no region updates this cycle.
    pub async fn refresh(&self) -> Result<()> {
        let (capital, stocks, algos, positions) = tokio::try_join!(
            self.api.fetch_capital(),
            self.api.fetch_stocks(),
            self.api.fetch_algos(),
            self.api.fetch_positions(),
        )?;

        let capital_text = panel::render_value(&capital)?;
        let stocks_text = panel::render_value(&stocks)?;
        let algos_text = panel::render_value(&algos)?;
        let positions_text = panel::render_value(&positions)?;

        let mut panel = self.panel.lock().unwrap();
        panel.set_text("capital", capital_text);
        panel.set_text("stocks", stocks_text);
        panel.set_text("algos", algos_text);
        panel.set_text("positions", positions_text);
        panel.mark_refreshed();

        Ok(())
    }

    /// Submit a stock subscription, then run one refresh cycle.
    /// Inputs are sent as given; the server owns validation.
    pub async fn add_stock(&self, symbol: &str, token: &str) -> Result<()> {
        let subscription = StockSubscription {
            symbol: symbol.to_string(),
            token: token.to_string(),
        };

        self.api.add_stock(&subscription).await?;
        self.refresh().await
    }

    /// Parse the supplied text as JSON and submit it as an algorithm
    /// config, then run one refresh cycle. Malformed text fails before
    /// any request goes out.
    pub async fn save_algo(&self, text: &str) -> Result<()> {
        let config: Value = serde_json::from_str(text)?;

        self.api.save_algo(&config).await?;
        self.refresh().await
    }

    /// Draw the current panel contents to the sink
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        let panel = self.panel.lock().unwrap();
        panel.draw(out)
    }

    /// Poll forever: one cycle immediately, then one per tick. Each tick
    /// spawns an independent cycle, so a slow cycle never delays the next
    /// tick; overlapping cycles race and the last writer wins.
    pub async fn run(&self) -> Result<()> {
        info!("Polling dashboard every {:?}", POLL_INTERVAL);

        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        loop {
            ticker.tick().await;

            let service = self.clone();
            tokio::spawn(async move {
                match service.refresh().await {
                    Ok(()) => {
                        let mut stdout = std::io::stdout();
                        let _ = write!(stdout, "{}", CLEAR_SCREEN);
                        if let Err(e) = service.draw(&mut stdout) {
                            warn!("Failed to draw panel: {}", e);
                        }
                    }
                    // Nothing reaches the panel on a failed cycle
                    Err(e) => warn!("Refresh cycle failed: {}", e),
                }
            });
        }
    }
}
