use crate::api::base::DashboardApi;
use crate::config::Config;
use crate::errors::{DashboardError, Result};
use crate::models::dashboard::StockSubscription;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

pub const CAPITAL_PATH: &str = "/api/dashboard/capital";
pub const STOCKS_PATH: &str = "/api/stocks";
pub const ALGOS_PATH: &str = "/api/algos";
pub const POSITIONS_PATH: &str = "/api/dashboard/positions";

/// HTTP implementation of the dashboard API against the trading server
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Create a new API client for the configured server
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(DashboardError::RequestError)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        debug!("GET {}", path);

        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(DashboardError::RequestError)?;

        let value = response.json::<Value>().await?;
        Ok(value)
    }

    async fn post_json<T: Serialize + Sync>(&self, path: &str, body: &T) -> Result<()> {
        debug!("POST {}", path);

        // Status and body are intentionally not inspected; a non-2xx
        // reply counts as a completed submission.
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(DashboardError::RequestError)?;

        Ok(())
    }
}

#[async_trait]
impl DashboardApi for HttpApi {
    async fn fetch_capital(&self) -> Result<Value> {
        self.get_json(CAPITAL_PATH).await
    }

    async fn fetch_stocks(&self) -> Result<Value> {
        self.get_json(STOCKS_PATH).await
    }

    async fn fetch_algos(&self) -> Result<Value> {
        self.get_json(ALGOS_PATH).await
    }

    async fn fetch_positions(&self) -> Result<Value> {
        self.get_json(POSITIONS_PATH).await
    }

    async fn add_stock(&self, subscription: &StockSubscription) -> Result<()> {
        self.post_json(STOCKS_PATH, subscription).await
    }

    async fn save_algo(&self, config: &Value) -> Result<()> {
        self.post_json(ALGOS_PATH, config).await
    }
}
