use crate::errors::Result;
use crate::models::dashboard::StockSubscription;
use async_trait::async_trait;
use serde_json::Value;

/// Base trait for dashboard API access
///
/// All fetch operations return the response body as an opaque JSON value;
/// the client renders payloads without interpreting them.
#[async_trait]
pub trait DashboardApi {
    /// Fetch the capital snapshot
    async fn fetch_capital(&self) -> Result<Value>;

    /// Fetch the stock subscription list
    async fn fetch_stocks(&self) -> Result<Value>;

    /// Fetch the algorithm config list
    async fn fetch_algos(&self) -> Result<Value>;

    /// Fetch the position list
    async fn fetch_positions(&self) -> Result<Value>;

    /// Submit a stock subscription; the server response is discarded
    async fn add_stock(&self, subscription: &StockSubscription) -> Result<()>;

    /// Submit an algorithm config; the server response is discarded
    async fn save_algo(&self, config: &Value) -> Result<()>;
}
