use serde::{Deserialize, Serialize};

/// Stock subscription request sent to the stocks endpoint.
/// No client-side validation; the server owns the rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSubscription {
    pub symbol: String,
    pub token: String,
}
