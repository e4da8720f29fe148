// Public modules for library use
pub mod api;
pub mod errors;
pub mod models;
pub mod panel;

// Kept public for the binary; internal in library scenarios
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod services;

// Re-export the common types
pub use api::base::DashboardApi;
pub use errors::{DashboardError, Result};
pub use models::dashboard::StockSubscription;
pub use services::dashboard_service::DashboardService;
