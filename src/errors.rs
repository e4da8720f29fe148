use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

impl From<String> for DashboardError {
    fn from(s: String) -> Self {
        DashboardError::Unknown(s)
    }
}

impl From<&str> for DashboardError {
    fn from(s: &str) -> Self {
        DashboardError::Unknown(s.to_string())
    }
}
