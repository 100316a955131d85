/// Anything that keeps a forecast from becoming a view-model.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Forecast request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse forecast JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unexpected forecast shape: {0}")]
    Shape(String),
}

/// Location service errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location service unavailable")]
    Unavailable,
    #[error("Location error: {0}")]
    Other(String),
}
