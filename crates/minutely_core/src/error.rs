//! Application error types for export and response parsing.
use thiserror::Error;

/// Top-level application error type.
///
/// Guarded capture transitions and the pure layout/pagination functions never
/// fail; only the render-backend boundary and model-response parsing can.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Export backend unavailable: {0}")]
    ExportBackend(String),

    #[error("Response parse error: {0}")]
    ResponseParse(String),
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::ResponseParse(value.to_string())
    }
}
