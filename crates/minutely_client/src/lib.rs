//! Remote meeting-processing client.
//!
//! The sole network dependency of the application: the canonical buffer is
//! posted to the processing endpoint, which returns the three generated
//! artifacts. When no endpoint is configured a demo processor stands in so
//! the rest of the pipeline stays exercisable offline.

use minutely_core::models::ProcessRequest;
use minutely_core::parse::parse_generated;
use minutely_core::{AppError, Config, GeneratedDocument, Minutes};
use thiserror::Error;

/// Errors from the processing boundary.
///
/// A failed call never mutates the caller's capture state; the buffer stays
/// intact so the user can retry without re-entering text.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error(transparent)]
    Core(#[from] AppError),
}

/// Capability that turns meeting text into generated artifacts.
#[allow(async_fn_in_trait)]
pub trait MeetingProcessor {
    /// Process the canonical buffer text into the three artifacts.
    async fn process(&self, text: &str) -> Result<GeneratedDocument, ClientError>;
}

/// HTTP processor posting to `POST {base}/meetings/process`.
#[derive(Debug, Clone)]
pub struct HttpProcessor {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpProcessor {
    /// Build a processor for the given endpoint and optional bearer token.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/meetings/process", self.base_url.trim_end_matches('/'))
    }
}

impl MeetingProcessor for HttpProcessor {
    async fn process(&self, text: &str) -> Result<GeneratedDocument, ClientError> {
        let request = ProcessRequest::new(text);
        let mut builder = self.http.post(self.endpoint()).json(&request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        tracing::debug!(note_id = %request.note_id, "processing meeting notes");

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let detail = error_detail(&body, status);
            tracing::warn!(status = status.as_u16(), detail = %detail, "processing call failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(parse_generated(&body)?)
    }
}

/// Extract the server's `detail` message from an error body, falling back to
/// the HTTP reason phrase.
fn error_detail(body: &str, status: reqwest::StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}

/// Offline stand-in used when no processing endpoint is configured.
///
/// Mirrors the upstream service's demo mode: fixed artifacts, no action
/// items, so capture and export stay usable without credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProcessor;

impl MeetingProcessor for DemoProcessor {
    async fn process(&self, _text: &str) -> Result<GeneratedDocument, ClientError> {
        Ok(GeneratedDocument {
            summary: "Meeting processed (demo mode - no processing endpoint configured)"
                .to_string(),
            minutes: Minutes::Items(vec![
                "Demo meeting".to_string(),
                "No actual processing".to_string(),
                "Set MINUTELY_API_URL to enable remote processing".to_string(),
            ]),
            action_items: Vec::new(),
        })
    }
}

/// Configured processor: HTTP when an endpoint is set, demo otherwise.
#[derive(Debug, Clone)]
pub enum Processor {
    Http(HttpProcessor),
    Demo(DemoProcessor),
}

impl Processor {
    /// Select a processor from configuration.
    pub fn from_config(config: &Config) -> Self {
        match &config.api_url {
            Some(url) => Self::Http(HttpProcessor::new(url.clone(), config.api_token.clone())),
            None => {
                tracing::info!("no processing endpoint configured; using demo processor");
                Self::Demo(DemoProcessor)
            }
        }
    }
}

impl MeetingProcessor for Processor {
    async fn process(&self, text: &str) -> Result<GeneratedDocument, ClientError> {
        match self {
            Self::Http(http) => http.process(text).await,
            Self::Demo(demo) => demo.process(text).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DemoProcessor, MeetingProcessor, Processor};
    use minutely_core::{Config, Minutes};

    #[tokio::test]
    async fn demo_processor_returns_fixed_artifacts() {
        let doc = DemoProcessor.process("anything").await.unwrap();
        assert!(doc.summary.contains("demo mode"));
        assert!(matches!(doc.minutes, Minutes::Items(ref items) if items.len() == 3));
        assert!(doc.action_items.is_empty());
    }

    #[test]
    fn missing_endpoint_selects_demo_processor() {
        let processor = Processor::from_config(&Config::default());
        assert!(matches!(processor, Processor::Demo(_)));
    }

    #[test]
    fn configured_endpoint_selects_http_processor() {
        let config = Config {
            api_url: Some("http://localhost:8000".to_string()),
            api_token: Some("token".to_string()),
            ..Config::default()
        };
        assert!(matches!(
            Processor::from_config(&config),
            Processor::Http(_)
        ));
    }
}
