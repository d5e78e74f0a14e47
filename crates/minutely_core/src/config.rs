//! Configuration loading from environment variables.

use std::env;

use crate::paginate::PageGeometry;

/// Runtime configuration for Minutely.
///
/// `api_url`/`api_token` point at the remote processing endpoint; both are
/// optional and their absence selects the demo processor. Geometry fields
/// override the A4 export defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub geometry: PageGeometry,
}

/// Read an environment variable, treating blank values as unset.
///
/// # Returns
/// `Some(trimmed value)` when the variable is set and non-blank.
pub fn env_nonempty(name: &str) -> Option<String> {
    env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_f32(name: &str, default: f32) -> f32 {
    parse_f32_or(env::var(name).ok().as_deref(), default)
}

/// Parse an optional numeric override, falling back on missing or invalid
/// values.
pub fn parse_f32_or(value: Option<&str>, default: f32) -> f32 {
    value
        .and_then(|raw| raw.trim().parse::<f32>().ok())
        .filter(|parsed| parsed.is_finite() && *parsed > 0.0)
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are
    /// missing.
    pub fn from_env() -> Self {
        let defaults = PageGeometry::default();
        Self {
            api_url: env_nonempty("MINUTELY_API_URL"),
            api_token: env_nonempty("MINUTELY_API_TOKEN"),
            geometry: PageGeometry {
                page_width: env_f32("MINUTELY_PAGE_WIDTH", defaults.page_width),
                page_height: env_f32("MINUTELY_PAGE_HEIGHT", defaults.page_height),
                margin: env_f32("MINUTELY_PAGE_MARGIN", defaults.margin),
                line_height: env_f32("MINUTELY_LINE_HEIGHT", defaults.line_height),
            },
        }
    }
}
