//! Meeting artifact models and the processing request payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Action-item priority. Absent or unrecognized values become `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Parse a priority label case-insensitively, defaulting to `Medium`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }

    /// Lowercase display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn de_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| Priority::parse_lenient(&v))
        .unwrap_or_default())
}

fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One extracted action item.
///
/// `owner` and `deadline` stay `None` when the model did not produce them;
/// the `"Unassigned"`/`"TBD"` substitutions are display-level fallbacks, not
/// mutations of the record. Upstream payloads use a few alias keys
/// (`action`, `assignee`, `due`) which are accepted on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    #[serde(default, alias = "action", deserialize_with = "de_null_default")]
    pub task: String,
    #[serde(default, alias = "assignee")]
    pub owner: Option<String>,
    #[serde(default, alias = "due")]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "de_priority")]
    pub priority: Priority,
}

impl ActionItem {
    /// Owner for display, falling back to `"Unassigned"`.
    pub fn owner_display(&self) -> &str {
        self.owner.as_deref().unwrap_or("Unassigned")
    }

    /// Deadline for display, falling back to `"TBD"`.
    pub fn deadline_display(&self) -> &str {
        self.deadline.as_deref().unwrap_or("TBD")
    }
}

/// Minutes of meeting: free text or an ordered list of bullet items.
///
/// The processing service returns either shape, so deserialization is
/// untagged; each variant has its own serialization rule at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Minutes {
    Text(String),
    Items(Vec<String>),
}

impl Default for Minutes {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// The three generated artifacts of one successful processing call.
///
/// Immutable once produced; the next successful call replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    #[serde(default, deserialize_with = "de_null_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub minutes: Minutes,
    #[serde(default, alias = "actions", deserialize_with = "de_null_default")]
    pub action_items: Vec<ActionItem>,
}

/// Request payload sent to the remote processing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub text: String,
    pub note_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl ProcessRequest {
    /// Build a request for the given canonical buffer text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            note_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }
}
