//! Recovery of generated artifacts from raw model output.
//!
//! The upstream service is asked for strict JSON but occasionally wraps the
//! payload in prose or code fences. Parsing is lenient about that wrapping
//! and about field spelling, and strict about producing a well-typed
//! [`GeneratedDocument`]: missing sections default to empty, alias keys are
//! normalized, and blank owner/deadline strings become absent values.

use crate::error::AppError;
use crate::models::GeneratedDocument;
use crate::text::normalize_optional_nonempty;

/// Extract the first JSON object window from a text blob.
///
/// Scans from the first `{` to the last `}` (the shape a chatty model
/// produces); when no such window exists the raw text is returned and left
/// to the JSON parser to reject.
fn extract_json(raw: &str) -> &str {
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            return &raw[start..=end];
        }
    }
    raw
}

/// Parse raw model output into a [`GeneratedDocument`].
///
/// # Returns
/// The parsed document, or [`AppError::ResponseParse`] when no JSON object
/// can be recovered. Parsing never fabricates artifacts from unparseable
/// prose.
pub fn parse_generated(raw: &str) -> Result<GeneratedDocument, AppError> {
    let candidate = extract_json(raw);
    let mut document: GeneratedDocument = serde_json::from_str(candidate)?;

    for item in &mut document.action_items {
        item.owner = normalize_optional_nonempty(item.owner.take());
        item.deadline = normalize_optional_nonempty(item.deadline.take());
    }
    tracing::debug!(
        actions = document.action_items.len(),
        "parsed generated document"
    );
    Ok(document)
}
