//! Parse structured LLM output into action items

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// JSON Schema handed to the provider as the output constraint
///
/// Describes an object with a required `items` array of strings.
pub const ACTION_ITEMS_SCHEMA: &str = r#"{"title":"ActionItems","type":"object","properties":{"items":{"title":"Items","type":"array","items":{"type":"string"}}},"required":["items"]}"#;

/// The reply shape the LLM must produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItems {
    /// Action items in the order the model produced them
    pub items: Vec<String>,
}

/// Parse an LLM reply into action items
///
/// The reply must be `{"items": [string, ...]}`. Anything else is an error;
/// the items themselves are returned untouched.
pub fn parse_action_items(response: &str) -> Result<Vec<String>, ExtractorError> {
    let json_str = extract_json(response)?;
    let value: serde_json::Value = serde_json::from_str(json_str)?;

    // serde would also accept a positional array for a struct
    if !value.is_object() {
        return Err(ExtractorError::InvalidFormat(
            "Expected a JSON object with an 'items' array".to_string(),
        ));
    }

    let parsed: ActionItems = serde_json::from_value(value)?;
    Ok(parsed.items)
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<&str, ExtractorError> {
    let trimmed = response.trim();

    if !trimmed.starts_with("```") {
        return Ok(trimmed);
    }

    // Skip the opening fence line (``` or ```json) and the closing fence
    let body = trimmed
        .split_once('\n')
        .map(|(_, rest)| rest)
        .ok_or_else(|| ExtractorError::InvalidFormat("Empty code block".to_string()))?;
    let body = body.trim_end();
    Ok(body.strip_suffix("```").unwrap_or(body).trim())
}
