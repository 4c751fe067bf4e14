//! Parsing and shape validation of model verdicts

use crate::error::AnalysisError;
use intentscout_core::{Action, AnalysisResult};
use serde_json::{Map, Value};

const WRAPPER_TOKENS: &[&str] = &["```json", "```JSON", "```"];

/// Remove code-fence markers models like to wrap JSON in
pub fn strip_wrappers(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    for token in WRAPPER_TOKENS {
        cleaned = cleaned.replace(token, "");
    }
    cleaned.trim().to_string()
}

fn decode_object(raw: &str) -> Result<Map<String, Value>, AnalysisError> {
    let cleaned = strip_wrappers(raw);

    let value = match serde_json::from_str::<Value>(&cleaned) {
        Ok(v) => v,
        Err(first) => {
            // fall back to the outermost brace span, e.g. "Here you go: {...}"
            let span = cleaned
                .find('{')
                .zip(cleaned.rfind('}'))
                .filter(|(start, end)| start < end)
                .map(|(start, end)| &cleaned[start..=end]);
            match span.map(|s| serde_json::from_str::<Value>(s)) {
                Some(Ok(v)) => v,
                _ => return Err(AnalysisError::Unparseable(first.to_string())),
            }
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(AnalysisError::Unparseable(format!(
            "expected an object, got {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn required_str(map: &Map<String, Value>, field: &'static str) -> Result<String, AnalysisError> {
    map.get(field)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .ok_or(AnalysisError::MissingField(field))
}

/// Parse a raw model response into a validated [`AnalysisResult`].
///
/// `summary`, `action` and `reason` must be non-empty strings; `action` must
/// be one of the two literals; `proposed_intent` is required for
/// `CREATE_NEW` and dropped for `KEEP_EXISTING`. Extra fields are ignored.
pub fn parse_analysis(
    raw: &str,
    cluster_id: usize,
    examples: &[String],
) -> Result<AnalysisResult, AnalysisError> {
    let map = decode_object(raw)?;

    let summary = required_str(&map, "summary")?;
    let action_raw = required_str(&map, "action")?;
    let action = Action::parse(&action_raw).ok_or(AnalysisError::InvalidAction(action_raw))?;
    let reason = required_str(&map, "reason")?;

    let proposed_intent = match action {
        Action::CreateNew => Some(
            required_str(&map, "proposed_intent")
                .map_err(|_| AnalysisError::MissingProposedIntent)?,
        ),
        Action::KeepExisting => None,
    };

    if let Some(intent) = &proposed_intent {
        if !intent.contains("->") {
            tracing::debug!(cluster_id, intent = %intent, "proposed intent not in 'Category -> Subcategory' form");
        }
    }

    Ok(AnalysisResult {
        cluster_id,
        summary,
        action,
        proposed_intent,
        reason,
        examples: examples.to_vec(),
    })
}
