//! Defensive decoding of service replies into [`Project`] records.
//!
//! The service is schema-constrained but still occasionally wraps its JSON
//! in markdown fences, prefixes it with prose, or drops fields. Every layer
//! here recovers what it can: fences are stripped, the outermost bracket or
//! brace span is retried when strict parsing fails, and each project field
//! is defaulted on its own so a partially valid reply still yields
//! well-formed records.

use makermind_core::types::{DiyAlternative, Project, ProjectCategory};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::DecodeError;

/// Remove every "```json" and "```" marker and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    text.trim()
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Strict parse, then a retry over `text[first open ..= last close]`.
fn parse_with_fallback(text: &str, open: char, close: char) -> Result<Value, DecodeError> {
    let cleaned = strip_code_fences(text);
    if cleaned.is_empty() {
        return Err(DecodeError::Empty);
    }
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(v) => Ok(v),
        Err(strict) => {
            debug!(error = %strict, "strict JSON parse failed; trying span extraction");
            match (cleaned.find(open), cleaned.rfind(close)) {
                (Some(start), Some(end)) if start < end => {
                    serde_json::from_str(&cleaned[start..=end]).map_err(DecodeError::Malformed)
                }
                _ => Err(DecodeError::Malformed(strict)),
            }
        }
    }
}

/// Decode a reply expected to hold a JSON array.
pub fn parse_array(text: &str) -> Result<Vec<Value>, DecodeError> {
    match parse_with_fallback(text, '[', ']')? {
        Value::Array(items) => Ok(items),
        other => Err(DecodeError::WrongShape {
            expected: "array",
            found: kind_of(&other),
        }),
    }
}

/// Decode a reply expected to hold a single JSON object.
pub fn parse_object(text: &str) -> Result<Map<String, Value>, DecodeError> {
    match parse_with_fallback(text, '{', '}')? {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::WrongShape {
            expected: "object",
            found: kind_of(&other),
        }),
    }
}

// ---------------------------------------------------------------------------
// Field defaults
// ---------------------------------------------------------------------------

/// Values substituted for missing fields. They differ between the
/// recommendation list and the stash buster.
#[derive(Debug, Clone)]
pub struct ProjectDefaults {
    pub id: String,
    pub title: &'static str,
    pub time_estimate: &'static str,
    pub match_score: u8,
}

fn non_empty_str<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn string_list(map: &Map<String, Value>, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn diy_alternatives(map: &Map<String, Value>) -> Vec<DiyAlternative> {
    let Some(Value::Array(items)) = map.get("diyAlternatives") else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_object)
        .map(|alt| DiyAlternative {
            material: non_empty_str(alt, "material").unwrap_or_default().to_string(),
            instruction: non_empty_str(alt, "instruction")
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}

fn match_score(map: &Map<String, Value>, default: u8) -> u8 {
    map.get("matchScore")
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .map(|n| n.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(default)
}

fn cost_estimate(map: &Map<String, Value>) -> f64 {
    map.get("costEstimate")
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite() && *n >= 0.0)
        .unwrap_or(0.0)
}

/// Build a project from one decoded item, defaulting field by field.
/// Non-object items produce an all-default record.
pub fn project_from_value(value: &Value, defaults: &ProjectDefaults, color: &str) -> Project {
    let empty = Map::new();
    let map = value.as_object().unwrap_or(&empty);
    Project {
        id: non_empty_str(map, "id")
            .map(str::to_string)
            .unwrap_or_else(|| defaults.id.clone()),
        title: non_empty_str(map, "title")
            .unwrap_or(defaults.title)
            .to_string(),
        description: non_empty_str(map, "description")
            .unwrap_or_default()
            .to_string(),
        category: non_empty_str(map, "category")
            .map(ProjectCategory::from_loose)
            .unwrap_or_default(),
        time_estimate: non_empty_str(map, "timeEstimate")
            .unwrap_or(defaults.time_estimate)
            .to_string(),
        match_score: match_score(map, defaults.match_score),
        missing_tools: string_list(map, "missingTools"),
        missing_materials: string_list(map, "missingMaterials"),
        materials: string_list(map, "materials"),
        diy_alternatives: diy_alternatives(map),
        steps: string_list(map, "steps"),
        cost_estimate: cost_estimate(map),
        color: color.to_string(),
    }
}
