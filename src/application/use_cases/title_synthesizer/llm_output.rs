use crate::domain::error::{AppError, Result};
use crate::infrastructure::response::clean_llm_response;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub(crate) const MIN_TITLES: usize = 4;
pub(crate) const MAX_TITLES: usize = 5;

static LIST_MARKER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*•]+|\d+[.)]|#+)\s*").unwrap());

/// Extract 4-5 ordered titles from a model reply.
///
/// Accepts a JSON array, an object with a `titles` array, or plain text with
/// one title per line. Extra titles are dropped; fewer than four is an error.
pub(crate) fn parse_title_list(raw: &str) -> Result<Vec<String>> {
    let cleaned = clean_llm_response(raw);
    if cleaned.is_empty() {
        return Err(AppError::LLMError("Empty title response".to_string()));
    }

    let titles = match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => titles_from_json(&value)?,
        Err(_) => titles_from_lines(&cleaned),
    };

    let titles: Vec<String> = titles.into_iter().take(MAX_TITLES).collect();
    if titles.len() < MIN_TITLES {
        return Err(AppError::LLMError(format!(
            "Expected {}-{} titles, got {}",
            MIN_TITLES,
            MAX_TITLES,
            titles.len()
        )));
    }

    Ok(titles)
}

fn titles_from_json(value: &Value) -> Result<Vec<String>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get("titles")
            .and_then(Value::as_array)
            .or_else(|| map.values().find_map(Value::as_array))
            .ok_or_else(|| AppError::LLMError("JSON reply has no title array".to_string()))?,
        _ => {
            return Err(AppError::LLMError(
                "JSON reply is neither an array nor an object".to_string(),
            ))
        }
    };

    Ok(items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect())
}

fn titles_from_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            let line = LIST_MARKER_PATTERN.replace(line.trim(), "");
            line.trim()
                .trim_end_matches(',')
                .trim_matches('"')
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty() && line != "[" && line != "]")
        .take(MAX_TITLES)
        .collect()
}
