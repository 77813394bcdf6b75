//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with hints that
//! name the offending record or field.

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::InputNotFound => suggest_input_not_found(context),
        ErrorCode::RecordMissingField => suggest_missing_field(context),
        ErrorCode::LevelInvalid => suggest_level_invalid(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_input_not_found(context: Option<&Value>) -> String {
    match context.and_then(|c| c.get("path")).and_then(Value::as_str) {
        Some(path) => format!(
            "No input at '{path}'. Pass --input <path>, set SKILLMIG_INPUT, or set paths.input in skillmig.toml"
        ),
        None => ErrorCode::InputNotFound.suggestion().to_string(),
    }
}

fn suggest_missing_field(context: Option<&Value>) -> String {
    let field = context.and_then(|c| c.get("field")).and_then(Value::as_str);
    let index = context.and_then(|c| c.get("index")).and_then(Value::as_u64);

    match (field, index) {
        (Some(field), Some(index)) => format!(
            "Add `{field}` to job record #{index} (0-based). Migration writes nothing until every record is complete"
        ),
        _ => ErrorCode::RecordMissingField.suggestion().to_string(),
    }
}

fn suggest_level_invalid(context: Option<&Value>) -> String {
    match context.and_then(|c| c.get("key")).and_then(Value::as_str) {
        Some(key) => format!("Set softSkills.{key} to a whole number"),
        None => ErrorCode::LevelInvalid.suggestion().to_string(),
    }
}
