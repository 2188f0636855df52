//! Decoding introspection JSON into a [`Schema`].

use crate::{IntrospectionError, Result, Schema};
use serde_json::Value;
use std::path::Path;

/// Parses introspection JSON text.
///
/// Accepts a full response (`{"data": {"__schema": ...}}`), the `data`
/// member alone (`{"__schema": ...}`), or the bare schema object.
///
/// # Errors
///
/// Returns [`IntrospectionError::Parse`] for malformed JSON and
/// [`IntrospectionError::Invalid`] when no schema can be located, including
/// responses that only carry GraphQL `errors`.
pub fn parse_schema(json: &str) -> Result<Schema> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| IntrospectionError::Parse(e.to_string()))?;
    schema_from_value(value)
}

/// Reads and parses an introspection JSON file.
///
/// # Errors
///
/// Returns [`IntrospectionError::Io`] when the file cannot be read, otherwise
/// the same errors as [`parse_schema`].
#[tracing::instrument]
pub fn load_schema_file(path: &Path) -> Result<Schema> {
    let text = std::fs::read_to_string(path)?;
    let schema = parse_schema(&text)?;
    tracing::debug!(types = schema.types.len(), "Loaded schema file");
    Ok(schema)
}

pub(crate) fn schema_from_value(mut value: Value) -> Result<Schema> {
    if let Some(message) = first_graphql_error(&value) {
        if value.get("data").map_or(true, Value::is_null) {
            return Err(IntrospectionError::Invalid(message));
        }
        tracing::warn!(error = %message, "Introspection response carried errors");
    }

    if let Some(data) = value.get_mut("data") {
        value = data.take();
    }
    if let Some(schema) = value.get_mut("__schema") {
        value = schema.take();
    }

    if value.get("types").is_none() {
        return Err(IntrospectionError::Invalid(
            "no `__schema.types` member found".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| IntrospectionError::Parse(e.to_string()))
}

fn first_graphql_error(value: &Value) -> Option<String> {
    let errors = value.get("errors")?.as_array()?;
    let first = errors.first()?;
    Some(
        first
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown GraphQL error")
            .to_string(),
    )
}
