// Input-checked wrappers around the queries in `query.rs`, for callers that
// hold names as untyped JSON values (scene files, scripting bridges).
//
// Compiled only with the `validate` feature. Each wrapper rejects a
// non-string value with `SymmetryError::InvalidInputType`, naming the
// wrapper and the JSON type it received, and otherwise forwards to the
// matching query unchanged.

use serde_json::Value;

use crate::error::{Result, SymmetryError};
use crate::query;

/// Borrow `value` as a name, or report which `function` got the wrong type.
pub fn expect_name<'a>(function: &'static str, value: &'a Value) -> Result<&'a str> {
    match value {
        Value::String(name) => Ok(name.as_str()),
        other => {
            let actual = json_type_name(other);
            tracing::debug!(function, actual, "rejected non-string symmetry query input");
            Err(SymmetryError::InvalidInputType { function, actual })
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn is_symmetrical(value: &Value) -> Result<bool> {
    Ok(query::is_symmetrical(expect_name("is_symmetrical", value)?))
}

pub fn symmetrical_prefix(value: &Value) -> Result<&'static str> {
    Ok(query::symmetrical_prefix(expect_name("symmetrical_prefix", value)?))
}

pub fn symmetrical_suffix(value: &Value) -> Result<&'static str> {
    Ok(query::symmetrical_suffix(expect_name("symmetrical_suffix", value)?))
}

pub fn symmetrical_afix(value: &Value) -> Result<&'static str> {
    Ok(query::symmetrical_afix(expect_name("symmetrical_afix", value)?))
}

pub fn symmetrical_basename(value: &Value) -> Result<&str> {
    Ok(query::symmetrical_basename(expect_name("symmetrical_basename", value)?))
}

pub fn symmetrical_split(value: &Value) -> Result<(&'static str, &str, &'static str)> {
    Ok(query::symmetrical_split(expect_name("symmetrical_split", value)?))
}

pub fn symmetrical_target(value: &Value) -> Result<String> {
    Ok(query::symmetrical_target(expect_name("symmetrical_target", value)?))
}
