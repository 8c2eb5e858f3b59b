//! Rendering context built from the parsed YAML data document.

use serde_json::Value;
use tera::Context;

use stamp_core::DataValue;

use crate::error::RenderError;

/// Convert the data document into a [`tera::Context`].
///
/// Top-level keys become template variables. An empty document yields an
/// empty context; any other non-mapping document is rejected.
pub fn to_tera_context(data: &DataValue) -> Result<Context, RenderError> {
    match serde_json::to_value(data)? {
        Value::Null => Ok(Context::new()),
        object @ Value::Object(_) => Ok(Context::from_value(object)?),
        other => Err(RenderError::DataNotMapping {
            kind: kind_name(&other),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
