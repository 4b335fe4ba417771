//! Rendering of decoded values for the console.

use anyhow::{bail, Context, Result};
use rengine_rexp::{rexp_from_json, ExpressionValue, Rexp, ToJson};
use serde_json::Value;

/// Decode a document holding either one value or an array of values.
pub fn decode_document(text: &str) -> Result<Vec<Rexp>> {
    let json: Value = serde_json::from_str(text).context("input is not valid JSON")?;
    match &json {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| rexp_from_json(item).with_context(|| format!("value #{}", i)))
            .collect(),
        Value::Object(_) => Ok(vec![rexp_from_json(&json)?]),
        _ => bail!("expected a value object or an array of value objects"),
    }
}

/// `type=..., len=..., result:...` plus an `attributes:` line when present.
pub fn describe(value: &Rexp) -> String {
    let mut out = format!(
        "type={}, len={}, result:{}",
        value.type_name(),
        value.len(),
        value.to_debug_string()
    );
    if let Some(attrs) = value.attributes() {
        out.push_str("\nattributes: ");
        out.push_str(&attrs.to_debug_string());
    }
    out
}

pub fn to_pretty_json(values: &[Rexp]) -> Result<String> {
    let json = match values {
        [single] => single.to_json(),
        many => Value::Array(many.iter().map(ToJson::to_json).collect()),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
