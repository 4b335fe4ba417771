//! JSON interchange for engine values.
//!
//! Every value is an object with a `type` tag, a `values` array and, when
//! attributes are present, an `attributes` object (insertion order kept):
//!
//! ```json
//! {"type": "double", "values": [1.5, null, "Inf"],
//!  "attributes": {"names": {"type": "string", "values": ["a", "b", "c"]}}}
//! ```
//!
//! NA elements are `null`. Doubles that JSON cannot represent are written as
//! the strings `"Inf"` and `"-Inf"`; NaN is written as `null`, so it reads
//! back as NA (which it already was, see [`DoubleVector::is_na`]).

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::attributes::AttributeMap;
use crate::error::{Error, Result};
use crate::value::{ExpressionValue, Null, Rexp};
use crate::vector::{
    DoubleVector, IntegerVector, ListVector, Logical, LogicalVector, StringVector, NA_INTEGER,
};

/// Conversion to the interchange JSON form.
pub trait ToJson {
    fn to_json(&self) -> Value;
}

impl ToJson for Rexp {
    fn to_json(&self) -> Value {
        rexp_to_json(self)
    }
}

impl ToJson for AttributeMap {
    fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in self.iter() {
            map.insert(name.to_string(), rexp_to_json(value));
        }
        Value::Object(map)
    }
}

/// Encode a value (and, recursively, its attributes and list elements).
pub fn rexp_to_json(value: &Rexp) -> Value {
    let (tag, values): (&str, Option<Vec<Value>>) = match value {
        Rexp::Null(_) => ("null", None),
        Rexp::Double(v) => (
            "double",
            Some(v.iter().map(|&d| double_to_json(d)).collect()),
        ),
        Rexp::Integer(v) => (
            "integer",
            Some(
                v.iter()
                    .map(|&i| if i == NA_INTEGER { Value::Null } else { Value::from(i) })
                    .collect(),
            ),
        ),
        Rexp::Logical(v) => (
            "logical",
            Some(
                v.iter()
                    .map(|l| l.as_bool().map_or(Value::Null, Value::Bool))
                    .collect(),
            ),
        ),
        Rexp::String(v) => (
            "string",
            Some(
                v.iter()
                    .map(|s| s.as_ref().map_or(Value::Null, |s| Value::String(s.clone())))
                    .collect(),
            ),
        ),
        Rexp::List(v) => ("list", Some(v.iter().map(rexp_to_json).collect())),
    };

    let mut obj = Map::new();
    obj.insert("type".into(), Value::String(tag.into()));
    if let Some(values) = values {
        obj.insert("values".into(), Value::Array(values));
    }
    if let Some(attrs) = value.attributes() {
        obj.insert("attributes".into(), attrs.to_json());
    }
    Value::Object(obj)
}

fn double_to_json(d: f64) -> Value {
    if d.is_nan() {
        Value::Null
    } else if d == f64::INFINITY {
        Value::String("Inf".into())
    } else if d == f64::NEG_INFINITY {
        Value::String("-Inf".into())
    } else {
        Value::from(d)
    }
}

/// Parse JSON text and decode it.
pub fn rexp_from_str(text: &str) -> Result<Rexp> {
    let json: Value = serde_json::from_str(text)?;
    rexp_from_json(&json)
}

/// Decode the interchange form. A missing `values` array yields an empty
/// vector of the tagged type.
pub fn rexp_from_json(json: &Value) -> Result<Rexp> {
    let obj = json
        .as_object()
        .ok_or_else(|| Error::InvalidValue(format!("expected object, got {}", kind_of(json))))?;

    let tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::InvalidValue("missing string field 'type'".into()))?;

    let attributes = match obj.get("attributes") {
        None | Some(Value::Null) => None,
        Some(Value::Object(entries)) => Some(Arc::new(decode_attributes(entries)?)),
        Some(other) => {
            return Err(Error::InvalidValue(format!(
                "'attributes' must be an object, got {}",
                kind_of(other)
            )))
        }
    };

    let values = match obj.get("values") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items.as_slice()),
        Some(other) => {
            return Err(Error::InvalidValue(format!(
                "'values' must be an array, got {}",
                kind_of(other)
            )))
        }
    };

    let value = match tag {
        "null" if values.is_some_and(|items| !items.is_empty()) => {
            return Err(Error::InvalidValue(
                "'values' must be empty for type 'null'".into(),
            ));
        }
        "null" => Rexp::Null(match attributes {
            Some(attrs) => Null::with_attributes(attrs),
            None => Null::new(),
        }),
        "double" => {
            let payload = decode_elements(values, "double", decode_double)?;
            build(
                payload,
                attributes,
                DoubleVector::from_option,
                DoubleVector::from_option_with_attributes,
            )
        }
        "integer" => {
            let payload = decode_elements(values, "integer", decode_integer)?;
            build(
                payload,
                attributes,
                IntegerVector::from_option,
                IntegerVector::from_option_with_attributes,
            )
        }
        "logical" => {
            let payload = decode_elements(values, "logical", decode_logical)?;
            build(
                payload,
                attributes,
                LogicalVector::from_option,
                LogicalVector::from_option_with_attributes,
            )
        }
        "string" => {
            let payload = decode_elements(values, "string", decode_string)?;
            build(
                payload,
                attributes,
                StringVector::from_option,
                StringVector::from_option_with_attributes,
            )
        }
        "list" => {
            let payload = decode_elements(values, "list", rexp_from_json)?;
            build(
                payload,
                attributes,
                ListVector::from_option,
                ListVector::from_option_with_attributes,
            )
        }
        other => return Err(Error::InvalidValue(format!("unknown value type '{}'", other))),
    };

    tracing::trace!(
        type_name = value.type_name(),
        len = value.len(),
        "decoded value from JSON"
    );
    Ok(value)
}

fn build<T, V>(
    payload: Option<Vec<T>>,
    attributes: Option<Arc<AttributeMap>>,
    plain: fn(Option<Vec<T>>) -> V,
    with_attrs: fn(Option<Vec<T>>, Arc<AttributeMap>) -> V,
) -> Rexp
where
    V: Into<Rexp>,
{
    match attributes {
        Some(attrs) => with_attrs(payload, attrs).into(),
        None => plain(payload).into(),
    }
}

fn decode_attributes(entries: &Map<String, Value>) -> Result<AttributeMap> {
    let mut attrs = AttributeMap::new();
    for (name, value) in entries {
        let decoded = rexp_from_json(value).map_err(|e| {
            Error::InvalidValue(format!("attribute '{}': {}", name, detail(e)))
        })?;
        attrs.insert(name.as_str(), decoded);
    }
    Ok(attrs)
}

fn decode_elements<T>(
    values: Option<&[Value]>,
    tag: &str,
    decode: impl Fn(&Value) -> Result<T>,
) -> Result<Option<Vec<T>>> {
    let Some(items) = values else {
        return Ok(None);
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            decode(item).map_err(|e| {
                Error::InvalidValue(format!("{} element {}: {}", tag, i, detail(e)))
            })
        })
        .collect::<Result<Vec<T>>>()
        .map(Some)
}

fn decode_double(item: &Value) -> Result<f64> {
    match item {
        Value::Null => Ok(f64::NAN),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::InvalidValue(format!("number {} out of range", n))),
        Value::String(s) => match s.as_str() {
            "Inf" => Ok(f64::INFINITY),
            "-Inf" => Ok(f64::NEG_INFINITY),
            "NaN" | "NA" => Ok(f64::NAN),
            other => Err(Error::InvalidValue(format!("unexpected string '{}'", other))),
        },
        other => Err(Error::InvalidValue(format!(
            "expected number, got {}",
            kind_of(other)
        ))),
    }
}

fn decode_integer(item: &Value) -> Result<i32> {
    match item {
        Value::Null => Ok(NA_INTEGER),
        Value::Number(n) => n
            .as_i64()
            .and_then(|i| i32::try_from(i).ok())
            .filter(|&i| i != NA_INTEGER)
            .ok_or_else(|| Error::InvalidValue(format!("{} is not a valid integer", n))),
        other => Err(Error::InvalidValue(format!(
            "expected integer, got {}",
            kind_of(other)
        ))),
    }
}

fn decode_logical(item: &Value) -> Result<Logical> {
    match item {
        Value::Null => Ok(Logical::Na),
        Value::Bool(b) => Ok(Logical::from(*b)),
        other => Err(Error::InvalidValue(format!(
            "expected boolean, got {}",
            kind_of(other)
        ))),
    }
}

fn decode_string(item: &Value) -> Result<Option<String>> {
    match item {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(Error::InvalidValue(format!(
            "expected string, got {}",
            kind_of(other)
        ))),
    }
}

/// Message of a nested decoding error, without its `Invalid value:` prefix.
fn detail(err: Error) -> String {
    match err {
        Error::InvalidValue(message) => message,
        other => other.to_string(),
    }
}

fn kind_of(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_values_decode_to_empty_vector() {
        let value = rexp_from_json(&json!({"type": "double"})).unwrap();
        assert_eq!(value.type_name(), "DoubleVector");
        assert_eq!(value.len(), 0);
    }

    #[test]
    fn rejects_unknown_type() {
        let err = rexp_from_json(&json!({"type": "complex", "values": []})).unwrap_err();
        assert!(err.to_string().contains("complex"));
    }

    #[test]
    fn integer_na_sentinel_is_not_accepted_as_a_number() {
        let err =
            rexp_from_json(&json!({"type": "integer", "values": [i32::MIN]})).unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
    }

    #[test]
    fn element_errors_name_the_position() {
        let err =
            rexp_from_json(&json!({"type": "logical", "values": [true, 1]})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value: logical element 1: expected boolean, got number"
        );
    }

    #[test]
    fn nested_errors_carry_one_prefix() {
        let err = rexp_from_json(&json!({
            "type": "list",
            "values": [{"type": "integer", "values": [1, "two"]}],
            "attributes": {}
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value: list element 0: integer element 1: expected integer, got string"
        );
    }

    #[test]
    fn null_with_values_is_rejected() {
        let err = rexp_from_json(&json!({"type": "null", "values": [1, 2]})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value: 'values' must be empty for type 'null'"
        );

        let empty = rexp_from_json(&json!({"type": "null", "values": []})).unwrap();
        assert!(empty.is_null());
    }
}
