use std::borrow::Cow;
use std::fmt::Write;
use std::sync::Arc;

use crate::attributes::AttributeMap;
use crate::debug;
use crate::error::Result;
use crate::value::ExpressionValue;

use super::NA_INTEGER;

/// Vector of strings; `None` elements are `NA_character_`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringVector {
    payload: Vec<Option<String>>,
    attributes: Option<Arc<AttributeMap>>,
}

vector_common!(StringVector, Option<String>);

impl StringVector {
    /// Convenience constructor for a vector without NA elements.
    pub fn from_strs(values: &[&str]) -> Self {
        Self::new(values.iter().map(|s| Some((*s).to_string())).collect())
    }

    /// Position of the first element equal to `value` (NA never matches).
    pub fn position(&self, value: &str) -> Option<usize> {
        self.payload
            .iter()
            .position(|s| s.as_deref() == Some(value))
    }

    /// Parsed after trimming; unparseable text and NA become NaN.
    pub fn as_doubles(&self) -> Vec<f64> {
        self.payload
            .iter()
            .map(|s| {
                s.as_deref()
                    .and_then(|s| s.trim().parse::<f64>().ok())
                    .unwrap_or(f64::NAN)
            })
            .collect()
    }

    /// Decimal text is truncated toward zero. Non-finite, unparseable, out of
    /// range and NA elements become [`NA_INTEGER`]; so does `"-2147483648"`,
    /// which is the sentinel itself.
    pub fn as_integers(&self) -> Vec<i32> {
        self.payload
            .iter()
            .map(|s| s.as_deref().map_or(NA_INTEGER, parse_integer))
            .collect()
    }

    /// NA renders as `"NA"`; use [`values`](Self::values) to tell it apart
    /// from the literal string.
    pub fn as_strings(&self) -> Vec<String> {
        self.payload
            .iter()
            .map(|s| s.clone().unwrap_or_else(|| "NA".to_string()))
            .collect()
    }

    pub fn is_na(&self) -> Vec<bool> {
        self.payload.iter().map(Option::is_none).collect()
    }
}

fn parse_integer(text: &str) -> i32 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => {
            let v = v.trunc();
            if v > f64::from(NA_INTEGER) && v <= f64::from(i32::MAX) {
                v as i32
            } else {
                NA_INTEGER
            }
        }
        _ => NA_INTEGER,
    }
}

impl From<Vec<String>> for StringVector {
    fn from(values: Vec<String>) -> Self {
        Self::new(values.into_iter().map(Some).collect())
    }
}

impl ExpressionValue for StringVector {
    fn type_name(&self) -> &'static str {
        "StringVector"
    }

    fn len(&self) -> usize {
        self.payload.len()
    }

    fn is_numeric(&self) -> bool {
        false
    }

    fn attributes(&self) -> Option<&AttributeMap> {
        self.attributes.as_deref()
    }

    fn as_doubles(&self) -> Result<Cow<'_, [f64]>> {
        Ok(Cow::Owned(StringVector::as_doubles(self)))
    }

    fn as_integers(&self) -> Result<Cow<'_, [i32]>> {
        Ok(Cow::Owned(StringVector::as_integers(self)))
    }

    fn as_strings(&self) -> Result<Vec<String>> {
        Ok(StringVector::as_strings(self))
    }

    fn is_na(&self) -> Vec<bool> {
        StringVector::is_na(self)
    }

    fn to_debug_string(&self) -> String {
        debug::render(
            self.type_name(),
            self.payload.len(),
            self.attributes(),
            &self.payload,
            |out, s| match s {
                Some(s) => {
                    let _ = write!(out, "{:?}", s);
                }
                None => out.push_str("NA"),
            },
        )
    }
}
