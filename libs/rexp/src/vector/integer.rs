use std::borrow::Cow;
use std::fmt::Write;
use std::sync::Arc;

use crate::attributes::AttributeMap;
use crate::debug;
use crate::error::Result;
use crate::value::ExpressionValue;

use super::NA_INTEGER;

/// Vector of 32-bit integers. NA is [`NA_INTEGER`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegerVector {
    payload: Vec<i32>,
    attributes: Option<Arc<AttributeMap>>,
}

vector_common!(IntegerVector, i32);

impl IntegerVector {
    pub fn as_integers(&self) -> &[i32] {
        &self.payload
    }

    /// NA maps to NaN so it stays NA under the double rules.
    pub fn as_doubles(&self) -> Vec<f64> {
        self.payload
            .iter()
            .map(|&v| if v == NA_INTEGER { f64::NAN } else { f64::from(v) })
            .collect()
    }

    pub fn as_strings(&self) -> Vec<String> {
        self.payload.iter().map(|&v| render(v)).collect()
    }

    pub fn is_na(&self) -> Vec<bool> {
        self.payload.iter().map(|&v| v == NA_INTEGER).collect()
    }
}

fn render(v: i32) -> String {
    if v == NA_INTEGER {
        "NA".to_string()
    } else {
        v.to_string()
    }
}

impl ExpressionValue for IntegerVector {
    fn type_name(&self) -> &'static str {
        "IntegerVector"
    }

    fn len(&self) -> usize {
        self.payload.len()
    }

    fn is_numeric(&self) -> bool {
        true
    }

    fn attributes(&self) -> Option<&AttributeMap> {
        self.attributes.as_deref()
    }

    fn as_doubles(&self) -> Result<Cow<'_, [f64]>> {
        Ok(Cow::Owned(IntegerVector::as_doubles(self)))
    }

    fn as_integers(&self) -> Result<Cow<'_, [i32]>> {
        Ok(Cow::Borrowed(&self.payload))
    }

    fn as_strings(&self) -> Result<Vec<String>> {
        Ok(IntegerVector::as_strings(self))
    }

    fn is_na(&self) -> Vec<bool> {
        IntegerVector::is_na(self)
    }

    fn to_debug_string(&self) -> String {
        debug::render(
            self.type_name(),
            self.payload.len(),
            self.attributes(),
            &self.payload,
            |out, &v| {
                if v == NA_INTEGER {
                    out.push_str("NA");
                } else {
                    let _ = write!(out, "{}", v);
                }
            },
        )
    }
}
