use std::borrow::Cow;
use std::fmt::Write;
use std::sync::Arc;

use crate::attributes::AttributeMap;
use crate::debug;
use crate::error::Result;
use crate::value::ExpressionValue;

/// Vector of 64-bit floats (the engine's `numeric` storage mode).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoubleVector {
    payload: Vec<f64>,
    attributes: Option<Arc<AttributeMap>>,
}

vector_common!(DoubleVector, f64);

impl DoubleVector {
    /// The payload itself; never fails and never copies.
    pub fn as_doubles(&self) -> &[f64] {
        &self.payload
    }

    /// Truncates toward zero with Rust's `as` semantics: NaN becomes 0 and
    /// out-of-range values saturate at `i32::MIN`/`i32::MAX`. Lossy by nature;
    /// no error is raised.
    ///
    /// `i32::MIN` is [`NA_INTEGER`](crate::NA_INTEGER), so a large negative
    /// double comes back as integer NA while a large positive one does not.
    pub fn as_integers(&self) -> Vec<i32> {
        self.payload.iter().map(|&v| v as i32).collect()
    }

    /// One `Display` rendering per element (`1`, `2.5`, `NaN`, `inf`).
    pub fn as_strings(&self) -> Vec<String> {
        self.payload.iter().map(|v| v.to_string()).collect()
    }

    /// Flags every NaN element.
    ///
    /// The engine marks NA with one specific NaN payload, so a NaN produced by
    /// arithmetic (`0.0 / 0.0`) is not NA on the engine side. That bit pattern
    /// is not defined at this layer, so any NaN is reported as NA here.
    pub fn is_na(&self) -> Vec<bool> {
        self.payload.iter().map(|v| v.is_nan()).collect()
    }
}

impl ExpressionValue for DoubleVector {
    fn type_name(&self) -> &'static str {
        "DoubleVector"
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
        Ok(Cow::Borrowed(&self.payload))
    }

    fn as_integers(&self) -> Result<Cow<'_, [i32]>> {
        Ok(Cow::Owned(DoubleVector::as_integers(self)))
    }

    fn as_strings(&self) -> Result<Vec<String>> {
        Ok(DoubleVector::as_strings(self))
    }

    fn is_na(&self) -> Vec<bool> {
        DoubleVector::is_na(self)
    }

    fn to_debug_string(&self) -> String {
        debug::render(
            self.type_name(),
            self.payload.len(),
            self.attributes(),
            &self.payload,
            |out, v| {
                let _ = write!(out, "{}", v);
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_toward_zero() {
        let v = DoubleVector::new(vec![1.9, -1.9, f64::NAN]);
        assert_eq!(v.as_integers(), vec![1, -1, 0]);
    }

    #[test]
    fn out_of_range_saturates() {
        let v = DoubleVector::new(vec![1e12, -1e12, f64::INFINITY]);
        assert_eq!(v.as_integers(), vec![i32::MAX, i32::MIN, i32::MAX]);
    }

    #[test]
    fn negative_saturation_collides_with_integer_na() {
        let doubles = DoubleVector::new(vec![1e12, -1e12]);
        let ints = crate::IntegerVector::new(doubles.as_integers());
        assert_eq!(ints.values()[1], crate::NA_INTEGER);
        assert_eq!(ints.is_na(), vec![false, true]);
    }

    #[test]
    fn computational_nan_is_reported_as_na() {
        let zero = 0.0_f64;
        let v = DoubleVector::new(vec![1.0, zero / zero, f64::NAN, f64::INFINITY]);
        assert_eq!(v.is_na(), vec![false, true, true, false]);
    }

    #[test]
    fn debug_string_small() {
        let v = DoubleVector::new(vec![1.0, 2.5, f64::NAN]);
        assert_eq!(v.to_debug_string(), "DoubleVector[3]{1,2.5,NaN}");
    }
}
