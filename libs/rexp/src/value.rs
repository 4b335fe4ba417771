//! The shared capability set and the closed family of engine values.

use std::borrow::Cow;
use std::sync::Arc;

use crate::attributes::AttributeMap;
use crate::debug;
use crate::error::{Error, Result};
use crate::vector::{DoubleVector, IntegerVector, ListVector, LogicalVector, StringVector};

/// Operations every engine value answers, whatever its storage mode.
///
/// Coercions are total for the atomic vectors: they always return a result of
/// the same length as the payload, using the engine's NA sentinel (or NaN for
/// doubles) where an element has no sensible counterpart. Only generic
/// vectors (lists) reject coercion, with [`Error::Unsupported`].
pub trait ExpressionValue {
    /// Short type name used in debug output and error messages.
    fn type_name(&self) -> &'static str;

    /// Number of payload elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether arithmetic coercions are meaningful for this kind.
    fn is_numeric(&self) -> bool;

    fn attributes(&self) -> Option<&AttributeMap>;

    fn attribute(&self, name: &str) -> Option<&Rexp> {
        self.attributes().and_then(|attrs| attrs.get(name))
    }

    fn as_doubles(&self) -> Result<Cow<'_, [f64]>>;

    fn as_integers(&self) -> Result<Cow<'_, [i32]>>;

    fn as_strings(&self) -> Result<Vec<String>>;

    /// Per-element missing-value flags, same length as the payload.
    fn is_na(&self) -> Vec<bool>;

    /// Bounded structural summary, see [`crate::debug`].
    fn to_debug_string(&self) -> String;
}

/// The engine's `NULL`. Has no payload but may still carry attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Null {
    attributes: Option<Arc<AttributeMap>>,
}

impl Null {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(attributes: Arc<AttributeMap>) -> Self {
        Self {
            attributes: Some(attributes),
        }
    }

    pub fn shared_attributes(&self) -> Option<&Arc<AttributeMap>> {
        self.attributes.as_ref()
    }
}

impl ExpressionValue for Null {
    fn type_name(&self) -> &'static str {
        "Null"
    }

    fn len(&self) -> usize {
        0
    }

    fn is_numeric(&self) -> bool {
        false
    }

    fn attributes(&self) -> Option<&AttributeMap> {
        self.attributes.as_deref()
    }

    fn as_doubles(&self) -> Result<Cow<'_, [f64]>> {
        Ok(Cow::Borrowed(&[]))
    }

    fn as_integers(&self) -> Result<Cow<'_, [i32]>> {
        Ok(Cow::Borrowed(&[]))
    }

    fn as_strings(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn is_na(&self) -> Vec<bool> {
        Vec::new()
    }

    fn to_debug_string(&self) -> String {
        let mut out = String::new();
        debug::write_attribute_prefix(&mut out, self.attributes());
        out.push_str(self.type_name());
        out
    }
}

/// One engine value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rexp {
    Null(Null),
    Double(DoubleVector),
    Integer(IntegerVector),
    Logical(LogicalVector),
    String(StringVector),
    List(ListVector),
}

macro_rules! dispatch {
    ($self:expr, $v:ident => $body:expr) => {
        match $self {
            Rexp::Null($v) => $body,
            Rexp::Double($v) => $body,
            Rexp::Integer($v) => $body,
            Rexp::Logical($v) => $body,
            Rexp::String($v) => $body,
            Rexp::List($v) => $body,
        }
    };
}

impl Rexp {
    pub fn null() -> Self {
        Rexp::Null(Null::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Rexp::Null(_))
    }

    pub fn as_double_vector(&self) -> Option<&DoubleVector> {
        match self {
            Rexp::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_integer_vector(&self) -> Option<&IntegerVector> {
        match self {
            Rexp::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_logical_vector(&self) -> Option<&LogicalVector> {
        match self {
            Rexp::Logical(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_string_vector(&self) -> Option<&StringVector> {
        match self {
            Rexp::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_vector(&self) -> Option<&ListVector> {
        match self {
            Rexp::List(v) => Some(v),
            _ => None,
        }
    }

    /// The attribute map as shared with the vector, for callers that want to
    /// attach the same map elsewhere without copying it.
    pub fn shared_attributes(&self) -> Option<&Arc<AttributeMap>> {
        dispatch!(self, v => v.shared_attributes())
    }
}

impl ExpressionValue for Rexp {
    fn type_name(&self) -> &'static str {
        dispatch!(self, v => v.type_name())
    }

    fn len(&self) -> usize {
        dispatch!(self, v => v.len())
    }

    fn is_numeric(&self) -> bool {
        dispatch!(self, v => v.is_numeric())
    }

    fn attributes(&self) -> Option<&AttributeMap> {
        dispatch!(self, v => v.attributes())
    }

    fn as_doubles(&self) -> Result<Cow<'_, [f64]>> {
        dispatch!(self, v => ExpressionValue::as_doubles(v))
    }

    fn as_integers(&self) -> Result<Cow<'_, [i32]>> {
        dispatch!(self, v => ExpressionValue::as_integers(v))
    }

    fn as_strings(&self) -> Result<Vec<String>> {
        dispatch!(self, v => ExpressionValue::as_strings(v))
    }

    fn is_na(&self) -> Vec<bool> {
        dispatch!(self, v => ExpressionValue::is_na(v))
    }

    fn to_debug_string(&self) -> String {
        dispatch!(self, v => v.to_debug_string())
    }
}

macro_rules! variant_conversions {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Rexp {
                fn from(value: $ty) -> Self {
                    Rexp::$variant(value)
                }
            }

            impl TryFrom<Rexp> for $ty {
                type Error = Error;

                fn try_from(value: Rexp) -> Result<Self> {
                    match value {
                        Rexp::$variant(v) => Ok(v),
                        other => Err(Error::TypeMismatch {
                            expected: stringify!($ty),
                            found: other.type_name(),
                        }),
                    }
                }
            }
        )*
    };
}

variant_conversions!(
    Null(Null),
    Double(DoubleVector),
    Integer(IntegerVector),
    Logical(LogicalVector),
    String(StringVector),
    List(ListVector),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_empty_and_not_numeric() {
        let null = Rexp::null();
        assert!(null.is_null());
        assert_eq!(null.len(), 0);
        assert!(!null.is_numeric());
        assert_eq!(null.as_doubles().unwrap().len(), 0);
        assert_eq!(null.to_debug_string(), "Null");
    }

    #[test]
    fn null_with_attributes_renders_prefix() {
        let attrs = AttributeMap::new().with("class", StringVector::from_strs(&["empty"]));
        let null = Null::with_attributes(Arc::new(attrs));
        assert_eq!(
            null.to_debug_string(),
            "<class=StringVector[1]{\"empty\"}>+Null"
        );
    }

    #[test]
    fn try_from_wrong_variant_reports_both_types() {
        let value = Rexp::from(IntegerVector::new(vec![1]));
        let err = DoubleVector::try_from(value).unwrap_err();
        match err {
            Error::TypeMismatch { expected, found } => {
                assert_eq!(expected, "DoubleVector");
                assert_eq!(found, "IntegerVector");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
