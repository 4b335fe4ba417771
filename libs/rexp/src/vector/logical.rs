use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::attributes::AttributeMap;
use crate::debug;
use crate::error::Result;
use crate::value::ExpressionValue;

use super::NA_INTEGER;

/// Three-valued logical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Logical {
    False,
    True,
    #[default]
    Na,
}

impl Logical {
    /// Decode the transport's byte encoding: 0 and 1 are FALSE/TRUE, every
    /// other byte (the server sends 2) is NA.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => Logical::False,
            1 => Logical::True,
            _ => Logical::Na,
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Logical::False => 0,
            Logical::True => 1,
            Logical::Na => 2,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Logical::False => Some(false),
            Logical::True => Some(true),
            Logical::Na => None,
        }
    }

    pub fn is_na(self) -> bool {
        self == Logical::Na
    }
}

impl From<bool> for Logical {
    fn from(value: bool) -> Self {
        if value {
            Logical::True
        } else {
            Logical::False
        }
    }
}

impl From<Option<bool>> for Logical {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Logical::Na, Logical::from)
    }
}

impl fmt::Display for Logical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Logical::False => "FALSE",
            Logical::True => "TRUE",
            Logical::Na => "NA",
        })
    }
}

/// Vector of three-valued logicals. Not numeric, but coerces like the engine
/// does (TRUE = 1, FALSE = 0).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogicalVector {
    payload: Vec<Logical>,
    attributes: Option<Arc<AttributeMap>>,
}

vector_common!(LogicalVector, Logical);

impl LogicalVector {
    pub fn from_bools(values: &[bool]) -> Self {
        Self::new(values.iter().copied().map(Logical::from).collect())
    }

    pub fn from_wire_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(Logical::from_byte).collect())
    }

    pub fn as_doubles(&self) -> Vec<f64> {
        self.payload
            .iter()
            .map(|l| match l {
                Logical::False => 0.0,
                Logical::True => 1.0,
                Logical::Na => f64::NAN,
            })
            .collect()
    }

    pub fn as_integers(&self) -> Vec<i32> {
        self.payload
            .iter()
            .map(|l| match l {
                Logical::False => 0,
                Logical::True => 1,
                Logical::Na => NA_INTEGER,
            })
            .collect()
    }

    pub fn as_strings(&self) -> Vec<String> {
        self.payload.iter().map(|l| l.to_string()).collect()
    }

    pub fn is_na(&self) -> Vec<bool> {
        self.payload.iter().map(|l| l.is_na()).collect()
    }

    /// `true` only where the element is TRUE (NA counts as not true).
    pub fn is_true(&self) -> Vec<bool> {
        self.payload.iter().map(|&l| l == Logical::True).collect()
    }
}

impl ExpressionValue for LogicalVector {
    fn type_name(&self) -> &'static str {
        "LogicalVector"
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
        Ok(Cow::Owned(LogicalVector::as_doubles(self)))
    }

    fn as_integers(&self) -> Result<Cow<'_, [i32]>> {
        Ok(Cow::Owned(LogicalVector::as_integers(self)))
    }

    fn as_strings(&self) -> Result<Vec<String>> {
        Ok(LogicalVector::as_strings(self))
    }

    fn is_na(&self) -> Vec<bool> {
        LogicalVector::is_na(self)
    }

    fn to_debug_string(&self) -> String {
        debug::render(
            self.type_name(),
            self.payload.len(),
            self.attributes(),
            &self.payload,
            |out, l| out.push_str(&l.to_string()),
        )
    }
}
