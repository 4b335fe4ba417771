//! Typed expression values exchanged with an R engine.
//!
//! The engine is dynamically typed: every value is a vector of some storage
//! mode, optionally decorated with named attributes. This crate models that
//! closed family as the [`Rexp`] sum type, with one concrete struct per
//! storage mode and the [`ExpressionValue`] trait as the shared capability
//! set:
//!
//! ```text
//!            Rexp
//!             |
//!   +------+--+-----+--------+---------+------+
//!   |      |        |        |         |      |
//! Null  Double  Integer  Logical   String   List
//! ```
//!
//! Values are immutable once constructed and can be shared freely across
//! threads. Missing data ("NA") follows the engine's conventions per storage
//! mode; see [`DoubleVector::is_na`] for the one known gap.

#![forbid(unsafe_code)]

pub mod attributes;
pub mod debug;
pub mod error;
pub mod json;
pub mod value;
pub mod vector;

// Re-export main types
pub use attributes::AttributeMap;
pub use debug::MAX_DEBUG_ITEMS;
pub use error::{Engine, EngineError, EngineId, EngineRef, Error, Result};
pub use json::{rexp_from_json, rexp_from_str, rexp_to_json, ToJson};
pub use value::{ExpressionValue, Null, Rexp};
pub use vector::{
    DoubleVector, IntegerVector, ListVector, Logical, LogicalVector, StringVector, NA_INTEGER,
};
