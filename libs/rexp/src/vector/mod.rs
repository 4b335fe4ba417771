//! Concrete vector kinds.
//!
//! Each kind owns its payload exclusively and may share one attribute map.
//! Payloads are fixed at construction; there are no mutating accessors.

/// The engine's integer NA (`NA_integer_`), the smallest `i32`.
pub const NA_INTEGER: i32 = i32::MIN;

/// Decoders may hand over "no payload" instead of an empty one; both mean a
/// zero-length vector.
pub(crate) fn normalize_payload<T>(payload: Option<Vec<T>>, type_name: &'static str) -> Vec<T> {
    match payload {
        Some(values) => values,
        None => {
            tracing::trace!(type_name, "absent payload normalized to empty vector");
            Vec::new()
        }
    }
}

/// Constructors and plain accessors shared by every vector kind.
macro_rules! vector_common {
    ($name:ident, $elem:ty) => {
        impl $name {
            pub fn new(payload: Vec<$elem>) -> Self {
                Self {
                    payload,
                    attributes: None,
                }
            }

            pub fn with_attributes(
                payload: Vec<$elem>,
                attributes: std::sync::Arc<$crate::attributes::AttributeMap>,
            ) -> Self {
                Self {
                    payload,
                    attributes: Some(attributes),
                }
            }

            /// Like [`new`](Self::new), but an absent payload yields an empty vector.
            pub fn from_option(payload: Option<Vec<$elem>>) -> Self {
                Self::new($crate::vector::normalize_payload(
                    payload,
                    stringify!($name),
                ))
            }

            pub fn from_option_with_attributes(
                payload: Option<Vec<$elem>>,
                attributes: std::sync::Arc<$crate::attributes::AttributeMap>,
            ) -> Self {
                Self::with_attributes(
                    $crate::vector::normalize_payload(payload, stringify!($name)),
                    attributes,
                )
            }

            pub fn values(&self) -> &[$elem] {
                &self.payload
            }

            pub fn get(&self, index: usize) -> Option<&$elem> {
                self.payload.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $elem> {
                self.payload.iter()
            }

            pub fn into_values(self) -> Vec<$elem> {
                self.payload
            }

            pub fn shared_attributes(
                &self,
            ) -> Option<&std::sync::Arc<$crate::attributes::AttributeMap>> {
                self.attributes.as_ref()
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(payload: Vec<$elem>) -> Self {
                Self::new(payload)
            }
        }

        impl From<Vec<$elem>> for $crate::value::Rexp {
            fn from(payload: Vec<$elem>) -> Self {
                $name::new(payload).into()
            }
        }
    };
}

mod double;
mod integer;
mod list;
mod logical;
mod string;

pub use double::DoubleVector;
pub use integer::IntegerVector;
pub use list::ListVector;
pub use logical::{Logical, LogicalVector};
pub use string::StringVector;
