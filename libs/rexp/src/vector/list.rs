use std::borrow::Cow;
use std::sync::Arc;

use crate::attributes::AttributeMap;
use crate::debug;
use crate::error::{Error, Result};
use crate::value::{ExpressionValue, Rexp};

use super::StringVector;

/// Generic vector: an ordered sequence of arbitrary values.
///
/// Element names, when present, live in the `names` attribute as a
/// [`StringVector`] of the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListVector {
    payload: Vec<Rexp>,
    attributes: Option<Arc<AttributeMap>>,
}

vector_common!(ListVector, Rexp);

impl ListVector {
    /// Build a named list; the names become the `names` attribute.
    pub fn from_named<N, V, I>(entries: I) -> Self
    where
        N: Into<String>,
        V: Into<Rexp>,
        I: IntoIterator<Item = (N, V)>,
    {
        let (names, payload): (Vec<Option<String>>, Vec<Rexp>) = entries
            .into_iter()
            .map(|(n, v)| (Some(n.into()), v.into()))
            .unzip();
        let attributes = AttributeMap::new().with("names", StringVector::new(names));
        Self::with_attributes(payload, Arc::new(attributes))
    }

    /// The `names` attribute, if it is a string vector.
    pub fn names(&self) -> Option<&StringVector> {
        self.attribute("names").and_then(Rexp::as_string_vector)
    }

    /// Element whose name is `name` (first match).
    pub fn get_named(&self, name: &str) -> Option<&Rexp> {
        let index = self.names()?.position(name)?;
        self.payload.get(index)
    }

    fn unsupported(&self, target: &str) -> Error {
        Error::Unsupported(format!("cannot coerce {} to {}", self.type_name(), target))
    }
}

impl ExpressionValue for ListVector {
    fn type_name(&self) -> &'static str {
        "ListVector"
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
        Err(self.unsupported("doubles"))
    }

    fn as_integers(&self) -> Result<Cow<'_, [i32]>> {
        Err(self.unsupported("integers"))
    }

    fn as_strings(&self) -> Result<Vec<String>> {
        Err(self.unsupported("strings"))
    }

    /// An element is NA when it is a length-one atomic vector holding NA.
    fn is_na(&self) -> Vec<bool> {
        self.payload
            .iter()
            .map(|item| match item {
                Rexp::List(_) | Rexp::Null(_) => false,
                atomic => atomic.len() == 1 && atomic.is_na()[0],
            })
            .collect()
    }

    fn to_debug_string(&self) -> String {
        debug::render(
            self.type_name(),
            self.payload.len(),
            self.attributes(),
            &self.payload,
            |out, item| out.push_str(&item.to_debug_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{DoubleVector, IntegerVector, NA_INTEGER};

    #[test]
    fn named_lookup() {
        let list = ListVector::from_named([
            ("x", Rexp::from(DoubleVector::new(vec![1.0]))),
            ("y", Rexp::from(IntegerVector::new(vec![2, 3]))),
        ]);

        assert_eq!(list.len(), 2);
        assert_eq!(
            list.get_named("y").map(|v| v.type_name()),
            Some("IntegerVector")
        );
        assert!(list.get_named("z").is_none());
    }

    #[test]
    fn unnamed_list_has_no_names() {
        let list = ListVector::new(vec![Rexp::null()]);
        assert!(list.names().is_none());
        assert!(list.get_named("anything").is_none());
    }

    #[test]
    fn coercion_is_unsupported() {
        let list = ListVector::new(vec![Rexp::from(vec![1.0_f64])]);
        assert!(matches!(
            ExpressionValue::as_doubles(&list),
            Err(Error::Unsupported(_))
        ));
        assert!(list.as_strings().is_err());
    }

    #[test]
    fn na_elements() {
        let list = ListVector::new(vec![
            Rexp::from(vec![NA_INTEGER]),
            Rexp::from(vec![1, NA_INTEGER]),
            Rexp::from(vec![f64::NAN]),
            Rexp::null(),
            Rexp::from(ListVector::new(vec![Rexp::from(vec![NA_INTEGER])])),
        ]);
        assert_eq!(list.is_na(), vec![true, false, true, false, false]);
    }

    #[test]
    fn debug_string_nests() {
        let list = ListVector::new(vec![
            Rexp::from(vec![1_i32]),
            Rexp::from(StringVector::from_strs(&["a"])),
        ]);
        assert_eq!(
            list.to_debug_string(),
            "ListVector[2]{IntegerVector[1]{1},StringVector[1]{\"a\"}}"
        );
    }
}
