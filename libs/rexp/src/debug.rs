//! Debug rendering shared by every value kind.
//!
//! Every variant renders as `<head>{<preview>}` where the head names the type
//! and length (prefixed by the attributes, if any) and the preview lists at
//! most [`MAX_DEBUG_ITEMS`] elements. The output is a diagnostic contract: it
//! must be identical for identical payloads.

use std::fmt::Write;

use crate::attributes::AttributeMap;

/// Maximum number of elements previewed by `to_debug_string`.
pub const MAX_DEBUG_ITEMS: usize = 32;

/// Appended after the last previewed element when the payload was cut short.
pub const TRUNCATION_MARKER: &str = ",..";

/// Append `<attrs>+` when attributes are present.
pub fn write_attribute_prefix(out: &mut String, attributes: Option<&AttributeMap>) {
    if let Some(attrs) = attributes {
        out.push('<');
        out.push_str(&attrs.to_debug_string());
        out.push_str(">+");
    }
}

/// Render the shared `[<attrs>+]TypeName[len]` head.
pub fn debug_head(type_name: &str, len: usize, attributes: Option<&AttributeMap>) -> String {
    let mut out = String::new();
    write_attribute_prefix(&mut out, attributes);
    let _ = write!(out, "{}[{}]", type_name, len);
    out
}

/// Append `{a,b,c}` (or `{a,b,..}` when truncated) to `out`.
pub fn write_preview<I, F>(out: &mut String, items: I, mut render: F)
where
    I: IntoIterator,
    F: FnMut(&mut String, I::Item),
{
    out.push('{');
    let mut items = items.into_iter();
    for (i, item) in items.by_ref().take(MAX_DEBUG_ITEMS).enumerate() {
        if i > 0 {
            out.push(',');
        }
        render(out, item);
    }
    if items.next().is_some() {
        tracing::trace!(limit = MAX_DEBUG_ITEMS, "debug preview truncated");
        out.push_str(TRUNCATION_MARKER);
    }
    out.push('}');
}

/// Head plus preview, the form used by all atomic vectors.
pub fn render<I, F>(
    type_name: &str,
    len: usize,
    attributes: Option<&AttributeMap>,
    items: I,
    render_item: F,
) -> String
where
    I: IntoIterator,
    F: FnMut(&mut String, I::Item),
{
    let mut out = debug_head(type_name, len, attributes);
    write_preview(&mut out, items, render_item);
    out
}
