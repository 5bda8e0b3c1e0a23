//! Blank translation templates.
//!
//! A template keeps every key, every array slot and every non-string leaf of
//! the source document, and clears string leaves to `""`. Translators start
//! from it so the translation file has exactly the source's shape.
//!
//! Only strings are treated as translatable. Numbers, booleans and `null`
//! are carried over unchanged since they are usually flags or counts shared
//! by every locale.

use serde_json::{Map, Value};
use tracing::debug;

use crate::document::{parse_document, render_pretty};
use crate::error::{Result, Side};
use crate::kind::{JsonKind, Scalar};
use crate::walker::{walk, Visitor};

struct TemplateVisitor;

impl Visitor for TemplateVisitor {
    type Output = Value;

    fn on_scalar(&self, scalar: Scalar<'_>) -> Value {
        match scalar {
            Scalar::String(_) => Value::String(String::new()),
            other => other.to_value(),
        }
    }

    fn on_array(&self, elements: Vec<Value>) -> Value {
        Value::Array(elements)
    }

    fn on_object(&self, entries: Vec<(&str, Value)>) -> Value {
        let mut map = Map::with_capacity(entries.len());
        for (key, value) in entries {
            map.insert(key.to_string(), value);
        }
        Value::Object(map)
    }
}

/// Build the blank template of `doc`.
///
/// The input is not modified. Key order and array lengths are preserved.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use locjson_core::extract_template;
///
/// let source = json!({"title": "Hi", "count": 3, "tags": ["a", "b"]});
/// assert_eq!(
///     extract_template(&source),
///     json!({"title": "", "count": 3, "tags": ["", ""]}),
/// );
/// ```
pub fn extract_template(doc: &Value) -> Value {
    debug!(kind = %JsonKind::of(doc), "extracting template");
    walk(&TemplateVisitor, doc)
}

/// Parse a source buffer and render its template as two-space indented JSON.
///
/// # Errors
///
/// Returns [`crate::LocError::Syntax`] if `source` is not valid JSON.
pub fn template_from_str(source: &str) -> Result<String> {
    let doc = parse_document(source, Side::Source)?;
    render_pretty(&extract_template(&doc))
}
