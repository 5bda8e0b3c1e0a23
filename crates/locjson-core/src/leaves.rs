//! Flattening a document into its leaf values.
//!
//! Each scalar contributes one entry, in traversal order. Duplicates are kept.
//! The result is what a reviewer copies out of a source file to translate in
//! bulk; see [`crate::document::join_leaves`] for the clipboard block format.

use serde_json::Value;
use tracing::debug;

use crate::document::{join_leaves, parse_document};
use crate::error::{Result, Side};
use crate::kind::Scalar;
use crate::walker::{walk, Visitor};

struct LeafVisitor;

impl Visitor for LeafVisitor {
    type Output = Vec<String>;

    fn on_scalar(&self, scalar: Scalar<'_>) -> Vec<String> {
        vec![scalar.to_text()]
    }

    fn on_array(&self, elements: Vec<Vec<String>>) -> Vec<String> {
        elements.into_iter().flatten().collect()
    }

    fn on_object(&self, entries: Vec<(&str, Vec<String>)>) -> Vec<String> {
        entries.into_iter().flat_map(|(_, leaves)| leaves).collect()
    }
}

/// Collect the canonical text of every leaf in `doc`.
///
/// Array elements are visited by index and object entries in key insertion
/// order. Arrays and objects contribute no entry of their own, so empty ones
/// contribute nothing.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use locjson_core::extract_leaves;
///
/// let doc = json!({"a": "x", "b": [1, true, null]});
/// assert_eq!(extract_leaves(&doc), vec!["x", "1", "true", "null"]);
/// ```
pub fn extract_leaves(doc: &Value) -> Vec<String> {
    let leaves = walk(&LeafVisitor, doc);
    debug!(count = leaves.len(), "extracted leaf values");
    leaves
}

/// Parse a source buffer and return its leaves joined by newlines.
pub fn leaves_from_str(source: &str) -> Result<String> {
    let doc = parse_document(source, Side::Source)?;
    Ok(join_leaves(&extract_leaves(&doc)))
}
