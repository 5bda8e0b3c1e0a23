//! The text boundary around the shape algorithms.
//!
//! Editor buffers are parsed here, once per operation, before any algorithm
//! sees them. Results are rendered back to the formats the editor uses: two
//! space indented JSON for documents and a newline-joined block for leaves.

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{LocError, Result, Side};
use crate::kind::JsonKind;

/// Parse a buffer into a value, keeping object key order.
///
/// There is no nesting limit: deep documents are valid input, and the parser
/// grows its stack on the heap instead of failing.
///
/// # Errors
///
/// Returns [`LocError::Syntax`] with the 1-based line and column of the
/// first syntax error.
///
/// # Examples
///
/// ```
/// use locjson_core::{parse_document, LocError, Side};
///
/// let err = parse_document("{\n  \"a\": }", Side::Translation).unwrap_err();
/// assert!(matches!(err, LocError::Syntax { side: Side::Translation, line: 2, .. }));
/// ```
pub fn parse_document(text: &str, side: Side) -> Result<Value> {
    match from_str_unbounded(text) {
        Ok(value) => {
            debug!(%side, kind = %JsonKind::of(&value), bytes = text.len(), "parsed document");
            Ok(value)
        }
        Err(err) => {
            warn!(%side, line = err.line(), column = err.column(), "invalid JSON");
            Err(syntax_error(side, &err))
        }
    }
}

fn from_str_unbounded(text: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

fn syntax_error(side: Side, err: &serde_json::Error) -> LocError {
    // serde_json appends " at line L column C"; the location is kept separately.
    let full = err.to_string();
    let message = match full.rsplit_once(" at line ") {
        Some((message, _)) => message.to_string(),
        None => full,
    };
    LocError::Syntax {
        side,
        line: err.line(),
        column: err.column(),
        message,
    }
}

/// Render a value as JSON indented by two spaces, without a trailing newline.
pub fn render_pretty(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"  "));
    value.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Join leaf values into one newline-separated block.
pub fn join_leaves(leaves: &[String]) -> String {
    leaves.join("\n")
}

/// File name for a translation in `language`, e.g. `en` → `en.json`.
///
/// Surrounding whitespace and a single leading `.` are dropped, so `".fr"`
/// also yields `fr.json`.
///
/// # Errors
///
/// Returns [`LocError::InvalidLanguage`] when nothing is left of `language`.
pub fn translation_file_name(language: &str) -> Result<String> {
    let trimmed = language.trim();
    let suffix = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if suffix.is_empty() {
        return Err(LocError::InvalidLanguage(language.to_string()));
    }
    Ok(format!("{suffix}.json"))
}
