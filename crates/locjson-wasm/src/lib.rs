//! WASM bindings for locjson-core.
//!
//! Exposes template extraction, leaf extraction and structure checking to the
//! browser editor via `wasm-bindgen`. Documents go in as the raw editor
//! buffers; structured results come back as JSON strings, so the page never
//! has to mirror Rust types.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p locjson-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/locjson_wasm.wasm
//! ```

use locjson_core::{Mismatch, Side};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Result of a structure check, as handed to JavaScript.
#[derive(Debug, Serialize)]
pub struct StructureReportDto {
    pub matches: bool,
    /// JSON Pointer of the first divergence, `null` when the shapes match.
    pub pointer: Option<String>,
    /// Human-readable description of the divergence.
    pub message: Option<String>,
    pub mismatch: Option<Mismatch>,
}

impl From<Option<Mismatch>> for StructureReportDto {
    fn from(mismatch: Option<Mismatch>) -> Self {
        Self {
            matches: mismatch.is_none(),
            pointer: mismatch.as_ref().map(Mismatch::pointer),
            message: mismatch.as_ref().map(ToString::to_string),
            mismatch,
        }
    }
}

fn parse_side(side: &str) -> Result<Side, String> {
    match side {
        "source" => Ok(Side::Source),
        "translation" => Ok(Side::Translation),
        other => Err(format!(
            "Unknown side '{}'. Expected \"source\" or \"translation\"",
            other
        )),
    }
}

/// Syntax error message for a buffer, or an empty string when it parses.
///
/// The editor shows this under the pane; an empty string clears the alert.
pub fn syntax_message(text: &str, side: &str) -> Result<String, String> {
    let side = parse_side(side)?;
    Ok(match locjson_core::parse_document(text, side) {
        Ok(_) => String::new(),
        Err(e) => e.to_string(),
    })
}

/// Structure check of two buffers, serialized as a [`StructureReportDto`].
pub fn structure_report(source: &str, translation: &str) -> Result<String, String> {
    let mismatch =
        locjson_core::check_structure_str(source, translation).map_err(|e| e.to_string())?;
    serde_json::to_string(&StructureReportDto::from(mismatch))
        .map_err(|e| format!("Serialization error: {}", e))
}

fn to_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Build the blank translation template of a source buffer.
///
/// Returns two-space indented JSON, or throws if the source is not valid JSON.
#[wasm_bindgen(js_name = "extractTemplate")]
pub fn extract_template(source: &str) -> Result<String, JsValue> {
    locjson_core::template_from_str(source).map_err(|e| to_js(e.to_string()))
}

/// Every leaf value of a source buffer, one per line, ready for the clipboard.
#[wasm_bindgen(js_name = "extractLeaves")]
pub fn extract_leaves(source: &str) -> Result<String, JsValue> {
    locjson_core::leaves_from_str(source).map_err(|e| to_js(e.to_string()))
}

/// Whether the two buffers have the same structure.
///
/// Throws if either buffer is not valid JSON.
#[wasm_bindgen(js_name = "sameStructure")]
pub fn same_structure(source: &str, translation: &str) -> Result<bool, JsValue> {
    locjson_core::check_structure_str(source, translation)
        .map(|mismatch| mismatch.is_none())
        .map_err(|e| to_js(e.to_string()))
}

/// Structure check with the location of the first divergence.
///
/// Returns a JSON string `{matches, pointer, message, mismatch}`.
#[wasm_bindgen(js_name = "checkStructure")]
pub fn check_structure(source: &str, translation: &str) -> Result<String, JsValue> {
    structure_report(source, translation).map_err(to_js)
}

/// Syntax error message for a buffer (`side` is `"source"` or
/// `"translation"`), or `""` when it is valid JSON.
#[wasm_bindgen(js_name = "validateJson")]
pub fn validate_json(text: &str, side: &str) -> Result<String, JsValue> {
    syntax_message(text, side).map_err(to_js)
}

/// Download file name for a translation language, e.g. `"en"` → `"en.json"`.
#[wasm_bindgen(js_name = "translationFileName")]
pub fn translation_file_name(language: &str) -> Result<String, JsValue> {
    locjson_core::translation_file_name(language).map_err(|e| to_js(e.to_string()))
}
