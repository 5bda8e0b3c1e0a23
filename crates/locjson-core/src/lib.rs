//! # locjson-core
//!
//! Shape-aware helpers for **paired localization JSON files**: a source
//! document (e.g. `ja.json`) and its translation (e.g. `en.json`).
//!
//! Three pure operations work on parsed documents:
//!
//! - **Template extraction** clears every string leaf while keeping keys,
//!   array lengths and non-string leaves, producing a scaffold for a new
//!   translation file.
//! - **Leaf extraction** flattens every scalar into an ordered list of text,
//!   for copying translatable strings out in bulk.
//! - **Structure checking** tells whether two documents have the same shape
//!   (same key sets, same nesting), regardless of their values.
//!
//! ## Quick start
//!
//! ```rust
//! use serde_json::json;
//! use locjson_core::{extract_leaves, extract_template, same_structure};
//!
//! let source = json!({"title": "Hi", "count": 3, "tags": ["a", "b"]});
//!
//! let template = extract_template(&source);
//! assert_eq!(template, json!({"title": "", "count": 3, "tags": ["", ""]}));
//!
//! assert_eq!(extract_leaves(&source), vec!["Hi", "3", "a", "b"]);
//! assert!(same_structure(&source, &template));
//! ```
//!
//! ## Modules
//!
//! - [`kind`] — `JsonKind` classification and the `Scalar` leaf view
//! - [`walker`] — single-tree fold (`Visitor`) and two-tree walk (`PairVisitor`)
//! - [`template`] — blank translation templates
//! - [`leaves`] — ordered leaf values
//! - [`structure`] — structural equivalence and mismatch location
//! - [`document`] — parsing, pretty rendering, and file naming
//! - [`error`] — error types for the text boundary

pub mod document;
pub mod error;
pub mod kind;
pub mod leaves;
pub mod structure;
pub mod template;
pub mod walker;

pub use document::{join_leaves, parse_document, render_pretty, translation_file_name};
pub use error::{LocError, Side};
pub use kind::{JsonKind, Scalar};
pub use leaves::{extract_leaves, leaves_from_str};
pub use structure::{
    check_structure_str, find_mismatch, same_structure, Mismatch, MismatchReason, PathSegment,
};
pub use template::{extract_template, template_from_str};
pub use walker::{walk, walk_pair, PairVisitor, PairWalker, Visitor};
