//! Structural comparison of a source document against its translation.
//!
//! Two documents have the same structure when they nest the same way and
//! their objects carry the same key sets. Scalar values are never compared,
//! only their kinds.
//!
//! The pair rules, applied recursively:
//!
//! 1. Different kinds never match.
//! 2. Two arrays match if either is empty. Otherwise only their first
//!    elements are compared; later elements are not inspected.
//! 3. Two objects match if they have the same number of keys, every key of
//!    the left object exists in the right one, and each shared key's values
//!    match. Key order is ignored.
//! 4. Two scalars of the same kind always match.
//!
//! Rule 2 is a representative-element check. It does not catch arrays whose
//! elements diverge after index 0, and an empty translation array never
//! blocks a match.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::document::parse_document;
use crate::error::{Result, Side};
use crate::kind::JsonKind;
use crate::walker::{walk_pair, PairVisitor, PairWalker};

struct SameStructure;

impl PairVisitor for SameStructure {
    type Output = bool;

    fn on_mismatch(&self, left: JsonKind, right: JsonKind) -> bool {
        trace!(%left, %right, "kind mismatch");
        false
    }

    fn on_scalars(&self, _kind: JsonKind) -> bool {
        true
    }

    fn on_arrays(&self, walker: &PairWalker<'_, Self>, left: &[Value], right: &[Value]) -> bool {
        match (left.first(), right.first()) {
            (Some(l), Some(r)) => walker.walk(l, r),
            _ => true,
        }
    }

    fn on_objects(
        &self,
        walker: &PairWalker<'_, Self>,
        left: &Map<String, Value>,
        right: &Map<String, Value>,
    ) -> bool {
        if left.len() != right.len() {
            return false;
        }
        left.iter().all(|(key, l)| match right.get(key) {
            Some(r) => walker.walk(l, r),
            None => false,
        })
    }
}

/// Whether `a` and `b` have the same structure.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use locjson_core::same_structure;
///
/// assert!(same_structure(&json!({"a": "x", "b": [1]}), &json!({"b": [], "a": "y"})));
/// assert!(!same_structure(&json!({"a": 1}), &json!({"a": "x"})));
/// ```
pub fn same_structure(a: &Value, b: &Value) -> bool {
    let matched = walk_pair(&SameStructure, a, b);
    debug!(matched, "structure check");
    matched
}

/// One step of a path into a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

/// Why two nodes at the same path do not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchReason {
    KindMismatch { left: JsonKind, right: JsonKind },
    KeyCountMismatch { left: usize, right: usize },
    /// A key of the left object is absent from the right one.
    MissingKey { key: String },
}

/// The first structural divergence between two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Path from the document root to the diverging node.
    pub path: Vec<PathSegment>,
    pub reason: MismatchReason,
}

impl Mismatch {
    /// The path as an RFC 6901 JSON Pointer. The root is `""`.
    pub fn pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            out.push('/');
            match segment {
                PathSegment::Index(i) => out.push_str(&i.to_string()),
                PathSegment::Key(k) => out.push_str(&k.replace('~', "~0").replace('/', "~1")),
            }
        }
        out
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pointer = self.pointer();
        let at = if pointer.is_empty() { "/" } else { pointer.as_str() };
        match &self.reason {
            MismatchReason::KindMismatch { left, right } => {
                write!(f, "at {at}: expected {left}, found {right}")
            }
            MismatchReason::KeyCountMismatch { left, right } => {
                write!(f, "at {at}: source has {left} keys, translation has {right}")
            }
            MismatchReason::MissingKey { key } => {
                write!(f, "at {at}: key {key:?} is missing from the translation")
            }
        }
    }
}

/// Same pair rules as [`SameStructure`], reporting where they fail.
///
/// Paths are built while unwinding, so segments are pushed leaf-first and
/// reversed once in [`find_mismatch`].
struct LocateMismatch;

impl LocateMismatch {
    fn fail(reason: MismatchReason) -> Option<Mismatch> {
        Some(Mismatch {
            path: Vec::new(),
            reason,
        })
    }
}

impl PairVisitor for LocateMismatch {
    type Output = Option<Mismatch>;

    fn on_mismatch(&self, left: JsonKind, right: JsonKind) -> Option<Mismatch> {
        Self::fail(MismatchReason::KindMismatch { left, right })
    }

    fn on_scalars(&self, _kind: JsonKind) -> Option<Mismatch> {
        None
    }

    fn on_arrays(
        &self,
        walker: &PairWalker<'_, Self>,
        left: &[Value],
        right: &[Value],
    ) -> Option<Mismatch> {
        let (l, r) = (left.first()?, right.first()?);
        let mut mismatch = walker.walk(l, r)?;
        mismatch.path.push(PathSegment::Index(0));
        Some(mismatch)
    }

    fn on_objects(
        &self,
        walker: &PairWalker<'_, Self>,
        left: &Map<String, Value>,
        right: &Map<String, Value>,
    ) -> Option<Mismatch> {
        if left.len() != right.len() {
            return Self::fail(MismatchReason::KeyCountMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        for (key, l) in left {
            let Some(r) = right.get(key) else {
                return Self::fail(MismatchReason::MissingKey { key: key.clone() });
            };
            if let Some(mut mismatch) = walker.walk(l, r) {
                mismatch.path.push(PathSegment::Key(key.clone()));
                return Some(mismatch);
            }
        }
        None
    }
}

/// Locate the first place where `a` and `b` stop having the same structure.
///
/// Returns `None` exactly when [`same_structure`] returns `true`. Object keys
/// are checked in `a`'s insertion order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use locjson_core::find_mismatch;
///
/// let source = json!({"menu": {"open": "Open", "save": "Save"}});
/// let translation = json!({"menu": {"open": "Ouvrir", "close": "Fermer"}});
/// let mismatch = find_mismatch(&source, &translation).unwrap();
/// assert_eq!(mismatch.pointer(), "/menu");
/// ```
pub fn find_mismatch(a: &Value, b: &Value) -> Option<Mismatch> {
    let mut mismatch = walk_pair(&LocateMismatch, a, b)?;
    mismatch.path.reverse();
    debug!(pointer = %mismatch.pointer(), "structure mismatch");
    Some(mismatch)
}

/// Parse both buffers and compare their structure.
///
/// # Errors
///
/// Returns [`crate::LocError::Syntax`] naming the offending side if either
/// buffer is not valid JSON. A structural mismatch is not an error.
pub fn check_structure_str(source: &str, translation: &str) -> Result<Option<Mismatch>> {
    let a = parse_document(source, Side::Source)?;
    let b = parse_document(translation, Side::Translation)?;
    Ok(find_mismatch(&a, &b))
}
