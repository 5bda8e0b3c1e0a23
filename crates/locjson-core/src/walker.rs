//! Recursive descent over one or two JSON trees.
//!
//! The three document algorithms are visitors plugged into the two drivers in
//! this module:
//!
//! - [`walk`] folds a single tree bottom-up. Children are visited before their
//!   parent's handler runs: array elements by ascending index, object entries
//!   in key insertion order. The handler receives the children's outputs in
//!   that same order.
//! - [`PairWalker`] visits corresponding nodes of two trees together. The
//!   walker classifies each pair; compound handlers get the walker back and
//!   choose which child pairs to descend into, so they can stop early.
//!
//! Visitors take `&self`. Any state a visitor needs must travel in its
//! `Output`.
//!
//! Recursion depth equals document depth, which is unbounded. Both drivers
//! switch to a heap-allocated stack segment when the current one runs low.

use serde_json::{Map, Value};

use crate::kind::{JsonKind, Scalar};

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;
/// Size of each new stack segment.
const STACK_SEGMENT: usize = 1024 * 1024;

/// Per-kind handlers for a single-tree fold.
pub trait Visitor {
    type Output;

    fn on_scalar(&self, scalar: Scalar<'_>) -> Self::Output;

    /// Called with one output per element, in index order.
    fn on_array(&self, elements: Vec<Self::Output>) -> Self::Output;

    /// Called with one `(key, output)` per entry, in key insertion order.
    fn on_object(&self, entries: Vec<(&str, Self::Output)>) -> Self::Output;
}

/// Fold `value` with `visitor`.
pub fn walk<V: Visitor + ?Sized>(visitor: &V, value: &Value) -> V::Output {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || walk_node(visitor, value))
}

fn walk_node<V: Visitor + ?Sized>(visitor: &V, value: &Value) -> V::Output {
    match value {
        Value::String(s) => visitor.on_scalar(Scalar::String(s)),
        Value::Number(n) => visitor.on_scalar(Scalar::Number(n)),
        Value::Bool(b) => visitor.on_scalar(Scalar::Boolean(*b)),
        Value::Null => visitor.on_scalar(Scalar::Null),
        Value::Array(elements) => {
            let outputs = elements.iter().map(|e| walk(visitor, e)).collect();
            visitor.on_array(outputs)
        }
        Value::Object(map) => {
            let outputs = map
                .iter()
                .map(|(key, child)| (key.as_str(), walk(visitor, child)))
                .collect();
            visitor.on_object(outputs)
        }
    }
}

/// Per-pair handlers for a two-tree walk.
pub trait PairVisitor {
    type Output;

    /// The two nodes have different kinds.
    fn on_mismatch(&self, left: JsonKind, right: JsonKind) -> Self::Output;

    /// Both nodes are scalars of the same `kind`.
    fn on_scalars(&self, kind: JsonKind) -> Self::Output;

    fn on_arrays(
        &self,
        walker: &PairWalker<'_, Self>,
        left: &[Value],
        right: &[Value],
    ) -> Self::Output;

    fn on_objects(
        &self,
        walker: &PairWalker<'_, Self>,
        left: &Map<String, Value>,
        right: &Map<String, Value>,
    ) -> Self::Output;
}

/// Drives a [`PairVisitor`] over two trees in lockstep.
pub struct PairWalker<'v, V: ?Sized> {
    visitor: &'v V,
}

impl<'v, V: PairVisitor + ?Sized> PairWalker<'v, V> {
    pub fn new(visitor: &'v V) -> Self {
        Self { visitor }
    }

    /// Classify the pair `(left, right)` and dispatch to the matching handler.
    pub fn walk(&self, left: &Value, right: &Value) -> V::Output {
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || self.walk_node(left, right))
    }

    fn walk_node(&self, left: &Value, right: &Value) -> V::Output {
        match (left, right) {
            (Value::Array(l), Value::Array(r)) => self.visitor.on_arrays(self, l, r),
            (Value::Object(l), Value::Object(r)) => self.visitor.on_objects(self, l, r),
            _ => {
                let left_kind = JsonKind::of(left);
                let right_kind = JsonKind::of(right);
                if left_kind == right_kind {
                    self.visitor.on_scalars(left_kind)
                } else {
                    self.visitor.on_mismatch(left_kind, right_kind)
                }
            }
        }
    }
}

/// Walk `left` and `right` together with `visitor`.
pub fn walk_pair<V: PairVisitor + ?Sized>(visitor: &V, left: &Value, right: &Value) -> V::Output {
    PairWalker::new(visitor).walk(left, right)
}
