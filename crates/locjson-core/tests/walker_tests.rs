/// Tests for the shared traversal drivers, using small custom visitors.
use std::cell::RefCell;

use locjson_core::{walk, walk_pair, JsonKind, PairVisitor, PairWalker, Scalar, Visitor};
use serde_json::{json, Map, Value};

/// Records scalars in the order the walker hands them out.
struct Trace;

impl Visitor for Trace {
    type Output = String;

    fn on_scalar(&self, scalar: Scalar<'_>) -> String {
        scalar.to_text()
    }

    fn on_array(&self, elements: Vec<String>) -> String {
        format!("[{}]", elements.join(","))
    }

    fn on_object(&self, entries: Vec<(&str, String)>) -> String {
        let parts: Vec<String> = entries.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("{{{}}}", parts.join(","))
    }
}

/// Maximum nesting depth; scalars are depth 0.
struct Depth;

impl Visitor for Depth {
    type Output = usize;

    fn on_scalar(&self, _scalar: Scalar<'_>) -> usize {
        0
    }

    fn on_array(&self, elements: Vec<usize>) -> usize {
        1 + elements.into_iter().max().unwrap_or(0)
    }

    fn on_object(&self, entries: Vec<(&str, usize)>) -> usize {
        1 + entries.into_iter().map(|(_, d)| d).max().unwrap_or(0)
    }
}

// ============================================================================
// 1. Single-tree fold
// ============================================================================

#[test]
fn arrays_are_visited_by_ascending_index() {
    assert_eq!(walk(&Trace, &json!([3, 1, 2])), "[3,1,2]");
}

#[test]
fn objects_are_visited_in_insertion_order() {
    let doc: Value = serde_json::from_str(r#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
    assert_eq!(walk(&Trace, &doc), "{zeta=1,alpha=2,mid=3}");
}

#[test]
fn nested_structures_fold_bottom_up() {
    let doc = json!({"a": [1, {"b": null}], "c": "x"});
    assert_eq!(walk(&Trace, &doc), "{a=[1,{b=null}],c=x}");
    assert_eq!(walk(&Depth, &doc), 3);
}

#[test]
fn empty_compounds_get_empty_children() {
    assert_eq!(walk(&Trace, &json!([])), "[]");
    assert_eq!(walk(&Trace, &json!({})), "{}");
    assert_eq!(walk(&Depth, &json!([[[]]])), 3);
}

#[test]
fn scalar_root_is_a_single_visit() {
    assert_eq!(walk(&Trace, &json!("only")), "only");
    assert_eq!(walk(&Depth, &json!(5)), 0);
}

// ============================================================================
// 2. Two-tree walk
// ============================================================================

/// Logs every pair the walker classifies, and descends into all children
/// present on both sides.
#[derive(Default)]
struct PairLog {
    events: RefCell<Vec<String>>,
}

impl PairVisitor for PairLog {
    type Output = ();

    fn on_mismatch(&self, left: JsonKind, right: JsonKind) {
        self.events.borrow_mut().push(format!("mismatch {left}/{right}"));
    }

    fn on_scalars(&self, kind: JsonKind) {
        self.events.borrow_mut().push(format!("scalars {kind}"));
    }

    fn on_arrays(&self, walker: &PairWalker<'_, Self>, left: &[Value], right: &[Value]) {
        self.events
            .borrow_mut()
            .push(format!("arrays {}/{}", left.len(), right.len()));
        for (l, r) in left.iter().zip(right) {
            walker.walk(l, r);
        }
    }

    fn on_objects(
        &self,
        walker: &PairWalker<'_, Self>,
        left: &Map<String, Value>,
        right: &Map<String, Value>,
    ) {
        self.events
            .borrow_mut()
            .push(format!("objects {}/{}", left.len(), right.len()));
        for (key, l) in left {
            if let Some(r) = right.get(key) {
                walker.walk(l, r);
            }
        }
    }
}

fn pair_events(a: &Value, b: &Value) -> Vec<String> {
    let log = PairLog::default();
    walk_pair(&log, a, b);
    log.events.into_inner()
}

#[test]
fn same_kind_scalars_are_paired() {
    assert_eq!(pair_events(&json!("a"), &json!("b")), vec!["scalars string"]);
    assert_eq!(pair_events(&json!(null), &json!(null)), vec!["scalars null"]);
}

#[test]
fn different_kinds_are_a_mismatch() {
    assert_eq!(
        pair_events(&json!("x"), &json!(1)),
        vec!["mismatch string/number"]
    );
    assert_eq!(
        pair_events(&json!([]), &json!({})),
        vec!["mismatch array/object"]
    );
    assert_eq!(
        pair_events(&json!(null), &json!({})),
        vec!["mismatch null/object"]
    );
}

#[test]
fn compound_handlers_control_descent() {
    let a = json!({"k": [1, "x"]});
    let b = json!({"k": [2, true, 3]});
    assert_eq!(
        pair_events(&a, &b),
        vec![
            "objects 1/1",
            "arrays 2/3",
            "scalars number",
            "mismatch string/boolean",
        ]
    );
}

#[test]
fn pair_walker_can_be_reused_directly() {
    let log = PairLog::default();
    let walker = PairWalker::new(&log);
    walker.walk(&json!(1), &json!(2));
    walker.walk(&json!(true), &json!("t"));
    assert_eq!(
        log.events.into_inner(),
        vec!["scalars number", "mismatch boolean/string"]
    );
}
