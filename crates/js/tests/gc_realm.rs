#![cfg(test)]
//! Tests for cell id minting and the tracing visitor.

use js::{CellId, JSError, JSValue, Realm, Trace, Visitor};

struct Pair {
    first: CellId,
    second: CellId,
}

impl Trace for Pair {
    fn visit_edges(&self, visitor: &mut Visitor) {
        visitor.visit(self.first);
        visitor.visit(self.second);
    }
}

#[test]
fn realm_mints_distinct_ids_tagged_with_realm() {
    let mut realm = Realm::new(7);
    let first = realm.allocate();
    let second = realm.allocate();
    assert_ne!(first, second);
    assert_eq!(realm.id(), 7);
    assert_eq!(first.realm(), 7);
    assert_eq!(second.realm(), 7);
    assert_eq!(second.counter(), first.counter() + 1);
}

#[test]
fn visitor_collects_edges_in_report_order() {
    let mut realm = Realm::default();
    let pair = Pair {
        first: realm.allocate(),
        second: realm.allocate(),
    };
    assert_eq!(Visitor::edges_of(&pair), vec![pair.first, pair.second]);
}

#[test]
fn values_format_like_script_strings() {
    assert_eq!(JSValue::Undefined.to_string(), "undefined");
    assert_eq!(JSValue::Number(600.0).to_string(), "600");
    assert_eq!(JSValue::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(
        JSValue::exception("AbortError", "Aborted without reason").to_string(),
        "AbortError: Aborted without reason"
    );
    assert_eq!(
        JSError::Thrown(JSValue::from("stop")).to_string(),
        "Uncaught stop"
    );
}
