use runlog_core::time_breakdown::{normalize_time_breakdown, time_breakdown_from_json};
use serde_json::json;

#[test]
fn missing_percents_are_derived_from_seconds() {
    let out = normalize_time_breakdown([("x", "1:00.000"), ("y", "1:00.000")]);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|e| e.percent == 50));
}

#[test]
fn supplied_percents_are_kept_when_every_entry_has_one() {
    let out = normalize_time_breakdown([("x", "1:00.000 (70%)"), ("y", "1:00.000 (30%)")]);
    let x = out.iter().find(|e| e.category == "x").expect("x");
    let y = out.iter().find(|e| e.category == "y").expect("y");
    assert_eq!(x.percent, 70);
    assert_eq!(y.percent, 30);
    assert_eq!(x.time, "1:00.000");
}

#[test]
fn one_missing_percent_recomputes_all_of_them() {
    let out = normalize_time_breakdown([
        ("tick", "0:03.000 (90%)"),
        ("buy", "0:01.000"),
    ]);
    let tick = out.iter().find(|e| e.category == "tick").expect("tick");
    let buy = out.iter().find(|e| e.category == "buy").expect("buy");
    assert_eq!(tick.percent, 75);
    assert_eq!(buy.percent, 25);
}

#[test]
fn entries_are_sorted_by_seconds_descending() {
    let out = normalize_time_breakdown([
        ("clear", "0:01.000"),
        ("tick", "0:05.000"),
        ("buy", "0:03.000"),
    ]);
    let order: Vec<&str> = out.iter().map(|e| e.category.as_str()).collect();
    assert_eq!(order, vec!["tick", "buy", "clear"]);
    assert!((out[0].seconds - 5.0).abs() < 1e-9);
}

#[test]
fn equal_times_keep_input_order() {
    let out = normalize_time_breakdown([("b", "0:01.000"), ("a", "0:01.000")]);
    assert_eq!(out[0].category, "b");
    assert_eq!(out[1].category, "a");
}

#[test]
fn zero_total_gives_zero_percent() {
    let out = normalize_time_breakdown([("x", "0:00.000"), ("y", "0:00.000")]);
    assert!(out.iter().all(|e| e.percent == 0));
}

#[test]
fn unparseable_time_sorts_first_with_zero_percent() {
    let out = normalize_time_breakdown([("ok", "0:02.000"), ("bad", "soon")]);
    assert_eq!(out[0].category, "bad");
    assert_eq!(out[0].percent, 0);
    assert_eq!(out[1].percent, 100);
}

#[test]
fn json_object_is_normalized_in_document_order() {
    let value = json!({
        "tick": "00:06.000 (60%)",
        "buy":  "00:04.000 (40%)",
    });
    let out = time_breakdown_from_json(&value).expect("object");
    assert_eq!(out[0].category, "tick");
    assert_eq!(out[0].percent, 60);

    assert_eq!(time_breakdown_from_json(&json!({})), Some(vec![]));
    assert!(time_breakdown_from_json(&json!("nope")).is_none());
}

/// A huge minutes field is an unparseable time, not a panic.
#[test]
fn overflowing_time_is_treated_as_unparseable() {
    let out = normalize_time_breakdown([
        ("x", "999999999999999999:00.000 (10%)"),
        ("y", "0:01.000"),
    ]);
    let x = out.iter().find(|e| e.category == "x").expect("x");
    assert!(x.seconds.is_infinite());
    assert_eq!(x.percent, 0);
}
