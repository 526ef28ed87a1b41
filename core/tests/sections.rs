//! Section extraction and per-section JSON fallback.

use runlog_core::{
    document::{LogDocument, SectionContent},
    section::{extract_section, SectionName},
};

const LOG: &str = r#"=== GAME INFO ===
{
    "platform": "pc",
    "game_time": "02:35.100",
    "ticks_passed": 3102,
    "tick_duration": 0.05
}
=== END GAME INFO ===

=== ACTIONS ===
item: dimension 1, amount:  1, total:   1, cost_one: 1e+01, cost_amount: 1e+01, cost_stack: 1e+02, time: 00:00.050
=== END ACTIONS ===
"#;

#[test]
fn extracts_text_between_markers() {
    let body = extract_section("=== ACTIONS ===abc\ndef=== END ACTIONS ===", SectionName::Actions);
    assert_eq!(body, Some("abc\ndef"));
}

#[test]
fn missing_markers_mean_no_section() {
    assert_eq!(extract_section(LOG, SectionName::StrategySearchInfo), None);
    assert_eq!(extract_section(LOG, SectionName::IterativeOptimizationInfo), None);
    // Start marker without its end marker.
    assert_eq!(extract_section("=== ACTIONS ===\nitem: x", SectionName::Actions), None);
}

#[test]
fn match_is_non_greedy() {
    let text = "=== ACTIONS ===a=== END ACTIONS ===\n=== ACTIONS ===b=== END ACTIONS ===";
    assert_eq!(extract_section(text, SectionName::Actions), Some("a"));
}

#[test]
fn document_parses_present_sections_only() {
    let doc = LogDocument::parse(LOG);

    let info = doc.game_info.parsed().expect("game info parsed");
    assert_eq!(info.game_time.as_ref().and_then(|v| v.as_str()), Some("02:35.100"));
    assert_eq!(info.ticks_passed, Some(serde_json::json!(3102)));
    assert_eq!(info.extra.get("platform"), Some(&serde_json::json!("pc")));

    assert!(doc.actions_present);
    assert_eq!(doc.actions.len(), 1);
    assert_eq!(doc.strategy_search_info, SectionContent::Absent);
    assert_eq!(doc.iterative_optimization_info, SectionContent::Absent);
    assert!(doc.time_breakdown().is_none());
}

#[test]
fn malformed_json_falls_back_to_raw_text_for_that_section_only() {
    let text = format!(
        "{LOG}\n=== STRATEGY SEARCH INFO ===\n  {{ not json\n=== END STRATEGY SEARCH INFO ===\n"
    );
    let doc = LogDocument::parse(&text);

    assert_eq!(doc.strategy_search_info, SectionContent::Raw("{ not json".into()));
    assert!(doc.game_info.parsed().is_some());
    assert_eq!(doc.actions.len(), 1);
}

#[test]
fn empty_text_has_no_sections() {
    let doc = LogDocument::parse("");
    assert!(!doc.game_info.is_present());
    assert!(!doc.actions_present);
    assert!(doc.actions.is_empty());
}

/// Valid JSON with unexpected value types still parses; only broken JSON is raw.
#[test]
fn numeric_game_time_is_not_malformed() {
    let text = "=== GAME INFO ===\n{\"game_time\": 12, \"ticks_passed\": 3}\n=== END GAME INFO ===";
    let doc = LogDocument::parse(text);
    let info = doc.game_info.parsed().expect("game info parsed");
    assert_eq!(info.game_time, Some(serde_json::json!(12)));
}

#[test]
fn null_iterations_read_as_none() {
    let text = "=== ITERATIVE OPTIMIZATION INFO ===\n{\"CPU\": \"x\", \"iterations\": null}\n=== END ITERATIVE OPTIMIZATION INFO ===";
    let doc = LogDocument::parse(text);
    let info = doc.iterative_optimization_info.parsed().expect("optimization parsed");
    assert!(info.iterations.is_empty());
    assert_eq!(info.extra.get("CPU"), Some(&serde_json::json!("x")));
    assert_eq!(info.best_iteration(), None);
}
