use runlog_core::{
    ranking::rank_strategies,
    summary::{PlatformTimes, PlatformTimesPanel, StrategyInfoPanel, StrategySummary, SummaryTimes},
    types::Platform,
};
use std::collections::HashMap;

fn summary_with_pc_total(total: &str) -> StrategySummary {
    StrategySummary {
        description: None,
        times: Some(SummaryTimes {
            pc: Some(PlatformTimes { total: Some(total.into()), ..Default::default() }),
            mobile: None,
        }),
    }
}

#[test]
fn ranks_by_pc_total_with_unknown_last() {
    let keys: Vec<String> = vec!["A".into(), "B".into(), "C".into()];
    let summaries = HashMap::from([
        ("A".to_string(), Some(summary_with_pc_total("0:10.000"))),
        ("B".to_string(), Some(summary_with_pc_total("?"))),
        ("C".to_string(), Some(summary_with_pc_total("0:05.000"))),
    ]);

    let ranked = rank_strategies(&keys, &summaries);
    let order: Vec<&str> = ranked.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(order, vec!["C", "A", "B"]);
}

#[test]
fn missing_summaries_rank_last_in_key_order() {
    let keys: Vec<String> = vec!["X".into(), "Y".into(), "Z".into()];
    let summaries = HashMap::from([
        ("X".to_string(), None),
        ("Z".to_string(), Some(summary_with_pc_total("1:00.000"))),
    ]);

    let ranked = rank_strategies(&keys, &summaries);
    let order: Vec<&str> = ranked.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(order, vec!["Z", "X", "Y"]);
    assert_eq!(ranked[1].label, "X (? / ?)");
    assert!(ranked[1].pc_seconds.is_infinite());
}

#[test]
fn labels_show_pc_and_mobile_totals() {
    let mut summary = summary_with_pc_total("12:00.000");
    if let Some(times) = summary.times.as_mut() {
        times.mobile = Some(PlatformTimes { total: Some("15:30.250".into()), ..Default::default() });
    }
    let keys = vec!["Optimized".to_string()];
    let summaries = HashMap::from([("Optimized".to_string(), Some(summary))]);

    let ranked = rank_strategies(&keys, &summaries);
    assert_eq!(ranked[0].label, "Optimized (12:00.000 / 15:30.250)");
    assert_eq!(ranked[0].pc_time, "12:00.000");
}

/// A non-string galaxy value is displayed, not a reason to drop the summary.
#[test]
fn summary_with_numeric_galaxy_time_still_loads() {
    let summary: StrategySummary = serde_json::from_str(
        r#"{"description": ["d"], "times": {"pc": {"0": 42, "1": "00:02.000", "total": "00:05.000"}}}"#,
    )
    .unwrap();
    assert_eq!(summary.total(Platform::Pc), Some("00:05.000"));

    let panel = StrategyInfoPanel::build("Optimized", Some(&summary));
    let PlatformTimesPanel::Times { galaxies, total } = panel.pc else { panic!("pc times") };
    assert_eq!(galaxies[0].time, "42");
    assert_eq!(galaxies[1].time, "00:02.000");
    assert_eq!(total.as_deref(), Some("00:05.000"));
    assert!(matches!(panel.mobile, PlatformTimesPanel::NoData { .. }));
}
