//! Strategy ranking by pc completion time.

use crate::{
    summary::{dropdown_label, StrategySummary, UNKNOWN_TIME},
    time::parse_time_to_seconds,
    types::{Platform, StrategyKey},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedStrategy {
    pub key:        StrategyKey,
    pub label:      String,
    pub pc_time:    String,
    /// `time::UNRANKED` when the pc total is missing or malformed.
    pub pc_seconds: f64,
}

/// Rank `keys` by pc total, fastest first. Unknown times sort last and
/// ties keep the order of `keys`.
pub fn rank_strategies(
    keys: &[StrategyKey],
    summaries: &HashMap<StrategyKey, Option<StrategySummary>>,
) -> Vec<RankedStrategy> {
    let mut ranked: Vec<RankedStrategy> = keys
        .iter()
        .map(|key| {
            let summary = summaries.get(key).and_then(Option::as_ref);
            let pc_time = summary
                .and_then(|s| s.total(Platform::Pc))
                .unwrap_or(UNKNOWN_TIME)
                .to_string();
            RankedStrategy {
                key:        key.clone(),
                label:      dropdown_label(key, summary),
                pc_seconds: parse_time_to_seconds(&pc_time),
                pc_time,
            }
        })
        .collect();

    ranked.sort_by(|a, b| a.pc_seconds.total_cmp(&b.pc_seconds));
    ranked
}
