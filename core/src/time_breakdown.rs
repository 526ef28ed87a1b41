//! Time breakdown normalisation.
//!
//! Each entry reads `"<time>"` or `"<time> (<percent>%)"`. Percentages are
//! all-or-nothing: if any entry lacks one, every percentage is recomputed
//! from the seconds and authored values are discarded.

use crate::time::parse_time_to_seconds;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeBreakdownEntry {
    pub category: String,
    /// Time text without the percent suffix.
    pub time:     String,
    pub seconds:  f64,
    pub percent:  u32,
}

fn percent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\((\d+)%\)").expect("valid percent regex"))
}

/// Normalise `(category, value)` pairs. Output is sorted by seconds,
/// largest first; equal times keep their input order.
pub fn normalize_time_breakdown<I, K, V>(entries: I) -> Vec<TimeBreakdownEntry>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    let mut parsed: Vec<(TimeBreakdownEntry, Option<u32>)> = entries
        .into_iter()
        .map(|(category, value)| {
            let value = value.as_ref();
            let time = value.split(" (").next().unwrap_or_default().trim().to_string();
            let seconds = parse_time_to_seconds(&time);
            let authored = percent_re()
                .captures(value)
                .and_then(|c| c[1].parse::<u32>().ok());
            let entry = TimeBreakdownEntry {
                category: category.into(),
                time,
                seconds,
                percent: authored.unwrap_or(0),
            };
            (entry, authored)
        })
        .collect();

    if parsed.iter().any(|(_, authored)| authored.is_none()) {
        let total: f64 = parsed
            .iter()
            .map(|(e, _)| e.seconds)
            // Unparseable entries stay out of the total so the rest still sum to ~100.
            .filter(|s| s.is_finite())
            .sum();
        for (entry, _) in &mut parsed {
            entry.percent = if total > 0.0 && entry.seconds.is_finite() {
                (entry.seconds / total * 100.0).round() as u32
            } else {
                0
            };
        }
    }

    let mut out: Vec<TimeBreakdownEntry> = parsed.into_iter().map(|(e, _)| e).collect();
    out.sort_by(|a, b| b.seconds.total_cmp(&a.seconds));
    out
}

/// Normalise a `time_breakdown` JSON object. Non-string values are
/// rendered with their JSON text. Returns `None` when `value` is not an
/// object; an empty object gives an empty breakdown, which is shown as
/// "no data" rather than hidden.
pub fn time_breakdown_from_json(value: &Value) -> Option<Vec<TimeBreakdownEntry>> {
    let map = value.as_object()?;
    let pairs: Vec<(String, String)> = map
        .iter()
        .map(|(k, v)| {
            let text = match v {
                Value::String(s) => s.clone(),
                other            => other.to_string(),
            };
            (k.clone(), text)
        })
        .collect();
    Some(normalize_time_breakdown(pairs))
}
