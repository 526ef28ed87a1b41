//! Game-time strings.
//!
//! Run logs write times as `MM:SS.mmm`. Anything that does not parse is
//! `UNRANKED`, which sorts after every real time.

/// Sentinel for a missing or malformed time.
pub const UNRANKED: f64 = f64::INFINITY;

/// Parse `M:SS.mmm` into seconds.
///
/// `"?"`, the empty string and anything malformed yield `UNRANKED`.
pub fn parse_time_to_seconds(time_str: &str) -> f64 {
    let s = time_str.trim();
    if s.is_empty() || s == "?" {
        return UNRANKED;
    }

    let Some((minutes, rest)) = s.split_once(':') else {
        return UNRANKED;
    };
    let Some((seconds, millis)) = rest.split_once('.') else {
        return UNRANKED;
    };

    match (
        minutes.parse::<u64>(),
        seconds.parse::<u64>(),
        millis.parse::<u64>(),
    ) {
        (Ok(m), Ok(sec), Ok(ms)) => m
            .checked_mul(60)
            .and_then(|v| v.checked_add(sec))
            .map_or(UNRANKED, |whole| whole as f64 + ms as f64 / 1000.0),
        _ => UNRANKED,
    }
}

/// Format seconds as `MM:SS.mmm`. Non-finite input formats as `"?"`.
pub fn format_seconds(secs: f64) -> String {
    if !secs.is_finite() {
        return "?".to_string();
    }
    let total_ms = (secs.max(0.0) * 1000.0).round() as u64;
    let minutes = total_ms / 60_000;
    let seconds = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{minutes:02}:{seconds:02}.{millis:03}")
}
