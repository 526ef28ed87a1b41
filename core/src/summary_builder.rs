//! Builds a strategy's `summary.txt` from its saved run files.
//!
//! Galaxy subtotals add up the game time of every dimboost run for that
//! galaxy; the platform total adds up the galaxies. Runs from dimboost 5
//! upward are read from their `_sac` variant.

use crate::{
    document::GameInfo,
    error::{ViewerError, ViewerResult},
    path::{run_file_name, SUMMARY_FILE},
    section::{extract_section, SectionName},
    summary::{PlatformTimes, StrategySummary, SummaryTimes},
    time::{format_seconds, parse_time_to_seconds},
    types::{max_dimboost, Galaxy, Platform, GALAXIES, SACRIFICE_MIN_DIMBOOST},
};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Summarise the runs under `strategy_dir` (a `Saved_Runs/<strategy>` folder).
pub fn build_summary(strategy_dir: &Path, description: Vec<String>) -> ViewerResult<StrategySummary> {
    let mut times = SummaryTimes::default();

    for platform in Platform::ALL {
        let mut platform_times = PlatformTimes::default();
        let mut platform_total = 0.0;

        for galaxy in GALAXIES {
            let galaxy_secs = galaxy_seconds(strategy_dir, platform, galaxy)?;
            platform_times
                .galaxies
                .insert(galaxy.to_string(), Value::String(format_seconds(galaxy_secs)));
            platform_total += galaxy_secs;
        }
        platform_times.total = Some(Value::String(format_seconds(platform_total)));
        log::debug!("{} {platform}: total {platform_total:.3}s", strategy_dir.display());

        match platform {
            Platform::Pc     => times.pc = Some(platform_times),
            Platform::Mobile => times.mobile = Some(platform_times),
        }
    }

    Ok(StrategySummary {
        description: Some(description),
        times:       Some(times),
    })
}

/// Build and write `<strategy_dir>/summary.txt`. Returns the written path.
pub fn write_summary(strategy_dir: &Path, description: Vec<String>) -> ViewerResult<PathBuf> {
    let summary = build_summary(strategy_dir, description)?;
    let path = strategy_dir.join(SUMMARY_FILE);
    std::fs::write(&path, serde_json::to_string_pretty(&summary)?)?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

fn galaxy_seconds(strategy_dir: &Path, platform: Platform, galaxy: Galaxy) -> ViewerResult<f64> {
    let dir = strategy_dir
        .join(platform.as_str())
        .join(format!("galaxy{galaxy}"));

    let mut total = 0.0;
    for dimboost in 0..=max_dimboost(galaxy) {
        let sacrifice = dimboost >= SACRIFICE_MIN_DIMBOOST;
        let path = dir.join(run_file_name(platform, galaxy, dimboost, sacrifice));
        total += run_game_seconds(&path)?;
    }
    Ok(total)
}

/// Game time of one run file, in seconds.
pub fn run_game_seconds(path: &Path) -> ViewerResult<f64> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ViewerError::NotFound {
            path: path.display().to_string(),
        },
        _ => ViewerError::Io(e),
    })?;

    let body = extract_section(&text, SectionName::GameInfo).ok_or_else(|| {
        anyhow::anyhow!("{}: no GAME INFO section", path.display())
    })?;
    let info: GameInfo = serde_json::from_str(body)?;
    let game_time = info.game_time.as_ref().and_then(Value::as_str).unwrap_or_default();
    let secs = parse_time_to_seconds(game_time);
    if !secs.is_finite() {
        return Err(anyhow::anyhow!("{}: unreadable game_time '{game_time}'", path.display()).into());
    }
    Ok(secs)
}
