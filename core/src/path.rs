//! Resource paths under the `Saved_Runs` tree.

use crate::types::{Dimboost, Galaxy, Platform, SACRIFICE_MIN_DIMBOOST};

pub const RUNS_ROOT: &str = "Saved_Runs";
pub const SUMMARY_FILE: &str = "summary.txt";

/// Replace `<>:"/\|?*` with `_` so a strategy name is usable as a folder.
pub fn sanitize_strategy_folder(strategy: &str) -> String {
    strategy
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .collect()
}

/// The `_sac` variant applies only from dimboost 5 upward.
pub fn uses_sacrifice_suffix(dimboost: Dimboost, sacrifice: bool) -> bool {
    dimboost >= SACRIFICE_MIN_DIMBOOST && sacrifice
}

/// File name of a run, without its folder.
pub fn run_file_name(platform: Platform, galaxy: Galaxy, dimboost: Dimboost, sacrifice: bool) -> String {
    let sac = if uses_sacrifice_suffix(dimboost, sacrifice) { "_sac" } else { "" };
    format!("{platform}_galaxy{galaxy}_dimboost{dimboost}{sac}.txt")
}

/// `Saved_Runs/<strategy>/<platform>/galaxy<g>/<platform>_galaxy<g>_dimboost<d>[_sac].txt`
pub fn run_file_path(
    platform: Platform,
    galaxy: Galaxy,
    dimboost: Dimboost,
    sacrifice: bool,
    strategy: &str,
) -> String {
    format!(
        "{RUNS_ROOT}/{}/{platform}/galaxy{galaxy}/{}",
        sanitize_strategy_folder(strategy),
        run_file_name(platform, galaxy, dimboost, sacrifice),
    )
}

/// `Saved_Runs/<strategy>/summary.txt`
pub fn summary_path(strategy: &str) -> String {
    format!("{RUNS_ROOT}/{}/{SUMMARY_FILE}", sanitize_strategy_folder(strategy))
}

/// Last path segment, used as the download file name.
pub fn file_name_of(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
