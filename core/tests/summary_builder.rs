//! Building `summary.txt` from a strategy's saved runs.

use runlog_core::{
    summary::StrategySummary,
    summary_builder::{build_summary, run_game_seconds, write_summary},
    types::{max_dimboost, Platform, GALAXIES},
};
use std::fs;
use std::path::Path;

fn write_run(strategy_dir: &Path, platform: Platform, galaxy: u32, dimboost: u32, game_time: &str) {
    let dir = strategy_dir.join(platform.as_str()).join(format!("galaxy{galaxy}"));
    fs::create_dir_all(&dir).unwrap();
    let sac = if dimboost >= 5 { "_sac" } else { "" };
    let name = format!("{platform}_galaxy{galaxy}_dimboost{dimboost}{sac}.txt");
    let text = format!("=== GAME INFO ===\n{{\"game_time\": \"{game_time}\"}}\n=== END GAME INFO ===\n");
    fs::write(dir.join(name), text).unwrap();
}

/// Every run takes one second, so galaxy g totals max_dimboost(g) + 1 seconds.
fn full_tree(strategy_dir: &Path) {
    for platform in Platform::ALL {
        for galaxy in GALAXIES {
            for dimboost in 0..=max_dimboost(galaxy) {
                write_run(strategy_dir, platform, galaxy, dimboost, "00:01.000");
            }
        }
    }
}

#[test]
fn sums_galaxies_and_platform_totals() {
    let dir = tempfile::tempdir().unwrap();
    full_tree(dir.path());

    let summary = build_summary(dir.path(), vec!["Line one".into()]).unwrap();
    let pc = summary.platform(Platform::Pc).expect("pc");
    assert_eq!(pc.galaxies["0"], "00:09.000");
    assert_eq!(pc.galaxies["1"], "00:13.000");
    assert_eq!(pc.galaxies["2"], "00:17.000");
    assert_eq!(summary.total(Platform::Pc), Some("00:39.000"));
    assert_eq!(summary.total(Platform::Mobile), Some("00:39.000"));
    assert_eq!(summary.description, Some(vec!["Line one".to_string()]));
}

#[test]
fn missing_run_fails_the_build() {
    let dir = tempfile::tempdir().unwrap();
    full_tree(dir.path());
    fs::remove_file(dir.path().join("mobile/galaxy2/mobile_galaxy2_dimboost16_sac.txt")).unwrap();
    assert!(build_summary(dir.path(), vec![]).is_err());
}

#[test]
fn unreadable_game_time_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.txt");
    fs::write(&path, "=== GAME INFO ===\n{\"game_time\": \"?\"}\n=== END GAME INFO ===").unwrap();
    assert!(run_game_seconds(&path).is_err());

    fs::write(&path, "no sections here").unwrap();
    assert!(run_game_seconds(&path).is_err());

    fs::write(&path, "=== GAME INFO ===\n{\"game_time\": \"01:02.500\"}\n=== END GAME INFO ===").unwrap();
    assert!((run_game_seconds(&path).unwrap() - 62.5).abs() < 1e-9);
}

/// The written file is what the viewer later reads back.
#[test]
fn written_summary_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    full_tree(dir.path());
    let path = write_summary(dir.path(), vec!["a".into(), "".into(), "b".into()]).unwrap();
    assert!(path.ends_with("summary.txt"));

    let text = fs::read_to_string(path).unwrap();
    let summary: StrategySummary = serde_json::from_str(&text).unwrap();
    assert_eq!(summary.total(Platform::Pc), Some("00:39.000"));
    assert_eq!(summary.description.map(|d| d.len()), Some(3));
}
