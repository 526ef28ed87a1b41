//! The platform / galaxy / dimboost / sacrifice / strategy selection.

use crate::{
    path::run_file_path,
    types::{max_dimboost, Dimboost, Galaxy, Platform, StrategyKey, GALAXIES},
};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const KEY_PLATFORM:  &str = "ad-platform";
pub const KEY_GALAXY:    &str = "ad-galaxy";
pub const KEY_DIMBOOST:  &str = "ad-dimboost";
pub const KEY_SACRIFICE: &str = "ad-sacrifice";
pub const KEY_STRATEGY:  &str = "ad-strategy";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    pub platform:  Platform,
    pub galaxy:    Galaxy,
    pub dimboost:  Dimboost,
    pub sacrifice: bool,
    pub strategy:  StrategyKey,
}

/// Raw persisted values, exactly as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSelection {
    pub platform:  Option<String>,
    pub galaxy:    Option<String>,
    pub dimboost:  Option<String>,
    pub sacrifice: Option<String>,
    pub strategy:  Option<String>,
}

impl Selection {
    /// Rebuild a selection from persisted values, falling back to defaults
    /// for anything absent or no longer valid.
    pub fn restore(
        persisted: &PersistedSelection,
        strategies: &[StrategyKey],
        default_strategy: &str,
    ) -> Self {
        let platform = persisted
            .platform
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default();
        let galaxy = persisted
            .galaxy
            .as_deref()
            .and_then(|g| g.parse::<Galaxy>().ok())
            .filter(|g| GALAXIES.contains(g))
            .unwrap_or(0);
        let sacrifice = persisted.sacrifice.as_deref().map_or(true, |s| s == "true");
        let strategy = persisted
            .strategy
            .clone()
            .filter(|s| strategies.contains(s))
            .unwrap_or_else(|| default_strategy.to_string());
        let dimboost = resolve_dimboost(
            max_dimboost(galaxy),
            persisted.dimboost.as_deref(),
            persisted.dimboost.as_deref(),
        );

        Self { platform, galaxy, dimboost, sacrifice, strategy }
    }

    pub fn dimboost_options(&self) -> RangeInclusive<Dimboost> {
        0..=max_dimboost(self.galaxy)
    }

    /// Re-derive the dimboost after the galaxy (and so its range) changed.
    pub fn refresh_dimboost(&mut self) {
        let current = self.dimboost.to_string();
        self.dimboost = resolve_dimboost(max_dimboost(self.galaxy), None, Some(&current));
    }

    pub fn run_path(&self) -> String {
        run_file_path(self.platform, self.galaxy, self.dimboost, self.sacrifice, &self.strategy)
    }

    /// Key/value pairs to persist.
    pub fn to_persisted(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_PLATFORM,  self.platform.to_string()),
            (KEY_GALAXY,    self.galaxy.to_string()),
            (KEY_DIMBOOST,  self.dimboost.to_string()),
            (KEY_SACRIFICE, self.sacrifice.to_string()),
            (KEY_STRATEGY,  self.strategy.clone()),
        ]
    }
}

/// Pick the dimboost for a range `0..=max`.
///
/// An explicit saved value within range wins. Otherwise the persisted
/// value is used if in range, 0 if nothing is persisted, and `max` if the
/// persisted value no longer fits.
pub fn resolve_dimboost(max: Dimboost, saved: Option<&str>, persisted: Option<&str>) -> Dimboost {
    if let Some(v) = saved.and_then(|s| s.parse::<Dimboost>().ok()) {
        if v <= max {
            return v;
        }
    }
    match persisted.filter(|p| !p.is_empty()) {
        None => 0,
        Some(p) => match p.parse::<Dimboost>() {
            Ok(v) if v <= max => v,
            _ => max,
        },
    }
}
