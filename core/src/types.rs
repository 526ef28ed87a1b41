//! Shared primitive types used across the entire viewer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A strategy key, e.g. "Optimized" or "T12345678".
pub type StrategyKey = String;

/// Galaxies bought during a run.
pub type Galaxy = u32;

/// Dimension boosts bought during a run.
pub type Dimboost = u32;

/// Every galaxy count a run can be saved for.
pub const GALAXIES: [Galaxy; 3] = [0, 1, 2];

/// Runs at or above this dimboost may carry a `_sac` variant.
pub const SACRIFICE_MIN_DIMBOOST: Dimboost = 5;

/// Highest dimboost available for a galaxy count.
pub fn max_dimboost(galaxy: Galaxy) -> Dimboost {
    match galaxy {
        0 => 8,
        1 => 12,
        2 => 16,
        _ => 8,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[default]
    Pc,
    Mobile,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Pc, Platform::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Pc     => "pc",
            Platform::Mobile => "mobile",
        }
    }

    /// Dropdown caption ("PC", "MOBILE").
    pub fn caption(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pc"     => Ok(Platform::Pc),
            "mobile" => Ok(Platform::Mobile),
            other    => Err(format!("unknown platform '{other}'")),
        }
    }
}
