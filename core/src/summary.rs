//! Per-strategy summary (`summary.txt`).
//!
//! One per strategy, loaded independently. A strategy whose summary could
//! not be fetched or parsed is carried as `None` and shown as "no data".

use crate::{
    document::display_value,
    types::{Platform, StrategyKey},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_DATA: &str = "No data";
pub const UNKNOWN_TIME: &str = "?";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StrategySummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times:       Option<SummaryTimes>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SummaryTimes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pc:     Option<PlatformTimes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<PlatformTimes>,
}

/// Galaxy subtotals keyed by galaxy number, plus the platform total.
/// Values are normally time strings; anything else is shown as its JSON text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlatformTimes {
    #[serde(flatten)]
    pub galaxies: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total:    Option<Value>,
}

impl StrategySummary {
    pub fn platform(&self, platform: Platform) -> Option<&PlatformTimes> {
        let times = self.times.as_ref()?;
        match platform {
            Platform::Pc     => times.pc.as_ref(),
            Platform::Mobile => times.mobile.as_ref(),
        }
    }

    /// Platform total, when present as a non-empty string.
    pub fn total(&self, platform: Platform) -> Option<&str> {
        self.platform(platform)
            .and_then(|t| t.total.as_ref())
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }
}

/// Dropdown caption: `"<key> (<pc total> / <mobile total>)"`, `?` when unknown.
pub fn dropdown_label(key: &str, summary: Option<&StrategySummary>) -> String {
    let pc = summary.and_then(|s| s.total(Platform::Pc)).unwrap_or(UNKNOWN_TIME);
    let mobile = summary.and_then(|s| s.total(Platform::Mobile)).unwrap_or(UNKNOWN_TIME);
    format!("{key} ({pc} / {mobile})")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum DescriptionBlock {
    Paragraph(String),
    Break,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlatformTimesPanel {
    NoData { message: String },
    Times { galaxies: Vec<GalaxyTime>, total: Option<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalaxyTime {
    pub galaxy: String,
    pub time:   String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyInfoPanel {
    pub strategy:    StrategyKey,
    /// `None` renders as "No description available".
    pub description: Option<Vec<DescriptionBlock>>,
    pub pc:          PlatformTimesPanel,
    pub mobile:      PlatformTimesPanel,
}

impl StrategyInfoPanel {
    pub fn build(strategy: &str, summary: Option<&StrategySummary>) -> Self {
        let description = summary.and_then(|s| s.description.as_ref()).map(|lines| {
            lines
                .iter()
                .map(|line| {
                    if line.is_empty() {
                        DescriptionBlock::Break
                    } else {
                        DescriptionBlock::Paragraph(line.clone())
                    }
                })
                .collect()
        });

        Self {
            strategy: strategy.to_string(),
            description,
            pc: platform_panel(summary.and_then(|s| s.platform(Platform::Pc))),
            mobile: platform_panel(summary.and_then(|s| s.platform(Platform::Mobile))),
        }
    }
}

fn platform_panel(times: Option<&PlatformTimes>) -> PlatformTimesPanel {
    let no_data = || PlatformTimesPanel::NoData { message: NO_DATA.to_string() };
    let Some(times) = times else {
        return no_data();
    };

    let galaxies: Vec<GalaxyTime> = times
        .galaxies
        .iter()
        .map(|(galaxy, time)| GalaxyTime { galaxy: galaxy.clone(), time: display_value(Some(time)) })
        .collect();
    let total = times
        .total
        .as_ref()
        .filter(|t| !t.is_null() && t.as_str() != Some(""))
        .map(|t| display_value(Some(t)));

    if galaxies.is_empty() && total.is_none() {
        return no_data();
    }
    PlatformTimesPanel::Times { galaxies, total }
}
