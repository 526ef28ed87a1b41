//! Parsed run log.
//!
//! Built fresh per fetched file and never mutated afterwards. Each JSON
//! section is parsed on its own: a malformed section keeps its raw text
//! and the others are unaffected.

use crate::{
    action::{parse_action_rows, ActionRow},
    section::{extract_section, SectionName},
    time_breakdown::{time_breakdown_from_json, TimeBreakdownEntry},
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub type InfoMap = Map<String, Value>;

/// A JSON section as found in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum SectionContent<T> {
    Absent,
    Parsed(T),
    /// Present but not valid JSON for this section; trimmed inner text.
    Raw(String),
}

impl<T> SectionContent<T> {
    pub fn parsed(&self) -> Option<&T> {
        match self {
            SectionContent::Parsed(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, SectionContent::Absent)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GameInfo {
    /// Usually `"MM:SS.mmm"`, but any JSON value is kept and displayed.
    #[serde(default)]
    pub game_time:     Option<Value>,
    #[serde(default)]
    pub ticks_passed:  Option<Value>,
    #[serde(default)]
    pub tick_duration: Option<Value>,
    /// platform, galaxies_bought, etc.
    #[serde(flatten)]
    pub extra:         InfoMap,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Iteration {
    #[serde(default)]
    pub game_info:            Option<GameInfo>,
    #[serde(default)]
    pub strategy_search_info: Option<InfoMap>,
    #[serde(flatten)]
    pub extra:                InfoMap,
}

impl Iteration {
    pub fn time_breakdown(&self) -> Option<Vec<TimeBreakdownEntry>> {
        self.strategy_search_info
            .as_ref()
            .and_then(|info| info.get("time_breakdown"))
            .and_then(time_breakdown_from_json)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IterativeOptimizationInfo {
    /// `null` reads as no iterations.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub iterations: Vec<Iteration>,
    #[serde(flatten)]
    pub extra:      InfoMap,
}

impl IterativeOptimizationInfo {
    pub fn best_iteration(&self) -> Option<usize> {
        best_iteration_index(self.iterations.len())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogDocument {
    pub game_info:                   SectionContent<GameInfo>,
    pub actions_present:             bool,
    pub actions:                     Vec<ActionRow>,
    pub strategy_search_info:        SectionContent<InfoMap>,
    pub iterative_optimization_info: SectionContent<IterativeOptimizationInfo>,
}

impl LogDocument {
    /// Split `text` into sections and parse each one.
    pub fn parse(text: &str) -> Self {
        let actions_body = extract_section(text, SectionName::Actions);
        Self {
            game_info: parse_json_section(text, SectionName::GameInfo),
            actions_present: actions_body.is_some(),
            actions: actions_body.map(parse_action_rows).unwrap_or_default(),
            strategy_search_info: parse_json_section(text, SectionName::StrategySearchInfo),
            iterative_optimization_info: parse_json_section(
                text,
                SectionName::IterativeOptimizationInfo,
            ),
        }
    }

    /// Normalised breakdown of the top-level strategy search, if any.
    pub fn time_breakdown(&self) -> Option<Vec<TimeBreakdownEntry>> {
        self.strategy_search_info
            .parsed()
            .and_then(|info| info.get("time_breakdown"))
            .and_then(time_breakdown_from_json)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn parse_json_section<T: DeserializeOwned>(text: &str, name: SectionName) -> SectionContent<T> {
    let Some(body) = extract_section(text, name) else {
        return SectionContent::Absent;
    };
    match serde_json::from_str::<T>(body) {
        Ok(value) => SectionContent::Parsed(value),
        Err(e) => {
            log::warn!("section {} is not valid JSON, showing raw text: {e}", name.title());
            SectionContent::Raw(body.trim().to_string())
        }
    }
}

/// Index of the iteration marked as best.
///
/// Two iterations: the last one. Three or more: the third from last.
/// Fewer than two: none.
pub fn best_iteration_index(count: usize) -> Option<usize> {
    match count {
        2 => Some(1),
        n if n >= 3 => Some(n - 3),
        _ => None,
    }
}

/// Render a JSON value for a card: strings unquoted, null or missing as "-".
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) if s.is_empty() => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
