//! Section extraction.
//!
//! A run log is a sequence of `=== NAME === ... === END NAME ===` blocks.
//! Any subset may be present; a missing block is not an error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    GameInfo,
    Actions,
    StrategySearchInfo,
    IterativeOptimizationInfo,
}

impl SectionName {
    pub const ALL: [SectionName; 4] = [
        SectionName::GameInfo,
        SectionName::Actions,
        SectionName::StrategySearchInfo,
        SectionName::IterativeOptimizationInfo,
    ];

    /// Marker title as written in the file.
    pub fn title(&self) -> &'static str {
        match self {
            SectionName::GameInfo                  => "GAME INFO",
            SectionName::Actions                   => "ACTIONS",
            SectionName::StrategySearchInfo        => "STRATEGY SEARCH INFO",
            SectionName::IterativeOptimizationInfo => "ITERATIVE OPTIMIZATION INFO",
        }
    }

    pub fn start_marker(&self) -> String {
        format!("=== {} ===", self.title())
    }

    pub fn end_marker(&self) -> String {
        format!("=== END {} ===", self.title())
    }
}

/// Return the text between the first start marker and the first end marker
/// that follows it. The inner text is returned untrimmed.
pub fn extract_section(text: &str, name: SectionName) -> Option<&str> {
    let start_marker = name.start_marker();
    let end_marker = name.end_marker();

    let body_start = text.find(&start_marker)? + start_marker.len();
    let body_len = text[body_start..].find(&end_marker)?;
    Some(&text[body_start..body_start + body_len])
}
