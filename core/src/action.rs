//! Action line grammar.
//!
//! Two line shapes appear in the ACTIONS section:
//!
//! ```text
//! sacrifice: 1.25, time: 03:10.500
//! item: dimension 1, amount:  1, total:   8, cost_one: 1e+50, cost_amount: 1e+50, cost_stack: 1e+51, time: 02:30.000
//! ```
//!
//! Lines matching neither are dropped without a partial record.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Row colouring for the actions table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    Purchase,
    Tickspeed,
    Sacrifice,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseAction {
    /// Item name with its first letter capitalised.
    pub item:        String,
    pub amount:      u64,
    pub total:       u64,
    pub cost_one:    String,
    pub cost_amount: String,
    pub cost_stack:  String,
    pub time:        String,
    pub category:    ActionCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SacrificeAction {
    /// Boost formatted to three decimals.
    pub boost: String,
    pub time:  String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionRecord {
    Purchase(PurchaseAction),
    Sacrifice(SacrificeAction),
}

impl ActionRecord {
    pub fn category(&self) -> ActionCategory {
        match self {
            ActionRecord::Purchase(p)  => p.category,
            ActionRecord::Sacrifice(_) => ActionCategory::Sacrifice,
        }
    }

    pub fn time(&self) -> &str {
        match self {
            ActionRecord::Purchase(p)  => &p.time,
            ActionRecord::Sacrifice(s) => &s.time,
        }
    }
}

/// One parsed line plus its presentation context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionRow {
    /// 1-based line position within the ACTIONS section.
    pub index:          usize,
    pub record:         ActionRecord,
    /// A purchase whose cost stack differs from the previous purchase.
    pub stack_boundary: bool,
}

fn sacrifice_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"sacrifice:\s*([\d.]+), time:\s*([\d:.]+)").expect("valid sacrifice regex")
    })
}

fn purchase_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"item:\s*(.+?), amount:\s*(\d+), total:\s*(\d+), ",
            r"cost_one:\s*([\d.eE+\-]+), cost_amount:\s*([\d.eE+\-]+), ",
            r"cost_stack:\s*([\d.eE+\-]+), time:\s*([\d:.]+)",
        ))
        .expect("valid purchase regex")
    })
}

/// Parse a single action line. Returns `None` for blank or unrecognised lines.
pub fn parse_action_line(line: &str) -> Option<ActionRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line.starts_with("sacrifice") {
        return parse_sacrifice(line).map(ActionRecord::Sacrifice);
    }
    parse_purchase(line).map(ActionRecord::Purchase)
}

fn parse_sacrifice(line: &str) -> Option<SacrificeAction> {
    let caps = sacrifice_re().captures(line)?;
    let boost: f64 = caps[1].parse().ok()?;
    Some(SacrificeAction {
        boost: format!("{boost:.3}"),
        time:  caps[2].to_string(),
    })
}

fn parse_purchase(line: &str) -> Option<PurchaseAction> {
    let caps = purchase_re().captures(line)?;
    let raw_item = caps[1].trim();
    let category = if raw_item.contains("tickspeed") {
        ActionCategory::Tickspeed
    } else {
        ActionCategory::Purchase
    };

    Some(PurchaseAction {
        item:        capitalize_first(raw_item),
        amount:      caps[2].parse().ok()?,
        total:       caps[3].parse().ok()?,
        cost_one:    caps[4].to_string(),
        cost_amount: caps[5].to_string(),
        cost_stack:  caps[6].to_string(),
        time:        caps[7].to_string(),
        category,
    })
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None        => String::new(),
    }
}

/// Parse the body of an ACTIONS section into rows.
///
/// Row indices follow line positions, so skipped lines still consume an index.
/// Stack boundaries compare each purchase against the previous purchase only;
/// sacrifices neither set nor reset the tracker.
pub fn parse_action_rows(section_body: &str) -> Vec<ActionRow> {
    let mut rows = Vec::new();
    let mut last_cost_stack: Option<String> = None;

    for (i, line) in section_body.trim().split('\n').enumerate() {
        let Some(record) = parse_action_line(line) else {
            continue;
        };

        let mut stack_boundary = false;
        if let ActionRecord::Purchase(p) = &record {
            stack_boundary = last_cost_stack
                .as_deref()
                .is_some_and(|prev| prev != p.cost_stack);
            last_cost_stack = Some(p.cost_stack.clone());
        }

        rows.push(ActionRow { index: i + 1, record, stack_boundary });
    }
    rows
}
