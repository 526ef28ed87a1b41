//! Pure projection of `AppState` into what a shell renders.

use crate::{
    action::{ActionCategory, ActionRecord, ActionRow},
    columns::Column,
    document::{display_value, GameInfo, InfoMap, Iteration, SectionContent},
    path::file_name_of,
    state::AppState,
    summary::StrategyInfoPanel,
    time_breakdown::TimeBreakdownEntry,
    types::{Dimboost, Galaxy, Platform, StrategyKey, GALAXIES},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_ITERATION_TIME: &str = "00:00.000";
pub const BEST_ITERATION_MARK: &str = "(best iteration)";
pub const NO_TIME_BREAKDOWN: &str = "No time breakdown data available";

const STRATEGY_SEARCH_KEYS: [&str; 8] = [
    "purchase_strategy",
    "sacrifice_strategy",
    "sacrifice_step",
    "strategy_search_time",
    "CPU",
    "used_memory_mb",
    "states_analyzed",
    "number_of_winners",
];

const OPTIMIZATION_KEYS: [&str; 5] = [
    "total_strategy_search_time",
    "CPU",
    "max_used_memory_mb",
    "total_states_analyzed",
    "number_of_iterations",
];

/// Card caption for a document key; unknown keys are shown as-is.
pub fn label_for(key: &str) -> &str {
    match key {
        "platform"                   => "Platform",
        "galaxies_bought"            => "Galaxies",
        "dimboosts_bought"           => "Dimboosts",
        "has_sacrifice"              => "Sacrifice",
        "game_time"                  => "Game time",
        "ticks_passed"               => "Ticks passed",
        "tick_duration"              => "Tick duration",
        "purchase_strategy"          => "Purchase strategy",
        "sacrifice_strategy"         => "Sacrifice strategy",
        "sacrifice_step"             => "Sacrifice step",
        "strategy_search_time"       => "Strategy search time",
        "CPU"                        => "CPU",
        "used_memory_mb"             => "Used memory (MB)",
        "max_used_memory_mb"         => "Max used memory (MB)",
        "states_analyzed"            => "States analyzed",
        "number_of_winners"          => "Number of winners",
        "number_of_iterations"       => "Number of iterations",
        "total_strategy_search_time" => "Total strategy search time",
        "total_states_analyzed"      => "Total states analyzed",
        other                        => other,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub selection:             SelectionView,
    pub strategy_info_visible: bool,
    pub strategy_info:         StrategyInfoPanel,
    pub loading:               bool,
    pub game_info:             CardsView,
    pub columns:               Vec<ColumnView>,
    pub visible_column_count:  usize,
    pub actions:               Vec<ActionRowView>,
    pub tracking:              TrackingView,
    /// `None` hides the strategy search area.
    pub strategy_search:       Option<CardsView>,
    /// `None` hides the time breakdown area.
    pub time_breakdown:        Option<BreakdownView>,
    /// `None` hides the optimization area.
    pub optimization:          Option<OptimizationView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionView {
    pub platform:         Platform,
    pub platforms:        Vec<OptionView>,
    pub galaxy:           Galaxy,
    pub galaxies:         Vec<Galaxy>,
    pub dimboost:         Dimboost,
    pub dimboost_options: Vec<Dimboost>,
    pub sacrifice:        bool,
    pub strategy:         StrategyKey,
    /// Ranked fastest first.
    pub strategies:       Vec<OptionView>,
    pub run_path:         String,
    pub file_name:        String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionView {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfoCard {
    pub key:   String,
    pub label: String,
    pub value: String,
}

impl InfoCard {
    fn new(key: &str, value: Option<&Value>) -> Self {
        Self {
            key:   key.to_string(),
            label: label_for(key).to_string(),
            value: display_value(value),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum CardsView {
    Cards(Vec<InfoCard>),
    /// Section text that was not valid JSON.
    Raw(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnView {
    pub id:      String,
    pub name:    String,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionRowView {
    pub index:          usize,
    pub category:       ActionCategory,
    pub action:         String,
    pub amount:         String,
    pub total:          String,
    pub cost_one:       String,
    pub cost_amount:    String,
    pub cost_stack:     String,
    pub time:           String,
    pub stack_boundary: bool,
    pub highlighted:    bool,
}

impl ActionRowView {
    fn from_row(row: &ActionRow, highlighted: bool) -> Self {
        let (action, amount, total, cost_one, cost_amount, cost_stack) = match &row.record {
            ActionRecord::Purchase(p) => (
                p.item.clone(),
                p.amount.to_string(),
                p.total.to_string(),
                p.cost_one.clone(),
                p.cost_amount.clone(),
                p.cost_stack.clone(),
            ),
            ActionRecord::Sacrifice(s) => (
                "Sacrifice".to_string(),
                "-".to_string(),
                "-".to_string(),
                s.boost.clone(),
                s.boost.clone(),
                s.boost.clone(),
            ),
        };
        Self {
            index: row.index,
            category: row.record.category(),
            action,
            amount,
            total,
            cost_one,
            cost_amount,
            cost_stack,
            time: row.record.time().to_string(),
            stack_boundary: row.stack_boundary,
            highlighted,
        }
    }

    /// Cell text for a column.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Index      => self.index.to_string(),
            Column::Action     => self.action.clone(),
            Column::Amount     => self.amount.clone(),
            Column::Total      => self.total.clone(),
            Column::CostOne    => self.cost_one.clone(),
            Column::CostAmount => self.cost_amount.clone(),
            Column::CostStack  => self.cost_stack.clone(),
            Column::Time       => self.time.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackingView {
    pub active:        bool,
    /// 1-based row under the cursor; 0 when not tracking.
    pub current_index: usize,
    pub total:         usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizationView {
    pub cards:      CardsView,
    pub iterations: Vec<IterationView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IterationView {
    pub index:           usize,
    pub title:           String,
    pub best:            bool,
    pub expanded:        bool,
    pub game_info:       Vec<InfoCard>,
    pub strategy_search: Vec<InfoCard>,
    pub time_breakdown:  Option<BreakdownView>,
}

/// A time breakdown area: bars, or a "no data" line for an empty breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum BreakdownView {
    Entries(Vec<TimeBreakdownEntry>),
    NoData(String),
}

impl BreakdownView {
    fn from_entries(entries: Vec<TimeBreakdownEntry>) -> Self {
        if entries.is_empty() {
            BreakdownView::NoData(NO_TIME_BREAKDOWN.to_string())
        } else {
            BreakdownView::Entries(entries)
        }
    }
}

pub fn project(state: &AppState) -> ViewModel {
    let document = state.document();
    let highlighted = state.tracking.highlighted();

    let actions = document
        .map(|d| {
            d.actions
                .iter()
                .enumerate()
                .map(|(i, row)| ActionRowView::from_row(row, highlighted == Some(i)))
                .collect()
        })
        .unwrap_or_default();

    let (strategy_search, time_breakdown) = match document.map(|d| &d.strategy_search_info) {
        Some(SectionContent::Parsed(info)) => (
            Some(CardsView::Cards(pick_cards(info, &STRATEGY_SEARCH_KEYS))),
            document
                .and_then(|d| d.time_breakdown())
                .map(BreakdownView::from_entries),
        ),
        Some(SectionContent::Raw(text)) => (Some(CardsView::Raw(text.clone())), None),
        _ => (None, None),
    };

    let optimization = match document.map(|d| &d.iterative_optimization_info) {
        Some(SectionContent::Parsed(info)) => {
            let best = info.best_iteration();
            let iterations = info
                .iterations
                .iter()
                .enumerate()
                .map(|(i, it)| {
                    iteration_view(i, it, best == Some(i), state.expanded_iterations.contains(&i))
                })
                .collect();
            Some(OptimizationView {
                cards: CardsView::Cards(pick_cards(&info.extra, &OPTIMIZATION_KEYS)),
                iterations,
            })
        }
        Some(SectionContent::Raw(text)) => Some(OptimizationView {
            cards:      CardsView::Raw(text.clone()),
            iterations: vec![],
        }),
        _ => None,
    };

    let run_path = state.selection.run_path();

    ViewModel {
        selection: SelectionView {
            platform: state.selection.platform,
            platforms: Platform::ALL
                .iter()
                .map(|p| OptionView { value: p.to_string(), label: p.caption() })
                .collect(),
            galaxy: state.selection.galaxy,
            galaxies: GALAXIES.to_vec(),
            dimboost: state.selection.dimboost,
            dimboost_options: state.selection.dimboost_options().collect(),
            sacrifice: state.selection.sacrifice,
            strategy: state.selection.strategy.clone(),
            strategies: state
                .ranked
                .iter()
                .map(|r| OptionView { value: r.key.clone(), label: r.label.clone() })
                .collect(),
            file_name: file_name_of(&run_path).to_string(),
            run_path,
        },
        strategy_info_visible: state.strategy_info_visible,
        strategy_info: StrategyInfoPanel::build(&state.selection.strategy, state.current_summary()),
        loading: state.loading,
        game_info: game_info_view(document.map(|d| &d.game_info)),
        columns: Column::ALL
            .iter()
            .map(|c| ColumnView {
                id:      c.id().to_string(),
                name:    c.name().to_string(),
                visible: state.columns.is_visible(*c),
            })
            .collect(),
        visible_column_count: state.columns.visible_count(),
        tracking: TrackingView {
            active:        state.tracking.active,
            current_index: highlighted.map_or(0, |i| i + 1),
            total:         if state.tracking.active { state.tracking.rows } else { 0 },
        },
        actions,
        strategy_search,
        time_breakdown,
        optimization,
    }
}

fn pick_cards(info: &InfoMap, keys: &[&str]) -> Vec<InfoCard> {
    keys.iter().map(|k| InfoCard::new(k, info.get(*k))).collect()
}

fn game_info_cards(info: Option<&GameInfo>) -> Vec<InfoCard> {
    vec![
        InfoCard::new("game_time", info.and_then(|i| i.game_time.as_ref())),
        InfoCard::new("ticks_passed", info.and_then(|i| i.ticks_passed.as_ref())),
        InfoCard::new("tick_duration", info.and_then(|i| i.tick_duration.as_ref())),
    ]
}

fn game_info_view(section: Option<&SectionContent<GameInfo>>) -> CardsView {
    match section {
        Some(SectionContent::Raw(text))    => CardsView::Raw(text.clone()),
        Some(SectionContent::Parsed(info)) => CardsView::Cards(game_info_cards(Some(info))),
        _                                  => CardsView::Cards(game_info_cards(None)),
    }
}

fn iteration_view(index: usize, iteration: &Iteration, best: bool, expanded: bool) -> IterationView {
    let game_time = iteration
        .game_info
        .as_ref()
        .and_then(|g| g.game_time.as_ref())
        .filter(|v| !v.is_null() && v.as_str() != Some(""))
        .map(|v| display_value(Some(v)))
        .unwrap_or_else(|| DEFAULT_ITERATION_TIME.to_string());

    let mut title = format!("Iteration {} - {game_time}", index + 1);
    if best {
        title.push(' ');
        title.push_str(BEST_ITERATION_MARK);
    }

    let strategy_search = iteration
        .strategy_search_info
        .as_ref()
        .map(|info| {
            info.iter()
                .filter(|(k, _)| k.as_str() != "time_breakdown")
                .map(|(k, v)| InfoCard::new(k, Some(v)))
                .collect()
        })
        .unwrap_or_default();

    IterationView {
        index,
        title,
        best,
        expanded,
        game_info: iteration
            .game_info
            .as_ref()
            .map(|g| game_info_cards(Some(g)))
            .unwrap_or_default(),
        strategy_search,
        time_breakdown: iteration.time_breakdown().map(BreakdownView::from_entries),
    }
}
