//! Application state. Owned by the engine, changed only by the reducer.

use crate::{
    columns::ColumnVisibility,
    document::LogDocument,
    loader::SummaryMap,
    ranking::{rank_strategies, RankedStrategy},
    selection::Selection,
    summary::StrategySummary,
    tracking::TrackingState,
    types::StrategyKey,
};
use std::collections::BTreeSet;

/// A fetched run file and its parsed form.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRun {
    pub path:     String,
    pub text:     String,
    pub document: LogDocument,
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Configured strategy keys, in configuration order.
    pub strategies:            Vec<StrategyKey>,
    pub selection:             Selection,
    pub summaries:             SummaryMap,
    pub ranked:                Vec<RankedStrategy>,
    pub run:                   Option<LoadedRun>,
    /// Generation of the most recently requested run load.
    pub run_generation:        u64,
    pub loading:               bool,
    pub columns:               ColumnVisibility,
    pub tracking:              TrackingState,
    pub strategy_info_visible: bool,
    pub expanded_iterations:   BTreeSet<usize>,
}

impl AppState {
    pub fn new(strategies: Vec<StrategyKey>, selection: Selection, columns: ColumnVisibility) -> Self {
        let summaries = SummaryMap::new();
        let ranked = rank_strategies(&strategies, &summaries);
        Self {
            strategies,
            selection,
            summaries,
            ranked,
            run: None,
            run_generation: 0,
            loading: false,
            columns,
            tracking: TrackingState::default(),
            strategy_info_visible: false,
            expanded_iterations: BTreeSet::new(),
        }
    }

    pub fn document(&self) -> Option<&LogDocument> {
        self.run.as_ref().map(|r| &r.document)
    }

    pub fn action_row_count(&self) -> usize {
        self.document().map_or(0, |d| d.actions.len())
    }

    pub fn iteration_count(&self) -> usize {
        self.document()
            .and_then(|d| d.iterative_optimization_info.parsed())
            .map_or(0, |info| info.iterations.len())
    }

    pub fn current_summary(&self) -> Option<&StrategySummary> {
        self.summaries
            .get(&self.selection.strategy)
            .and_then(Option::as_ref)
    }
}
