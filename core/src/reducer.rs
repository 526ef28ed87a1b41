//! Pure reducer: (AppState, ViewerEvent) -> Vec<Effect>
//!
//! All state transitions happen here. I/O is requested through effects.
//!
//! Run loads carry a generation number. Only the response to the most
//! recently issued load may change state; anything older is dropped, so a
//! slow response can never overwrite a newer selection.

use crate::{
    command::{Key, ViewerCommand},
    event::{DownloadRequest, Effect, ViewerEvent},
    path::file_name_of,
    ranking::rank_strategies,
    state::AppState,
    types::{max_dimboost, GALAXIES},
};

pub fn reduce(state: &mut AppState, event: ViewerEvent) -> Vec<Effect> {
    match event {
        ViewerEvent::Command(command) => handle_command(state, command),

        ViewerEvent::SummariesLoaded { summaries } => {
            state.summaries = summaries;
            state.ranked = rank_strategies(&state.strategies, &state.summaries);
            vec![]
        }

        ViewerEvent::RunLoaded { generation, run } => {
            if generation != state.run_generation {
                log::debug!(
                    "discarding run {} (generation {generation}, latest {})",
                    run.path,
                    state.run_generation
                );
                return vec![];
            }
            state.loading = false;
            state.expanded_iterations.clear();
            state.run = Some(run);
            if state.tracking.active {
                state.tracking.enter(state.action_row_count());
            }
            vec![]
        }

        ViewerEvent::RunFailed { generation, path, reason } => {
            if generation != state.run_generation {
                log::debug!("discarding failure for {path} (generation {generation})");
                return vec![];
            }
            log::warn!("cannot load {path}: {reason}");
            state.loading = false;
            state.expanded_iterations.clear();
            state.run = None;
            state.tracking.exit();
            vec![]
        }
    }
}

fn handle_command(state: &mut AppState, command: ViewerCommand) -> Vec<Effect> {
    match command {
        ViewerCommand::SelectPlatform { platform } => {
            state.selection.platform = platform;
            state.selection.refresh_dimboost();
            selection_changed(state)
        }

        ViewerCommand::SelectGalaxy { galaxy } => {
            if !GALAXIES.contains(&galaxy) {
                log::warn!("ignoring unknown galaxy {galaxy}");
                return vec![];
            }
            state.selection.galaxy = galaxy;
            state.selection.refresh_dimboost();
            selection_changed(state)
        }

        ViewerCommand::SelectDimboost { dimboost } => {
            let max = max_dimboost(state.selection.galaxy);
            if dimboost > max {
                log::warn!("ignoring dimboost {dimboost}, galaxy {} allows up to {max}", state.selection.galaxy);
                return vec![];
            }
            state.selection.dimboost = dimboost;
            selection_changed(state)
        }

        ViewerCommand::SetSacrifice { sacrifice } => {
            state.selection.sacrifice = sacrifice;
            selection_changed(state)
        }

        ViewerCommand::SelectStrategy { strategy } => {
            if !state.strategies.contains(&strategy) {
                log::warn!("ignoring unknown strategy {strategy}");
                return vec![];
            }
            state.selection.strategy = strategy;
            selection_changed(state)
        }

        ViewerCommand::Reload => vec![begin_run_load(state)],

        ViewerCommand::ToggleColumn { column } => {
            state.columns.toggle(column);
            vec![Effect::PersistColumns]
        }

        ViewerCommand::ToggleAllColumns => {
            state.columns.toggle_all();
            vec![Effect::PersistColumns]
        }

        ViewerCommand::ToggleTracking => {
            let rows = state.action_row_count();
            state.tracking.toggle(rows);
            vec![]
        }

        ViewerCommand::AdvanceTracking
        | ViewerCommand::KeyPressed { key: Key::Space }
        | ViewerCommand::TableClicked { on_control: false } => {
            state.tracking.advance();
            vec![]
        }

        ViewerCommand::TableClicked { on_control: true } => vec![],

        ViewerCommand::KeyPressed { key: Key::Escape } => {
            state.tracking.exit();
            vec![]
        }

        ViewerCommand::ToggleStrategyInfo => {
            state.strategy_info_visible = !state.strategy_info_visible;
            vec![]
        }

        ViewerCommand::ToggleIteration { index } => {
            if index >= state.iteration_count() {
                return vec![];
            }
            if !state.expanded_iterations.remove(&index) {
                state.expanded_iterations.insert(index);
            }
            vec![]
        }

        ViewerCommand::Download => {
            let path = state.selection.run_path();
            let file_name = file_name_of(&path).to_string();
            vec![Effect::Download(DownloadRequest { path, file_name })]
        }
    }
}

fn selection_changed(state: &mut AppState) -> Vec<Effect> {
    vec![Effect::PersistSelection, begin_run_load(state)]
}

/// Issue a new run load; any load still in flight becomes stale.
pub fn begin_run_load(state: &mut AppState) -> Effect {
    state.run_generation += 1;
    state.loading = true;
    Effect::LoadRun {
        generation: state.run_generation,
        path:       state.selection.run_path(),
    }
}
