//! The viewer engine: owns state, the resource source and the settings store.
//!
//! RULES:
//!   - Every state change goes through `reducer::reduce`.
//!   - Settings writes happen here, right after the reducer asks for them.
//!   - Fetches either run inline (`dispatch`) or are handed to the caller
//!     as futures (`handle` + `fetch_task`) so it can run them concurrently.
//!     Either way the outcome goes back through `apply`.

use crate::{
    command::ViewerCommand,
    config::ViewerConfig,
    error::ViewerResult,
    event::{DownloadRequest, Effect, ViewerEvent},
    loader::{run_load_event, summaries_event},
    reducer::reduce,
    selection::Selection,
    source::{source_from_config, DirSource, RunSource},
    state::AppState,
    store::SettingsStore,
    view::{project, ViewModel},
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A fetch handed to the caller. Resolves to the event to `apply`.
pub type FetchTask = Pin<Box<dyn Future<Output = ViewerEvent> + Send>>;

pub struct ViewerEngine {
    pub state: AppState,
    source:    Arc<dyn RunSource>,
    store:     SettingsStore,
}

impl ViewerEngine {
    /// Restore the last selection and column toggles from `store`.
    pub fn new(config: &ViewerConfig, source: Arc<dyn RunSource>, store: SettingsStore) -> ViewerResult<Self> {
        let persisted = store.load_selection()?;
        let selection = Selection::restore(&persisted, &config.strategies, &config.default_strategy);
        let columns = store.load_columns();
        log::debug!("restored selection {selection:?} from {}", source.describe());

        Ok(Self {
            state: AppState::new(config.strategies.clone(), selection, columns),
            source,
            store,
        })
    }

    /// Build a fully wired engine from configuration.
    pub fn build(config: &ViewerConfig) -> ViewerResult<Self> {
        let store = SettingsStore::open(&config.settings_db)?;
        store.migrate()?;
        Self::new(config, source_from_config(&config.source), store)
    }

    /// Engine over a local directory with in-memory settings.
    pub fn build_test(dir: &str) -> ViewerResult<Self> {
        let config = ViewerConfig::default_test(dir);
        let store = SettingsStore::in_memory()?;
        store.migrate()?;
        Self::new(&config, Arc::new(DirSource::new(dir)), store)
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Load all summaries, then the selected run.
    pub async fn start(&mut self) -> Option<DownloadRequest> {
        let pending = self.handle_effects(vec![Effect::LoadSummaries, Effect::PersistSelection]);
        self.run_inline(pending).await;
        self.dispatch(ViewerCommand::Reload).await
    }

    /// Apply a command and run every fetch it needs before returning.
    /// Returns a download request when the command asked for one.
    pub async fn dispatch(&mut self, command: ViewerCommand) -> Option<DownloadRequest> {
        let pending = self.handle(command);
        self.run_inline(pending).await
    }

    /// Apply a command and run its synchronous effects.
    /// Returns the effects the caller must still run (fetches, downloads).
    pub fn handle(&mut self, command: ViewerCommand) -> Vec<Effect> {
        self.apply(ViewerEvent::Command(command))
    }

    /// Feed any event through the reducer.
    pub fn apply(&mut self, event: ViewerEvent) -> Vec<Effect> {
        let effects = reduce(&mut self.state, event);
        self.handle_effects(effects)
    }

    /// A spawnable future for a fetch effect. `None` for other effects.
    pub fn fetch_task(&self, effect: &Effect) -> Option<FetchTask> {
        let source = Arc::clone(&self.source);
        let task: FetchTask = match effect {
            Effect::LoadRun { generation, path } => {
                Box::pin(run_load_event(source, *generation, path.clone()))
            }
            Effect::LoadSummaries => {
                Box::pin(summaries_event(source, self.state.strategies.clone()))
            }
            _ => return None,
        };
        Some(task)
    }

    pub fn view(&self) -> ViewModel {
        project(&self.state)
    }

    /// Fetch the text behind a download request.
    pub async fn download_text(&self, request: &DownloadRequest) -> ViewerResult<String> {
        match &self.state.run {
            Some(run) if run.path == request.path => Ok(run.text.clone()),
            _ => self.source.fetch_text(&request.path).await,
        }
    }

    fn handle_effects(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut pending = Vec::new();
        for effect in effects {
            match effect {
                Effect::PersistSelection => {
                    if let Err(e) = self.store.save_selection(&self.state.selection) {
                        log::warn!("cannot persist selection: {e}");
                    }
                }
                Effect::PersistColumns => {
                    if let Err(e) = self.store.save_columns(&self.state.columns) {
                        log::warn!("cannot persist column toggles: {e}");
                    }
                }
                other => pending.push(other),
            }
        }
        pending
    }

    async fn run_inline(&mut self, mut pending: Vec<Effect>) -> Option<DownloadRequest> {
        let mut download = None;
        while let Some(effect) = pending.pop() {
            if let Effect::Download(request) = effect {
                download = Some(request);
                continue;
            }
            if let Some(task) = self.fetch_task(&effect) {
                let event = task.await;
                pending.extend(self.apply(event));
            }
        }
        download
    }
}
