//! Fetching summaries and run files.
//!
//! Summaries are fetched all at once; each one fails on its own into `None`.
//! A run file is a single fetch whose failure the reducer turns into an
//! empty display.

use crate::{
    document::LogDocument,
    error::ViewerResult,
    event::ViewerEvent,
    path::summary_path,
    source::RunSource,
    state::LoadedRun,
    summary::StrategySummary,
    types::StrategyKey,
};
use futures_util::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;

pub type SummaryMap = HashMap<StrategyKey, Option<StrategySummary>>;

/// Fetch every strategy's `summary.txt` concurrently.
pub async fn load_summaries(source: &dyn RunSource, keys: &[StrategyKey]) -> SummaryMap {
    let fetches = keys.iter().map(|key| async move {
        (key.clone(), load_summary(source, key).await)
    });
    join_all(fetches).await.into_iter().collect()
}

/// One strategy's summary, or `None` if it is missing or unreadable.
pub async fn load_summary(source: &dyn RunSource, key: &str) -> Option<StrategySummary> {
    let path = summary_path(key);
    match fetch_summary(source, &path).await {
        Ok(summary) => Some(summary),
        Err(e) => {
            log::debug!("no summary for {key} ({path}): {e}");
            None
        }
    }
}

async fn fetch_summary(source: &dyn RunSource, path: &str) -> ViewerResult<StrategySummary> {
    let text = source.fetch_text(path).await?;
    Ok(serde_json::from_str(&text)?)
}

/// Fetch and parse one run file.
pub async fn load_run(source: &dyn RunSource, path: &str) -> ViewerResult<LoadedRun> {
    let text = source.fetch_text(path).await?;
    let document = LogDocument::parse(&text);
    Ok(LoadedRun { path: path.to_string(), text, document })
}

/// Load a run and wrap the outcome as the event the reducer expects.
/// Owns its source so it can be spawned.
pub async fn run_load_event(
    source: Arc<dyn RunSource>,
    generation: u64,
    path: String,
) -> ViewerEvent {
    match load_run(source.as_ref(), &path).await {
        Ok(run) => ViewerEvent::RunLoaded { generation, run },
        Err(e) => ViewerEvent::RunFailed { generation, path, reason: e.to_string() },
    }
}

/// Load summaries and wrap them as an event. Owns its source so it can be spawned.
pub async fn summaries_event(source: Arc<dyn RunSource>, keys: Vec<StrategyKey>) -> ViewerEvent {
    let summaries = load_summaries(source.as_ref(), &keys).await;
    ViewerEvent::SummariesLoaded { summaries }
}
