//! Messages into the reducer and effects out of it.
//!
//! RULE: The reducer never performs I/O. It asks for it with an `Effect`;
//! the engine (or the shell) runs it and feeds the outcome back as a
//! `ViewerEvent`.

use crate::{command::ViewerCommand, loader::SummaryMap, state::LoadedRun};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum ViewerEvent {
    Command(ViewerCommand),

    SummariesLoaded {
        summaries: SummaryMap,
    },
    /// `generation` is the value issued with the matching `Effect::LoadRun`.
    RunLoaded {
        generation: u64,
        run:        LoadedRun,
    },
    RunFailed {
        generation: u64,
        path:       String,
        reason:     String,
    },
}

impl From<ViewerCommand> for ViewerEvent {
    fn from(command: ViewerCommand) -> Self {
        ViewerEvent::Command(command)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    PersistSelection,
    PersistColumns,
    LoadSummaries,
    LoadRun { generation: u64, path: String },
    Download(DownloadRequest),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadRequest {
    pub path:      String,
    pub file_name: String,
}
