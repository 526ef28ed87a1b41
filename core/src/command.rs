use crate::{
    columns::Column,
    types::{Dimboost, Galaxy, Platform, StrategyKey},
};
use serde::{Deserialize, Serialize};

/// All user-issued commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ViewerCommand {
    // ── Selection ─────────────────────────────────
    SelectPlatform { platform: Platform },
    SelectGalaxy   { galaxy: Galaxy },
    SelectDimboost { dimboost: Dimboost },
    SetSacrifice   { sacrifice: bool },
    SelectStrategy { strategy: StrategyKey },
    Reload,

    // ── Columns ───────────────────────────────────
    ToggleColumn { column: Column },
    ToggleAllColumns,

    // ── Tracking ──────────────────────────────────
    ToggleTracking,
    AdvanceTracking,
    KeyPressed { key: Key },
    /// Click inside the actions table. Clicks on buttons, selects,
    /// inputs and links set `on_control` and do not advance.
    TableClicked {
        #[serde(default)]
        on_control: bool,
    },

    // ── Panels ────────────────────────────────────
    ToggleStrategyInfo,
    ToggleIteration { index: usize },
    Download,
}

/// Keys the viewer reacts to while tracking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Space,
    Escape,
}
