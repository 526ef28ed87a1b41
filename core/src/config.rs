use crate::types::StrategyKey;
use serde::{Deserialize, Serialize};

/// Strategies offered when the config file does not list any.
pub const BUILTIN_STRATEGIES: [&str; 6] = [
    "Optimized",
    "T12345678",
    "T87654321",
    "12T345678",
    "12345678T",
    "87654321T",
];

pub const DEFAULT_STRATEGY: &str = "Optimized";

/// Where run files and summaries are fetched from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceConfig {
    /// Local directory containing `Saved_Runs/`.
    Dir(String),
    /// Base URL serving `Saved_Runs/`.
    Http(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_source")]
    pub source:           SourceConfig,
    /// SQLite path for persisted settings; `:memory:` keeps nothing.
    #[serde(default = "default_settings_db")]
    pub settings_db:      String,
    #[serde(default = "default_strategies")]
    pub strategies:       Vec<StrategyKey>,
    #[serde(default = "default_strategy")]
    pub default_strategy: StrategyKey,
}

fn default_source() -> SourceConfig {
    SourceConfig::Dir(".".into())
}

fn default_settings_db() -> String {
    ":memory:".into()
}

fn default_strategies() -> Vec<StrategyKey> {
    BUILTIN_STRATEGIES.iter().map(|s| s.to_string()).collect()
}

fn default_strategy() -> StrategyKey {
    DEFAULT_STRATEGY.into()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            source:           default_source(),
            settings_db:      default_settings_db(),
            strategies:       default_strategies(),
            default_strategy: default_strategy(),
        }
    }
}

impl ViewerConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ViewerConfig = serde_json::from_str(&content)?;
        if config.strategies.is_empty() {
            anyhow::bail!("{path}: strategies must not be empty");
        }
        Ok(config)
    }

    /// Config rooted at `dir` with in-memory settings, for tests.
    pub fn default_test(dir: &str) -> Self {
        Self {
            source: SourceConfig::Dir(dir.into()),
            ..Self::default()
        }
    }
}
