//! Where run files and summaries come from.
//!
//! Any failure to produce the text, including a non-OK HTTP status or a
//! missing file, means "data absent" to the caller. Nothing here retries.

use crate::{
    config::SourceConfig,
    error::{ViewerError, ViewerResult},
};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

#[async_trait]
pub trait RunSource: Send + Sync {
    /// Fetch the text at a `Saved_Runs/...` relative path.
    async fn fetch_text(&self, path: &str) -> ViewerResult<String>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Reads files below a root directory.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl RunSource for DirSource {
    async fn fetch_text(&self, path: &str) -> ViewerResult<String> {
        let full = self.root.join(path);
        match tokio::fs::read_to_string(&full).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ViewerError::NotFound {
                path: full.display().to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        format!("dir:{}", self.root.display())
    }
}

/// Plain GETs against a base URL.
pub struct HttpSource {
    base_url: String,
    client:   reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl RunSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> ViewerResult<String> {
        let url = self.url_for(path);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            log::debug!("GET {url} -> {}", response.status());
            return Err(ViewerError::NotFound { path: url });
        }
        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        format!("http:{}", self.base_url)
    }
}

pub fn source_from_config(config: &SourceConfig) -> Arc<dyn RunSource> {
    match config {
        SourceConfig::Dir(dir)  => Arc::new(DirSource::new(dir)),
        SourceConfig::Http(url) => Arc::new(HttpSource::new(url.clone())),
    }
}
