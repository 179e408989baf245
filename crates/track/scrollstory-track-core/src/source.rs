//! Where track documents come from.
//!
//! The animator fetches through this seam so hosts can swap transports and
//! tests can stay offline.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

/// Fetches a raw track document by source string (URL or path).
pub trait TrackSource {
    fn fetch(&mut self, source: &str) -> Result<String>;
}

/// HTTP-backed source for deployed pages.
#[derive(Debug, Default)]
pub struct HttpTrackSource {
    client: reqwest::blocking::Client,
}

impl HttpTrackSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrackSource for HttpTrackSource {
    fn fetch(&mut self, source: &str) -> Result<String> {
        let response = self
            .client
            .get(source)
            .send()
            .with_context(|| format!("GET {source}"))?
            .error_for_status()
            .with_context(|| format!("GET {source}"))?;
        Ok(response.text()?)
    }
}

/// Filesystem source rooted at a data directory. Leading slashes in source
/// strings are treated as relative to the root, matching deployed asset paths.
#[derive(Debug, Clone)]
pub struct FileTrackSource {
    root: PathBuf,
}

impl FileTrackSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TrackSource for FileTrackSource {
    fn fetch(&mut self, source: &str) -> Result<String> {
        let path = self.root.join(source.trim_start_matches('/'));
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}

/// In-memory source keyed by name, for tests and benches.
#[derive(Debug, Default, Clone)]
pub struct MemoryTrackSource {
    documents: HashMap<String, String>,
}

impl MemoryTrackSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, document: impl Into<String>) {
        self.documents.insert(name.into(), document.into());
    }
}

impl TrackSource for MemoryTrackSource {
    fn fetch(&mut self, source: &str) -> Result<String> {
        self.documents
            .get(source)
            .cloned()
            .ok_or_else(|| anyhow!("no such track: {source}"))
    }
}
