use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::defaults::default_entries;
use super::error::{KnowledgeError, KnowledgeResult};
use super::types::Entry;

/// Source of knowledge base entries. Order must be stable for the process lifetime.
pub trait KnowledgeSource: Send + Sync {
    fn load_entries(&self) -> KnowledgeResult<Vec<Entry>>;
}

/// Reads a JSON array of entries from disk.
///
/// A missing file is seeded with [`default_entries`] (when `seed_defaults` is set)
/// and the seed is written back. A file that exists but does not parse is an error.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    seed_defaults: bool,
}

impl JsonFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            seed_defaults: true,
        }
    }

    pub fn seed_defaults(mut self, seed: bool) -> Self {
        self.seed_defaults = seed;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_seed(&self, entries: &[Entry]) -> KnowledgeResult<()> {
        let seed_err = |reason: String| KnowledgeError::Seed {
            path: self.path.clone(),
            reason,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| seed_err(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(entries).map_err(|e| seed_err(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| seed_err(e.to_string()))
    }
}

impl KnowledgeSource for JsonFileSource {
    fn load_entries(&self) -> KnowledgeResult<Vec<Entry>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let entries: Vec<Entry> =
                    serde_json::from_str(&content).map_err(|source| KnowledgeError::Parse {
                        path: self.path.clone(),
                        source,
                    })?;
                info!(
                    path = %self.path.display(),
                    entries = entries.len(),
                    "Loaded knowledge base"
                );
                Ok(entries)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && self.seed_defaults => {
                info!(path = %self.path.display(), "Knowledge base not found, seeding defaults");
                let entries = default_entries();
                if let Err(err) = self.write_seed(&entries) {
                    warn!(error = %err, "Could not persist default knowledge base");
                }
                Ok(entries)
            }
            Err(source) => Err(KnowledgeError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

/// In-memory entries (tests, embedding callers).
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: Vec<Entry>,
}

impl StaticSource {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn defaults() -> Self {
        Self::new(default_entries())
    }
}

impl KnowledgeSource for StaticSource {
    fn load_entries(&self) -> KnowledgeResult<Vec<Entry>> {
        debug!(entries = self.entries.len(), "Loading static knowledge base");
        Ok(self.entries.clone())
    }
}
