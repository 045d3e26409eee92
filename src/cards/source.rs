//! Card dataset loading.
//!
//! A session never reads files itself; it asks an injected `CardSource`
//! for a dataset by name. `JsonDirSource` reads `<root>/<name>.json`,
//! `StaticSource` serves datasets held in memory.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::card::Card;
use crate::core::LoadError;

/// Something that can produce the cards of a named dataset.
///
/// Implementations must return a non-empty card set or an error.
pub trait CardSource: Send + Sync {
    fn load(&self, dataset: &str) -> Result<Vec<Card>, LoadError>;
}

/// Reads datasets from JSON files in a directory.
///
/// Each file is an array of `{id, word, forbiddenWords, difficulty}` records.
#[derive(Clone, Debug)]
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory datasets are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, dataset: &str) -> PathBuf {
        self.root.join(format!("{dataset}.json"))
    }
}

impl CardSource for JsonDirSource {
    fn load(&self, dataset: &str) -> Result<Vec<Card>, LoadError> {
        let path = self.path_for(dataset);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(dataset, path = %path.display(), "dataset file missing");
                return Err(LoadError::NotFound(dataset.to_string()));
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };

        let cards = parse_cards(dataset, &bytes)?;
        debug!(dataset, cards = cards.len(), "loaded dataset");
        Ok(cards)
    }
}

/// Parse a JSON card array, rejecting empty sets.
pub fn parse_cards(dataset: &str, bytes: &[u8]) -> Result<Vec<Card>, LoadError> {
    let cards: Vec<Card> =
        serde_json::from_slice(bytes).map_err(|source| LoadError::Malformed {
            dataset: dataset.to_string(),
            source,
        })?;

    if cards.is_empty() {
        return Err(LoadError::Empty(dataset.to_string()));
    }
    Ok(cards)
}

/// Serves datasets held in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    datasets: FxHashMap<String, Vec<Card>>,
}

impl StaticSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a dataset (builder pattern).
    #[must_use]
    pub fn with_dataset(mut self, name: impl Into<String>, cards: Vec<Card>) -> Self {
        self.insert(name, cards);
        self
    }

    /// Add or replace a dataset.
    pub fn insert(&mut self, name: impl Into<String>, cards: Vec<Card>) {
        self.datasets.insert(name.into(), cards);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.datasets.contains_key(name)
    }
}

impl CardSource for StaticSource {
    fn load(&self, dataset: &str) -> Result<Vec<Card>, LoadError> {
        let cards = self
            .datasets
            .get(dataset)
            .ok_or_else(|| LoadError::NotFound(dataset.to_string()))?;

        if cards.is_empty() {
            return Err(LoadError::Empty(dataset.to_string()));
        }
        Ok(cards.clone())
    }
}
