use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const DEFAULT_HIGH_SCORES_PATH: &str = "high_scores.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write high scores to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode high scores: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Best score per difficulty name. Serialized as a flat JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    scores: BTreeMap<String, u32>,
}

impl HighScores {
    /// Zero for every name.
    pub fn zeroed<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            scores: names.into_iter().map(|name| (name.to_string(), 0)).collect(),
        }
    }

    pub fn best(&self, name: &str) -> u32 {
        self.scores.get(name).copied().unwrap_or(0)
    }

    /// Stores `score` if it beats the current best. Returns whether it did.
    pub fn record(&mut self, name: &str, score: u32) -> bool {
        if score <= self.best(name) {
            return false;
        }
        self.scores.insert(name.to_string(), score);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.scores.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Parses the file contents. Every name in `names` is present afterwards;
    /// entries for other names are kept as long as their value is valid.
    pub fn parse(content: &str, names: &[&str]) -> Result<Self, serde_json::Error> {
        let raw: Map<String, Value> = serde_json::from_str(content)?;
        let mut scores = Self::zeroed(names.iter().copied());
        for (name, value) in raw {
            match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
                Some(score) => {
                    scores.scores.insert(name, score);
                }
                None => warn!("Ignoring invalid high score for {name}: {value}"),
            }
        }
        Ok(scores)
    }
}

/// High-score file on disk.
#[derive(Clone, Debug)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: a missing or corrupt file yields zero for every name.
    pub fn load(&self, names: &[&str]) -> HighScores {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No high score file at {}, starting fresh", self.path.display());
                return HighScores::zeroed(names.iter().copied());
            }
            Err(err) => {
                warn!("Failed to read {}: {err}", self.path.display());
                return HighScores::zeroed(names.iter().copied());
            }
        };

        match HighScores::parse(&content, names) {
            Ok(scores) => {
                info!("Loaded {} high scores from {}", scores.len(), self.path.display());
                scores
            }
            Err(err) => {
                warn!("Corrupt high score file {}: {err}", self.path.display());
                HighScores::zeroed(names.iter().copied())
            }
        }
    }

    /// Writes a sibling temp file and renames it over the target.
    pub fn save(&self, scores: &HighScores) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(scores)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|source| self.io_error(source))?;
        fs::rename(&temp, &self.path).map_err(|source| self.io_error(source))?;
        info!("Saved high scores to {}", self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
