use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::domain::Annotation;

/// Default notes file name inside the data directory
pub const NOTES_FILE: &str = "session-notes.json";

/// Notes persisted as a JSON array on disk
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user's data directory, or the working directory
    pub fn default_location() -> Self {
        let path = dirs::data_dir()
            .map(|d| d.join("trackmap").join(NOTES_FILE))
            .unwrap_or_else(|| PathBuf::from(NOTES_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load stored notes
    ///
    /// A missing or unreadable file yields no notes rather than an error, and
    /// records that don't decode are skipped without dropping the rest.
    pub fn load(&self) -> Vec<Annotation> {
        if !self.path.exists() {
            return Vec::new();
        }

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to read notes {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        let records: Vec<serde_json::Value> = match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Ignoring unreadable notes {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(i, record)| match serde_json::from_value(record) {
                Ok(note) => Some(note),
                Err(e) => {
                    log::warn!("Skipping note {} in {:?}: {}", i, self.path, e);
                    None
                }
            })
            .collect()
    }

    /// Replace the stored notes with `notes`
    pub fn save(&self, notes: &[Annotation]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }

        let json = serde_json::to_string(notes).context("Failed to serialize notes")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write notes to {:?}", self.path))?;

        Ok(())
    }
}
