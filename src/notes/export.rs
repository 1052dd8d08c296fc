use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use crate::domain::Annotation;

/// Label used when no session name is configured
pub const DEFAULT_SESSION: &str = "Untitled session";

/// Shareable snapshot of a session's notes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExport<'a> {
    pub session: &'a str,
    pub exported_at: DateTime<Utc>,
    pub annotations: &'a [Annotation],
}

impl<'a> SessionExport<'a> {
    pub fn new(session: &'a str, annotations: &'a [Annotation], now: DateTime<Utc>) -> Self {
        Self {
            session,
            exported_at: now,
            annotations,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize session export")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write export to {:?}", path))
    }
}
