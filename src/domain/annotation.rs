use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used when a note is saved without one
pub const DEFAULT_NOTE_TYPE: &str = "Coach note";

/// How loudly a note should be flagged to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warn,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// A coaching note pinned to a moment in the session video and a spot on the lap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: String,
    /// Seconds into the video
    pub t: f64,
    /// Normalized position around the lap
    pub pos: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub publish: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

/// A note being composed, before it gets an id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    pub t: f64,
    pub pos: f64,
    pub kind: String,
    pub severity: Severity,
    /// Comma-separated tag list as typed
    pub tags: String,
    pub text: String,
    pub publish: bool,
}

impl NoteDraft {
    pub fn new(t: f64, pos: f64) -> Self {
        Self {
            t,
            pos,
            kind: DEFAULT_NOTE_TYPE.to_string(),
            severity: Severity::Info,
            tags: String::new(),
            text: String::new(),
            publish: false,
        }
    }

    /// Finalize the draft into a stored annotation created at `now`
    pub fn into_annotation(self, now: DateTime<Utc>) -> Annotation {
        let kind = match self.kind.trim() {
            "" => DEFAULT_NOTE_TYPE.to_string(),
            k => k.to_string(),
        };

        Annotation {
            id: note_id(now),
            t: self.t,
            pos: self.pos.clamp(0.0, 1.0),
            kind,
            severity: self.severity,
            tags: parse_tags(&self.tags),
            text: self.text.trim().to_string(),
            publish: self.publish,
            created_at: now,
        }
    }
}

/// Split a comma-separated tag string, dropping blanks
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn note_id(now: DateTime<Utc>) -> String {
    format!(
        "a_{}_{:x}",
        now.timestamp_millis(),
        now.timestamp_subsec_nanos()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 4, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags(" braking, turn 1 ,,apex "),
            vec!["braking", "turn 1", "apex"]
        );
        assert!(parse_tags("  , ").is_empty());
    }

    #[test]
    fn test_draft_defaults_and_trimming() {
        let mut draft = NoteDraft::new(42.5, 1.3);
        draft.kind = "   ".to_string();
        draft.text = "  late on the brakes  ".to_string();
        draft.tags = "T1, braking".to_string();

        let note = draft.into_annotation(fixed_now());
        assert_eq!(note.kind, DEFAULT_NOTE_TYPE);
        assert_eq!(note.text, "late on the brakes");
        assert_eq!(note.tags, vec!["T1", "braking"]);
        assert_eq!(note.pos, 1.0);
        assert_eq!(note.t, 42.5);
        assert!(note.id.starts_with("a_1751639400000_"));
    }

    #[test]
    fn test_annotation_json_field_names() {
        let note = NoteDraft::new(3.0, 0.25).into_annotation(fixed_now());
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["type"], "Coach note");
        assert_eq!(json["severity"], "info");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_severity_lowercase() {
        let sev: Severity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(sev, Severity::Critical);
    }

    #[test]
    fn test_severity_display_matches_serde() {
        for sev in [Severity::Info, Severity::Warn, Severity::Critical] {
            let json = serde_json::to_string(&sev).unwrap();
            assert_eq!(json, format!("\"{}\"", sev));
        }
    }
}
