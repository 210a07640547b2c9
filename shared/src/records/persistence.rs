//! Payloads exchanged with the persistence backend

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::annotation::AnnotationData;
use super::catalog::{AppConfig, Resource, SubtitleCue};
use super::code_snippet::CodeSnippetData;
use super::hypervideo::{HypervideoData, Sequence};
use super::overlay::OverlayData;
use crate::errors::{SharedError, SharedResult};

/// Code snippets together with the global event handlers and custom CSS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeSnippetBundle {
    pub timebased_events: Vec<CodeSnippetData>,
    pub global_events: Map<String, Value>,
    #[serde(rename = "customCSS")]
    pub custom_css: String,
}

/// Everything persisted by a hypervideo save: metadata, sequence, overlays
/// and code snippets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HypervideoBundle {
    pub hypervideo: HypervideoData,
    pub sequence: Sequence,
    pub overlays: Vec<OverlayData>,
    pub code_snippets: CodeSnippetBundle,
}

/// Complete backend state needed to open one hypervideo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseSnapshot {
    #[serde(flatten)]
    pub bundle: HypervideoBundle,
    pub annotations: Vec<AnnotationData>,
    /// Subtitle cues keyed by language
    pub subtitles: BTreeMap<String, Vec<SubtitleCue>>,
    /// Resource catalog keyed by resource id
    pub resources: BTreeMap<String, Resource>,
    pub config: AppConfig,
    #[serde(rename = "globalCSS")]
    pub global_css: String,
}

impl DatabaseSnapshot {
    pub fn from_json(json: &str) -> SharedResult<Self> {
        serde_json::from_str(json).map_err(|e| SharedError::DeserializationError { message: e.to_string() })
    }

    pub fn to_json(&self) -> SharedResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SharedError::SerializationError { message: e.to_string() })
    }
}

/// Result of one save request as reported by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    #[serde(default)]
    pub failed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveOutcome {
    pub fn success() -> Self {
        Self { failed: false, error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            failed: true,
            error: Some(error.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Error message of a failed outcome
    pub fn message(&self) -> &str {
        self.error.as_deref().unwrap_or("unknown error")
    }
}
