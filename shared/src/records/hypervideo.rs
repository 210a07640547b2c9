//! Hypervideo metadata and playback sequence

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata document of a single hypervideo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HypervideoData {
    pub name: String,
    pub description: String,
    pub creator: String,
    pub creator_id: String,
    pub created: i64,
    pub lastchanged: i64,
    pub hidden: bool,
    /// Free-form configuration; `layoutArea` holds the view layout
    pub config: Map<String, Value>,
    pub subtitles: Vec<SubtitleFile>,
}

impl HypervideoData {
    /// Config key holding the layout description
    pub const LAYOUT_KEY: &'static str = "layoutArea";
}

/// Reference to a subtitle file of one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitleFile {
    pub src: String,
    #[serde(rename = "srclang")]
    pub language: String,
}

/// Playback sequence; only the first clip is played
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sequence {
    pub clips: Vec<Clip>,
}

/// Single clip of the sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Clip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub offset_in: Option<f64>,
    #[serde(rename = "out", skip_serializing_if = "Option::is_none")]
    pub offset_out: Option<f64>,
}
