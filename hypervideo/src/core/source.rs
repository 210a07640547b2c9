//! Video source resolution for the first clip of a sequence

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use shared::{Clip, Resource};

use crate::error::{ModelError, ModelResult};

/// Playback technology needed for the video source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VideoType {
    #[default]
    Native,
    Youtube,
    Vimeo,
    /// No video file; playback runs against a blank canvas
    Canvas,
}

impl fmt::Display for VideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoType::Native => write!(f, "native"),
            VideoType::Youtube => write!(f, "youtube"),
            VideoType::Vimeo => write!(f, "vimeo"),
            VideoType::Canvas => write!(f, "canvas"),
        }
    }
}

/// Resolved video source with clipping offsets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoSource {
    pub video_type: VideoType,
    pub source_path: String,
    /// Only known up front for canvas videos; otherwise set once the player
    /// has read the file's metadata
    pub duration: f64,
    pub duration_full: f64,
    pub offset_in: f64,
    pub offset_out: Option<f64>,
}

fn youtube_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"youtube\.com/watch\?v=([^&?/]+)",
            r"youtube\.com/embed/([^&?/]+)",
            r"youtube\.com/v/([^&?/]+)",
            r"youtu\.be/([^&?/]+)",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid youtube pattern"))
        .collect()
    })
}

fn vimeo_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(http://|https://|//)?(www\.|player\.)?(vimeo\.com/)(video/)?([0-9]+)$")
            .expect("valid vimeo pattern")
    })
}

/// Classify a source URL by its hosting service
pub fn classify(src: &str) -> VideoType {
    if vimeo_pattern().is_match(src) {
        VideoType::Vimeo
    } else if youtube_patterns().iter().any(|pattern| pattern.is_match(src)) {
        VideoType::Youtube
    } else {
        VideoType::Native
    }
}

impl VideoSource {
    /// Resolve the source of a clip.
    ///
    /// A clip without `src` and without `resourceId` is a canvas video whose
    /// duration comes from the clip itself. A missing clip is treated the
    /// same way with zero duration.
    pub fn resolve(clip: Option<&Clip>, resources: &BTreeMap<String, Resource>) -> ModelResult<Self> {
        let Some(clip) = clip else {
            return Ok(Self {
                video_type: VideoType::Canvas,
                ..Self::default()
            });
        };

        let offset_in = clip.offset_in.unwrap_or(0.0);
        let offset_out = clip.offset_out.filter(|out| *out != 0.0);

        if let Some(src) = clip.src.as_deref().filter(|src| src.len() > 3) {
            return Ok(Self {
                video_type: classify(src),
                source_path: src.to_string(),
                offset_in,
                offset_out,
                ..Self::default()
            });
        }

        match clip.resource_id.as_deref() {
            None | Some("") => {
                let duration_full = clip.duration.unwrap_or(0.0);
                Ok(Self {
                    video_type: VideoType::Canvas,
                    source_path: String::new(),
                    duration: offset_out.unwrap_or(duration_full) - offset_in,
                    duration_full,
                    offset_in,
                    offset_out,
                })
            }
            Some(resource_id) => {
                let resource = resources.get(resource_id).ok_or_else(|| ModelError::ResourceNotFound {
                    resource_id: resource_id.to_string(),
                })?;
                Ok(Self {
                    video_type: VideoType::Native,
                    source_path: resource.src.clone(),
                    offset_in,
                    offset_out,
                    ..Self::default()
                })
            }
        }
    }
}
