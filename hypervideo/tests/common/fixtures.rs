//! Test fixtures and data for editor tests

use serde_json::json;
use shared::{
    AnnotationData, Anchor, Clip, CodeSnippetData, DatabaseSnapshot, HypervideoId, OverlayData, Resource,
    SubtitleCue, SubtitleFile,
};

pub struct TestFixtures;

impl TestFixtures {
    pub const HYPERVIDEO_ID: &'static str = "demo";
    pub const USER_NAME: &'static str = "alice";
    pub const USER_ID: &'static str = "17";
    pub const IMAGE_RESOURCE: &'static str = "res-image";
    pub const MISSING_RESOURCE: &'static str = "res-missing";

    pub fn hypervideo_id() -> HypervideoId {
        HypervideoId::new(Self::HYPERVIDEO_ID).unwrap()
    }

    pub fn image_resource() -> Resource {
        Resource {
            name: "Campus map".to_string(),
            kind: "image".to_string(),
            src: "map.png".to_string(),
            thumb: Some("map_thumb.png".to_string()),
            attributes: json!({ "alt": "Map of the campus" }),
        }
    }

    pub fn anchor() -> Anchor {
        Anchor { top: 40.0, left: 25.0 }
    }

    pub fn annotation(name: &str, start: f64) -> AnnotationData {
        AnnotationData {
            name: name.to_string(),
            creator: "bob".to_string(),
            kind: "text".to_string(),
            start,
            end: start + 5.0,
            ..AnnotationData::default()
        }
    }

    pub fn code_snippet(name: &str, start: f64) -> CodeSnippetData {
        CodeSnippetData {
            name: name.to_string(),
            snippet: format!("console.log('{name}')"),
            start,
            attributes: json!({}),
            ..CodeSnippetData::default()
        }
    }

    /// Canvas hypervideo of 60 seconds with two annotations, two snippets,
    /// one overlay and subtitles in two languages
    pub fn snapshot() -> DatabaseSnapshot {
        let mut snapshot = DatabaseSnapshot::default();

        let hypervideo = &mut snapshot.bundle.hypervideo;
        hypervideo.name = "Campus tour".to_string();
        hypervideo.description = "A walk around the campus".to_string();
        hypervideo.creator = "bob".to_string();
        hypervideo.creator_id = "3".to_string();
        hypervideo.created = 1_600_000_000_000;
        hypervideo.lastchanged = 1_600_000_100_000;
        hypervideo.config.insert("autohideControls".to_string(), json!(true));
        hypervideo.config.insert("captionsVisible".to_string(), json!(false));
        hypervideo.config.insert("layoutArea".to_string(), json!({ "areaTop": [] }));
        hypervideo.subtitles = vec![
            SubtitleFile {
                src: "de.vtt".to_string(),
                language: "de".to_string(),
            },
            SubtitleFile {
                src: "en.vtt".to_string(),
                language: "en".to_string(),
            },
        ];

        snapshot.bundle.sequence.clips.push(Clip {
            duration: Some(60.0),
            ..Clip::default()
        });
        snapshot.bundle.overlays.push(OverlayData {
            name: "Welcome".to_string(),
            kind: "text".to_string(),
            start: 0.0,
            end: 5.0,
            ..OverlayData::default()
        });
        snapshot.bundle.code_snippets.timebased_events = vec![Self::code_snippet("pause", 30.0), Self::code_snippet("intro", 1.0)];

        snapshot.annotations = vec![Self::annotation("Library", 20.0), Self::annotation("Entrance", 2.0)];
        snapshot.resources.insert(Self::IMAGE_RESOURCE.to_string(), Self::image_resource());
        snapshot.subtitles.insert(
            "de".to_string(),
            vec![SubtitleCue {
                id: None,
                start: 0.0,
                end: 2.0,
                text: "Willkommen".to_string(),
            }],
        );
        snapshot.subtitles.insert(
            "en".to_string(),
            vec![SubtitleCue {
                id: None,
                start: 0.0,
                end: 2.0,
                text: "Welcome".to_string(),
            }],
        );
        snapshot.global_css = "body { margin: 0; }".to_string();
        snapshot
    }
}
