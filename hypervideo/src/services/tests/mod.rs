//! Service-specific tests
//!
//! Each service has its own test file; shared snapshot builders live in
//! `common`.

mod http_database;
mod state_store;

pub mod common {
    use serde_json::json;
    use shared::{AnnotationData, Clip, DatabaseSnapshot, HypervideoId, Resource, SubtitleCue};

    pub fn test_hypervideo_id() -> HypervideoId {
        HypervideoId::new("0001").expect("valid test hypervideo id")
    }

    /// Small but complete snapshot: one clip, one annotation, one resource
    /// and English subtitles
    pub fn sample_snapshot() -> DatabaseSnapshot {
        let mut snapshot = DatabaseSnapshot::default();
        snapshot.bundle.hypervideo.name = "Campus tour".to_string();
        snapshot.bundle.hypervideo.creator = "alice".to_string();
        snapshot.bundle.sequence.clips.push(Clip {
            resource_id: Some("r1".to_string()),
            ..Clip::default()
        });
        snapshot.annotations.push(AnnotationData {
            name: "Library".to_string(),
            start: 12.0,
            end: 20.0,
            ..AnnotationData::default()
        });
        snapshot.resources.insert(
            "r1".to_string(),
            Resource {
                name: "Tour video".to_string(),
                kind: "video".to_string(),
                src: "tour.mp4".to_string(),
                thumb: None,
                attributes: json!({}),
            },
        );
        snapshot.subtitles.insert(
            "en".to_string(),
            vec![SubtitleCue {
                id: None,
                start: 0.0,
                end: 2.5,
                text: "Welcome".to_string(),
            }],
        );
        snapshot.config.always_force_login = true;
        snapshot.global_css = "body { margin: 0; }".to_string();
        snapshot
    }
}
