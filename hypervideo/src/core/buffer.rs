//! Mirrored persistence buffer
//!
//! The buffer holds the serialisable form of everything the editor changes.
//! Save requests are built from it, so every model mutation writes here too.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use shared::{
    AnnotationData, AppConfig, CodeSnippetBundle, CodeSnippetData, DatabaseSnapshot, EntityId, HypervideoBundle,
    HypervideoData, OverlayData, Resource, Sequence, SubtitleCue,
};

/// An entity together with the id that links its model and buffer entries
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    pub id: EntityId,
    pub data: T,
}

impl<T> Record<T> {
    pub fn new(data: T) -> Self {
        Self { id: EntityId::new(), data }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DatabaseBuffer {
    pub hypervideo: HypervideoData,
    pub sequence: Sequence,
    pub overlays: Vec<Record<OverlayData>>,
    pub timebased_events: Vec<Record<CodeSnippetData>>,
    pub global_events: Map<String, Value>,
    pub custom_css: String,
    pub annotations: Vec<Record<AnnotationData>>,
    pub subtitles: BTreeMap<String, Vec<SubtitleCue>>,
    pub resources: BTreeMap<String, Resource>,
    pub config: AppConfig,
    pub global_css: String,
}

impl DatabaseBuffer {
    pub fn from_snapshot(snapshot: DatabaseSnapshot) -> Self {
        let DatabaseSnapshot {
            bundle,
            annotations,
            subtitles,
            resources,
            config,
            global_css,
        } = snapshot;

        Self {
            hypervideo: bundle.hypervideo,
            sequence: bundle.sequence,
            overlays: bundle.overlays.into_iter().map(Record::new).collect(),
            timebased_events: bundle.code_snippets.timebased_events.into_iter().map(Record::new).collect(),
            global_events: bundle.code_snippets.global_events,
            custom_css: bundle.code_snippets.custom_css,
            annotations: annotations.into_iter().map(Record::new).collect(),
            subtitles,
            resources,
            config,
            global_css,
        }
    }

    /// Payload of a hypervideo save
    pub fn hypervideo_bundle(&self) -> HypervideoBundle {
        HypervideoBundle {
            hypervideo: self.hypervideo.clone(),
            sequence: self.sequence.clone(),
            overlays: self.overlays.iter().map(|record| record.data.clone()).collect(),
            code_snippets: CodeSnippetBundle {
                timebased_events: self.timebased_events.iter().map(|record| record.data.clone()).collect(),
                global_events: self.global_events.clone(),
                custom_css: self.custom_css.clone(),
            },
        }
    }

    /// Payload of an annotations save
    pub fn annotation_documents(&self) -> Vec<AnnotationData> {
        self.annotations.iter().map(|record| record.data.clone()).collect()
    }

    pub fn resource(&self, resource_id: &str) -> Option<&Resource> {
        self.resources.get(resource_id)
    }
}

/// Remove the record with the given id, returning it if present
pub fn remove_record<T>(records: &mut Vec<Record<T>>, id: EntityId) -> Option<Record<T>> {
    let index = records.iter().position(|record| record.id == id)?;
    Some(records.remove(index))
}
