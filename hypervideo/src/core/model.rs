//! In-memory model of one hypervideo
//!
//! Every entity list exists twice: the model's own list, read by the view
//! layer, and the mirrored buffer list that save requests are built from.
//! Both carry the same `EntityId` per entity and are always mutated together.

use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use shared::{
    AnnotationData, Authorship, CodeSnippetData, DatabaseSnapshot, EntityId, HypervideoData, HypervideoId,
    NewAnnotation, NewCodeSnippet, NewOverlay, OverlayData, Resource, SubtitleCue, SubtitleFile,
};

use super::buffer::{remove_record, DatabaseBuffer, Record};
use super::source::{VideoSource, VideoType};
use crate::error::{ModelError, ModelResult};

pub type Overlay = Record<OverlayData>;
pub type CodeSnippet = Record<CodeSnippetData>;
pub type Annotation = Record<AnnotationData>;

/// Language picked when subtitles in several languages exist
const PREFERRED_LANGUAGE: &str = "en";

#[derive(Debug, Clone)]
pub struct HypervideoModel {
    hypervideo_id: HypervideoId,
    name: String,
    description: String,
    creator: String,
    creator_id: String,
    created: i64,
    lastchanged: i64,
    hidden: bool,
    source: VideoSource,
    subtitle_files: Vec<SubtitleFile>,
    selected_language: Option<String>,
    subtitles: BTreeMap<String, Vec<SubtitleCue>>,
    overlays: Vec<Overlay>,
    code_snippets: Vec<CodeSnippet>,
    events: Map<String, Value>,
    custom_css: String,
    annotations: Vec<Annotation>,
    buffer: DatabaseBuffer,
}

/// Three-way comparison on start time that stays total for NaN
fn compare_start(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Stable view of `records` ordered by start time
fn sorted_by_start<T>(records: &[Record<T>], start: impl Fn(&T) -> f64) -> Vec<&Record<T>> {
    let mut view: Vec<&Record<T>> = records.iter().collect();
    view.sort_by(|a, b| compare_start(start(&a.data), start(&b.data)));
    view
}

fn select_language(subtitles: &BTreeMap<String, Vec<SubtitleCue>>) -> Option<String> {
    if subtitles.contains_key(PREFERRED_LANGUAGE) {
        Some(PREFERRED_LANGUAGE.to_string())
    } else {
        subtitles.keys().next().cloned()
    }
}

impl HypervideoModel {
    /// Build the model from a freshly loaded snapshot
    pub fn from_snapshot(hypervideo_id: HypervideoId, snapshot: DatabaseSnapshot) -> ModelResult<Self> {
        let buffer = DatabaseBuffer::from_snapshot(snapshot);
        let source = VideoSource::resolve(buffer.sequence.clips.first(), &buffer.resources)?;
        let meta: &HypervideoData = &buffer.hypervideo;

        Ok(Self {
            hypervideo_id,
            name: meta.name.clone(),
            description: meta.description.clone(),
            creator: meta.creator.clone(),
            creator_id: meta.creator_id.clone(),
            created: meta.created,
            lastchanged: meta.lastchanged,
            hidden: meta.hidden,
            source,
            subtitle_files: meta.subtitles.clone(),
            selected_language: select_language(&buffer.subtitles),
            subtitles: buffer.subtitles.clone(),
            overlays: buffer.overlays.clone(),
            code_snippets: buffer.timebased_events.clone(),
            events: buffer.global_events.clone(),
            custom_css: buffer.custom_css.clone(),
            annotations: buffer.annotations.clone(),
            buffer,
        })
    }

    pub fn hypervideo_id(&self) -> &HypervideoId {
        &self.hypervideo_id
    }

    pub fn buffer(&self) -> &DatabaseBuffer {
        &self.buffer
    }

    /// Hypervideo config entries published to global state; the layout is
    /// owned by the layout manager and skipped
    pub fn config_entries(&self) -> Vec<(String, Value)> {
        self.buffer
            .hypervideo
            .config
            .iter()
            .filter(|(key, _)| key.as_str() != HypervideoData::LAYOUT_KEY)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn creator_id(&self) -> &str {
        &self.creator_id
    }

    pub fn created(&self) -> i64 {
        self.created
    }

    pub fn lastchanged(&self) -> i64 {
        self.lastchanged
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn source(&self) -> &VideoSource {
        &self.source
    }

    pub fn video_type(&self) -> VideoType {
        self.source.video_type
    }

    pub fn source_path(&self) -> &str {
        &self.source.source_path
    }

    pub fn duration(&self) -> f64 {
        self.source.duration
    }

    pub fn set_duration(&mut self, duration: f64) {
        self.source.duration = duration;
    }

    pub fn duration_full(&self) -> f64 {
        self.source.duration_full
    }

    pub fn set_duration_full(&mut self, duration_full: f64) {
        self.source.duration_full = duration_full;
    }

    pub fn offset_in(&self) -> f64 {
        self.source.offset_in
    }

    pub fn set_offset_in(&mut self, offset_in: f64) {
        self.source.offset_in = offset_in;
    }

    pub fn offset_out(&self) -> Option<f64> {
        self.source.offset_out
    }

    pub fn set_offset_out(&mut self, offset_out: Option<f64>) {
        self.source.offset_out = offset_out;
    }

    pub fn subtitle_files(&self) -> &[SubtitleFile] {
        &self.subtitle_files
    }

    pub fn set_subtitle_files(&mut self, files: Vec<SubtitleFile>) {
        self.subtitle_files = files;
    }

    pub fn selected_language(&self) -> Option<&str> {
        self.selected_language.as_deref()
    }

    pub fn set_selected_language(&mut self, language: Option<String>) {
        self.selected_language = language;
    }

    /// Cues of the selected language
    pub fn subtitles(&self) -> &[SubtitleCue] {
        self.selected_language
            .as_ref()
            .and_then(|language| self.subtitles.get(language))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Re-read subtitles from the buffer, keeping the selected language while
    /// it still exists
    pub fn reload_subtitles(&mut self) {
        self.subtitles = self.buffer.subtitles.clone();
        let still_present = self
            .selected_language
            .as_ref()
            .is_some_and(|language| self.subtitles.contains_key(language));
        if !still_present {
            self.selected_language = select_language(&self.subtitles);
        }
    }

    /// Replace the buffered cues of one language
    pub fn set_buffered_subtitles(&mut self, language: impl Into<String>, cues: Vec<SubtitleCue>) {
        self.buffer.subtitles.insert(language.into(), cues);
    }

    /// Overlays in insertion order
    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Code snippets ordered by start time; equal starts keep insertion order
    pub fn code_snippets(&self) -> Vec<&CodeSnippet> {
        sorted_by_start(&self.code_snippets, |snippet| snippet.start)
    }

    /// Annotations ordered by start time; equal starts keep insertion order
    pub fn annotations(&self) -> Vec<&Annotation> {
        sorted_by_start(&self.annotations, |annotation| annotation.start)
    }

    pub fn events(&self) -> &Map<String, Value> {
        &self.events
    }

    pub fn custom_css(&self) -> &str {
        &self.custom_css
    }

    pub fn global_css(&self) -> &str {
        &self.buffer.global_css
    }

    pub fn resource(&self, resource_id: &str) -> ModelResult<&Resource> {
        self.buffer.resource(resource_id).ok_or_else(|| ModelError::ResourceNotFound {
            resource_id: resource_id.to_string(),
        })
    }

    pub fn build_overlay(&self, proto: NewOverlay, stamp: &Authorship) -> ModelResult<OverlayData> {
        Ok(match proto {
            NewOverlay::Text(text) => OverlayData::text(text, stamp),
            NewOverlay::Resource(proto) => {
                let resource = self.resource(&proto.resource_id)?;
                OverlayData::from_resource(proto, resource, stamp)
            }
        })
    }

    pub fn build_annotation(&self, proto: NewAnnotation, stamp: &Authorship) -> ModelResult<AnnotationData> {
        Ok(match proto {
            NewAnnotation::Text(text) => AnnotationData::text(text, stamp),
            NewAnnotation::Inline(inline) => AnnotationData::inline(inline, stamp),
            NewAnnotation::Resource(proto) => {
                let resource = self.resource(&proto.resource_id)?;
                AnnotationData::from_resource(proto, resource, stamp)
            }
        })
    }

    pub fn build_code_snippet(&self, proto: NewCodeSnippet, stamp: &Authorship) -> CodeSnippetData {
        CodeSnippetData::new(proto, stamp)
    }

    pub fn add_overlay(&mut self, data: OverlayData) -> Overlay {
        let record = Record::new(data);
        self.buffer.overlays.push(record.clone());
        self.overlays.push(record.clone());
        record
    }

    pub fn remove_overlay(&mut self, id: EntityId) -> ModelResult<Overlay> {
        let record = remove_record(&mut self.overlays, id).ok_or(ModelError::EntityNotFound { kind: "Overlay", id })?;
        remove_record(&mut self.buffer.overlays, id);
        Ok(record)
    }

    pub fn add_code_snippet(&mut self, data: CodeSnippetData) -> CodeSnippet {
        let record = Record::new(data);
        self.buffer.timebased_events.push(record.clone());
        self.code_snippets.push(record.clone());
        record
    }

    pub fn remove_code_snippet(&mut self, id: EntityId) -> ModelResult<CodeSnippet> {
        let record = remove_record(&mut self.code_snippets, id)
            .ok_or(ModelError::EntityNotFound { kind: "CodeSnippet", id })?;
        remove_record(&mut self.buffer.timebased_events, id);
        Ok(record)
    }

    pub fn add_annotation(&mut self, data: AnnotationData) -> Annotation {
        let record = Record::new(data);
        self.buffer.annotations.push(record.clone());
        self.annotations.push(record.clone());
        record
    }

    pub fn remove_annotation(&mut self, id: EntityId) -> ModelResult<Annotation> {
        let record = remove_record(&mut self.annotations, id)
            .ok_or(ModelError::EntityNotFound { kind: "Annotation", id })?;
        remove_record(&mut self.buffer.annotations, id);
        Ok(record)
    }

    pub fn replace_events(&mut self, events: Map<String, Value>) {
        self.buffer.global_events = events.clone();
        self.events = events;
    }

    pub fn replace_custom_css(&mut self, css: impl Into<String>) {
        let css = css.into();
        self.buffer.custom_css = css.clone();
        self.custom_css = css;
    }

    /// Apply the settings form fields to model and buffer
    pub fn apply_settings(&mut self, name: impl Into<String>, description: impl Into<String>, hidden: bool) {
        self.name = name.into();
        self.description = description.into();
        self.hidden = hidden;
        self.buffer.hypervideo.name = self.name.clone();
        self.buffer.hypervideo.description = self.description.clone();
        self.buffer.hypervideo.hidden = hidden;
    }

    pub fn layout(&self) -> Option<&Value> {
        self.buffer.hypervideo.config.get(HypervideoData::LAYOUT_KEY)
    }

    pub fn set_layout(&mut self, layout: Value) {
        self.buffer
            .hypervideo
            .config
            .insert(HypervideoData::LAYOUT_KEY.to_string(), layout);
    }

    pub fn config_value(&self, key: &str) -> Option<Value> {
        self.buffer.config.get(key)
    }

    /// Change one application config key; a value of the wrong type for a
    /// known key is rejected
    pub fn set_config_value(&mut self, key: &str, value: Value) -> ModelResult<()> {
        if self.buffer.config.set(key, value) {
            Ok(())
        } else {
            Err(ModelError::config(format!("invalid value for config key {key}")))
        }
    }

    pub fn set_global_css(&mut self, css: impl Into<String>) {
        self.buffer.global_css = css.into();
    }
}
