//! Annotation records and their constructors

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::catalog::Resource;
use crate::types::Authorship;

/// Origin marker stored with every annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSource {
    #[serde(rename = "frametrail")]
    pub local: bool,
    pub url: String,
}

impl Default for AnnotationSource {
    fn default() -> Self {
        Self {
            local: true,
            url: "_data/hypervideos/".to_string(),
        }
    }
}

/// Persisted annotation document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotationData {
    pub name: String,
    pub creator: String,
    pub creator_id: String,
    pub created: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    pub start: f64,
    pub end: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    pub attributes: Value,
    pub tags: Vec<String>,
    pub source: AnnotationSource,
}

/// Prototype of a text annotation
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnnotation {
    pub name: String,
    pub start: f64,
    pub end: f64,
    pub attributes: Value,
}

/// Prototype of a media annotation that carries its own source instead of
/// referencing the resource catalog
#[derive(Debug, Clone, PartialEq)]
pub struct InlineAnnotation {
    pub name: String,
    pub kind: String,
    pub src: String,
    pub thumb: Option<String>,
    pub start: f64,
    pub end: f64,
    pub attributes: Value,
    pub tags: Vec<String>,
}

/// Prototype of an annotation showing a catalog resource
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceAnnotation {
    pub resource_id: String,
    pub start: f64,
    pub end: f64,
}

/// Request to create an annotation
#[derive(Debug, Clone, PartialEq)]
pub enum NewAnnotation {
    Text(TextAnnotation),
    Inline(InlineAnnotation),
    Resource(ResourceAnnotation),
}

impl AnnotationData {
    pub fn text(proto: TextAnnotation, stamp: &Authorship) -> Self {
        Self {
            name: proto.name,
            creator: stamp.creator.clone(),
            creator_id: stamp.creator_id.clone(),
            created: stamp.created,
            kind: "text".to_string(),
            src: String::new(),
            thumb: None,
            start: proto.start,
            end: proto.end,
            resource_id: None,
            attributes: proto.attributes,
            tags: Vec::new(),
            source: AnnotationSource::default(),
        }
    }

    pub fn inline(proto: InlineAnnotation, stamp: &Authorship) -> Self {
        Self {
            name: proto.name,
            creator: stamp.creator.clone(),
            creator_id: stamp.creator_id.clone(),
            created: stamp.created,
            kind: proto.kind,
            src: proto.src,
            thumb: proto.thumb,
            start: proto.start,
            end: proto.end,
            resource_id: None,
            attributes: proto.attributes,
            tags: proto.tags,
            source: AnnotationSource::default(),
        }
    }

    pub fn from_resource(proto: ResourceAnnotation, resource: &Resource, stamp: &Authorship) -> Self {
        Self {
            name: resource.name.clone(),
            creator: stamp.creator.clone(),
            creator_id: stamp.creator_id.clone(),
            created: stamp.created,
            kind: resource.kind.clone(),
            src: resource.src.clone(),
            thumb: resource.thumb.clone(),
            start: proto.start,
            end: proto.end,
            resource_id: Some(proto.resource_id),
            attributes: resource.attributes.clone(),
            tags: Vec::new(),
            source: AnnotationSource::default(),
        }
    }
}
