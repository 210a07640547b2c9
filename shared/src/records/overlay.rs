//! Overlay records and their constructors

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::catalog::Resource;
use crate::types::Authorship;

/// Placement of an overlay on the video, in percent of the video area
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Drop point of a new overlay
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Anchor {
    pub top: f64,
    pub left: f64,
}

/// Persisted overlay document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayData {
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
    pub start_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    pub attributes: Value,
    pub position: Position,
}

/// Prototype of a text overlay
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    pub name: String,
    pub start: f64,
    pub end: f64,
    pub attributes: Value,
    pub anchor: Anchor,
}

/// Prototype of an overlay showing a catalog resource
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceOverlay {
    pub resource_id: String,
    pub start: f64,
    pub end: f64,
    pub anchor: Anchor,
}

/// Request to create an overlay
#[derive(Debug, Clone, PartialEq)]
pub enum NewOverlay {
    Text(TextOverlay),
    Resource(ResourceOverlay),
}

impl OverlayData {
    /// Width and height given to every freshly dropped overlay
    pub const DEFAULT_SIZE: f64 = 30.0;

    /// Build a text overlay; it never references a resource
    pub fn text(proto: TextOverlay, stamp: &Authorship) -> Self {
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
            start_offset: None,
            end_offset: None,
            resource_id: None,
            attributes: proto.attributes,
            position: Self::initial_position(proto.anchor),
        }
    }

    /// Build an overlay that copies name, type, src, thumb and attributes
    /// from the referenced resource
    pub fn from_resource(proto: ResourceOverlay, resource: &Resource, stamp: &Authorship) -> Self {
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
            start_offset: Some(0.0),
            end_offset: Some(0.0),
            resource_id: Some(proto.resource_id),
            attributes: resource.attributes.clone(),
            position: Self::initial_position(proto.anchor),
        }
    }

    fn initial_position(anchor: Anchor) -> Position {
        Position {
            top: anchor.top,
            left: anchor.left,
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
        }
    }
}
