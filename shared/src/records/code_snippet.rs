//! Time-triggered code snippets

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::Authorship;

/// Persisted code snippet document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeSnippetData {
    pub name: String,
    pub creator: String,
    pub creator_id: String,
    pub created: i64,
    pub snippet: String,
    pub start: f64,
    pub attributes: Value,
}

/// Request to create a code snippet
#[derive(Debug, Clone, PartialEq)]
pub struct NewCodeSnippet {
    pub name: String,
    pub snippet: String,
    pub start: f64,
}

impl CodeSnippetData {
    pub fn new(proto: NewCodeSnippet, stamp: &Authorship) -> Self {
        Self {
            name: proto.name,
            creator: stamp.creator.clone(),
            creator_id: stamp.creator_id.clone(),
            created: stamp.created,
            snippet: proto.snippet,
            start: proto.start,
            attributes: Value::Object(Map::new()),
        }
    }
}
