//! Resources, subtitle cues and application configuration

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entry of the resource catalog that overlays and annotations can reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    pub attributes: Value,
}

/// One timed subtitle cue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitleCue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Application-wide configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Require a login before a hypervideo is (re)loaded
    pub always_force_login: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppConfig {
    /// Set a configuration key, routing known keys to their typed field.
    ///
    /// Returns false when a typed key receives a value of the wrong type.
    pub fn set(&mut self, key: &str, value: Value) -> bool {
        match key {
            "alwaysForceLogin" => match value.as_bool() {
                Some(flag) => {
                    self.always_force_login = flag;
                    true
                }
                None => false,
            },
            _ => {
                self.extra.insert(key.to_string(), value);
                true
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "alwaysForceLogin" => Some(Value::Bool(self.always_force_login)),
            _ => self.extra.get(key).cloned(),
        }
    }
}
