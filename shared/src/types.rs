//! Core identifiers used throughout the editor

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

/// Identifier of a hypervideo as used by the persistence backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HypervideoId(String);

impl HypervideoId {
    /// Create a hypervideo id, rejecting blank input
    pub fn new(id: impl Into<String>) -> SharedResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SharedError::InvalidId { input: id });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HypervideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for HypervideoId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// In-memory handle of an overlay, code snippet or annotation.
///
/// Handles are assigned when records enter the model and are never
/// persisted; the model and its mirrored buffer share the same handle for
/// the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Creator stamp applied to every record created during an edit session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorship {
    pub creator: String,
    pub creator_id: String,
    /// Creation time in milliseconds since the Unix epoch
    pub created: i64,
}

impl Authorship {
    /// Stamp for the given user at the current time
    pub fn now(creator: impl Into<String>, creator_id: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
            creator_id: creator_id.into(),
            created: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypervideo_id_rejects_blank() {
        assert!(HypervideoId::new("").is_err());
        assert!(HypervideoId::new("   ").is_err());
        assert_eq!(HypervideoId::new("42").unwrap().as_str(), "42");
    }

    #[test]
    fn test_hypervideo_id_serializes_as_plain_string() {
        let id: HypervideoId = "7".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }

    #[test]
    fn test_entity_ids_are_unique() {
        assert_ne!(EntityId::new(), EntityId::new());
    }

    #[test]
    fn test_authorship_uses_current_time() {
        let before = chrono::Utc::now().timestamp_millis();
        let stamp = Authorship::now("alice", "u1");
        assert!(stamp.created >= before);
        assert_eq!(stamp.creator, "alice");
        assert_eq!(stamp.creator_id, "u1");
    }
}
