//! Collaborator traits with mockall annotations for testing
//!
//! The editor owns the in-memory model and talks to everything else through
//! these seams: the persistence backend, the authentication gate, the audit
//! trail, the key-value global state and the surrounding view.

use serde_json::Value;
use shared::{AnnotationData, AppConfig, DatabaseSnapshot, HypervideoBundle, HypervideoData, HypervideoId, SaveOutcome, UserAction};

use crate::error::ModelResult;

/// Result of the authentication gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    /// The user abandoned the login; not an error
    Cancelled,
}

/// The signed-in user, stamped onto every record created in the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub name: String,
    pub id: String,
}

/// Answer to the "save changes?" question when leaving edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveChoice {
    Save,
    Discard,
    Cancel,
}

/// Persistence backend abstraction
///
/// Save operations never fail hard: every failure is reported through the
/// returned `SaveOutcome` so the caller can decide whether to commit.
#[mockall::automock]
#[async_trait::async_trait]
pub trait Database: Send + Sync {
    /// Fetch everything needed to open a hypervideo
    async fn load_hypervideo(&self, id: &HypervideoId) -> ModelResult<DatabaseSnapshot>;

    /// Persist metadata, sequence, overlays and code snippets
    async fn save_hypervideo(&self, id: &HypervideoId, bundle: &HypervideoBundle) -> SaveOutcome;

    /// Submit the settings form (metadata only)
    async fn submit_settings(&self, id: &HypervideoId, hypervideo: &HypervideoData) -> SaveOutcome;

    /// Persist the annotation list of a hypervideo
    async fn save_annotations(&self, id: &HypervideoId, annotations: &[AnnotationData]) -> SaveOutcome;

    /// Persist the application configuration
    async fn save_config(&self, config: &AppConfig) -> SaveOutcome;

    /// Persist the application-wide stylesheet
    async fn save_global_css(&self, css: &str) -> SaveOutcome;
}

/// Authentication gate
#[mockall::automock]
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// Suspend until the user is signed in or gives up
    async fn ensure_authenticated(&self) -> AuthOutcome;

    /// Currently signed-in user
    fn identity(&self) -> UserIdentity;

    fn logout(&self);
}

/// Fire-and-forget audit trail
#[mockall::automock]
pub trait EventSink: Send + Sync {
    fn trigger_event(&self, kind: &str, payload: &UserAction);
}

/// Process-wide key-value state with change notification
#[mockall::automock]
pub trait GlobalState: Send + Sync {
    fn change_state(&self, key: &str, value: Value);

    fn get_state(&self, key: &str) -> Option<Value>;
}

/// The view surrounding the editor
#[mockall::automock]
#[async_trait::async_trait]
pub trait EditorView: Send + Sync {
    /// Ask whether unsaved changes should be saved before leaving
    async fn confirm_leave(&self) -> LeaveChoice;

    /// Leave native fullscreen when the player is embedded
    fn collapse_fullscreen(&self);
}
