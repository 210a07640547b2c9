//! Hypervideo editor library
//!
//! Holds the in-memory model of one hypervideo, tracks unsaved changes per
//! data category and coordinates saving, reloading and leaving edit mode
//! against injected persistence, authentication, audit, state and view
//! collaborators.

pub mod config;
pub mod core;
pub mod editor;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::{ConfigOverrides, EditorConfig};
pub use self::core::{Category, DirtyTracker, EditPhase, HypervideoModel, LeaveOutcome, SavePlan, SaveTarget, VideoType};
pub use editor::{Editor, EditorOptions, ReloadOutcome, SaveStatus};
pub use error::{ModelError, ModelResult};
pub use traits::{AuthOutcome, Authenticator, Database, EditorView, EventSink, GlobalState, LeaveChoice, UserIdentity};
