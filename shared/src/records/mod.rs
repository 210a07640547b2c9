//! Wire-level records
//!
//! These mirror the JSON documents stored by the persistence backend. Field
//! names are serialized in the backend's camelCase convention.

pub mod annotation;
pub mod catalog;
pub mod code_snippet;
pub mod hypervideo;
pub mod overlay;
pub mod persistence;
pub mod user_action;

pub use annotation::{
    AnnotationData, AnnotationSource, InlineAnnotation, NewAnnotation, ResourceAnnotation, TextAnnotation,
};
pub use catalog::{AppConfig, Resource, SubtitleCue};
pub use code_snippet::{CodeSnippetData, NewCodeSnippet};
pub use hypervideo::{Clip, HypervideoData, Sequence, SubtitleFile};
pub use overlay::{Anchor, NewOverlay, OverlayData, Position, ResourceOverlay, TextOverlay};
pub use persistence::{CodeSnippetBundle, DatabaseSnapshot, HypervideoBundle, SaveOutcome};
pub use user_action::{UserAction, USER_ACTION_EVENT};
