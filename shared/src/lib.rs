//! Shared types for the hypervideo editor
//!
//! Contains the wire-level records exchanged with the persistence backend,
//! the audit payloads emitted on user actions and the logging helpers used
//! by every crate in the workspace.

pub mod errors;
pub mod logging;
pub mod records;
pub mod types;

pub use errors::*;
pub use types::*;

pub use records::{
    // Hypervideo metadata and playback sequence
    Clip, HypervideoData, Sequence, SubtitleFile,

    // Time-anchored entities and their prototypes
    Anchor, AnnotationData, AnnotationSource, CodeSnippetData, InlineAnnotation, NewAnnotation,
    NewCodeSnippet, NewOverlay, OverlayData, Position, ResourceAnnotation, ResourceOverlay,
    TextAnnotation, TextOverlay,

    // Catalog, subtitles and configuration
    AppConfig, Resource, SubtitleCue,

    // Persistence payloads
    CodeSnippetBundle, DatabaseSnapshot, HypervideoBundle, SaveOutcome,

    // Audit trail
    UserAction, USER_ACTION_EVENT,
};
