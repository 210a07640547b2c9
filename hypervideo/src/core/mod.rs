//! Core editor logic
//!
//! This module contains the in-memory model and the bookkeeping around it
//! with no I/O dependencies.

pub mod buffer;
pub mod dirty;
pub mod edit_mode;
pub mod model;
pub mod save_plan;
pub mod source;

pub use buffer::{DatabaseBuffer, Record};
pub use dirty::{Category, DirtyTracker};
pub use edit_mode::{EditMode, EditPhase, LeaveOutcome, LeaveStep};
pub use model::{Annotation, CodeSnippet, HypervideoModel, Overlay};
pub use save_plan::{SavePlan, SaveTarget};
pub use source::{VideoSource, VideoType};
