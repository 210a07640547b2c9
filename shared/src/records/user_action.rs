//! Audit payloads emitted for user actions

use serde::{Deserialize, Serialize};

use super::annotation::AnnotationData;
use super::code_snippet::CodeSnippetData;
use super::overlay::OverlayData;

/// Event kind under which all user actions are published
pub const USER_ACTION_EVENT: &str = "userAction";

/// A user action together with a snapshot of the affected record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum UserAction {
    OverlayAdd { overlay: OverlayData },
    OverlayDelete { overlay: OverlayData },
    CodeSnippetAdd { codesnippet: CodeSnippetData },
    CodeSnippetDelete { codesnippet: CodeSnippetData },
    AnnotationAdd { annotation: AnnotationData },
    AnnotationDelete { annotation: AnnotationData },
    EditSave,
    EditEnd,
}

impl UserAction {
    /// Name of the action as it appears in the payload
    pub fn name(&self) -> &'static str {
        match self {
            UserAction::OverlayAdd { .. } => "OverlayAdd",
            UserAction::OverlayDelete { .. } => "OverlayDelete",
            UserAction::CodeSnippetAdd { .. } => "CodeSnippetAdd",
            UserAction::CodeSnippetDelete { .. } => "CodeSnippetDelete",
            UserAction::AnnotationAdd { .. } => "AnnotationAdd",
            UserAction::AnnotationDelete { .. } => "AnnotationDelete",
            UserAction::EditSave => "EditSave",
            UserAction::EditEnd => "EditEnd",
        }
    }
}
