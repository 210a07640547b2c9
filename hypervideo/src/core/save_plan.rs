//! Grouping of dirty categories into save requests

use std::fmt;

use super::dirty::{Category, DirtyTracker};

/// Independent save request issued to the persistence backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveTarget {
    /// Metadata, sequence, overlays and code snippets
    Hypervideo,
    Annotations,
    Config,
    GlobalCss,
}

impl fmt::Display for SaveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveTarget::Hypervideo => write!(f, "hypervideo"),
            SaveTarget::Annotations => write!(f, "annotations"),
            SaveTarget::Config => write!(f, "config"),
            SaveTarget::GlobalCss => write!(f, "globalCSS"),
        }
    }
}

/// Categories persisted by a hypervideo save
const HYPERVIDEO_CATEGORIES: [Category; 5] = [
    Category::Overlays,
    Category::CodeSnippets,
    Category::Events,
    Category::CustomCss,
    Category::Layout,
];

/// Requests to issue for one save cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavePlan {
    /// Dirty settings go through the settings form submission, which takes
    /// the place of the hypervideo save for this cycle
    pub submit_settings: bool,
    /// Joined requests, in dispatch order
    pub requests: Vec<SaveTarget>,
}

impl SavePlan {
    pub fn from_flags(flags: &DirtyTracker) -> Self {
        let submit_settings = flags.is_dirty(Category::Settings);
        let mut requests = Vec::new();

        if !submit_settings && HYPERVIDEO_CATEGORIES.iter().any(|c| flags.is_dirty(*c)) {
            requests.push(SaveTarget::Hypervideo);
        }
        if flags.is_dirty(Category::Annotations) {
            requests.push(SaveTarget::Annotations);
        }
        if flags.is_dirty(Category::Config) {
            requests.push(SaveTarget::Config);
        }
        if flags.is_dirty(Category::GlobalCss) {
            requests.push(SaveTarget::GlobalCss);
        }

        Self { submit_settings, requests }
    }

    /// Nothing to join; the save succeeds immediately
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
