//! Unsaved-change tracking per data category

use std::fmt;

/// Category of editable data, each with its own unsaved flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Settings,
    Overlays,
    CodeSnippets,
    Events,
    CustomCss,
    Annotations,
    Layout,
    Config,
    GlobalCss,
}

const CATEGORY_COUNT: usize = 9;

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Settings,
        Category::Overlays,
        Category::CodeSnippets,
        Category::Events,
        Category::CustomCss,
        Category::Annotations,
        Category::Layout,
        Category::Config,
        Category::GlobalCss,
    ];

    /// Name used by the view layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Settings => "settings",
            Category::Overlays => "overlays",
            Category::CodeSnippets => "codeSnippets",
            Category::Events => "events",
            Category::CustomCss => "customCSS",
            Category::Annotations => "annotations",
            Category::Layout => "layout",
            Category::Config => "config",
            Category::GlobalCss => "globalCSS",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

/// Per-category unsaved flags plus the global "has unsaved changes" indicator.
///
/// A flag is set iff its category was mutated since the last successful save
/// or discard. The global indicator is raised by every mark, including marks
/// of unknown category names, so it can be set while no flag is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtyTracker {
    flags: [bool; CATEGORY_COUNT],
    unsaved: bool,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, category: Category) {
        self.flags[category.index()] = true;
        self.unsaved = true;
    }

    /// Mark a category by its view-layer name.
    ///
    /// Unknown names leave every flag untouched but still raise the global
    /// indicator. Returns the category that was flagged, if any.
    pub fn mark_named(&mut self, name: &str) -> Option<Category> {
        match name.parse::<Category>() {
            Ok(category) => {
                self.mark(category);
                Some(category)
            }
            Err(_) => {
                self.unsaved = true;
                None
            }
        }
    }

    pub fn is_dirty(&self, category: Category) -> bool {
        self.flags[category.index()]
    }

    /// Global indicator used to gate navigation
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Logical OR of all category flags
    pub fn any_flag(&self) -> bool {
        self.flags.iter().any(|flag| *flag)
    }

    pub fn dirty_categories(&self) -> Vec<Category> {
        Category::ALL.into_iter().filter(|c| self.is_dirty(*c)).collect()
    }

    /// Reset every flag and the global indicator in one step
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
