//! Edit-mode exit state machine

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    EditingClean,
    EditingDirty,
    /// Waiting for the user to answer the "save changes?" question
    Leaving,
    Left,
}

impl fmt::Display for EditPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditPhase::EditingClean => write!(f, "editing-clean"),
            EditPhase::EditingDirty => write!(f, "editing-dirty"),
            EditPhase::Leaving => write!(f, "leaving"),
            EditPhase::Left => write!(f, "left"),
        }
    }
}

/// What `begin_leave` requires before edit mode can end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveStep {
    Leave,
    Confirm,
}

/// How a leave request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// Nothing was unsaved
    Left,
    SavedAndLeft,
    DiscardedAndLeft,
    Stayed,
}

impl LeaveOutcome {
    pub fn has_left(self) -> bool {
        !matches!(self, LeaveOutcome::Stayed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditMode {
    phase: EditPhase,
}

impl Default for EditMode {
    fn default() -> Self {
        Self { phase: EditPhase::Left }
    }
}

impl EditMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn is_editing(&self) -> bool {
        !matches!(self.phase, EditPhase::Left)
    }

    pub fn enter(&mut self, dirty: bool) {
        self.phase = Self::editing(dirty);
    }

    /// Follow the unsaved indicator while editing; no effect otherwise
    pub fn sync(&mut self, dirty: bool) {
        if matches!(self.phase, EditPhase::EditingClean | EditPhase::EditingDirty) {
            self.phase = Self::editing(dirty);
        }
    }

    /// Start leaving: clean sessions leave at once, dirty ones need an answer
    pub fn begin_leave(&mut self, dirty: bool) -> LeaveStep {
        if dirty {
            self.phase = EditPhase::Leaving;
            LeaveStep::Confirm
        } else {
            self.phase = EditPhase::Left;
            LeaveStep::Leave
        }
    }

    /// Abort a pending leave
    pub fn stay(&mut self, dirty: bool) {
        if self.phase == EditPhase::Leaving {
            self.phase = Self::editing(dirty);
        }
    }

    pub fn finish(&mut self) {
        self.phase = EditPhase::Left;
    }

    fn editing(dirty: bool) -> EditPhase {
        if dirty {
            EditPhase::EditingDirty
        } else {
            EditPhase::EditingClean
        }
    }
}
