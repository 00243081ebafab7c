//! Apply/reset state machine of a list view

use serde::Serialize;

/// Where a list view is in its edit/apply cycle
///
/// ```text
///            edit              apply / debounce           done
///   Idle ──────────▶ Editing ─────────────────▶ Applying ──────▶ Applied
///                       ▲                           ▲               │
///                       └──────────── edit ─────────┼───────────────┘
///                                     reset (from any state)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    #[default]
    Idle,
    Editing,
    Applying,
    Applied,
}

impl ViewPhase {
    /// Any user edit to a filter control
    ///
    /// An edit during `Applying` supersedes that run; the next apply picks it up.
    pub fn on_edit(self) -> Self {
        ViewPhase::Editing
    }

    /// Explicit apply or debounce expiry
    pub fn on_apply(self) -> Self {
        ViewPhase::Applying
    }

    /// Pipeline completed, with or without error
    pub fn on_complete(self) -> Self {
        match self {
            ViewPhase::Applying => ViewPhase::Applied,
            other => other,
        }
    }

    /// Reset jumps straight to applying, without debounce
    pub fn on_reset(self) -> Self {
        ViewPhase::Applying
    }
}
