//! Semantic actions triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All user actions the app understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up
    MoveUp,
    /// Move selection down
    MoveDown,
    /// Select the first item
    GoToTop,
    /// Select the last item
    GoToEnd,

    // ============ Routing ============
    /// Press the focused button
    Confirm,
    /// Return to the previous screen
    Back,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Toggle the help overlay
    Help,
}

impl Action {
    /// Human-readable description, shown in the help overlay
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::GoToTop => "First item",
            Action::GoToEnd => "Last item",
            Action::Confirm => "Open / press button",
            Action::Back => "Go back",
            Action::Quit => "Quit",
            Action::Help => "Toggle help",
        }
    }

    /// Group name used by the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp | Action::MoveDown | Action::GoToTop | Action::GoToEnd => "Selection",
            Action::Confirm | Action::Back => "Routing",
            Action::Quit | Action::Help => "Global",
        }
    }
}
