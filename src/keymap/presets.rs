//! Preset keymaps: Standard, Vim, Emacs

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl plus the standard keys
    Vim,
    /// Ctrl+N/P, Ctrl+G plus the standard keys
    Emacs,
}

impl KeymapPreset {
    pub const ALL: [KeymapPreset; 3] = [
        KeymapPreset::Standard,
        KeymapPreset::Vim,
        KeymapPreset::Emacs,
    ];

    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let extra: &[(&str, Action)] = match self {
            KeymapPreset::Standard => &[],
            KeymapPreset::Vim => &[
                ("k", Action::MoveUp),
                ("j", Action::MoveDown),
                ("g", Action::GoToTop),
                ("G", Action::GoToEnd),
                ("l", Action::Confirm),
                ("h", Action::Back),
            ],
            KeymapPreset::Emacs => &[
                ("ctrl+p", Action::MoveUp),
                ("ctrl+n", Action::MoveDown),
                ("alt+<", Action::GoToTop),
                ("alt+>", Action::GoToEnd),
                ("ctrl+m", Action::Confirm),
                ("ctrl+g", Action::Back),
            ],
        };

        // Preset-specific keys first so the help overlay lists them first.
        extra
            .iter()
            .chain(COMMON.iter())
            .map(|(key, action)| KeyBinding::new(key, *action))
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Bindings shared by every preset
const COMMON: &[(&str, Action)] = &[
    ("up", Action::MoveUp),
    ("down", Action::MoveDown),
    ("home", Action::GoToTop),
    ("end", Action::GoToEnd),
    ("enter", Action::Confirm),
    ("space", Action::Confirm),
    ("esc", Action::Back),
    ("backspace", Action::Back),
    ("q", Action::Quit),
    ("ctrl+c", Action::Quit),
    ("?", Action::Help),
];
