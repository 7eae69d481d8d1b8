//! Keymap configuration module
//!
//! Customizable keyboard shortcuts with preset keymaps (standard, vim, emacs)
//! and per-action overrides.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Resolve a key event to an action.
    ///
    /// An overridden action loses all of its preset bindings.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Effective bindings: overrides first, then preset bindings for actions
    /// that are not overridden.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|b| !self.overrides.iter().any(|o| o.action == b.action)),
        );
        bindings
    }

    /// Display string of the first key bound to `action`
    pub fn key_for(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Override keys that fail to parse, for startup warnings
    pub fn invalid_overrides(&self) -> Vec<(String, String)> {
        self.overrides
            .iter()
            .filter_map(|b| parse_key_string(&b.key).err().map(|e| (b.key.clone(), e)))
            .collect()
    }

    /// Footer hints for a screen with a selectable list
    pub fn footer_menu(&self) -> String {
        format!(
            "{}/{}: Select | {}: Open | {}: Back | {}: Quit | {}: Help",
            self.key_for(Action::MoveUp),
            self.key_for(Action::MoveDown),
            self.key_for(Action::Confirm),
            self.key_for(Action::Back),
            self.key_for(Action::Quit),
            self.key_for(Action::Help)
        )
    }

    /// Footer hints for a screen whose only action is going back
    pub fn footer_back(&self) -> String {
        format!(
            "{}: Go back | {}: Quit | {}: Help",
            self.key_for(Action::Back),
            self.key_for(Action::Quit),
            self.key_for(Action::Help)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
        assert_eq!(
            keymap.get_action(KeyCode::Esc, KeyModifiers::NONE),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_override_shadows_preset_bindings_for_action() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("x", Action::Quit)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
        assert_eq!(keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
        assert_eq!(keymap.key_for(Action::Quit), "X");
    }

    #[test]
    fn test_vim_preset() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: Vec::new(),
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::MoveDown)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(Action::GoToEnd)
        );
    }

    #[test]
    fn test_footer_reflects_bindings() {
        let keymap = Keymap::default();
        assert_eq!(keymap.footer_back(), "Esc: Go back | Q: Quit | ?: Help");
        assert!(keymap.footer_menu().starts_with("↑/↓: Select"));
    }

    #[test]
    fn test_invalid_overrides() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![
                KeyBinding::new("hyper+z", Action::Quit),
                KeyBinding::new("z", Action::Help),
            ],
        };
        let invalid = keymap.invalid_overrides();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].0, "hyper+z");
    }
}
