//! Key strings such as `"j"`, `"esc"` or `"ctrl+c"` and their parsing.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Named keys accepted in config files, with their display form.
const NAMED_KEYS: &[(&str, KeyCode, &str)] = &[
    ("up", KeyCode::Up, "↑"),
    ("down", KeyCode::Down, "↓"),
    ("left", KeyCode::Left, "←"),
    ("right", KeyCode::Right, "→"),
    ("home", KeyCode::Home, "Home"),
    ("end", KeyCode::End, "End"),
    ("pageup", KeyCode::PageUp, "PgUp"),
    ("pagedown", KeyCode::PageDown, "PgDn"),
    ("enter", KeyCode::Enter, "Enter"),
    ("esc", KeyCode::Esc, "Esc"),
    ("space", KeyCode::Char(' '), "Space"),
    ("tab", KeyCode::Tab, "Tab"),
    ("backspace", KeyCode::Backspace, "Backspace"),
    ("delete", KeyCode::Delete, "Del"),
];

/// Alternative spellings folded onto the canonical names above.
fn canonical_name(name: &str) -> &str {
    match name {
        "return" => "enter",
        "escape" => "esc",
        "bs" => "backspace",
        "del" => "delete",
        "pgup" | "page_up" => "pageup",
        "pgdn" | "page_down" => "pagedown",
        other => other,
    }
}

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g. "k", "esc", "ctrl+c")
    pub key: String,

    /// The action this key triggers
    pub action: Action,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Check if this binding matches the given key event.
    ///
    /// Shift is ignored for character keys, since terminals report `?` as
    /// shift+`?` on some layouts and plain `?` on others.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Ok(parsed) = parse_key_string(&self.key) else {
            return false;
        };
        if parsed.code != code {
            return false;
        }
        if matches!(code, KeyCode::Char(_)) {
            parsed.modifiers.difference(KeyModifiers::SHIFT)
                == modifiers.difference(KeyModifiers::SHIFT)
        } else {
            parsed.modifiers == modifiers
        }
    }

    /// Display form, e.g. "Ctrl+C"
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }
}

/// Parse a key string like "ctrl+shift+n".
///
/// Modifier and key names are case-insensitive; single characters keep
/// their case so "G" and "g" can be bound separately.
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim();
    let (mods, name) = match key.rsplit_once('+') {
        // A bare "+" or a trailing "+" means the plus key itself.
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, name)) => (mods, name),
        None => ("", key),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" => KeyModifiers::SUPER,
            other => return Err(format!("Unknown modifier: {}", other)),
        };
    }

    Ok(ParsedKey {
        code: parse_key_code(name.trim())?,
        modifiers,
    })
}

fn parse_key_code(name: &str) -> Result<KeyCode, String> {
    let lowered = name.to_lowercase();
    let canonical = canonical_name(&lowered);
    if let Some((_, code, _)) = NAMED_KEYS.iter().find(|(n, _, _)| *n == canonical) {
        return Ok(*code);
    }
    if let Some(num) = canonical.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&num) {
            return Ok(KeyCode::F(num));
        }
    }
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(KeyCode::Char(c)),
        _ => Err(format!("Unknown key: {}", name)),
    }
}

/// Format a key string for display ("ctrl+c" -> "Ctrl+C", "up" -> "↑")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match canonical_name(&part) {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "super" | "meta" | "cmd" => "Cmd".to_string(),
                name => NAMED_KEYS
                    .iter()
                    .find(|(n, _, _)| *n == name)
                    .map(|(_, _, shown)| (*shown).to_string())
                    .unwrap_or_else(|| name.to_uppercase()),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}
