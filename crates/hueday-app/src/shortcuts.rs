//! Keyboard shortcut registry and documentation.

use crate::ui::UiAction;
use winit::keyboard::{Key, NamedKey};

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub action: UiAction,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, action: UiAction, description: &'static str) -> Self {
        Self {
            key,
            action,
            description,
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.key.eq_ignore_ascii_case(name)
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Space", UiAction::Advance, "Next color"),
            Shortcut::new("ArrowRight", UiAction::Advance, "Next color"),
            Shortcut::new("N", UiAction::Advance, "Next color"),
            Shortcut::new("ArrowLeft", UiAction::Retreat, "Previous color"),
            Shortcut::new("P", UiAction::Retreat, "Previous color"),
            Shortcut::new("C", UiAction::Copy, "Copy hex code"),
        ]
    }

    /// Action bound to a key name such as `"Space"` or `"n"`.
    pub fn action_for_name(name: &str) -> Option<UiAction> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(name))
            .map(|shortcut| shortcut.action)
    }

    /// Action bound to a pressed key, if any.
    pub fn action_for_key(key: &Key) -> Option<UiAction> {
        key_name(key).and_then(Self::action_for_name)
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:12} {}", shortcut.key, shortcut.description);
        }
        println!();
    }
}

/// Registry name for a winit key.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::Space) => Some("Space"),
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight"),
        Key::Named(NamedKey::ArrowLeft) => Some("ArrowLeft"),
        Key::Character(c) if c.as_str() == " " => Some("Space"),
        Key::Character(c) => Some(c.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    #[test]
    fn test_letters_are_case_insensitive() {
        assert_eq!(ShortcutRegistry::action_for_name("n"), Some(UiAction::Advance));
        assert_eq!(ShortcutRegistry::action_for_name("N"), Some(UiAction::Advance));
        assert_eq!(ShortcutRegistry::action_for_name("p"), Some(UiAction::Retreat));
        assert_eq!(ShortcutRegistry::action_for_name("c"), Some(UiAction::Copy));
    }

    #[test]
    fn test_unbound_names() {
        assert_eq!(ShortcutRegistry::action_for_name("x"), None);
        assert_eq!(ShortcutRegistry::action_for_name(""), None);
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            ShortcutRegistry::action_for_key(&Key::Named(NamedKey::Space)),
            Some(UiAction::Advance)
        );
        assert_eq!(
            ShortcutRegistry::action_for_key(&Key::Named(NamedKey::ArrowRight)),
            Some(UiAction::Advance)
        );
        assert_eq!(
            ShortcutRegistry::action_for_key(&Key::Named(NamedKey::ArrowLeft)),
            Some(UiAction::Retreat)
        );
        assert_eq!(ShortcutRegistry::action_for_key(&Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn test_character_keys() {
        assert_eq!(
            ShortcutRegistry::action_for_key(&Key::Character(SmolStr::new("C"))),
            Some(UiAction::Copy)
        );
        assert_eq!(
            ShortcutRegistry::action_for_key(&Key::Character(SmolStr::new(" "))),
            Some(UiAction::Advance)
        );
    }

    #[test]
    fn test_every_action_has_a_shortcut() {
        let all = ShortcutRegistry::all();
        for action in [UiAction::Advance, UiAction::Retreat, UiAction::Copy] {
            assert!(all.iter().any(|s| s.action == action));
        }
    }
}
