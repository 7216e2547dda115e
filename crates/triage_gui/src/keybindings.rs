//! Keyboard shortcuts for the five session actions.

use eframe::egui::{Event, Key};
use triage_core::SessionAction;

/// One key per action. Translated once, at the input boundary.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub keep: Key,
    pub delete: Key,
    pub previous: Key,
    pub next: Key,
    pub quit: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            keep: Key::K,
            delete: Key::D,
            previous: Key::Period,
            next: Key::Comma,
            quit: Key::Q,
        }
    }
}

impl KeyBindings {
    pub fn key_for(&self, action: SessionAction) -> Key {
        match action {
            SessionAction::Keep => self.keep,
            SessionAction::Delete => self.delete,
            SessionAction::Previous => self.previous,
            SessionAction::Next => self.next,
            SessionAction::Quit => self.quit,
        }
    }

    pub fn action_for(&self, key: Key) -> Option<SessionAction> {
        SessionAction::ALL
            .into_iter()
            .find(|action| self.key_for(*action) == key)
    }

    /// Actions for the key presses in `events`, in the order they were made.
    /// Auto-repeats are ignored.
    pub fn actions_from_events(&self, events: &[Event]) -> Vec<SessionAction> {
        events
            .iter()
            .filter_map(|event| match event {
                Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => self.action_for(*key),
                _ => None,
            })
            .collect()
    }

    /// Button caption, e.g. `Keep (K)`.
    pub fn button_label(&self, action: SessionAction) -> String {
        format!("{} ({})", action.label(), self.key_for(action).symbol_or_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Modifiers;
    use rstest::rstest;
    use std::collections::HashSet;

    fn key_event(key: Key, pressed: bool, repeat: bool) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers: Modifiers::NONE,
        }
    }

    #[rstest]
    #[case(Key::K, SessionAction::Keep)]
    #[case(Key::D, SessionAction::Delete)]
    #[case(Key::Period, SessionAction::Previous)]
    #[case(Key::Comma, SessionAction::Next)]
    #[case(Key::Q, SessionAction::Quit)]
    fn default_keys_map_to_actions(#[case] key: Key, #[case] action: SessionAction) {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for(key), Some(action));
        assert_eq!(bindings.key_for(action), key);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for(Key::ArrowLeft), None);
        assert_eq!(bindings.action_for(Key::Space), None);
    }

    #[test]
    fn every_action_has_its_own_key() {
        let bindings = KeyBindings::default();
        let keys: HashSet<Key> = SessionAction::ALL
            .into_iter()
            .map(|a| bindings.key_for(a))
            .collect();
        assert_eq!(keys.len(), SessionAction::ALL.len());
    }

    #[test]
    fn labels_show_the_key() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.button_label(SessionAction::Keep), "Keep (K)");
        assert_eq!(bindings.button_label(SessionAction::Quit), "Quit (Q)");
    }

    #[test]
    fn events_keep_press_order() {
        let bindings = KeyBindings::default();
        let events = [
            key_event(Key::D, true, false),
            key_event(Key::D, false, false),
            key_event(Key::ArrowLeft, true, false),
            key_event(Key::K, true, false),
            key_event(Key::K, true, true),
            key_event(Key::Period, true, false),
        ];
        assert_eq!(
            bindings.actions_from_events(&events),
            vec![
                SessionAction::Delete,
                SessionAction::Keep,
                SessionAction::Previous
            ]
        );
    }
}
