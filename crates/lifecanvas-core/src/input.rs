#![forbid(unsafe_code)]

//! Held-modifier state from global key events.
//!
//! Clicks on the grid mean different things depending on which modifier
//! keys are currently held, so the viewer tracks Alt/Ctrl/Shift from
//! document-level keydown/keyup. Keys outside that set are ignored and
//! their default browser behavior is left alone.
//!
//! Modifier state is advisory and transient. The browser delivers no
//! keyup for a key released while the window is unfocused, so the
//! tracker clears everything on focus loss rather than trying to
//! reconcile; see [`ModifierTracker::handle_focus`].

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b001;
        const ALT   = 0b010;
        const CTRL  = 0b100;
    }
}

impl Modifiers {
    /// Map a DOM `KeyboardEvent.key` value to a modifier flag.
    ///
    /// Returns `None` for every key that is not one of the three
    /// tracked modifiers.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "Alt" => Some(Self::ALT),
            "Control" => Some(Self::CTRL),
            "Shift" => Some(Self::SHIFT),
            _ => None,
        }
    }
}

/// Tracks which modifiers are currently held.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModifierTracker {
    current: Modifiers,
}

impl ModifierTracker {
    #[must_use]
    pub const fn current(&self) -> Modifiers {
        self.current
    }

    #[must_use]
    pub const fn is_held(&self, modifier: Modifiers) -> bool {
        self.current.contains(modifier)
    }

    /// Handle a keydown. Returns true if the key was a tracked modifier.
    pub fn key_down(&mut self, key: &str) -> bool {
        match Modifiers::from_dom_key(key) {
            Some(m) => {
                self.current.insert(m);
                true
            }
            None => false,
        }
    }

    /// Handle a keyup. Returns true if the key was a tracked modifier.
    pub fn key_up(&mut self, key: &str) -> bool {
        match Modifiers::from_dom_key(key) {
            Some(m) => {
                self.current.remove(m);
                true
            }
            None => false,
        }
    }

    /// Clear all modifiers on focus loss so none can stick after the
    /// keyup was delivered elsewhere.
    pub fn handle_focus(&mut self, focused: bool) {
        if !focused {
            self.current = Modifiers::empty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_key_mapping() {
        assert_eq!(Modifiers::from_dom_key("Alt"), Some(Modifiers::ALT));
        assert_eq!(Modifiers::from_dom_key("Control"), Some(Modifiers::CTRL));
        assert_eq!(Modifiers::from_dom_key("Shift"), Some(Modifiers::SHIFT));
        assert_eq!(Modifiers::from_dom_key("a"), None);
        assert_eq!(Modifiers::from_dom_key("Meta"), None);
        assert_eq!(Modifiers::from_dom_key("Enter"), None);
    }

    #[test]
    fn down_up_cycle() {
        let mut tracker = ModifierTracker::default();
        assert!(!tracker.is_held(Modifiers::ALT));

        assert!(tracker.key_down("Alt"));
        assert!(tracker.is_held(Modifiers::ALT));
        assert!(!tracker.is_held(Modifiers::SHIFT));

        assert!(tracker.key_down("Shift"));
        assert_eq!(tracker.current(), Modifiers::ALT | Modifiers::SHIFT);

        assert!(tracker.key_up("Alt"));
        assert!(!tracker.is_held(Modifiers::ALT));
        assert!(tracker.is_held(Modifiers::SHIFT));
    }

    #[test]
    fn unrelated_keys_do_not_change_state() {
        let mut tracker = ModifierTracker::default();
        tracker.key_down("Control");
        assert!(!tracker.key_down("x"));
        assert!(!tracker.key_up("Escape"));
        assert_eq!(tracker.current(), Modifiers::CTRL);
    }

    #[test]
    fn repeated_down_is_idempotent() {
        let mut tracker = ModifierTracker::default();
        tracker.key_down("Shift");
        tracker.key_down("Shift");
        assert!(tracker.key_up("Shift"));
        assert!(!tracker.is_held(Modifiers::SHIFT));
    }

    #[test]
    fn focus_loss_clears_everything() {
        let mut tracker = ModifierTracker::default();
        tracker.key_down("Alt");
        tracker.key_down("Control");
        tracker.key_down("Shift");

        tracker.handle_focus(false);
        assert_eq!(tracker.current(), Modifiers::empty());

        // Regaining focus does not resurrect anything.
        tracker.handle_focus(true);
        assert_eq!(tracker.current(), Modifiers::empty());
    }
}
