use std::collections::HashSet;

/// Re-exported key enum from `winit` for convenience.
// winit 0.30 moved `KeyCode` under `winit::keyboard`; the alias keeps
// callers independent of the upstream module layout.
pub use winit::keyboard::KeyCode;

/// Keyboard state for the current frame.
///
/// The runner feeds this structure with the events coming from `winit`.
/// Besides the set of held keys it keeps an ordered queue of press events
/// (including OS key repeats) so that every repeat can be turned into one
/// discrete adjustment, independent of the frame rate.
#[derive(Default)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    presses: Vec<KeyCode>,
}

impl InputState {
    /// Creates a fresh, empty input state.
    pub fn new() -> Self {
        Default::default()
    }

    /// Called by the event loop when a keyboard event arrives.
    ///
    /// `repeat` marks auto-repeat events generated while a key is held; they
    /// are queued like a fresh press.
    pub fn update_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        if pressed {
            if self.keys_down.insert(key) || repeat {
                self.presses.push(key);
            }
        } else {
            self.keys_down.remove(&key);
        }
    }

    /// Returns true if the given key is currently pressed down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Retrieve and clear the press events queued since the last call, in
    /// arrival order.
    pub fn drain_presses(&mut self) -> Vec<KeyCode> {
        std::mem::take(&mut self.presses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_tracking() {
        let mut state = InputState::new();
        assert!(!state.is_key_pressed(KeyCode::ArrowUp));
        state.update_key(KeyCode::ArrowUp, true, false);
        assert!(state.is_key_pressed(KeyCode::ArrowUp));
        state.update_key(KeyCode::ArrowUp, false, false);
        assert!(!state.is_key_pressed(KeyCode::ArrowUp));
    }

    #[test]
    fn repeats_are_queued_in_order() {
        let mut state = InputState::new();
        state.update_key(KeyCode::ArrowLeft, true, false);
        state.update_key(KeyCode::ArrowLeft, true, true);
        state.update_key(KeyCode::ArrowLeft, true, true);
        state.update_key(KeyCode::ArrowLeft, false, false);
        state.update_key(KeyCode::ArrowUp, true, false);
        assert_eq!(
            state.drain_presses(),
            vec![
                KeyCode::ArrowLeft,
                KeyCode::ArrowLeft,
                KeyCode::ArrowLeft,
                KeyCode::ArrowUp
            ]
        );
        // draining resets the queue
        assert!(state.drain_presses().is_empty());
    }

    #[test]
    fn duplicate_press_without_repeat_is_ignored() {
        // some platforms resend the pressed state on focus changes
        let mut state = InputState::new();
        state.update_key(KeyCode::ArrowDown, true, false);
        state.update_key(KeyCode::ArrowDown, true, false);
        assert_eq!(state.drain_presses(), vec![KeyCode::ArrowDown]);
    }
}
