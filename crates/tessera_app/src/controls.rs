//! Arrow-key adjustments of the layout parameters.
//!
//! The input side only produces [`ControlDelta`]s; the values themselves
//! live in [`LayoutControls`], owned by the runner and handed to the layout
//! builder every frame.

use tessera_core::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlDelta {
    Scale(f32),
    Translate(f32),
}

impl ControlDelta {
    /// Up/down change the scale, right/left the horizontal offset.
    pub fn from_key(key: KeyCode, step: f32) -> Option<Self> {
        match key {
            KeyCode::ArrowUp => Some(Self::Scale(step)),
            KeyCode::ArrowDown => Some(Self::Scale(-step)),
            KeyCode::ArrowRight => Some(Self::Translate(step)),
            KeyCode::ArrowLeft => Some(Self::Translate(-step)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutControls {
    pub scale: f32,
    pub translate: f32,
    pub step: f32,
}

impl LayoutControls {
    pub fn new(scale: f32, translate: f32, step: f32) -> Self {
        Self {
            scale,
            translate,
            step,
        }
    }

    pub fn apply(&mut self, delta: ControlDelta) {
        match delta {
            ControlDelta::Scale(d) => self.scale += d,
            ControlDelta::Translate(d) => self.translate += d,
        }
    }

    /// Applies every key that maps to a delta; returns whether anything
    /// changed.
    pub fn apply_keys(&mut self, keys: impl IntoIterator<Item = KeyCode>) -> bool {
        let mut changed = false;
        for key in keys {
            if let Some(delta) = ControlDelta::from_key(key, self.step) {
                self.apply(delta);
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_signed_steps() {
        assert_eq!(
            ControlDelta::from_key(KeyCode::ArrowUp, 0.05),
            Some(ControlDelta::Scale(0.05))
        );
        assert_eq!(
            ControlDelta::from_key(KeyCode::ArrowLeft, 0.05),
            Some(ControlDelta::Translate(-0.05))
        );
        assert_eq!(ControlDelta::from_key(KeyCode::Space, 0.05), None);
    }

    #[test]
    fn every_press_applies_one_step() {
        let mut controls = LayoutControls::new(3.0, 0.0, 0.25);
        let changed = controls.apply_keys([
            KeyCode::ArrowUp,
            KeyCode::ArrowUp,
            KeyCode::ArrowDown,
            KeyCode::ArrowRight,
            KeyCode::KeyQ,
        ]);
        assert!(changed);
        assert_eq!(controls.scale, 3.25);
        assert_eq!(controls.translate, 0.25);
    }

    #[test]
    fn unrelated_keys_change_nothing() {
        let mut controls = LayoutControls::new(3.0, 0.0, 0.05);
        assert!(!controls.apply_keys([KeyCode::Enter, KeyCode::KeyA]));
        assert_eq!(controls, LayoutControls::new(3.0, 0.0, 0.05));
    }
}
