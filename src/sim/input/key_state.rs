use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use super::Action;

/// Copy of every raw key flag at one instant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawKeys {
    pub accelerate: bool,
    pub brake: bool,
    pub left: bool,
    pub right: bool,
    pub handbrake: bool,
}

impl RawKeys {
    #[must_use]
    pub const fn get(&self, action: Action) -> bool {
        match action {
            Action::Accelerate => self.accelerate,
            Action::Brake => self.brake,
            Action::Left => self.left,
            Action::Right => self.right,
            Action::Handbrake => self.handbrake,
        }
    }
}

/// Edge-triggered key flags
///
/// Writers only ever store booleans; the simulation reads them once per tick.
#[derive(Debug, Default)]
pub struct KeyState {
    flags: [AtomicBool; Action::COUNT],
}

impl KeyState {
    pub fn set(&self, action: Action, pressed: bool) {
        self.flags[action as usize].store(pressed, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_pressed(&self, action: Action) -> bool {
        self.flags[action as usize].load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn raw(&self) -> RawKeys {
        RawKeys {
            accelerate: self.is_pressed(Action::Accelerate),
            brake: self.is_pressed(Action::Brake),
            left: self.is_pressed(Action::Left),
            right: self.is_pressed(Action::Right),
            handbrake: self.is_pressed(Action::Handbrake),
        }
    }

    pub fn release_all(&self) {
        for action in Action::ALL {
            self.set(action, false);
        }
    }
}

/// Shared handle given to key-event callbacks
///
/// Cloning is cheap and every clone points at the same flags.
#[derive(Clone, Debug, Default)]
pub struct KeyHandle(Arc<KeyState>);

impl KeyHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-down sets, key-up clears; repeated key-down while held changes nothing
    pub fn set_key(&self, action: Action, pressed: bool) {
        self.0.set(action, pressed);
    }

    #[must_use]
    pub fn is_pressed(&self, action: Action) -> bool {
        self.0.is_pressed(action)
    }

    #[must_use]
    pub fn raw(&self) -> RawKeys {
        self.0.raw()
    }

    pub fn release_all(&self) {
        self.0.release_all();
    }
}
