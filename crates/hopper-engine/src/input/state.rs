//! Polled key state, rebuilt from the event queue once per frame.

use crate::input::queue::{InputEvent, InputQueue};

/// Keys the platformer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    A,
    D,
    Space,
}

impl Key {
    pub const ALL: [Key; 5] = [Key::Left, Key::Right, Key::A, Key::D, Key::Space];

    /// Map a browser `keyCode`. Unknown codes are ignored.
    pub fn from_code(code: u32) -> Option<Key> {
        match code {
            37 => Some(Key::Left),
            39 => Some(Key::Right),
            65 => Some(Key::A),
            68 => Some(Key::D),
            32 => Some(Key::Space),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Held and just-pressed keys for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: u8,
    just_pressed: u8,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold this frame's events into the state. Just-pressed flags from the
    /// previous frame are dropped first.
    pub fn begin_frame(&mut self, queue: &InputQueue) {
        self.just_pressed = 0;
        for event in queue.iter() {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    if let Some(key) = Key::from_code(key_code) {
                        // Key repeat does not count as a new press.
                        if self.held & key.bit() == 0 {
                            self.just_pressed |= key.bit();
                        }
                        self.held |= key.bit();
                    }
                }
                InputEvent::KeyUp { key_code } => {
                    if let Some(key) = Key::from_code(key_code) {
                        self.held &= !key.bit();
                    }
                }
                InputEvent::FocusLost => {
                    self.held = 0;
                }
            }
        }
    }

    /// Forget just-pressed flags so only the first fixed step of a frame sees them.
    pub fn clear_just_pressed(&mut self) {
        self.just_pressed = 0;
    }

    /// Set a key directly. Used by tests and scripted input.
    pub fn set_key(&mut self, key: Key, down: bool) {
        if down {
            if self.held & key.bit() == 0 {
                self.just_pressed |= key.bit();
            }
            self.held |= key.bit();
        } else {
            self.held &= !key.bit();
        }
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    pub fn is_key_just_pressed(&self, key: Key) -> bool {
        self.just_pressed & key.bit() != 0
    }

    pub fn left_held(&self) -> bool {
        self.is_key_pressed(Key::A) || self.is_key_pressed(Key::Left)
    }

    pub fn right_held(&self) -> bool {
        self.is_key_pressed(Key::D) || self.is_key_pressed(Key::Right)
    }

    pub fn jump_held(&self) -> bool {
        self.is_key_pressed(Key::Space)
    }
}
