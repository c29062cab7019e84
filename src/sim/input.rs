//! Keyboard input
//!
//! The core only ever asks "is this key held right now?". Hosts translate
//! platform key events into a [`KeyState`].

use glam::IVec2;

/// Cardinal movement direction (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// One-pixel step in this direction
    #[inline]
    pub fn step(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

/// The logical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
}

impl Key {
    pub const ALL: [Key; 8] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
    ];

    pub fn direction(self) -> Direction {
        match self {
            Key::Up | Key::W => Direction::Up,
            Key::Down | Key::S => Direction::Down,
            Key::Left | Key::A => Direction::Left,
            Key::Right | Key::D => Direction::Right,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Anything that can report the current held state of the game keys
pub trait InputSource {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Held-key bitset fed by platform events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    held: u8,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the given keys held
    pub fn holding(keys: &[Key]) -> Self {
        let mut state = Self::new();
        for &key in keys {
            state.press(key);
        }
        state
    }

    pub fn press(&mut self, key: Key) {
        self.held |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.held &= !key.bit();
    }

    /// Key-down and OS key-repeat both map to `down = true`
    pub fn set(&mut self, key: Key, down: bool) {
        if down {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    /// Release everything, e.g. when the window loses focus mid-press
    pub fn clear(&mut self) {
        self.held = 0;
    }
}

impl InputSource for KeyState {
    fn is_pressed(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_mirrors_arrows() {
        assert_eq!(Key::W.direction(), Key::Up.direction());
        assert_eq!(Key::A.direction(), Key::Left.direction());
        assert_eq!(Key::S.direction(), Key::Down.direction());
        assert_eq!(Key::D.direction(), Key::Right.direction());
    }

    #[test]
    fn test_key_state_press_release() {
        let mut keys = KeyState::new();
        assert!(Key::ALL.iter().all(|&k| !keys.is_pressed(k)));

        keys.press(Key::Left);
        keys.set(Key::S, true);
        assert!(keys.is_pressed(Key::Left));
        assert!(keys.is_pressed(Key::S));
        assert!(!keys.is_pressed(Key::A));

        // Repeat presses are idempotent
        keys.press(Key::Left);
        keys.release(Key::Left);
        assert!(!keys.is_pressed(Key::Left));

        keys.clear();
        assert!(!keys.is_pressed(Key::S));
    }

    #[test]
    fn test_direction_steps() {
        let all = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        let sum: IVec2 = all.iter().map(|d| d.step()).sum();
        assert_eq!(sum, IVec2::ZERO);
        assert_eq!(Direction::Up.step(), IVec2::new(0, -1));
        assert_eq!(Direction::Right.step(), IVec2::new(1, 0));
    }
}
