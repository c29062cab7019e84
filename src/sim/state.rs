//! Game state and core simulation types
//!
//! The world is a player and a fixed, ordered list of desks.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::simulation::MoveIntent;

/// The player avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the player dot, in pixels
    pub pos: IVec2,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
        }
    }

    /// Apply a movement intent (the only way the position changes)
    #[inline]
    pub fn apply(&mut self, intent: MoveIntent) {
        self.pos += intent.delta;
    }
}

/// An axis-aligned desk
///
/// `width` and `length` keep their original roles: the desk is painted as a
/// `width`-wide, `length`-tall rectangle, while the collision probes scale
/// their horizontal reach by `length` and their vertical reach by `width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: IVec2,
    pub width: i32,
    pub length: i32,
}

impl Obstacle {
    pub const fn new(x: i32, y: i32, width: i32, length: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            width,
            length,
        }
    }
}

/// Everything the loop owns for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
}

impl World {
    /// New world with the player at the origin
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self {
            player: Player::default(),
            obstacles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_starts_at_origin() {
        let world = World::new(vec![Obstacle::new(200, 300, 20, 50)]);
        assert_eq!(world.player.pos, IVec2::ZERO);
        assert_eq!(world.obstacles.len(), 1);
    }

    #[test]
    fn test_player_apply_intent() {
        let mut player = Player::new(4, 4);
        player.apply(MoveIntent {
            delta: IVec2::new(2, -1),
        });
        assert_eq!(player.pos, IVec2::new(6, 3));
    }
}
