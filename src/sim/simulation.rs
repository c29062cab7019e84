//! Pluggable per-tick behaviour
//!
//! The loop owns the world and asks a [`Simulation`] what the player should
//! do this tick and how the frame should look. [`FreeRoam`] is the bare
//! engine behaviour; [`DeskCollision`] is the escape game.

use glam::IVec2;

use super::collision::{active_obstacle, advance};
use super::input::InputSource;
use super::state::World;
use crate::renderer::FrameBuffer;
use crate::renderer::scene;

/// Net movement requested for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveIntent {
    pub delta: IVec2,
}

impl MoveIntent {
    pub const NONE: MoveIntent = MoveIntent { delta: IVec2::ZERO };

    /// Intent that takes the player from `from` to `to`
    pub fn between(from: IVec2, to: IVec2) -> Self {
        Self { delta: to - from }
    }
}

/// Game-specific update and draw behaviour
pub trait Simulation {
    /// Decide this tick's movement from the current input
    fn update(&mut self, world: &World, input: &dyn InputSource) -> MoveIntent;

    /// Paint the whole frame for the current world
    fn render(&self, world: &World, frame: &mut FrameBuffer);
}

/// Every held key moves the player, nothing collides
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeRoam;

impl Simulation for FreeRoam {
    fn update(&mut self, world: &World, input: &dyn InputSource) -> MoveIntent {
        let pos = world.player.pos;
        MoveIntent::between(pos, advance(pos, None, input))
    }

    fn render(&self, world: &World, frame: &mut FrameBuffer) {
        scene::draw_background(frame);
        scene::draw_player(frame, &world.player);
    }
}

/// The escape game: desks block movement and glow near the player
#[derive(Debug, Clone, Copy, Default)]
pub struct DeskCollision;

impl Simulation for DeskCollision {
    fn update(&mut self, world: &World, input: &dyn InputSource) -> MoveIntent {
        let pos = world.player.pos;
        let active = active_obstacle(pos, &world.obstacles);
        match active {
            Some(desk) => log::trace!(
                "active desk at ({}, {}) {}x{}",
                desk.pos.x,
                desk.pos.y,
                desk.width,
                desk.length
            ),
            None => log::trace!("no active desk near ({}, {})", pos.x, pos.y),
        }

        MoveIntent::between(pos, advance(pos, active, input))
    }

    fn render(&self, world: &World, frame: &mut FrameBuffer) {
        scene::draw_scene(frame, world);
    }
}
