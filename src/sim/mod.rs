//! Simulation module
//!
//! All gameplay logic lives here:
//! - Integer pixel positions only
//! - Input is polled, never queued
//! - Stable desk order (list order decides the active desk)
//! - No platform dependencies

pub mod collision;
pub mod input;
pub mod simulation;
pub mod state;

pub use collision::{BINDINGS, Binding, Probe, active_obstacle, advance, permits};
pub use input::{Direction, InputSource, Key, KeyState};
pub use simulation::{DeskCollision, FreeRoam, MoveIntent, Simulation};
pub use state::{Obstacle, Player, World};
