//! Software rendering module
//!
//! The scene is rasterised on the CPU into a [`FrameBuffer`]; a host
//! [`Renderer`] then puts the finished frame on screen.

pub mod frame;
pub mod halo;
pub mod scene;

pub use frame::{Color, FrameBuffer, colors};

use crate::EngineError;

/// Presentation capability supplied by the host
pub trait Renderer {
    /// Show a finished frame
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), EngineError>;

    /// Hide the visible surface once the loop stops
    fn hide(&mut self) {}
}
