//! Proximity glow around desks
//!
//! For every desk, a small window around it is scanned pixel by pixel and a
//! pixel glows when it is within [`GLOW_RADIUS`] of the player's halo. The
//! scan runs in window space anchored on the halo's top-left corner
//! (`player - HALO_OFFSET`); marked pixels are shifted by [`GLOW_OFFSET`]
//! on the way back to frame space, which lands the glow on a disc centred
//! on the halo centre.

use std::ops::Range;

use glam::IVec2;

use crate::consts::{GLOW_OFFSET, GLOW_RADIUS, HALO_OFFSET};
use crate::sim::{Obstacle, Player};

/// Window-space scan ranges `(x, y)` for one desk
pub fn glow_window(desk: &Obstacle) -> (Range<i32>, Range<i32>) {
    let xs = desk.pos.x - 15..desk.pos.x + 2 * desk.length - 5;
    let ys = desk.pos.y - 15..desk.pos.y + desk.width - 45;
    (xs, ys)
}

/// Whether window-space point `local` glows for `player`
///
/// Same as truncating the Euclidean distance and comparing against the
/// radius, without the square root.
#[inline]
pub fn glows(local: IVec2, player: &Player) -> bool {
    let anchor = player.pos - IVec2::splat(HALO_OFFSET);
    (local - anchor).length_squared() < GLOW_RADIUS * GLOW_RADIUS
}

/// Frame-space pixels that glow around `desk`, column by column
pub fn glow_pixels(desk: &Obstacle, player: Player) -> impl Iterator<Item = IVec2> {
    let (xs, ys) = glow_window(desk);
    xs.flat_map(move |x| ys.clone().map(move |y| IVec2::new(x, y)))
        .filter(move |&local| glows(local, &player))
        .map(|local| local + IVec2::splat(GLOW_OFFSET))
}

/// Centre of the player's halo in frame space
pub fn halo_centre(player: &Player) -> IVec2 {
    player.pos - IVec2::splat(HALO_OFFSET) + IVec2::splat(GLOW_OFFSET)
}
