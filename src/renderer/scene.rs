//! Scene painting
//!
//! Paint order is background, player halo, player dot, desks, then glow.

use super::frame::{FrameBuffer, colors};
use super::halo::glow_pixels;
use crate::consts::{HALO_OFFSET, HALO_RADIUS, PLAYER_DOT_RADIUS};
use crate::sim::{Obstacle, Player, World};

pub fn draw_background(frame: &mut FrameBuffer) {
    frame.clear(colors::BACKGROUND);
}

/// Translucent halo, then the solid dot
pub fn draw_player(frame: &mut FrameBuffer, player: &Player) {
    let halo = 2 * HALO_RADIUS;
    frame.fill_oval(
        player.pos.x - HALO_OFFSET,
        player.pos.y - HALO_OFFSET,
        halo,
        halo,
        colors::HALO,
    );

    let dot = 2 * PLAYER_DOT_RADIUS;
    frame.fill_oval(player.pos.x, player.pos.y, dot, dot, colors::PLAYER);
}

pub fn draw_obstacles(frame: &mut FrameBuffer, obstacles: &[Obstacle]) {
    for desk in obstacles {
        frame.fill_rect(desk.pos.x, desk.pos.y, desk.width, desk.length, colors::DESK);
    }
}

pub fn draw_glow(frame: &mut FrameBuffer, obstacles: &[Obstacle], player: &Player) {
    for desk in obstacles {
        for p in glow_pixels(desk, *player) {
            frame.plot(p.x, p.y, colors::GLOW);
        }
    }
}

/// Paint the full escape-game frame
pub fn draw_scene(frame: &mut FrameBuffer, world: &World) {
    draw_background(frame);
    draw_player(frame, &world.player);
    draw_obstacles(frame, &world.obstacles);
    draw_glow(frame, &world.obstacles, &world.player);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::halo::halo_centre;

    #[test]
    fn test_scene_layers() {
        let mut world = World::new(vec![Obstacle::new(40, 40, 30, 60)]);
        world.player = Player::new(10, 10);
        let mut frame = FrameBuffer::new(128, 128);
        draw_scene(&mut frame, &world);

        // Dot centre is solid red
        assert_eq!(frame.get(15, 15), Some(colors::PLAYER));
        // Halo ring is blended yellow over black
        let ring = frame.get(15, 2).unwrap();
        assert!(ring.r > 0 && ring.g > 0 && ring.b == 0 && ring.r < 204);
        // Desk is painted width x length
        assert_eq!(frame.get(40, 40), Some(colors::DESK));
        assert_eq!(frame.get(69, 99), Some(colors::DESK));
        assert_eq!(frame.get(70, 40), Some(colors::BACKGROUND));
        assert_eq!(frame.get(100, 100), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_glow_overdraws_desk() {
        let desk = Obstacle::new(200, 300, 80, 50);
        let world = World {
            player: Player::new(210, 310),
            obstacles: vec![desk],
        };
        let mut frame = FrameBuffer::new(400, 400);
        draw_scene(&mut frame, &world);

        let centre = halo_centre(&world.player);
        assert_eq!(frame.get(centre.x, centre.y), Some(colors::GLOW));
        // Desk pixel outside the glow radius stays white
        assert_eq!(frame.get(279, 349), Some(colors::DESK));
    }
}
