//! Desk collision
//!
//! Each tick one desk is "active": the last desk in list order whose origin
//! the player has not passed by [`PROXIMITY_THRESHOLD`] on at least one axis
//! (signed offset `player - desk < 5`). Every key binding then tests its own
//! probe window against that desk before its one-pixel move is allowed. A
//! player below and to the right of every desk has no active desk and moves
//! freely.
//!
//! A probe is an offset window around the player position. For one axis it
//! overlaps the desk when
//!
//! ```text
//! p + lead > origin  &&  p + trail < origin + reach(desk)
//! ```
//!
//! and the move is blocked only if both axes overlap. The margins are
//! pixel-exact and differ slightly between the arrow and WASD bindings
//! (up: `W - 30` vs `W - 29`).

use glam::IVec2;

use super::input::{InputSource, Key};
use super::state::Obstacle;
use crate::consts::PROXIMITY_THRESHOLD;

/// Extent of a probe along one axis, as a linear function of desk size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reach {
    pub length: i32,
    pub width: i32,
    pub bias: i32,
}

impl Reach {
    pub const fn new(length: i32, width: i32, bias: i32) -> Self {
        Self {
            length,
            width,
            bias,
        }
    }

    #[inline]
    pub fn of(&self, desk: &Obstacle) -> i32 {
        self.length * desk.length + self.width * desk.width + self.bias
    }
}

/// One axis of a probe window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset compared against the desk's near edge
    pub lead: i32,
    /// Offset compared against the desk's far edge
    pub trail: i32,
    pub reach: Reach,
}

impl Span {
    pub const fn new(lead: i32, trail: i32, reach: Reach) -> Self {
        Self { lead, trail, reach }
    }

    #[inline]
    fn overlaps(&self, p: i32, origin: i32, desk: &Obstacle) -> bool {
        p + self.lead > origin && p + self.trail < origin + self.reach.of(desk)
    }
}

/// Player hit-box approximation used by one directional test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub x: Span,
    pub y: Span,
}

impl Probe {
    /// Whether the window at `pos` overlaps `desk` on both axes
    #[inline]
    pub fn blocks(&self, pos: IVec2, desk: &Obstacle) -> bool {
        self.x.overlaps(pos.x, desk.pos.x, desk) && self.y.overlaps(pos.y, desk.pos.y, desk)
    }
}

/// Vertical band shared by the horizontal probes
const SIDE_BAND: Span = Span::new(10, 31, Reach::new(0, 1, 0));
/// Horizontal band shared by the vertical probes
const CAP_BAND: Span = Span::new(9, 0, Reach::new(2, 0, 10));

/// Moving right into a desk's left side
pub const RIGHT: Probe = Probe {
    x: Span::new(11, 0, Reach::new(1, 0, 0)),
    y: SIDE_BAND,
};

/// Moving left into a desk's right side (tested against twice the length)
pub const LEFT: Probe = Probe {
    x: Span::new(9, -11, Reach::new(2, 0, 0)),
    y: SIDE_BAND,
};

/// Moving up into a desk's bottom, arrow-key margin
pub const UP_ARROW: Probe = Probe {
    x: CAP_BAND,
    y: Span::new(0, 0, Reach::new(0, 1, -30)),
};

/// Moving up into a desk's bottom, WASD margin (one pixel looser)
pub const UP_WASD: Probe = Probe {
    x: CAP_BAND,
    y: Span::new(0, 0, Reach::new(0, 1, -29)),
};

/// Moving down into a desk's top
pub const DOWN: Probe = Probe {
    x: CAP_BAND,
    y: Span::new(11, 0, Reach::new(0, 1, -30)),
};

/// A key and the probe that gates it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub key: Key,
    pub probe: Probe,
}

/// All key bindings, in evaluation order
pub const BINDINGS: [Binding; 8] = [
    Binding { key: Key::Right, probe: RIGHT },
    Binding { key: Key::Left, probe: LEFT },
    Binding { key: Key::Up, probe: UP_ARROW },
    Binding { key: Key::Down, probe: DOWN },
    Binding { key: Key::D, probe: RIGHT },
    Binding { key: Key::A, probe: LEFT },
    Binding { key: Key::W, probe: UP_WASD },
    Binding { key: Key::S, probe: DOWN },
];

/// Whether `desk` may become active for a player at `pos`
///
/// Offsets are signed: anywhere left of or above the desk origin counts.
#[inline]
pub fn is_near(pos: IVec2, desk: &Obstacle) -> bool {
    let d = pos - desk.pos;
    d.x < PROXIMITY_THRESHOLD || d.y < PROXIMITY_THRESHOLD
}

/// Select this tick's active desk: the last one in list order that is near
pub fn active_obstacle(pos: IVec2, obstacles: &[Obstacle]) -> Option<&Obstacle> {
    obstacles.iter().rev().find(|desk| is_near(pos, desk))
}

/// Whether a binding may move from `pos`
///
/// This is the per-direction permission for one key. With no active desk
/// nothing is blocked.
#[inline]
pub fn permits(binding: &Binding, pos: IVec2, active: Option<&Obstacle>) -> bool {
    active.is_none_or(|desk| !binding.probe.blocks(pos, desk))
}

/// Run every held binding in order against `active`, returning the new position
///
/// Each binding sees the position left by the bindings before it.
pub fn advance(pos: IVec2, active: Option<&Obstacle>, input: &dyn InputSource) -> IVec2 {
    BINDINGS.iter().fold(pos, |pos, binding| {
        if permits(binding, pos, active) && input.is_pressed(binding.key) {
            pos + binding.key.direction().step()
        } else {
            pos
        }
    })
}
