//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// Axis-aligned rectangle in world space (world units, y grows downward).
/// Also the sprite's draw position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Per-tick displacement in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: i32,
    pub vy: i32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds, derived from `tick`.
    pub elapsed_secs: f64,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square cell of side `size` with its top-left corner at (x, y).
    pub fn cell(x: i32, y: i32, size: i32) -> Self {
        Self::new(x, y, size, size)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Same size, moved to (x, y).
    pub fn moved_to(&self, x: i32, y: i32) -> Self {
        Self { x, y, ..*self }
    }

    /// Same size, shifted by (dx, dy).
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        self.moved_to(self.x + dx, self.y + dy)
    }
}

/// Strict AABB overlap. Rectangles that only share an edge do not overlap.
pub fn overlaps(a: &Bounds, b: &Bounds) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { vx: 0, vy: 0 };

    pub fn new(vx: i32, vy: i32) -> Self {
        Self { vx, vy }
    }

    /// `speed` units along `direction`, zero on the other axis.
    pub fn toward(direction: Direction, speed: i32) -> Self {
        let (dx, dy) = direction.unit();
        Self::new(dx * speed, dy * speed)
    }

    pub fn reversed(&self) -> Self {
        Self::new(-self.vx, -self.vy)
    }

    /// Dominant direction of travel. Horizontal motion wins ties.
    pub fn facing(&self) -> Option<Direction> {
        if self.vx > 0 {
            Some(Direction::Right)
        } else if self.vx < 0 {
            Some(Direction::Left)
        } else if self.vy > 0 {
            Some(Direction::Down)
        } else if self.vy < 0 {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * self.dt();
    }
}
