//! Signed 2-D cell coordinates.
//!
//! The same type serves two roles: a *relative* position in an agent's own
//! frame (origin = that agent's start cell) and an *absolute* position in
//! the merged grid (origin = top-left of the common bounding box).  A
//! `GridPos` difference is a frame translation, so `Sub` is provided and
//! the result is itself a `GridPos` used as an offset.

use std::fmt;
use std::ops::{Add, Sub};

use crate::Direction;

/// A cell coordinate.  `x` grows rightward, `y` grows downward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    /// The frame origin — each agent's start cell in its own frame.
    pub const ORIGIN: GridPos = GridPos { x: 0, y: 0 };

    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step away in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> GridPos {
        GridPos {
            x: self.x + dir.dx(),
            y: self.y + dir.dy(),
        }
    }
}

impl Add for GridPos {
    type Output = GridPos;
    /// Translate by an offset (component-wise sum).
    #[inline]
    fn add(self, rhs: GridPos) -> GridPos {
        GridPos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridPos {
    type Output = GridPos;
    /// The offset that translates `rhs` onto `self`.
    #[inline]
    fn sub(self, rhs: GridPos) -> GridPos {
        GridPos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
