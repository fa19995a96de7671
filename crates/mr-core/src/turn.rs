//! The oracle's move counter.

use std::fmt;

/// Number of paired-move (`go`) calls the world oracle has executed.
///
/// The oracle owns the count; the framework only reads it, so the type has
/// no arithmetic beyond comparison.  A `u32` outlasts any bounded room by
/// many orders of magnitude.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u32);

impl Turn {
    pub const ZERO: Turn = Turn(0);
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
