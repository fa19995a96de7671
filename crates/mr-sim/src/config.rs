//! Run configuration.

use mr_map::DEFAULT_HALF_EXTENT;

/// Top-level simulation configuration.
#[derive(Copy, Clone, Debug)]
pub struct SimConfig {
    /// Half-extent of each agent's map window.  The default 10 gives the
    /// classic 21×21 window; rooms larger than the window are outside the
    /// contract.
    pub half_extent: i32,

    /// Runaway guard: abort with [`SimError::TurnLimit`][crate::SimError]
    /// once the oracle's turn counter passes this value.  A conforming
    /// oracle always produces an outcome long before any sensible limit;
    /// only a defective one can loop forever.
    pub max_turns: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            half_extent: DEFAULT_HALF_EXTENT,
            max_turns: 10_000,
        }
    }
}
