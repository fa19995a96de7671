//! Identity of the two maze explorers.

use std::fmt;

/// One of the two agents.  There are never more or fewer.
///
/// All per-agent arrays in the framework have exactly two slots and use
/// [`AgentId::index`] to address them; iteration over [`AgentId::BOTH`]
/// always processes A before B, which keeps paired-move construction
/// deterministic.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentId {
    A,
    B,
}

impl AgentId {
    /// Both agents, in the canonical A-then-B processing order.
    pub const BOTH: [AgentId; 2] = [AgentId::A, AgentId::B];

    /// The other agent.
    #[inline]
    pub fn partner(self) -> AgentId {
        match self {
            AgentId::A => AgentId::B,
            AgentId::B => AgentId::A,
        }
    }

    /// Slot index for two-element per-agent arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            AgentId::A => 0,
            AgentId::B => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentId::A => "A",
            AgentId::B => "B",
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
