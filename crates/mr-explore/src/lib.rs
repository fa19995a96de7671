//! `mr-explore` — turn-by-turn exploration of an unknown bounded room.
//!
//! One [`Agent`] value per explorer holds its relative position, its
//! [`LocalMap`][mr_map::LocalMap], the backtrack trail, and the phase of
//! the per-agent state machine:
//!
//! ```text
//! Exploring ──(frontier = 0)──▶ Waiting ──(maps merged)──▶ Traversing
//!     │  ▲                                                      │
//!     └──┘ move / backtrack                     (at meeting cell)▼
//!                                                              Done
//! ```
//!
//! The move policy is fixed: take the first open-and-unvisited neighbour
//! in [`DIRECTION_ORDER`][mr_core::DIRECTION_ORDER]; otherwise retreat one
//! step along the trail while any frontier remains; otherwise pass.

pub mod agent;
pub mod policy;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{Agent, Phase};
pub use policy::choose_move;
