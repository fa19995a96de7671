//! `mr-core` — foundational types for the `rust_mr` rendezvous framework.
//!
//! This crate is a dependency of every other `mr-*` crate.  It intentionally
//! has no `mr-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`direction`] | `Direction`, `DIRECTION_ORDER`, `NUDGE_ORDER`         |
//! | [`grid`]      | `GridPos` — signed 2-D cell coordinate                |
//! | [`agent`]     | `AgentId` — the two explorers                         |
//! | [`turn`]      | `Turn` — the oracle's monotone move counter           |
//! | [`world`]     | `WorldOracle` — the movement-query contract           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.   |

pub mod agent;
pub mod direction;
pub mod grid;
pub mod turn;
pub mod world;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::AgentId;
pub use direction::{Direction, DIRECTION_ORDER, NUDGE_ORDER};
pub use grid::GridPos;
pub use turn::Turn;
pub use world::WorldOracle;
