//! `mr-sim` — the strictly sequential turn loop.
//!
//! # Turn structure
//!
//! ```text
//! loop:
//!   ① Sense     — both agents classify their four neighbours.
//!   ② Branch    — on both frontiers empty: merge + plan (once), then one
//!                 navigator step per agent.
//!               — on the volume check firing: terminal mismatch report.
//!               — otherwise: one exploration step per agent.
//!   ③ Go        — a single paired-move oracle call; `true` means the
//!                 agents now share a cell.
//!   ④ Outcome   — both on the meeting cell: planned success.
//!                 Shared cell anywhere else: early-meeting fallback
//!                 (one-step nudge, offset merge of the local maps).
//! ```
//!
//! Everything is single-threaded and deterministic: identical maze
//! topology and oracle answers replay the identical move sequence, turn
//! count, and meeting cell.

pub mod config;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TurnObserver};
pub use report::{RunReport, Verdict};
pub use sim::Sim;
