//! `epi-agent` — the per-individual disease-state machine for `epi-rs`.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`status`]     | `Status` — the 5-way observable classification      |
//! | [`cell`]       | `StatusCell` — one disease's dynamic state          |
//! | [`agent`]      | `Agent`, `AgentTraits` — transitions and infection  |
//! | [`population`] | `Population` — the agent arena owned by the engine  |
//!
//! An [`Agent`] tracks one [`StatusCell`] per disease it has ever
//! encountered; cells are materialized lazily on first touch and keep their
//! slot for the agent's lifetime.  All state transitions happen through
//! [`Agent::update`] (once per disease per simulated day) and
//! [`Agent::try_infect`]; classification is a separate read-mostly query
//! evaluated after the update.

pub mod agent;
pub mod cell;
pub mod population;
pub mod status;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{Agent, AgentTraits};
pub use cell::StatusCell;
pub use population::Population;
pub use status::Status;
