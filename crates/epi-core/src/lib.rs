//! `epi-core` — foundational types for the `epi-rs` epidemic simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`ids`]     | `AgentId`, `DiseaseId`, `GroupId`                   |
//! | [`day`]     | `Day` — the simulated-day counter                   |
//! | [`rng`]     | `EpiRng` — seeded, injectable randomness            |
//! | [`disease`] | `Disease` — per-pathogen natural-history record     |
//! | [`config`]  | `SimConfig`, `ContactMatrix`                        |
//! | [`error`]   | `EpiError`, `EpiResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod day;
pub mod disease;
pub mod error;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ContactMatrix, SimConfig};
pub use day::Day;
pub use disease::Disease;
pub use error::{EpiError, EpiResult};
pub use ids::{AgentId, DiseaseId, GroupId};
pub use rng::EpiRng;
