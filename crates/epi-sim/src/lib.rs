//! `epi-sim` — daily-loop orchestrator for the epi-rs simulator.
//!
//! # The daily loop
//!
//! ```text
//! for day in 0..config.max_days:
//!   ① Events        — apply every event scheduled for today
//!                     (quarantine order / vaccination campaign / seeding).
//!   ② Per disease   — update every agent's state machine, then classify
//!                     everyone into a fresh status vector, record the
//!                     aggregate counts, and run the transmission round
//!                     over (exposed-or-infectious, susceptible) pairs
//!                     gated by the mixing parameter.
//!   ③ History       — append today's per-disease counts.
//!   ④ Termination   — stop early once no disease shows contagion and no
//!                     future events remain scheduled.
//! ```
//!
//! Diseases are the outer loop and agent pairs the inner one: each disease
//! derives its own contact pattern for the day rather than sharing one.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::{ContactMatrix, Day, Disease, GroupId, SimConfig};
//! use epi_sim::Simulation;
//!
//! let config = SimConfig { max_days: 500, mixing: 0.001, seed: 42 };
//! let mut sim = Simulation::new(config, ContactMatrix::single_group())?;
//! sim.populate(1000, GroupId(0))?;
//! let flu = sim.introduce(Disease::new("influenza", 0.95, 2, 7, 0.9)?)?;
//! sim.seed(Day(0), flu, 3);
//! sim.run()?;
//! let curve = sim.history_for(flu)?;
//! ```

pub mod event;
pub mod history;
pub mod observer;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use event::Event;
pub use history::{DiseaseCounts, History};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulation;
