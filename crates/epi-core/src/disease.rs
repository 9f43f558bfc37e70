//! The per-pathogen parameter record.
//!
//! # Natural-history model
//!
//! An infected agent is *exposed* (incubating, pre-symptomatic) for `E`
//! days, then *infectious* (symptomatic) for `I` further days.  A per-agent
//! counter starts at `E + I + 1` on infection and counts down one per day
//! toward recovery at 0; `-1` means susceptible:
//!
//! ```text
//!   SUS REC                   I    I+E
//!     |  |                    |     |
//!    -1  0  1  2  3  4  5  6  7  8  9      (I = 7, E = 2)
//!          |===================||====|
//! ```
//!
//! With a quarantine of `Q` days in force, a compliant agent isolates for
//! the first `Q` days of the infectious window and resumes circulating at
//! `counter == I - Q`:
//!
//! ```text
//!   SUS REC         I-Q       I    I+E
//!     |  |           |        |     |
//!    -1  0  1  2  3  4  5  6  7  8  9      (I = 7, E = 2, Q = 3)
//!          |==========||-------||====|
//! ```
//!
//! Defaults for `E` and `I` follow influenza estimates (E≈2, I≈7; Carrat
//! et al., 2008) in the demo scenarios, but every parameter is explicit
//! here — `Disease` holds no application defaults.

use crate::{EpiError, EpiResult};

/// Immutable-after-construction description of one pathogen.
///
/// The only sanctioned mutation is [`set_quarantine`](Disease::set_quarantine),
/// which clamps to the infectious period.  `quarantine_days` is nonetheless a
/// `pub` field because the scheduled quarantine event writes it directly,
/// unclamped — a long-standing behavioral quirk this implementation keeps
/// (see the regression tests in `epi-sim`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disease {
    /// Human-readable pathogen name; also the lookup key for the command
    /// vocabulary.  Unique per simulation.
    pub name: String,

    /// Transmissibility coefficient `t` in [0, 1]: how easily one contact
    /// passes the disease on.
    pub transmissibility: f64,

    /// Length of the exposed (latent, pre-symptomatic) period in days.
    pub exposed_days: u32,

    /// Length of the infectious (symptomatic) period in days.  At least 1.
    pub infectious_days: u32,

    /// Currently configured quarantine length in days.  0 = no quarantine.
    pub quarantine_days: u32,

    /// Probability `r` in [0, 1] of lifelong immunity upon recovery.  With
    /// probability `1 - r` the agent reverts to fully susceptible instead.
    pub immunity_prob: f64,
}

impl Disease {
    /// Construct a validated disease record.  Quarantine starts at 0 days.
    pub fn new(
        name: impl Into<String>,
        transmissibility: f64,
        exposed_days: u32,
        infectious_days: u32,
        immunity_prob: f64,
    ) -> EpiResult<Self> {
        let name = name.into();
        if !(0.0..=1.0).contains(&transmissibility) {
            return Err(EpiError::Config(format!(
                "disease {name:?}: transmissibility {transmissibility} outside [0, 1]"
            )));
        }
        if !(0.0..=1.0).contains(&immunity_prob) {
            return Err(EpiError::Config(format!(
                "disease {name:?}: immunity probability {immunity_prob} outside [0, 1]"
            )));
        }
        if infectious_days < 1 {
            return Err(EpiError::Config(format!(
                "disease {name:?}: infectious period must be at least 1 day"
            )));
        }
        Ok(Self {
            name,
            transmissibility,
            exposed_days,
            infectious_days,
            quarantine_days: 0,
            immunity_prob,
        })
    }

    /// Establish a quarantine of `days` for this disease, clamped to the
    /// infectious period — isolating beyond recovery is meaningless.
    pub fn set_quarantine(&mut self, days: u32) {
        self.quarantine_days = days.min(self.infectious_days);
    }

    /// Counter value written on infection: the full exposed + infectious
    /// span, plus one extra day because the daily update runs before the
    /// same-day status check.
    #[inline]
    pub fn onset_counter(&self) -> i32 {
        (self.exposed_days + self.infectious_days + 1) as i32
    }
}
