//! Scheduled interventions.

use epi_core::{Day, DiseaseId};

/// An intervention applied at the start of its trigger day, before any
/// disease updates run.
///
/// Events are held unsorted; the trigger day is authoritative and same-day
/// events apply in insertion order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// Set a disease's quarantine length.
    ///
    /// Applied as a direct field write — unlike `Disease::set_quarantine`,
    /// the value is *not* clamped to the infectious period.  Kept unclamped
    /// for fidelity with the long-standing behavior; see the regression
    /// tests.
    Quarantine {
        day: Day,
        disease: DiseaseId,
        days: u32,
    },

    /// Vaccination campaign: each agent is independently vaccinated with
    /// probability `coverage`, receiving a vaccine factor of
    /// `1 - effectiveness`.
    Vaccinate {
        day: Day,
        disease: DiseaseId,
        coverage: f64,
        effectiveness: f64,
    },

    /// Force-infect `count` agents chosen uniformly without replacement,
    /// bypassing the susceptibility gate.
    Seed {
        day: Day,
        disease: DiseaseId,
        count: usize,
    },
}

impl Event {
    /// The absolute day this event fires.
    #[inline]
    pub fn day(&self) -> Day {
        match *self {
            Event::Quarantine { day, .. }
            | Event::Vaccinate { day, .. }
            | Event::Seed { day, .. } => day,
        }
    }

    /// The disease this event targets.
    #[inline]
    pub fn disease(&self) -> DiseaseId {
        match *self {
            Event::Quarantine { disease, .. }
            | Event::Vaccinate { disease, .. }
            | Event::Seed { disease, .. } => disease,
        }
    }
}
