//! Top-level simulation configuration and group contact structure.

use crate::{EpiError, EpiResult, GroupId};

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level parameters, fixed before `run()` and never mutated by the engine.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Hard iteration bound: the simulation never advances past this many
    /// days, even if contagion persists.
    pub max_days: u64,

    /// Mixing parameter `m` in [0, 1]: the per-pair daily probability that
    /// an infectious agent and a susceptible agent interact at all,
    /// independent of group structure.
    pub mixing: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// Reject out-of-range parameters.  Called by `Simulation::new`.
    pub fn validate(&self) -> EpiResult<()> {
        if !(0.0..=1.0).contains(&self.mixing) {
            return Err(EpiError::Config(format!(
                "mixing parameter {} outside [0, 1]",
                self.mixing
            )));
        }
        Ok(())
    }
}

// ── ContactMatrix ─────────────────────────────────────────────────────────────

/// Group × group contact-probability multipliers.
///
/// Row `g` is handed to every agent created in group `g` and is consulted
/// when that agent is the *source* of an infection attempt, indexed by the
/// *target's* group.  The matrix is square: one row and one column per group.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactMatrix {
    rows: Vec<Vec<f64>>,
}

impl ContactMatrix {
    /// Validate and wrap a square matrix of multipliers in [0, 1].
    pub fn new(rows: Vec<Vec<f64>>) -> EpiResult<Self> {
        if rows.is_empty() {
            return Err(EpiError::Config(
                "contact matrix must have at least one group".into(),
            ));
        }
        let n = rows.len();
        for (g, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(EpiError::Config(format!(
                    "contact matrix row {g} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (h, &p) in row.iter().enumerate() {
                if !(0.0..=1.0).contains(&p) {
                    return Err(EpiError::Config(format!(
                        "contact probability [{g}][{h}] = {p} outside [0, 1]"
                    )));
                }
            }
        }
        Ok(Self { rows })
    }

    /// A single fully-mixed group — the matrix `[[1.0]]`.
    pub fn single_group() -> Self {
        Self {
            rows: vec![vec![1.0]],
        }
    }

    /// Number of groups (rows).
    #[inline]
    pub fn groups(&self) -> usize {
        self.rows.len()
    }

    /// The contact row for `group`, or a configuration error if the group
    /// does not exist.
    pub fn row(&self, group: GroupId) -> EpiResult<&[f64]> {
        self.rows
            .get(group.index())
            .map(Vec::as_slice)
            .ok_or_else(|| {
                EpiError::Config(format!(
                    "group {} out of range (matrix has {} groups)",
                    group,
                    self.rows.len()
                ))
            })
    }
}
