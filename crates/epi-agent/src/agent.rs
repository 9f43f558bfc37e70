//! The `Agent` state machine: daily transitions, classification, infection.

use epi_core::{Disease, DiseaseId, EpiError, EpiResult, EpiRng, GroupId};

use crate::{Status, StatusCell};

// ── AgentTraits ───────────────────────────────────────────────────────────────

/// Static per-agent behavioral traits, fixed at creation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentTraits {
    /// Susceptibility in [0, 1]: how frail the agent's immune system is.
    pub susceptibility: f64,
    /// Probability in [0, 1] of honoring a quarantine order on the day it
    /// becomes applicable.
    pub compliance: f64,
}

impl AgentTraits {
    /// Validated construction.
    pub fn new(susceptibility: f64, compliance: f64) -> EpiResult<Self> {
        if !(0.0..=1.0).contains(&susceptibility) {
            return Err(EpiError::Config(format!(
                "susceptibility {susceptibility} outside [0, 1]"
            )));
        }
        if !(0.0..=1.0).contains(&compliance) {
            return Err(EpiError::Config(format!(
                "quarantine compliance {compliance} outside [0, 1]"
            )));
        }
        Ok(Self { susceptibility, compliance })
    }
}

impl Default for AgentTraits {
    /// Baseline used by the demo scenarios: s = 0.99, q = 0.9.
    fn default() -> Self {
        Self { susceptibility: 0.99, compliance: 0.9 }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One individual in the population.
///
/// Per-disease state lives in [`StatusCell`]s keyed by [`DiseaseId`] through
/// the parallel `diseases`/`cells` vectors.  A cell is materialized the first
/// time a disease touches the agent (update, classification, infection, or
/// vaccination) and keeps its slot forever — the mapping is append-only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// The population subgroup this agent belongs to.
    pub group: GroupId,
    /// Per-group contact multipliers — this agent's row of the contact
    /// matrix, consulted only when it is the *source* of an infection,
    /// indexed by the target's group.
    pub contact: Vec<f64>,
    /// Static behavioral traits.
    pub traits: AgentTraits,

    /// Diseases this agent has encountered, in first-touch order.
    diseases: Vec<DiseaseId>,
    /// One cell per entry of `diseases`, same order.
    cells: Vec<StatusCell>,
}

impl Agent {
    pub fn new(group: GroupId, contact: Vec<f64>, traits: AgentTraits) -> Self {
        Self {
            group,
            contact,
            traits,
            diseases: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Slot of `disease` in the per-agent vectors, materializing a fresh
    /// susceptible cell on first touch.
    fn slot(&mut self, disease: DiseaseId) -> usize {
        match self.diseases.iter().position(|&d| d == disease) {
            Some(i) => i,
            None => {
                self.diseases.push(disease);
                self.cells.push(StatusCell::default());
                self.cells.len() - 1
            }
        }
    }

    /// Read-only view of one disease's cell, if the agent has encountered it.
    pub fn cell(&self, disease: DiseaseId) -> Option<&StatusCell> {
        self.diseases
            .iter()
            .position(|&d| d == disease)
            .map(|i| &self.cells[i])
    }

    /// Contact multiplier applied when this agent infects someone in
    /// `target_group`.
    #[inline]
    pub fn contact_to(&self, target_group: GroupId) -> f64 {
        self.contact.get(target_group.index()).copied().unwrap_or(0.0)
    }

    // ── Daily transition ──────────────────────────────────────────────────

    /// Advance this agent one day with respect to `disease`.
    ///
    /// Exactly one rule fires, in priority order:
    ///
    /// 1. Susceptible or recovered (`counter <= 0`): nothing happens.
    /// 2. Last infectious day (`counter == 1`): draw for lifelong immunity
    ///    (`counter = 0`) versus reversion to susceptible (`counter = -1`).
    /// 3. Exposure just ended (`counter == I + 1`), a quarantine is in
    ///    force, and the compliance draw succeeds: decrement and start
    ///    isolating.
    /// 4. Already isolating: decrement; once the counter reaches `I - Q`
    ///    the configured span has elapsed and the agent resumes circulating.
    /// 5. Otherwise: plain decrement through the exposed or infectious span.
    pub fn update(&mut self, disease_id: DiseaseId, disease: &Disease, rng: &mut EpiRng) {
        let compliance = self.traits.compliance;
        let slot = self.slot(disease_id);
        let infectious = disease.infectious_days as i32;
        let quarantine = disease.quarantine_days as i32;
        let cell = &mut self.cells[slot];

        if cell.counter <= 0 {
            return;
        }
        if cell.counter == 1 {
            // Note: a still-set quarantine flag is not cleared here; with
            // Q >= I the release point (counter == I - Q) is never reached.
            cell.counter = if rng.chance(disease.immunity_prob) { 0 } else { -1 };
            return;
        }
        if cell.counter == infectious + 1 && quarantine > 0 && rng.chance(compliance) {
            cell.counter -= 1;
            cell.quarantined = true;
            return;
        }
        if cell.quarantined {
            cell.counter -= 1;
            if cell.counter == infectious - quarantine {
                cell.quarantined = false;
            }
            return;
        }
        cell.counter -= 1;
    }

    // ── Classification ────────────────────────────────────────────────────

    /// Classify this agent's current status for `disease`.
    ///
    /// Evaluated after [`update`](Self::update); priority is Recovered →
    /// Susceptible → Exposed → Quarantined → Infectious.  The quarantine
    /// check spans *every* disease the agent tracks: an agent isolating for
    /// one disease is reported quarantined — and treated as non-infectious —
    /// for all of them.
    pub fn classify(&mut self, disease_id: DiseaseId, disease: &Disease) -> Status {
        let slot = self.slot(disease_id);
        let counter = self.cells[slot].counter;
        if counter == 0 {
            Status::Recovered
        } else if counter < 0 {
            Status::Susceptible
        } else if counter > disease.infectious_days as i32 {
            Status::Exposed
        } else if self.cells.iter().any(|c| c.quarantined) {
            Status::Quarantined
        } else {
            Status::Infectious
        }
    }

    // ── Infection ─────────────────────────────────────────────────────────

    /// Attempt to infect this agent with `disease`.
    ///
    /// Legal only while susceptible; otherwise the attempt is a no-op.
    /// Succeeds with probability
    /// `susceptibility × vaccine_factor × contact × transmissibility`,
    /// where `contact` is the source agent's multiplier for this agent's
    /// group.  On success the counter resets to `E + I + 1`.
    pub fn try_infect(
        &mut self,
        contact: f64,
        disease_id: DiseaseId,
        disease: &Disease,
        rng: &mut EpiRng,
    ) -> bool {
        let slot = self.slot(disease_id);
        if self.cells[slot].counter >= 0 {
            return false;
        }
        let p = self.traits.susceptibility
            * self.cells[slot].vaccine_factor
            * contact
            * disease.transmissibility;
        if rng.chance(p) {
            self.cells[slot].counter = disease.onset_counter();
            true
        } else {
            false
        }
    }

    /// Infect unconditionally — the seeding path, which bypasses the
    /// susceptibility gate.
    pub fn force_infect(&mut self, disease_id: DiseaseId, disease: &Disease) {
        let slot = self.slot(disease_id);
        self.cells[slot].counter = disease.onset_counter();
    }

    /// Overwrite the vaccine factor for `disease`: 0 = full immunity,
    /// 1 = no protection.
    pub fn vaccinate(&mut self, disease_id: DiseaseId, factor: f64) {
        let slot = self.slot(disease_id);
        self.cells[slot].vaccine_factor = factor;
    }
}
