//! The append-only day-by-day time series.

use epi_agent::Status;
use epi_core::DiseaseId;

// ── DiseaseCounts ─────────────────────────────────────────────────────────────

/// Aggregate classification counts for one disease on one day.
///
/// `infectious` counts agents that are infectious *or* quarantined (the
/// symptomatic window as a whole); `quarantined` is the isolating subset of
/// it.  Recovered agents are tallied separately so that
/// `exposed + infectious + susceptible + recovered` always equals the
/// population size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiseaseCounts {
    pub exposed: u32,
    /// Infectious or quarantined.
    pub infectious: u32,
    /// Isolating subset of `infectious`.
    pub quarantined: u32,
    pub susceptible: u32,
    pub recovered: u32,
}

impl DiseaseCounts {
    /// Record one agent's classification.
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Exposed => self.exposed += 1,
            Status::Infectious => self.infectious += 1,
            Status::Quarantined => {
                self.infectious += 1;
                self.quarantined += 1;
            }
            Status::Susceptible => self.susceptible += 1,
            Status::Recovered => self.recovered += 1,
        }
    }

    /// Tally a full status vector.
    pub fn tally<I: IntoIterator<Item = Status>>(statuses: I) -> Self {
        let mut counts = Self::default();
        for s in statuses {
            counts.record(s);
        }
        counts
    }

    /// Number of agents accounted for (quarantined agents are already part
    /// of `infectious` and are not double-counted).
    #[inline]
    pub fn total(&self) -> u32 {
        self.exposed + self.infectious + self.susceptible + self.recovered
    }

    /// `true` while the disease is still circulating in anyone.
    #[inline]
    pub fn has_contagion(&self) -> bool {
        self.exposed + self.infectious > 0
    }
}

// ── History ───────────────────────────────────────────────────────────────────

/// One entry per simulated day, each holding one [`DiseaseCounts`] per
/// registered disease in registration order.
///
/// Append-only; this is the sole channel the plotting collaborator reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    days: Vec<Vec<DiseaseCounts>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of days recorded so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The counts recorded on day `index`, one entry per disease.
    pub fn day(&self, index: usize) -> Option<&[DiseaseCounts]> {
        self.days.get(index).map(Vec::as_slice)
    }

    /// The most recent day's counts.
    pub fn last(&self) -> Option<&[DiseaseCounts]> {
        self.days.last().map(Vec::as_slice)
    }

    /// Iterate over all recorded days in order.
    pub fn iter(&self) -> impl Iterator<Item = &[DiseaseCounts]> {
        self.days.iter().map(Vec::as_slice)
    }

    /// The full per-day series for one disease.
    pub fn series(&self, disease: DiseaseId) -> Vec<DiseaseCounts> {
        self.days
            .iter()
            .filter_map(|entry| entry.get(disease.index()).copied())
            .collect()
    }

    pub(crate) fn push_day(&mut self, entry: Vec<DiseaseCounts>) {
        self.days.push(entry);
    }
}
