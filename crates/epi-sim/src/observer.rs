//! Simulation observer trait for progress reporting and data collection.

use epi_core::Day;

use crate::DiseaseCounts;

/// Callbacks invoked by [`Simulation::run_with`][crate::Simulation::run_with]
/// at day boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — peak tracker
///
/// ```rust,ignore
/// struct PeakTracker { peak: u32 }
///
/// impl SimObserver for PeakTracker {
///     fn on_day_end(&mut self, _day: Day, counts: &[DiseaseCounts]) {
///         self.peak = self.peak.max(counts[0].infectious);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before today's events and disease updates run.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called after today's counts have been appended to history.
    /// `counts` holds one entry per disease, in registration order.
    fn on_day_end(&mut self, _day: Day, _counts: &[DiseaseCounts]) {}

    /// Called once when the run finishes (early termination or day cap).
    fn on_sim_end(&mut self, _days_run: u64) {}
}

/// An observer that does nothing.  Used by [`Simulation::run`][crate::Simulation::run].
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
