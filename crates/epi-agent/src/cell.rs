//! Per-disease dynamic state.

/// One agent's dynamic state for one disease.
///
/// # Counter encoding
///
/// | `counter`    | Meaning                                        |
/// |--------------|------------------------------------------------|
/// | `< 0`        | Susceptible                                    |
/// | `0`          | Recovered (lifelong immunity)                  |
/// | `1..=I`      | Infectious (or quarantined, per the flag)      |
/// | `> I`        | Exposed — counting down from `E + I + 1`       |
///
/// The counter decrements by at most one per simulated day; the only jump
/// is the reset to `E + I + 1` on infection.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCell {
    /// Countdown through the disease course; see the table above.
    pub counter: i32,
    /// `true` while the agent is honoring a quarantine order for this disease.
    pub quarantined: bool,
    /// Multiplicative discount on susceptibility from vaccination:
    /// 1.0 = no protection (default), 0.0 = full immunity.
    pub vaccine_factor: f64,
}

impl Default for StatusCell {
    /// A fresh cell: susceptible, unquarantined, unvaccinated.
    fn default() -> Self {
        Self {
            counter: -1,
            quarantined: false,
            vaccine_factor: 1.0,
        }
    }
}
