//! The observable 5-way classification of an agent with respect to a disease.

/// Post-update classification of one agent for one disease.
///
/// Produced by [`Agent::classify`](crate::Agent::classify); drives both the
/// daily aggregate counts and transmission eligibility.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Never infected, or reverted after a recovery draw failed.
    Susceptible,
    /// Incubating: infected, pre-symptomatic, and already able to transmit.
    Exposed,
    /// Symptomatic and circulating.
    Infectious,
    /// Symptomatic but isolating — for this disease or any other the agent
    /// tracks.  Not a transmission source.
    Quarantined,
    /// Recovered with lifelong immunity.
    Recovered,
}

impl Status {
    /// `true` while the disease is still running its course in this agent —
    /// the condition that keeps the simulation from terminating early.
    #[inline]
    pub fn is_contagion(self) -> bool {
        matches!(self, Status::Exposed | Status::Infectious | Status::Quarantined)
    }

    /// `true` if the agent can act as an infection source this day.
    /// Quarantined agents cannot, exposed agents can.
    #[inline]
    pub fn is_source(self) -> bool {
        matches!(self, Status::Exposed | Status::Infectious)
    }

    /// `true` if the agent is a candidate infection target.
    #[inline]
    pub fn is_susceptible(self) -> bool {
        self == Status::Susceptible
    }
}
