//! Simulation time model.
//!
//! Time advances in whole simulated days.  The canonical unit is the
//! integer [`Day`] counter, so all schedule arithmetic is exact and
//! comparisons are O(1).  Nothing in the engine maps days to wall-clock
//! time; a day is just an iteration of the main loop.

use std::fmt;

/// An absolute simulated-day counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u64);

impl Day {
    pub const ZERO: Day = Day(0);

    /// Return the day `n` days after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Day {
        Day(self.0 + n)
    }

    /// Days elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Day) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u64) -> Day {
        Day(self.0 + rhs)
    }
}

impl std::ops::Sub for Day {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Day) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}
