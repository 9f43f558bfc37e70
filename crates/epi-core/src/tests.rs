//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, DiseaseId, GroupId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(DiseaseId(100) > DiseaseId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(DiseaseId::INVALID.0, u16::MAX);
        assert_eq!(GroupId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(GroupId(7).to_string(), "GroupId(7)");
    }
}

#[cfg(test)]
mod day {
    use crate::Day;

    #[test]
    fn arithmetic() {
        let d = Day(10);
        assert_eq!(d + 5, Day(15));
        assert_eq!(d.offset(3), Day(13));
        assert_eq!(Day(15) - Day(10), 5u64);
        assert_eq!(Day(15).since(Day(10)), 5u64);
    }

    #[test]
    fn display() {
        assert_eq!(Day(3).to_string(), "day 3");
    }
}

#[cfg(test)]
mod disease {
    use crate::Disease;

    fn influenza() -> Disease {
        Disease::new("influenza", 0.95, 2, 7, 0.9).unwrap()
    }

    #[test]
    fn valid_construction() {
        let d = influenza();
        assert_eq!(d.exposed_days, 2);
        assert_eq!(d.infectious_days, 7);
        assert_eq!(d.quarantine_days, 0);
    }

    #[test]
    fn onset_counter_spans_full_course() {
        // E + I + 1: one extra day for the update-then-check ordering.
        assert_eq!(influenza().onset_counter(), 10);
    }

    #[test]
    fn transmissibility_out_of_range_rejected() {
        assert!(Disease::new("x", 1.5, 2, 7, 0.5).is_err());
        assert!(Disease::new("x", -0.1, 2, 7, 0.5).is_err());
    }

    #[test]
    fn immunity_out_of_range_rejected() {
        assert!(Disease::new("x", 0.5, 2, 7, 1.01).is_err());
    }

    #[test]
    fn zero_infectious_days_rejected() {
        assert!(Disease::new("x", 0.5, 2, 0, 0.5).is_err());
    }

    #[test]
    fn zero_exposure_allowed() {
        assert!(Disease::new("x", 0.5, 0, 1, 0.5).is_ok());
    }

    #[test]
    fn quarantine_clamps_to_infectious_period() {
        let mut d = influenza();
        d.set_quarantine(3);
        assert_eq!(d.quarantine_days, 3);
        d.set_quarantine(10);
        assert_eq!(d.quarantine_days, 7); // clamped to I
    }
}

#[cfg(test)]
mod config {
    use crate::{ContactMatrix, GroupId, SimConfig};

    #[test]
    fn config_validates_mixing() {
        let ok = SimConfig { max_days: 500, mixing: 0.001, seed: 42 };
        assert!(ok.validate().is_ok());
        let bad = SimConfig { max_days: 500, mixing: 1.5, seed: 42 };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn single_group_matrix() {
        let m = ContactMatrix::single_group();
        assert_eq!(m.groups(), 1);
        assert_eq!(m.row(GroupId(0)).unwrap(), &[1.0]);
    }

    #[test]
    fn ragged_matrix_rejected() {
        assert!(ContactMatrix::new(vec![vec![1.0, 0.5], vec![0.5]]).is_err());
    }

    #[test]
    fn out_of_range_entry_rejected() {
        assert!(ContactMatrix::new(vec![vec![1.2]]).is_err());
    }

    #[test]
    fn missing_group_is_config_error() {
        let m = ContactMatrix::single_group();
        assert!(m.row(GroupId(1)).is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::EpiRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = EpiRng::new(7);
        let mut b = EpiRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.chance(0.5), b.chance(0.5));
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = EpiRng::new(1);
        for _ in 0..20 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
        }
    }

    #[test]
    fn chance_clamps_out_of_range() {
        let mut rng = EpiRng::new(1);
        assert!(rng.chance(2.0));
        assert!(!rng.chance(-1.0));
    }

    #[test]
    fn sample_without_replacement() {
        let mut rng = EpiRng::new(3);
        let mut picks = rng.sample_indices(10, 4);
        picks.sort_unstable();
        picks.dedup();
        assert_eq!(picks.len(), 4);
        assert!(picks.iter().all(|&i| i < 10));
    }

    #[test]
    fn sample_all() {
        let mut rng = EpiRng::new(3);
        let mut picks = rng.sample_indices(5, 5);
        picks.sort_unstable();
        assert_eq!(picks, vec![0, 1, 2, 3, 4]);
    }
}
