//! Unit tests for the agent state machine.

use epi_core::{Disease, DiseaseId, EpiRng, GroupId};

use crate::{Agent, AgentTraits, Status};

// ── Helpers ───────────────────────────────────────────────────────────────────

const FLU: DiseaseId = DiseaseId(0);
const MUMPS: DiseaseId = DiseaseId(1);

/// E=2, I=7, so the onset counter is 10.
fn influenza(immunity: f64) -> Disease {
    Disease::new("influenza", 0.95, 2, 7, immunity).unwrap()
}

fn fully_compliant_agent() -> Agent {
    Agent::new(
        GroupId(0),
        vec![1.0],
        AgentTraits::new(1.0, 1.0).unwrap(),
    )
}

#[cfg(test)]
mod traits {
    use crate::AgentTraits;

    #[test]
    fn defaults() {
        let t = AgentTraits::default();
        assert_eq!(t.susceptibility, 0.99);
        assert_eq!(t.compliance, 0.9);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(AgentTraits::new(1.5, 0.5).is_err());
        assert!(AgentTraits::new(0.5, -0.1).is_err());
    }
}

#[cfg(test)]
mod lazy_registration {
    use super::*;

    #[test]
    fn untouched_disease_has_no_cell() {
        let agent = fully_compliant_agent();
        assert!(agent.cell(FLU).is_none());
    }

    #[test]
    fn classify_materializes_a_susceptible_cell() {
        let mut agent = fully_compliant_agent();
        let flu = influenza(0.9);
        assert_eq!(agent.classify(FLU, &flu), Status::Susceptible);
        assert_eq!(agent.cell(FLU).unwrap().counter, -1);
    }

    #[test]
    fn cells_are_independent_per_disease() {
        let mut agent = fully_compliant_agent();
        let flu = influenza(0.9);
        agent.force_infect(MUMPS, &flu);
        agent.vaccinate(FLU, 0.5);
        assert_eq!(agent.cell(FLU).unwrap().vaccine_factor, 0.5);
        assert_eq!(agent.cell(FLU).unwrap().counter, -1);
        assert_eq!(agent.cell(MUMPS).unwrap().counter, 10);
    }
}

#[cfg(test)]
mod transitions {
    use super::*;

    #[test]
    fn full_course_to_lifelong_immunity() {
        let mut agent = fully_compliant_agent();
        let flu = influenza(1.0); // r = 1: recovery guaranteed
        let mut rng = EpiRng::new(1);

        agent.force_infect(FLU, &flu);
        assert_eq!(agent.cell(FLU).unwrap().counter, 10);

        // Counter decrements exactly one per day, no skips.
        for expected in (1..10).rev() {
            agent.update(FLU, &flu, &mut rng);
            assert_eq!(agent.cell(FLU).unwrap().counter, expected);
        }

        // Last infectious day: recovery draw succeeds.
        agent.update(FLU, &flu, &mut rng);
        assert_eq!(agent.cell(FLU).unwrap().counter, 0);
        assert_eq!(agent.classify(FLU, &flu), Status::Recovered);

        // Recovered is terminal: further updates are no-ops.
        agent.update(FLU, &flu, &mut rng);
        assert_eq!(agent.cell(FLU).unwrap().counter, 0);
    }

    #[test]
    fn reversion_to_susceptible() {
        let mut agent = fully_compliant_agent();
        let flu = influenza(0.0); // r = 0: reversion guaranteed
        let mut rng = EpiRng::new(1);

        agent.force_infect(FLU, &flu);
        for _ in 0..10 {
            agent.update(FLU, &flu, &mut rng);
        }
        assert_eq!(agent.cell(FLU).unwrap().counter, -1);
        assert_eq!(agent.classify(FLU, &flu), Status::Susceptible);
    }

    #[test]
    fn reinfection_resets_to_full_span() {
        let mut agent = fully_compliant_agent();
        let flu = influenza(0.0);
        let mut rng = EpiRng::new(1);

        agent.force_infect(FLU, &flu);
        for _ in 0..10 {
            agent.update(FLU, &flu, &mut rng);
        }
        assert!(agent.try_infect(1.0, FLU, &flu, &mut rng));
        assert_eq!(agent.cell(FLU).unwrap().counter, 10);
    }

    #[test]
    fn quarantine_elected_then_released() {
        let mut agent = fully_compliant_agent();
        let mut flu = influenza(1.0);
        flu.set_quarantine(3); // release point: counter == I - Q == 4
        let mut rng = EpiRng::new(1);

        agent.force_infect(FLU, &flu);
        // Exposed span: 10 → 9 → 8.
        agent.update(FLU, &flu, &mut rng);
        agent.update(FLU, &flu, &mut rng);
        assert_eq!(agent.classify(FLU, &flu), Status::Exposed);

        // counter == I + 1: compliance 1.0 elects quarantine.
        agent.update(FLU, &flu, &mut rng);
        assert_eq!(agent.cell(FLU).unwrap().counter, 7);
        assert!(agent.cell(FLU).unwrap().quarantined);
        assert_eq!(agent.classify(FLU, &flu), Status::Quarantined);

        // Isolating: 7 → 6 → 5 → 4, released at 4.
        agent.update(FLU, &flu, &mut rng);
        agent.update(FLU, &flu, &mut rng);
        assert_eq!(agent.classify(FLU, &flu), Status::Quarantined);
        agent.update(FLU, &flu, &mut rng);
        assert_eq!(agent.cell(FLU).unwrap().counter, 4);
        assert!(!agent.cell(FLU).unwrap().quarantined);
        assert_eq!(agent.classify(FLU, &flu), Status::Infectious);
    }

    #[test]
    fn noncompliant_agent_never_isolates() {
        let mut agent = Agent::new(
            GroupId(0),
            vec![1.0],
            AgentTraits::new(1.0, 0.0).unwrap(),
        );
        let mut flu = influenza(1.0);
        flu.set_quarantine(7);
        let mut rng = EpiRng::new(1);

        agent.force_infect(FLU, &flu);
        for _ in 0..10 {
            agent.update(FLU, &flu, &mut rng);
            assert!(!agent.cell(FLU).unwrap().quarantined);
        }
    }

    #[test]
    fn no_quarantine_configured_means_no_election() {
        let mut agent = fully_compliant_agent();
        let flu = influenza(1.0); // Q = 0
        let mut rng = EpiRng::new(1);

        agent.force_infect(FLU, &flu);
        for _ in 0..9 {
            agent.update(FLU, &flu, &mut rng);
            assert!(!agent.cell(FLU).unwrap().quarantined);
        }
    }
}

#[cfg(test)]
mod classification {
    use super::*;

    #[test]
    fn recovered_beats_stale_quarantine_flag() {
        // With Q == I the release point (counter == 0) is shadowed by the
        // recovery rule, so the flag stays set after recovery.  The agent
        // must still classify as Recovered for this disease.
        let mut agent = fully_compliant_agent();
        let mut flu = influenza(1.0);
        flu.set_quarantine(7);
        let mut rng = EpiRng::new(1);

        agent.force_infect(FLU, &flu);
        for _ in 0..10 {
            agent.update(FLU, &flu, &mut rng);
        }
        assert_eq!(agent.cell(FLU).unwrap().counter, 0);
        assert!(agent.cell(FLU).unwrap().quarantined);
        assert_eq!(agent.classify(FLU, &flu), Status::Recovered);
    }

    #[test]
    fn quarantine_couples_across_diseases() {
        let mut agent = fully_compliant_agent();
        let mut flu = influenza(1.0);
        flu.set_quarantine(3);
        let mumps = Disease::new("mumps", 0.99, 0, 10, 0.99).unwrap();
        let mut rng = EpiRng::new(1);

        // Isolate for influenza.
        agent.force_infect(FLU, &flu);
        for _ in 0..3 {
            agent.update(FLU, &flu, &mut rng);
        }
        assert!(agent.cell(FLU).unwrap().quarantined);

        // Infectious with mumps (counter in 1..=I), but reported quarantined
        // because of the influenza isolation.
        agent.force_infect(MUMPS, &mumps);
        for _ in 0..5 {
            agent.update(MUMPS, &mumps, &mut rng);
        }
        assert_eq!(agent.cell(MUMPS).unwrap().counter, 6);
        assert_eq!(agent.classify(MUMPS, &mumps), Status::Quarantined);
    }

    #[test]
    fn exposed_takes_priority_over_cross_quarantine() {
        let mut agent = fully_compliant_agent();
        let mut flu = influenza(1.0);
        flu.set_quarantine(3);
        let mumps = Disease::new("mumps", 0.99, 17, 10, 0.99).unwrap();
        let mut rng = EpiRng::new(1);

        agent.force_infect(FLU, &flu);
        for _ in 0..3 {
            agent.update(FLU, &flu, &mut rng);
        }
        agent.force_infect(MUMPS, &mumps);
        assert_eq!(agent.classify(MUMPS, &mumps), Status::Exposed);
    }
}

#[cfg(test)]
mod infection {
    use super::*;

    #[test]
    fn certain_infection_at_probability_one() {
        let mut agent = fully_compliant_agent();
        let flu = Disease::new("flu", 1.0, 2, 7, 0.0).unwrap();
        let mut rng = EpiRng::new(1);
        assert!(agent.try_infect(1.0, FLU, &flu, &mut rng));
        assert_eq!(agent.cell(FLU).unwrap().counter, 10);
    }

    #[test]
    fn non_susceptible_target_is_never_reinfected() {
        let mut agent = fully_compliant_agent();
        let flu = Disease::new("flu", 1.0, 2, 7, 0.0).unwrap();
        let mut rng = EpiRng::new(1);
        agent.force_infect(FLU, &flu);
        let before = agent.cell(FLU).unwrap().counter;
        assert!(!agent.try_infect(1.0, FLU, &flu, &mut rng));
        assert_eq!(agent.cell(FLU).unwrap().counter, before);
    }

    #[test]
    fn full_vaccine_protection_blocks_infection() {
        let mut agent = fully_compliant_agent();
        let flu = Disease::new("flu", 1.0, 2, 7, 0.0).unwrap();
        let mut rng = EpiRng::new(1);
        agent.vaccinate(FLU, 0.0);
        for _ in 0..50 {
            assert!(!agent.try_infect(1.0, FLU, &flu, &mut rng));
        }
    }

    #[test]
    fn zero_contact_blocks_infection() {
        let mut agent = fully_compliant_agent();
        let flu = Disease::new("flu", 1.0, 2, 7, 0.0).unwrap();
        let mut rng = EpiRng::new(1);
        for _ in 0..50 {
            assert!(!agent.try_infect(0.0, FLU, &flu, &mut rng));
        }
    }

    #[test]
    fn seeding_bypasses_the_susceptibility_gate() {
        let mut agent = Agent::new(
            GroupId(0),
            vec![1.0],
            AgentTraits::new(0.0, 1.0).unwrap(), // immune to ordinary transmission
        );
        let flu = Disease::new("flu", 1.0, 2, 7, 0.0).unwrap();
        agent.force_infect(FLU, &flu);
        assert_eq!(agent.cell(FLU).unwrap().counter, 10);
    }

    #[test]
    fn contact_lookup_uses_target_group() {
        let agent = Agent::new(GroupId(0), vec![1.0, 0.25], AgentTraits::default());
        assert_eq!(agent.contact_to(GroupId(1)), 0.25);
        // Unknown group: no contact at all.
        assert_eq!(agent.contact_to(GroupId(9)), 0.0);
    }
}

#[cfg(test)]
mod population {
    use epi_core::{AgentId, ContactMatrix};

    use super::*;
    use crate::Population;

    #[test]
    fn spawn_assigns_group_rows() {
        let matrix =
            ContactMatrix::new(vec![vec![1.0, 0.5], vec![0.25, 1.0]]).unwrap();
        let mut pop = Population::new();
        pop.spawn(2, GroupId(0), &matrix, AgentTraits::default()).unwrap();
        pop.spawn(1, GroupId(1), &matrix, AgentTraits::default()).unwrap();

        assert_eq!(pop.len(), 3);
        assert_eq!(pop.agent(AgentId(0)).contact, vec![1.0, 0.5]);
        assert_eq!(pop.agent(AgentId(2)).contact, vec![0.25, 1.0]);
        assert_eq!(pop.agent(AgentId(2)).group, GroupId(1));
    }

    #[test]
    fn unknown_group_is_rejected() {
        let matrix = ContactMatrix::single_group();
        let mut pop = Population::new();
        assert!(pop.spawn(5, GroupId(3), &matrix, AgentTraits::default()).is_err());
        assert!(pop.is_empty());
    }

    #[test]
    fn ids_are_stable_creation_order() {
        let matrix = ContactMatrix::single_group();
        let mut pop = Population::new();
        pop.spawn(3, GroupId(0), &matrix, AgentTraits::default()).unwrap();
        let ids: Vec<AgentId> = pop.ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }
}
