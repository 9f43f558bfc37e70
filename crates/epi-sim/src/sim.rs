//! The `Simulation` struct and its daily loop.

use log::{debug, info};
use rustc_hash::FxHashMap;

use epi_agent::{AgentTraits, Population, Status};
use epi_core::{
    AgentId, ContactMatrix, Day, Disease, DiseaseId, EpiError, EpiResult, EpiRng, GroupId,
    SimConfig,
};

use crate::{DiseaseCounts, Event, History, NoopObserver, SimObserver};

/// The simulation engine.
///
/// Owns the population arena, the disease roster, the event schedule, and
/// the history log, and drives the daily loop from [`run`](Self::run).
/// Construction and scheduling may be freely interleaved before the run;
/// agent state is never handed out to collaborators — they read the
/// [`History`] and the aggregate queries instead.
pub struct Simulation {
    config: SimConfig,
    matrix: ContactMatrix,
    population: Population,
    diseases: Vec<Disease>,
    /// Name → registration ID, for the command vocabulary.
    names: FxHashMap<String, DiseaseId>,
    events: Vec<Event>,
    history: History,
    rng: EpiRng,
}

impl Simulation {
    /// Create an empty simulation.  Fails on out-of-range config parameters.
    pub fn new(config: SimConfig, matrix: ContactMatrix) -> EpiResult<Self> {
        config.validate()?;
        let rng = EpiRng::new(config.seed);
        Ok(Self {
            config,
            matrix,
            population: Population::new(),
            diseases: Vec::new(),
            names: FxHashMap::default(),
            events: Vec::new(),
            history: History::new(),
            rng,
        })
    }

    // ── Construction interface ────────────────────────────────────────────

    /// Add `n` agents of `group` with the default behavioral traits.
    pub fn populate(&mut self, n: usize, group: GroupId) -> EpiResult<()> {
        self.populate_with(n, group, AgentTraits::default())
    }

    /// Add `n` agents of `group` with explicit traits.
    pub fn populate_with(
        &mut self,
        n: usize,
        group: GroupId,
        traits: AgentTraits,
    ) -> EpiResult<()> {
        self.population.spawn(n, group, &self.matrix, traits)
    }

    /// Register a disease.  The returned ID is its stable registration-order
    /// index; names must be unique.
    pub fn introduce(&mut self, disease: Disease) -> EpiResult<DiseaseId> {
        if self.names.contains_key(&disease.name) {
            return Err(EpiError::Config(format!(
                "disease {:?} is already registered",
                disease.name
            )));
        }
        let id = DiseaseId(self.diseases.len() as u16);
        self.names.insert(disease.name.clone(), id);
        self.diseases.push(disease);
        Ok(id)
    }

    /// Look up a registered disease by name.
    pub fn disease_id(&self, name: &str) -> EpiResult<DiseaseId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| EpiError::UnknownDisease(name.to_string()))
    }

    /// The parameter record for a registered disease.
    pub fn disease(&self, id: DiseaseId) -> EpiResult<&Disease> {
        self.diseases
            .get(id.index())
            .ok_or_else(|| EpiError::Config(format!("{id} is not a registered disease")))
    }

    /// Number of agents in the population.
    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    /// Number of registered diseases.
    pub fn disease_count(&self) -> usize {
        self.diseases.len()
    }

    /// All registered diseases with their IDs, in registration order.
    pub fn diseases(&self) -> impl Iterator<Item = (DiseaseId, &Disease)> {
        self.diseases
            .iter()
            .enumerate()
            .map(|(i, d)| (DiseaseId(i as u16), d))
    }

    // ── Scheduling interface ──────────────────────────────────────────────

    /// Schedule a quarantine order: on `day`, set the disease's quarantine
    /// length to `days` (raw, unclamped — see [`Event::Quarantine`]).
    pub fn order_quarantine(&mut self, day: Day, disease: DiseaseId, days: u32) -> EpiResult<()> {
        self.disease(disease)?;
        self.events.push(Event::Quarantine { day, disease, days });
        Ok(())
    }

    /// Schedule a vaccination campaign with the given coverage and
    /// effectiveness, both in [0, 1].
    pub fn campaign(
        &mut self,
        day: Day,
        disease: DiseaseId,
        coverage: f64,
        effectiveness: f64,
    ) -> EpiResult<()> {
        self.disease(disease)?;
        if !(0.0..=1.0).contains(&coverage) {
            return Err(EpiError::Config(format!("coverage {coverage} outside [0, 1]")));
        }
        if !(0.0..=1.0).contains(&effectiveness) {
            return Err(EpiError::Config(format!(
                "effectiveness {effectiveness} outside [0, 1]"
            )));
        }
        self.events.push(Event::Vaccinate { day, disease, coverage, effectiveness });
        Ok(())
    }

    /// Schedule `count` agents to be force-infected on `day`.
    pub fn seed(&mut self, day: Day, disease: DiseaseId, count: usize) -> EpiResult<()> {
        self.disease(disease)?;
        self.events.push(Event::Seed { day, disease, count });
        Ok(())
    }

    // ── Query interface ───────────────────────────────────────────────────

    /// The full recorded history: one entry per day, one count record per
    /// disease in registration order.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The per-day series for one disease — the plotting channel.
    pub fn history_for(&self, disease: DiseaseId) -> EpiResult<Vec<DiseaseCounts>> {
        self.disease(disease)?;
        Ok(self.history.series(disease))
    }

    /// Current per-group classification counts for one disease, indexed by
    /// group.  Reads live agent state, not history.
    pub fn counts_by_group(&mut self, disease: DiseaseId) -> EpiResult<Vec<DiseaseCounts>> {
        self.disease(disease)?;
        let d = &self.diseases[disease.index()];
        let mut out = vec![DiseaseCounts::default(); self.matrix.groups()];
        for agent in self.population.iter_mut() {
            let status = agent.classify(disease, d);
            out[agent.group.index()].record(status);
        }
        Ok(out)
    }

    // ── Execution ─────────────────────────────────────────────────────────

    /// Run to completion.  Returns the number of days simulated.
    pub fn run(&mut self) -> EpiResult<u64> {
        self.run_with(&mut NoopObserver)
    }

    /// Run to completion with observer callbacks at day boundaries.
    ///
    /// The loop advances at most `config.max_days` days and stops early as
    /// soon as no disease shows contagion *and* no future events remain
    /// scheduled.
    pub fn run_with<O: SimObserver>(&mut self, observer: &mut O) -> EpiResult<u64> {
        info!(
            "run: {} agents, {} diseases, {} events, {} day cap",
            self.population.len(),
            self.diseases.len(),
            self.events.len(),
            self.config.max_days
        );

        let mut days_run = 0;
        for day_index in 0..self.config.max_days {
            let today = Day(day_index);
            observer.on_day_start(today);

            self.apply_events(today)?;

            let mut contagion = false;
            let mut entry = Vec::with_capacity(self.diseases.len());
            for d in 0..self.diseases.len() {
                let counts = self.step_disease(DiseaseId(d as u16));
                contagion |= counts.has_contagion();
                entry.push(counts);
            }
            self.history.push_day(entry);
            days_run = day_index + 1;

            // `last()` is always Some here — we just pushed.
            if let Some(counts) = self.history.last() {
                observer.on_day_end(today, counts);
            }

            let pending = self.events.iter().any(|e| e.day() > today);
            if !contagion && !pending {
                info!("{today}: contagion exhausted, no events pending — stopping");
                break;
            }
        }

        observer.on_sim_end(days_run);
        Ok(days_run)
    }

    /// One disease's share of the day: update every agent, classify everyone
    /// into a fresh status vector, then run the transmission round off that
    /// snapshot.
    ///
    /// Classifying *before* transmitting means an infection cannot hop two
    /// agents in one day; each disease re-derives its own contact pattern.
    fn step_disease(&mut self, id: DiseaseId) -> DiseaseCounts {
        let disease = &self.diseases[id.index()];

        // ── a. Daily state-machine update ─────────────────────────────────
        for agent in self.population.iter_mut() {
            agent.update(id, disease, &mut self.rng);
        }

        // ── b. Post-update classification snapshot ────────────────────────
        let statuses: Vec<Status> = self
            .population
            .iter_mut()
            .map(|agent| agent.classify(id, disease))
            .collect();
        let counts = DiseaseCounts::tally(statuses.iter().copied());

        // ── c/d. Transmission round ───────────────────────────────────────
        //
        // Restricting the pair loop to the source and target index subsets
        // leaves the draw sequence unchanged: pairs outside them never
        // interact.  This is the O(agents²) hot path.
        let sources: Vec<u32> = statuses
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_source())
            .map(|(i, _)| i as u32)
            .collect();
        let targets: Vec<u32> = statuses
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_susceptible())
            .map(|(i, _)| i as u32)
            .collect();

        for &j in &sources {
            for &k in &targets {
                if self.rng.chance(self.config.mixing) {
                    let target_group = self.population.agent(AgentId(k)).group;
                    let contact = self.population.agent(AgentId(j)).contact_to(target_group);
                    self.population.agent_mut(AgentId(k)).try_infect(
                        contact,
                        id,
                        disease,
                        &mut self.rng,
                    );
                }
            }
        }

        debug!(
            "{}: E={} I|Q={} Q={} S={} R={}",
            self.diseases[id.index()].name,
            counts.exposed,
            counts.infectious,
            counts.quarantined,
            counts.susceptible,
            counts.recovered
        );
        counts
    }

    /// Apply every event whose trigger day is `today`, in insertion order.
    fn apply_events(&mut self, today: Day) -> EpiResult<()> {
        for index in 0..self.events.len() {
            if self.events[index].day() != today {
                continue;
            }
            match self.events[index].clone() {
                Event::Quarantine { disease, days, .. } => {
                    // Direct field write: the event path skips the setter's
                    // clamp to the infectious period.
                    self.diseases[disease.index()].quarantine_days = days;
                    info!(
                        "{today}: establishing {} quarantine ({days} days)",
                        self.diseases[disease.index()].name
                    );
                }
                Event::Vaccinate { disease, coverage, effectiveness, .. } => {
                    let factor = 1.0 - effectiveness;
                    for agent in self.population.iter_mut() {
                        if self.rng.chance(coverage) {
                            agent.vaccinate(disease, factor);
                        }
                    }
                    info!(
                        "{today}: vaccinating for {} (coverage {coverage}, effectiveness {effectiveness})",
                        self.diseases[disease.index()].name
                    );
                }
                Event::Seed { disease, count, .. } => {
                    if count > self.population.len() {
                        return Err(EpiError::Config(format!(
                            "cannot seed {count} agents into a population of {}",
                            self.population.len()
                        )));
                    }
                    let picked = self.rng.sample_indices(self.population.len(), count);
                    let d = &self.diseases[disease.index()];
                    for i in picked {
                        self.population.agent_mut(AgentId(i as u32)).force_infect(disease, d);
                    }
                    info!("{today}: seeding {count} agents with {}", d.name);
                }
            }
        }
        Ok(())
    }
}
