//! outbreak — demonstration scenarios for the epi-rs simulator.
//!
//! Runs the classic 1000-agent influenza outbreak with and without a
//! quarantine order, plus a 3-group run with two co-circulating diseases,
//! and writes one epidemic-curve CSV per scenario into `./output`.
//!
//! Set `RUST_LOG=info` to watch event application and termination.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use epi_command::run_script;
use epi_core::{ContactMatrix, Day, Disease, DiseaseId, GroupId, SimConfig};
use epi_output::CurveWriter;
use epi_sim::{DiseaseCounts, Simulation};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const MAX_DAYS: u64 = 500;
const MIXING: f64 = 0.001;
const OUTPUT_DIR: &str = "output";

// ── Scenario scripts ──────────────────────────────────────────────────────────

const NO_QUARANTINE: &str = "\
# 1000-agent influenza outbreak, 3 index cases, no intervention
add 1000 0
disease influenza 0.95 2 7 0.9
seed 0 influenza 3
run
";

const WITH_QUARANTINE: &str = "\
# same outbreak with a 7-day quarantine ordered at day 0
add 1000 0
disease influenza 0.95 2 7 0.9
seed 0 influenza 3
quarantine 0 influenza 7
run
";

// ── Helpers ───────────────────────────────────────────────────────────────────

fn summarize(label: &str, series: &[DiseaseCounts]) {
    let peak = series.iter().map(|c| c.infectious).max().unwrap_or(0);
    let peak_day = series
        .iter()
        .position(|c| c.infectious == peak)
        .unwrap_or(0);
    let last = series.last().copied().unwrap_or_default();
    println!(
        "{label}: {} days, peak infectious {peak} on day {peak_day}, \
         terminal susceptible {}",
        series.len(),
        last.susceptible
    );
}

fn write_curves(sim: &Simulation, path: &Path) -> Result<()> {
    let mut writer = CurveWriter::create(path)?;
    writer.write_simulation(sim)?;
    writer.finish()?;
    Ok(())
}

fn scripted_scenario(label: &str, script: &str, out: &Path) -> Result<()> {
    let config = SimConfig { max_days: MAX_DAYS, mixing: MIXING, seed: SEED };
    let mut sim = Simulation::new(config, ContactMatrix::single_group())?;
    run_script(&mut sim, Cursor::new(script))?;
    summarize(label, &sim.history_for(DiseaseId(0))?);
    write_curves(&sim, out)?;
    Ok(())
}

/// Three groups with weaker cross-group contact, influenza and mumps
/// circulating together.
fn multi_group_scenario(out: &Path) -> Result<()> {
    let matrix = ContactMatrix::new(vec![
        vec![1.0, 0.5, 0.5],
        vec![0.5, 1.0, 0.5],
        vec![0.5, 0.5, 1.0],
    ])?;
    let config = SimConfig { max_days: MAX_DAYS, mixing: MIXING, seed: SEED };
    let mut sim = Simulation::new(config, matrix)?;
    sim.populate(100, GroupId(0))?;
    sim.populate(50, GroupId(1))?;
    sim.populate(200, GroupId(2))?;

    let influenza = sim.introduce(Disease::new("influenza", 0.95, 2, 7, 0.0)?)?;
    let mumps = sim.introduce(Disease::new("mumps", 0.99, 17, 10, 0.99)?)?;

    sim.seed(Day(0), influenza, 3)?;
    sim.seed(Day(100), mumps, 10)?;
    sim.order_quarantine(Day(118), mumps, 10)?;

    sim.run()?;
    summarize("multi-group influenza", &sim.history_for(influenza)?);
    summarize("multi-group mumps", &sim.history_for(mumps)?);
    write_curves(&sim, out)?;
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(dir)?;

    scripted_scenario(
        "no quarantine",
        NO_QUARANTINE,
        &dir.join("no_quarantine.csv"),
    )?;
    scripted_scenario(
        "quarantine Q=7",
        WITH_QUARANTINE,
        &dir.join("quarantine.csv"),
    )?;
    multi_group_scenario(&dir.join("multi_group.csv"))?;

    println!("curves written to {}/", dir.display());
    Ok(())
}
