//! Tests for the CSV curve writer.

use std::fs;

use epi_core::{ContactMatrix, Day, Disease, GroupId, SimConfig};
use epi_sim::Simulation;

use crate::CurveWriter;

fn small_run() -> Simulation {
    let mut sim = Simulation::new(
        SimConfig { max_days: 50, mixing: 0.01, seed: 42 },
        ContactMatrix::single_group(),
    )
    .unwrap();
    sim.populate(20, GroupId(0)).unwrap();
    let flu = sim
        .introduce(Disease::new("influenza", 0.0, 2, 7, 1.0).unwrap())
        .unwrap();
    sim.seed(Day(0), flu, 2).unwrap();
    sim.run().unwrap();
    sim
}

#[test]
fn writes_header_and_one_row_per_day() {
    let sim = small_run();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curves.csv");

    let mut writer = CurveWriter::create(&path).unwrap();
    writer.write_simulation(&sim).unwrap();
    writer.finish().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "day,disease,susceptible,exposed,infectious,quarantined,recovered"
    );
    assert_eq!(lines.len(), 1 + sim.history().len());
    // Day 0: 2 seeds exposed, 18 susceptible.
    assert_eq!(lines[1], "0,influenza,18,2,0,0,0");
}

#[test]
fn two_diseases_interleave_as_separate_blocks() {
    let mut sim = Simulation::new(
        SimConfig { max_days: 30, mixing: 0.0, seed: 7 },
        ContactMatrix::single_group(),
    )
    .unwrap();
    sim.populate(10, GroupId(0)).unwrap();
    let a = sim
        .introduce(Disease::new("alpha", 0.0, 1, 1, 1.0).unwrap())
        .unwrap();
    sim.introduce(Disease::new("beta", 0.0, 1, 1, 1.0).unwrap())
        .unwrap();
    sim.seed(Day(0), a, 1).unwrap();
    sim.run().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curves.csv");
    let mut writer = CurveWriter::create(&path).unwrap();
    writer.write_simulation(&sim).unwrap();
    writer.finish().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let days = sim.history().len();
    let alpha_rows = contents.lines().filter(|l| l.contains(",alpha,")).count();
    let beta_rows = contents.lines().filter(|l| l.contains(",beta,")).count();
    assert_eq!(alpha_rows, days);
    assert_eq!(beta_rows, days);
}

#[test]
fn finish_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curves.csv");
    let mut writer = CurveWriter::create(&path).unwrap();
    writer.finish().unwrap();
    writer.finish().unwrap();
}
