//! CSV output backend.
//!
//! Produces one long-format file: a row per (day, disease) pair with the
//! five classification counts.  `infectious` includes quarantined agents,
//! mirroring the engine's history records.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use epi_sim::{DiseaseCounts, Simulation};

use crate::OutputResult;

/// Writes epidemic curves to a CSV file.
pub struct CurveWriter {
    writer: Writer<File>,
    finished: bool,
}

impl CurveWriter {
    /// Open (or create) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record([
            "day",
            "disease",
            "susceptible",
            "exposed",
            "infectious",
            "quarantined",
            "recovered",
        ])?;
        Ok(Self { writer, finished: false })
    }

    /// Write the full per-day series for one disease.
    pub fn write_series(&mut self, disease: &str, series: &[DiseaseCounts]) -> OutputResult<()> {
        for (day, counts) in series.iter().enumerate() {
            self.writer.write_record(&[
                day.to_string(),
                disease.to_string(),
                counts.susceptible.to_string(),
                counts.exposed.to_string(),
                counts.infectious.to_string(),
                counts.quarantined.to_string(),
                counts.recovered.to_string(),
            ])?;
        }
        Ok(())
    }

    /// Write the curves of every disease registered in `sim`.
    pub fn write_simulation(&mut self, sim: &Simulation) -> OutputResult<()> {
        let names: Vec<String> = sim.diseases().map(|(_, d)| d.name.clone()).collect();
        for (index, name) in names.iter().enumerate() {
            let series = sim.history_for(epi_core::DiseaseId(index as u16))?;
            self.write_series(name, &series)?;
        }
        Ok(())
    }

    /// Flush the underlying file handle.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
