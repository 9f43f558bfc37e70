//! `epi-output` — epidemic-curve export for the epi-rs simulator.
//!
//! The engine's [`History`](epi_sim::History) is the sole channel plotting
//! tools consume; this crate flattens it into one long-format CSV file with
//! a row per (day, disease) pair, ready for any external plotting frontend.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::CurveWriter;
//!
//! let mut writer = CurveWriter::create(Path::new("curves.csv"))?;
//! writer.write_simulation(&sim)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;

#[cfg(test)]
mod tests;

pub use csv::CurveWriter;
pub use error::{OutputError, OutputResult};
