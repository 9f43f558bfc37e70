//! Configuration-script execution.

use std::io::BufRead;

use log::warn;

use epi_sim::Simulation;

use crate::{Command, CommandResult, Outcome, apply};

/// Apply a command script line by line.
///
/// Blank lines and `#` comments are ignored.  Malformed lines (unknown
/// command, wrong arity, unparseable numbers) are logged and skipped —
/// the flat-file collaborator's documented policy.  Engine errors, such as
/// a reference to an unregistered disease, abort the script and surface to
/// the caller.
///
/// Returns the outcomes of the commands that produced one (`run`, `plot`),
/// in execution order.
pub fn run_script<R: BufRead>(sim: &mut Simulation, reader: R) -> CommandResult<Vec<Outcome>> {
    let mut outcomes = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(epi_core::EpiError::from)?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command = match Command::parse(trimmed) {
            Ok(command) => command,
            Err(error) => {
                warn!("script line {}: skipping {trimmed:?}: {error}", number + 1);
                continue;
            }
        };
        match apply(sim, &command)? {
            Outcome::Done => {}
            outcome => outcomes.push(outcome),
        }
    }
    Ok(outcomes)
}
