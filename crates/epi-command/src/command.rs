//! Command parsing and dispatch.

use std::str::FromStr;

use epi_core::{Day, Disease, GroupId};
use epi_sim::{DiseaseCounts, Simulation};

use crate::{CommandError, CommandResult};

// ── Command ───────────────────────────────────────────────────────────────────

/// One parsed command line.
///
/// Diseases are referenced by name here and resolved against the simulation
/// roster at apply time.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `add <n> <group>`
    Add { count: usize, group: GroupId },
    /// `disease <name> <t> <E> <I> <r>`
    Disease {
        name: String,
        transmissibility: f64,
        exposed_days: u32,
        infectious_days: u32,
        immunity_prob: f64,
    },
    /// `seed <day> <name> <k>`
    Seed { day: Day, disease: String, count: usize },
    /// `quarantine <day> <name> <Q>`
    Quarantine { day: Day, disease: String, days: u32 },
    /// `campaign <day> <name> <coverage> <effectiveness>`
    Campaign {
        day: Day,
        disease: String,
        coverage: f64,
        effectiveness: f64,
    },
    /// `plot <name>`
    Plot { disease: String },
    /// `run`
    Run,
}

/// What applying a command produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Construction or scheduling side effect only.
    Done,
    /// `run` finished after this many days.
    Ran { days: u64 },
    /// The epidemic curve requested by `plot`.
    Series {
        disease: String,
        series: Vec<DiseaseCounts>,
    },
}

// ── Parsing ───────────────────────────────────────────────────────────────────

fn arg<T: FromStr>(
    command: &'static str,
    field: &'static str,
    value: &str,
) -> CommandResult<T> {
    value.parse().map_err(|_| CommandError::BadArgument {
        command,
        field,
        value: value.to_string(),
    })
}

fn expect_arity(command: &'static str, args: &[&str], expected: usize) -> CommandResult<()> {
    if args.len() != expected {
        return Err(CommandError::Arity {
            command,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

impl Command {
    /// Parse one whitespace-separated command line.
    pub fn parse(line: &str) -> CommandResult<Command> {
        let mut tokens = line.split_whitespace();
        let head = tokens.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = tokens.collect();

        match head {
            "add" => {
                expect_arity("add", &args, 2)?;
                Ok(Command::Add {
                    count: arg("add", "count", args[0])?,
                    group: GroupId(arg("add", "group", args[1])?),
                })
            }
            "disease" => {
                expect_arity("disease", &args, 5)?;
                Ok(Command::Disease {
                    name: args[0].to_string(),
                    transmissibility: arg("disease", "transmissibility", args[1])?,
                    exposed_days: arg("disease", "exposed days", args[2])?,
                    infectious_days: arg("disease", "infectious days", args[3])?,
                    immunity_prob: arg("disease", "immunity probability", args[4])?,
                })
            }
            "seed" => {
                expect_arity("seed", &args, 3)?;
                Ok(Command::Seed {
                    day: Day(arg("seed", "day", args[0])?),
                    disease: args[1].to_string(),
                    count: arg("seed", "count", args[2])?,
                })
            }
            "quarantine" => {
                expect_arity("quarantine", &args, 3)?;
                Ok(Command::Quarantine {
                    day: Day(arg("quarantine", "day", args[0])?),
                    disease: args[1].to_string(),
                    days: arg("quarantine", "days", args[2])?,
                })
            }
            "campaign" => {
                expect_arity("campaign", &args, 4)?;
                Ok(Command::Campaign {
                    day: Day(arg("campaign", "day", args[0])?),
                    disease: args[1].to_string(),
                    coverage: arg("campaign", "coverage", args[2])?,
                    effectiveness: arg("campaign", "effectiveness", args[3])?,
                })
            }
            "plot" => {
                expect_arity("plot", &args, 1)?;
                Ok(Command::Plot {
                    disease: args[0].to_string(),
                })
            }
            "run" => {
                expect_arity("run", &args, 0)?;
                Ok(Command::Run)
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Apply one parsed command to the simulation.
pub fn apply(sim: &mut Simulation, command: &Command) -> CommandResult<Outcome> {
    match command {
        Command::Add { count, group } => {
            sim.populate(*count, *group)?;
            Ok(Outcome::Done)
        }
        Command::Disease {
            name,
            transmissibility,
            exposed_days,
            infectious_days,
            immunity_prob,
        } => {
            let disease = Disease::new(
                name.clone(),
                *transmissibility,
                *exposed_days,
                *infectious_days,
                *immunity_prob,
            )?;
            sim.introduce(disease)?;
            Ok(Outcome::Done)
        }
        Command::Seed { day, disease, count } => {
            let id = sim.disease_id(disease)?;
            sim.seed(*day, id, *count)?;
            Ok(Outcome::Done)
        }
        Command::Quarantine { day, disease, days } => {
            let id = sim.disease_id(disease)?;
            sim.order_quarantine(*day, id, *days)?;
            Ok(Outcome::Done)
        }
        Command::Campaign {
            day,
            disease,
            coverage,
            effectiveness,
        } => {
            let id = sim.disease_id(disease)?;
            sim.campaign(*day, id, *coverage, *effectiveness)?;
            Ok(Outcome::Done)
        }
        Command::Plot { disease } => {
            let id = sim.disease_id(disease)?;
            Ok(Outcome::Series {
                disease: disease.clone(),
                series: sim.history_for(id)?,
            })
        }
        Command::Run => {
            let days = sim.run()?;
            Ok(Outcome::Ran { days })
        }
    }
}
