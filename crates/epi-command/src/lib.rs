//! `epi-command` — the textual interface boundary of the epi-rs simulator.
//!
//! A REPL or a flat configuration file drives the engine through a small
//! line-oriented vocabulary, mapped 1:1 onto the construction, scheduling,
//! and execution interfaces of [`Simulation`](epi_sim::Simulation):
//!
//! | Line                                          | Effect                                |
//! |-----------------------------------------------|---------------------------------------|
//! | `add <n> <group>`                             | add `n` agents of `group`             |
//! | `disease <name> <t> <E> <I> <r>`              | register a disease                    |
//! | `seed <day> <name> <k>`                       | schedule a seeding event              |
//! | `quarantine <day> <name> <Q>`                 | schedule a quarantine order           |
//! | `campaign <day> <name> <coverage> <eff>`      | schedule a vaccination campaign       |
//! | `plot <name>`                                 | fetch a disease's epidemic curve      |
//! | `run`                                         | run the simulation to completion      |
//!
//! Disease names are resolved when the command is applied; an unregistered
//! name surfaces as an error rather than being swallowed.  Malformed lines
//! (wrong arity, unparseable numbers) are a parse-time concern — the script
//! reader logs and skips them, per the configuration-file policy.

pub mod command;
pub mod error;
pub mod script;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::{Command, Outcome, apply};
pub use error::{CommandError, CommandResult};
pub use script::run_script;
