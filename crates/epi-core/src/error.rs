//! Simulator error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `EpiError` via `From` impls, or keep them separate and wrap `EpiError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpiError {
    /// Invalid parameter at construction time: out-of-range probability,
    /// zero infectious period, ragged contact matrix, unknown group, …
    #[error("configuration error: {0}")]
    Config(String),

    /// A scheduling or query operation named a disease that was never
    /// registered with the simulation.
    #[error("unknown disease: {0:?}")]
    UnknownDisease(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;
