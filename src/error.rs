//! # Error — Engine Error Classification
//!
//! Errors fall into two camps with very different consequences:
//!
//! - `KnownFactor` is a *verdict*, not a fault. When the Jacobi pipeline or
//!   the seed search stumbles on a divisor of N, the candidate is composite
//!   and the orchestrator converts the error into a `false` result.
//! - Everything else is fatal for the current call and propagates to the CLI
//!   shell, which reports it as the sole line of output.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied value violates a documented precondition.
    Precondition(String),
    /// A divisor of N surfaced before the Lucas iteration ever ran.
    KnownFactor(u64),
    /// The seed scan ran out of candidates without finding a valid V(1).
    SeedExhausted,
    /// The Rodseth scan reached 2^63 - 1 without a valid P.
    SeedOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Precondition(msg) => write!(f, "{msg}"),
            Error::KnownFactor(d) => {
                write!(f, "N is a multiple of {d}: no further testing needed")
            }
            Error::SeedExhausted => {
                write!(f, "it was not possible to find a valid V(1) for the given h and n")
            }
            Error::SeedOverflow => {
                write!(f, "no valid V(1) candidate below 2^63 - 1 for the given h and n")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
