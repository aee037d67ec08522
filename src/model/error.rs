use thiserror::Error;

use super::body::BodyID;

/// Everything that can go wrong while setting up a simulation. Once a
/// simulation is running, nothing is fallible.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("body mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("body radius must be non-negative and finite, got {0}")]
    InvalidRadius(f64),
    #[error("anchor {0:?} is not in the system")]
    UnknownAnchor(BodyID),
    #[error("system is at capacity ({0} bodies)")]
    SystemFull(usize),
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
