//! Error types for the simulation.
//!
//! Everything here is detected synchronously where it happens: bad inputs at
//! construction time, degenerate geometry inside the force sum, and failed
//! writes inside report sinks.

use std::fmt;

/// Errors that can occur while building or running a simulation.
#[derive(Debug)]
pub enum SimError {
    /// A body was given a mass that is zero or negative.
    NonPositiveMass { mass: f64 },
    /// A body was given a NaN or infinite component.
    NonFiniteState { field: &'static str, value: f64 },
    /// Two distinct bodies are so close (or so heavy) that their pairwise
    /// force is undefined or not representable.
    DegenerateDistance { step: usize, target: usize, other: usize },
    /// Finite pairwise forces summed past the range of f64.
    NonFiniteForce { step: usize, target: usize },
    /// A force was requested for a body index outside the set.
    TargetOutOfRange { target: usize, len: usize },
    /// A run parameter is outside its valid range.
    InvalidParameter { name: &'static str, value: f64 },
    /// A report sink failed to write.
    Io(std::io::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NonPositiveMass { mass } => {
                write!(f, "Body mass must be strictly positive, got {}", mass)
            }
            SimError::NonFiniteState { field, value } => {
                write!(f, "Body {} must be finite, got {}", field, value)
            }
            SimError::DegenerateDistance { step, target, other } => write!(
                f,
                "Degenerate configuration at step {}: bodies {} and {} are too close for a finite force",
                step,
                target + 1,
                other + 1
            ),
            SimError::NonFiniteForce { step, target } => write!(
                f,
                "Net force on body {} overflowed at step {}",
                target + 1,
                step
            ),
            SimError::TargetOutOfRange { target, len } => write!(
                f,
                "Body index {} is out of range for a set of {} bodies",
                target, len
            ),
            SimError::InvalidParameter { name, value } => {
                write!(f, "Invalid value for parameter `{}`: {}", name, value)
            }
            SimError::Io(e) => write!(f, "Failed to write simulation output: {}", e),
        }
    }
}

impl SimError {
    /// Stamp a force-evaluation error with the step it occurred in.
    pub fn at_step(self, step: usize) -> Self {
        match self {
            SimError::DegenerateDistance { target, other, .. } => {
                SimError::DegenerateDistance { step, target, other }
            }
            SimError::NonFiniteForce { target, .. } => SimError::NonFiniteForce { step, target },
            other => other,
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e)
    }
}
