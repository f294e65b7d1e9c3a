//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g`,
//! - fixed step size and total simulated duration

use crate::error::SimError;

/// Newtonian gravitational constant in m^3 kg^-1 s^-2.
pub const G: f64 = 6.67430e-11;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub time_step: f64, // seconds per step
    pub duration: f64, // seconds to simulate
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: G,
            time_step: 0.01,
            duration: 5.0,
        }
    }
}

impl Parameters {
    /// Number of integration steps, `round(duration / time_step)`.
    /// Rounding keeps 5 / 0.01 at exactly 500.
    pub fn total_steps(&self) -> usize {
        (self.duration / self.time_step).round() as usize
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !self.g.is_finite() || self.g < 0.0 {
            return Err(SimError::InvalidParameter { name: "G", value: self.g });
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "time_step",
                value: self.time_step,
            });
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "duration",
                value: self.duration,
            });
        }
        // The step count must fit `total_steps`' usize without saturating
        let steps = (self.duration / self.time_step).round();
        if !steps.is_finite() || steps >= usize::MAX as f64 {
            return Err(SimError::InvalidParameter {
                name: "total_steps",
                value: steps,
            });
        }
        Ok(())
    }
}
