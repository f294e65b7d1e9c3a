//! Force model for the n-body engine
//!
//! Direct pairwise Newtonian gravity. Self-exclusion is by index, never by
//! comparing body state, so two distinct bodies with identical fields are
//! both counted.

use log::warn;

use crate::configuration::config::DegeneratePolicy;
use crate::error::SimError;
use crate::simulation::params::G;
use crate::simulation::states::{Body, NVec2};

/// Net force on one body due to every other body of a set.
pub trait ForceModel {
    /// Sum of forces on `bodies[target]` from all `bodies[j]`, `j != target`,
    /// accumulated in ascending `j`. Must not mutate anything.
    fn net_force(&self, target: usize, bodies: &[Body]) -> Result<NVec2, SimError>;
}

/// Unsoftened Newtonian gravity, F = G m_t m_o / d^2
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub on_degenerate: DegeneratePolicy, // behaviour when a pair has no finite force
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self {
            g: G,
            on_degenerate: DegeneratePolicy::default(),
        }
    }
}

impl NewtonianGravity {
    pub fn new(g: f64, on_degenerate: DegeneratePolicy) -> Self {
        Self { g, on_degenerate }
    }

    /// Apply the degenerate-pair policy: `Ok` means drop the pair and go on.
    fn degenerate(&self, target: usize, other: usize) -> Result<(), SimError> {
        match self.on_degenerate {
            DegeneratePolicy::Fail => Err(SimError::DegenerateDistance {
                step: 0,
                target,
                other,
            }),
            DegeneratePolicy::Skip => {
                warn!(
                    "bodies {} and {} have no finite pairwise force, skipping it",
                    target + 1,
                    other + 1
                );
                Ok(())
            }
        }
    }
}

impl ForceModel for NewtonianGravity {
    fn net_force(&self, target: usize, bodies: &[Body]) -> Result<NVec2, SimError> {
        let t = bodies.get(target).ok_or(SimError::TargetOutOfRange {
            target,
            len: bodies.len(),
        })?;
        let mut fx = 0.0;
        let mut fy = 0.0;

        for (j, other) in bodies.iter().enumerate() {
            if j == target {
                continue;
            }

            // Displacement from target to other: attraction points along +(dx, dy)
            let dx = other.x.x - t.x.x;
            let dy = other.x.y - t.x.y;
            let d = (dx * dx + dy * dy).sqrt(); // separation
            let d2 = d * d; // zero for coincident bodies and for d below ~1e-162

            if d2 == 0.0 {
                self.degenerate(target, j)?;
                continue;
            }

            // Evaluation order kept as (G m_t m_o) / d^2, then f * dx / d
            let f = self.g * t.mass() * other.mass() / d2; // magnitude, overflows for huge masses
            let cx = f * dx / d; // unit direction scaled by magnitude
            let cy = f * dy / d;

            if !cx.is_finite() || !cy.is_finite() {
                self.degenerate(target, j)?;
                continue;
            }

            // Accumulate in ascending j
            fx += cx;
            fy += cy;
        }

        if !fx.is_finite() || !fy.is_finite() {
            return Err(SimError::NonFiniteForce { step: 0, target });
        }
        Ok(NVec2::new(fx, fy))
    }
}
