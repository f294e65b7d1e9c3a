//! Core state types for the N-body simulation.
//!
//! - `Body`   one point mass using `NVec2`
//! - `System` the fixed, ordered set of bodies plus the current step
//!
//! Elapsed simulated time is never accumulated; it is always derived as
//! `step * time_step` so it cannot drift.

use nalgebra::Vector2;

use crate::error::SimError;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: Option<String>, // label used by reports
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub a: NVec2, // acceleration (m/s^2), scratch, overwritten every step
    m: f64, // mass (kg), validated once and never mutated
}

impl Body {
    /// Create a body at rest acceleration-wise.
    /// Rejects non-finite components and mass <= 0.
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Result<Self, SimError> {
        check_finite("mass", m)?;
        if m <= 0.0 {
            return Err(SimError::NonPositiveMass { mass: m });
        }
        check_finite("x", x.x)?;
        check_finite("y", x.y)?;
        check_finite("vx", v.x)?;
        check_finite("vy", v.y)?;

        Ok(Self {
            name: None,
            x,
            v,
            a: NVec2::zeros(),
            m,
        })
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }

    /// Name if one was given, otherwise the 1-based "Body N" label.
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Body {}", index + 1),
        }
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::NonFiniteState { field, value })
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // fixed for the whole run, index order is reporting order
    pub step: usize, // completed integration steps
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, step: 0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Simulated time after `self.step` steps of size `time_step`.
    pub fn time(&self, time_step: f64) -> f64 {
        self.step as f64 * time_step
    }

    /// Sum of m * v over all bodies.
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |p, b| p + b.v * b.m)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.m * b.v.norm_squared())
            .sum()
    }

    /// Pairwise gravitational potential energy, -G m_i m_j / r over i < j.
    /// Coincident pairs are left out.
    pub fn potential_energy(&self, g: f64) -> f64 {
        let n = self.bodies.len();
        let mut energy = 0.0;
        for i in 0..n {
            let bi = &self.bodies[i];
            for bj in &self.bodies[(i + 1)..n] {
                let r = (bj.x - bi.x).norm();
                if r > 0.0 {
                    energy -= g * bi.m * bj.m / r;
                }
            }
        }
        energy
    }

    pub fn total_energy(&self, g: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(g)
    }
}
