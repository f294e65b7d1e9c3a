//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a validated runtime
//! bundle containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at step 0)
//! - the force model (`NewtonianGravity`)

use anyhow::{Context, Result};
use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::Engine;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::Integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: NewtonianGravity,
}

impl Scenario {
    /// Map and validate a `ScenarioConfig`. Fails on the first body with a
    /// non-positive mass or non-finite state, or on invalid parameters.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| {
                build_body(bc).with_context(|| format!("invalid initial state for body {}", i + 1))
            })
            .collect::<Result<Vec<Body>>>()?;

        let parameters = Parameters::from(cfg.parameters);
        parameters.validate().context("invalid simulation parameters")?;

        let engine = Engine::from(cfg.engine);
        let forces = NewtonianGravity::new(parameters.g, engine.on_degenerate);

        info!(
            "scenario: {} bodies, dt = {} s, duration = {} s, {:?}, degenerate = {:?}",
            bodies.len(),
            parameters.time_step,
            parameters.duration,
            engine.scheme,
            engine.on_degenerate
        );

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
            forces,
        })
    }

    /// The three-body setup of `scenarios/three_body.yaml`: a light body below and
    /// above a 1e12 kg central mass, each moving sideways.
    pub fn reference_three_body() -> Result<Self, SimError> {
        let bodies = vec![
            Body::new(NVec2::new(0.0, -5.0), NVec2::new(3.0, 0.0), 1000.0)?,
            Body::new(NVec2::new(0.0, 0.0), NVec2::new(0.0, 0.0), 1e12)?,
            Body::new(NVec2::new(0.0, 2.0), NVec2::new(-5.6, 0.0), 1000.0)?,
        ];
        let parameters = Parameters::default();
        let engine = Engine::default();

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
            forces: NewtonianGravity::new(parameters.g, engine.on_degenerate),
        })
    }

    pub fn integrator(&self) -> Result<Integrator<NewtonianGravity>, SimError> {
        Integrator::new(self.parameters, self.engine.scheme, self.forces)
    }
}

fn build_body(bc: &BodyConfig) -> Result<Body, SimError> {
    let body = Body::new(
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.m,
    )?;
    Ok(match &bc.name {
        Some(name) => body.named(name.clone()),
        None => body,
    })
}
