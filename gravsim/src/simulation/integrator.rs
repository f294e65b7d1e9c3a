//! Fixed-step explicit Euler integrators for the N-body system
//!
//! Two sequencings of the same per-body update are provided:
//! - `euler_step_simultaneous`: every net force of the step is taken from one
//!   frozen snapshot of positions, then all bodies are updated
//! - `euler_step_interleaved`: force then update for body i before body i+1,
//!   so later bodies see earlier bodies' new positions
//!
//! In both, body i is updated as
//!   a_i = F_i / m_i
//!   x_i += v_i * dt        (velocity from the end of the previous step)
//!   v_i += a_i * dt
//! and reported right after its update.

use std::time::{Duration, Instant};

use log::{debug, info, trace};

use crate::configuration::config::UpdateScheme;
use crate::error::SimError;
use crate::simulation::forces::ForceModel;
use crate::simulation::observer::Observer;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Apply one Euler update to a single body given its net force.
fn apply_euler(b: &mut Body, force: NVec2, dt: f64) {
    b.a = force / b.mass();
    b.x += b.v * dt;
    b.v += b.a * dt;
}

/// Advance `sys` by one step computing body i's force after bodies 0..i
/// have already moved this step.
pub fn euler_step_interleaved<F, O>(
    sys: &mut System,
    forces: &F,
    params: &Parameters,
    observer: &mut O,
) -> Result<(), SimError>
where
    F: ForceModel + ?Sized,
    O: Observer + ?Sized,
{
    let dt = params.time_step;
    let step = sys.step + 1;
    let t = step as f64 * dt;

    for i in 0..sys.bodies.len() {
        let force = forces
            .net_force(i, &sys.bodies)
            .map_err(|e| e.at_step(step))?;

        let b = &mut sys.bodies[i];
        apply_euler(b, force, dt);
        trace!("step {} body {}: x = {:?}, v = {:?}", step, i + 1, b.x, b.v);
        observer.observe(step, t, i, b)?;
    }

    sys.step = step;
    observer.end_step(step, t)
}

/// Advance `sys` by one step with all forces taken from the positions at the
/// start of the step.
pub fn euler_step_simultaneous<F, O>(
    sys: &mut System,
    forces: &F,
    params: &Parameters,
    observer: &mut O,
) -> Result<(), SimError>
where
    F: ForceModel + ?Sized,
    O: Observer + ?Sized,
{
    let dt = params.time_step;
    let step = sys.step + 1;
    let t = step as f64 * dt;

    // Snapshot pass: nothing moves until every force is known
    let net = (0..sys.bodies.len())
        .map(|i| forces.net_force(i, &sys.bodies))
        .collect::<Result<Vec<NVec2>, SimError>>()
        .map_err(|e| e.at_step(step))?;

    for (i, (b, force)) in sys.bodies.iter_mut().zip(net).enumerate() {
        apply_euler(b, force, dt);
        trace!("step {} body {}: x = {:?}, v = {:?}", step, i + 1, b.x, b.v);
        observer.observe(step, t, i, b)?;
    }

    sys.step = step;
    observer.end_step(step, t)
}

/// What a completed run reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps: usize, // integration steps executed
    pub bodies: usize,
    pub simulated_time: f64, // seconds of simulated time covered
    pub elapsed: Duration, // wall-clock time of the run
}

/// Drives a `System` through `Parameters::total_steps` Euler steps.
#[derive(Debug, Clone)]
pub struct Integrator<F> {
    params: Parameters,
    scheme: UpdateScheme,
    forces: F,
}

impl<F: ForceModel> Integrator<F> {
    pub fn new(params: Parameters, scheme: UpdateScheme, forces: F) -> Result<Self, SimError> {
        params.validate()?;
        Ok(Self {
            params,
            scheme,
            forces,
        })
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn scheme(&self) -> UpdateScheme {
        self.scheme
    }

    /// Advance by exactly one step using the configured scheme.
    pub fn step<O: Observer + ?Sized>(&self, sys: &mut System, observer: &mut O) -> Result<(), SimError> {
        match self.scheme {
            UpdateScheme::Simultaneous => euler_step_simultaneous(sys, &self.forces, &self.params, observer),
            UpdateScheme::Interleaved => euler_step_interleaved(sys, &self.forces, &self.params, observer),
        }
    }

    /// Report the current state as step 0, then run all steps.
    ///
    /// There is no early exit: either every step runs or the first error is
    /// returned. An empty system is a no-op run of zero steps.
    pub fn run<O: Observer + ?Sized>(&self, sys: &mut System, observer: &mut O) -> Result<RunSummary, SimError> {
        let start = Instant::now();
        let dt = self.params.time_step;

        if sys.is_empty() {
            info!("empty body set, nothing to integrate");
            return Ok(RunSummary {
                steps: 0,
                bodies: 0,
                simulated_time: 0.0,
                elapsed: start.elapsed(),
            });
        }

        let total_steps = self.params.total_steps();
        info!(
            "integrating {} bodies for {} steps of {} s ({:?})",
            sys.len(),
            total_steps,
            dt,
            self.scheme
        );

        let t0 = sys.time(dt);
        for (i, b) in sys.bodies.iter().enumerate() {
            observer.observe(sys.step, t0, i, b)?;
        }
        observer.end_step(sys.step, t0)?;

        for _ in 0..total_steps {
            self.step(sys, observer)?;
            debug!("completed step {} (t = {:.3} s)", sys.step, sys.time(dt));
        }

        let summary = RunSummary {
            steps: total_steps,
            bodies: sys.len(),
            simulated_time: total_steps as f64 * dt,
            elapsed: start.elapsed(),
        };
        info!("run finished in {:?}", summary.elapsed);
        Ok(summary)
    }
}
