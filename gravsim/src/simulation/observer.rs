//! Observation stream emitted by the integrator.
//!
//! The integrator reports every body once at step 0 and once after each of
//! its updates, ordered by step and then by body index. Anything that wants
//! those rows (text output, CSV export, an in-memory recording) implements
//! [`Observer`].

use crate::error::SimError;
use crate::simulation::states::{Body, NVec2};

pub trait Observer {
    /// Called once per body per step, in index order.
    fn observe(&mut self, step: usize, time: f64, index: usize, body: &Body) -> Result<(), SimError>;

    /// Called after the last body of each step.
    fn end_step(&mut self, _step: usize, _time: f64) -> Result<(), SimError> {
        Ok(())
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn observe(&mut self, step: usize, time: f64, index: usize, body: &Body) -> Result<(), SimError> {
        (**self).observe(step, time, index, body)
    }

    fn end_step(&mut self, step: usize, time: f64) -> Result<(), SimError> {
        (**self).end_step(step, time)
    }
}

impl<O: Observer> Observer for Option<O> {
    fn observe(&mut self, step: usize, time: f64, index: usize, body: &Body) -> Result<(), SimError> {
        match self {
            Some(o) => o.observe(step, time, index, body),
            None => Ok(()),
        }
    }

    fn end_step(&mut self, step: usize, time: f64) -> Result<(), SimError> {
        match self {
            Some(o) => o.end_step(step, time),
            None => Ok(()),
        }
    }
}

impl<A: Observer, B: Observer> Observer for (A, B) {
    fn observe(&mut self, step: usize, time: f64, index: usize, body: &Body) -> Result<(), SimError> {
        self.0.observe(step, time, index, body)?;
        self.1.observe(step, time, index, body)
    }

    fn end_step(&mut self, step: usize, time: f64) -> Result<(), SimError> {
        self.0.end_step(step, time)?;
        self.1.end_step(step, time)
    }
}

/// One row of the observation stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub step: usize,
    pub time: f64, // step * time_step
    pub index: usize,
    pub position: NVec2,
    pub velocity: NVec2,
    pub acceleration: NVec2,
}

/// In-memory recording of a run.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    pub observations: Vec<Observation>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// All rows of one body, oldest first.
    pub fn rows_for(&self, index: usize) -> impl Iterator<Item = &Observation> + '_ {
        self.observations.iter().filter(move |o| o.index == index)
    }

    pub fn positions(&self, index: usize) -> Vec<NVec2> {
        self.rows_for(index).map(|o| o.position).collect()
    }

    pub fn speeds(&self, index: usize) -> Vec<f64> {
        self.rows_for(index).map(|o| o.velocity.norm()).collect()
    }

    pub fn acceleration_magnitudes(&self, index: usize) -> Vec<f64> {
        self.rows_for(index).map(|o| o.acceleration.norm()).collect()
    }

    /// Rows of a single step, in body index order.
    pub fn step_rows(&self, step: usize) -> impl Iterator<Item = &Observation> + '_ {
        self.observations.iter().filter(move |o| o.step == step)
    }
}

impl Observer for Trajectory {
    fn observe(&mut self, step: usize, time: f64, index: usize, body: &Body) -> Result<(), SimError> {
        self.observations.push(Observation {
            step,
            time,
            index,
            position: body.x,
            velocity: body.v,
            acceleration: body.a,
        });
        Ok(())
    }
}
