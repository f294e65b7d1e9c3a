//! Human-readable observation output, grouped by step:
//!
//! ```text
//! Time: 0.010 seconds
//! Body 1: (0.03, -5)
//! Body 2: (0, 0)
//!
//! ```

use std::io::Write;

use crate::error::SimError;
use crate::simulation::observer::Observer;
use crate::simulation::states::Body;

pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for TextReport<W> {
    fn observe(&mut self, _step: usize, time: f64, index: usize, body: &Body) -> Result<(), SimError> {
        if index == 0 {
            writeln!(self.out, "Time: {:.3} seconds", time)?;
        }
        writeln!(self.out, "{}: ({}, {})", body.label(index), body.x.x, body.x.y)?;
        Ok(())
    }

    fn end_step(&mut self, _step: usize, _time: f64) -> Result<(), SimError> {
        writeln!(self.out)?;
        Ok(())
    }
}
