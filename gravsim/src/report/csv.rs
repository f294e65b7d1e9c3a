//! CSV export of the observation stream, one row per body per step.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SimError;
use crate::simulation::observer::Observer;
use crate::simulation::states::Body;

pub const CSV_HEADER: &str = "Time,Object,Mass,X,Y,VX,VY,AX,AY";

pub struct CsvReport<W: Write> {
    out: W,
}

impl CsvReport<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self, SimError> {
        Self::new(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> CsvReport<W> {
    /// Wraps `out` and writes the header row immediately.
    pub fn new(mut out: W) -> Result<Self, SimError> {
        writeln!(out, "{}", CSV_HEADER)?;
        Ok(Self { out })
    }

    pub fn flush(&mut self) -> Result<(), SimError> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for CsvReport<W> {
    fn observe(&mut self, _step: usize, time: f64, index: usize, body: &Body) -> Result<(), SimError> {
        // Labels may contain commas
        let label = body.label(index).replace('"', "\"\"");
        writeln!(
            self.out,
            "{:.3},\"{}\",{},{},{},{},{},{},{}",
            time,
            label,
            body.mass(),
            body.x.x,
            body.x.y,
            body.v.x,
            body.v.y,
            body.a.x,
            body.a.y
        )?;
        Ok(())
    }
}
