//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – update scheme and degenerate-distance policy
//! - [`ParametersConfig`] – gravitational constant, step size and duration
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! `engine` and `parameters` may be omitted entirely; missing fields fall back
//! to the default run (G = 6.67430e-11, 0.01 s steps for 5 s).
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   scheme: simultaneous    # or interleaved
//!   on_degenerate: fail     # or skip
//!
//! parameters:
//!   G: 6.67430e-11
//!   time_step: 0.01
//!   duration: 5.0
//!
//! bodies:
//!   - name: Ceres
//!     x: [0.0, -5.0]
//!     v: [3.0, 0.0]
//!     m: 1000.0
//!   - x: [0.0, 0.0]
//!     m: 1.0e12
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::params::Parameters;

/// How body updates are sequenced within one step.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateScheme {
    #[serde(rename = "simultaneous")] // all forces from one frozen snapshot, then all updates
    #[default]
    Simultaneous,

    #[serde(rename = "interleaved")] // force then update per body; later bodies see earlier updates
    Interleaved,
}

/// What the force sum does when a pair of bodies has no finite force.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    #[serde(rename = "fail")] // abort the run with `SimError::DegenerateDistance`
    #[default]
    Fail,

    #[serde(rename = "skip")] // the degenerate pair contributes no force
    Skip,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub scheme: UpdateScheme,
    pub on_degenerate: DegeneratePolicy,
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub time_step: f64, // seconds per step
    pub duration: f64, // seconds to simulate
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            g: p.g,
            time_step: p.time_step,
            duration: p.duration,
        }
    }
}

impl From<ParametersConfig> for Parameters {
    fn from(cfg: ParametersConfig) -> Self {
        Parameters {
            g: cfg.g,
            time_step: cfg.time_step,
            duration: cfg.duration,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>, // label for reports, "Body N" when absent
    pub x: [f64; 2], // initial position (m)
    #[serde(default)]
    pub v: [f64; 2], // initial velocity (m/s), at rest when absent
    pub m: f64, // mass (kg)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("failed to parse scenario YAML")
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_yaml::from_reader(reader).context("failed to parse scenario YAML")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario file {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("in scenario file {}", path.display()))
    }
}
