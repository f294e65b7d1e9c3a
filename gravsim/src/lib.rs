pub mod error;
pub mod simulation;
pub mod configuration;
pub mod report;
#[cfg(feature = "viewer")]
pub mod visualization;

pub use error::SimError;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::{Parameters, G};
pub use simulation::engine::Engine;
pub use simulation::forces::{ForceModel, NewtonianGravity};
pub use simulation::integrator::{euler_step_interleaved, euler_step_simultaneous, Integrator, RunSummary};
pub use simulation::observer::{Observation, Observer, Trajectory};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, DegeneratePolicy, EngineConfig, ParametersConfig, ScenarioConfig, UpdateScheme};

pub use report::{csv::CsvReport, text::TextReport};

#[cfg(feature = "viewer")]
pub use visualization::viewer2d::run_2d;
