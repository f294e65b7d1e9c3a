//! High-level runtime engine settings
//!
//! Selects the update scheme and the degenerate-distance policy
//! used when building and running a `Scenario`

use crate::configuration::config::{DegeneratePolicy, EngineConfig, UpdateScheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engine {
    pub scheme: UpdateScheme, // simultaneous or interleaved
    pub on_degenerate: DegeneratePolicy, // fail or skip
}

impl From<EngineConfig> for Engine {
    fn from(cfg: EngineConfig) -> Self {
        Self {
            scheme: cfg.scheme,
            on_degenerate: cfg.on_degenerate,
        }
    }
}
