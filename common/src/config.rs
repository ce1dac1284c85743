use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{bench::Bench, runner::RunnerConfig};

pub const DEFAULT_PREPARE_TIMEOUT_SECS: u64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub name: String,
    #[serde(default)]
    pub settings: Settings,
    pub benches: Vec<InnerBench>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub runner: RunnerConfig,
    pub prepare_timeout_secs: Option<u64>,
    pub skip_prepare: Option<bool>,
}

impl Settings {
    pub fn prepare_timeout(&self) -> Duration {
        Duration::from_secs(
            self.prepare_timeout_secs
                .unwrap_or(DEFAULT_PREPARE_TIMEOUT_SECS),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InnerBench {
    pub name: String,
    pub bench: Box<dyn Bench>,
}
