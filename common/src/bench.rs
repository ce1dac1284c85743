use core::fmt::Debug;

use dyn_clone::{DynClone, clone_trait_object};
use eyre::Result;

use crate::{config::Settings, runner::RemoteRunner, sample::Sample};

/// A command a bench will issue, labelled with the stage it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cmd {
    pub stage: String,
    pub command: String,
}

#[typetag::serde(tag = "type")]
#[async_trait::async_trait]
pub trait Bench: Debug + DynClone + Send + Sync {
    /// Name of the benchmark, for identification
    fn name(&self) -> &'static str;
    /// Every command the bench would issue, in order
    fn cmds(&self) -> Result<Vec<Cmd>>;
    /// Loads benchmark data before any measured run
    async fn prepare(&self, runner: &dyn RemoteRunner, settings: &Settings) -> Result<Vec<Sample>>;
    /// Runs the measured workload and returns the samples it produced
    ///
    /// Arguments:
    /// * `runner` - Where commands are executed
    /// * `settings` - The settings from the config file
    async fn run(&self, runner: &dyn RemoteRunner, settings: &Settings) -> Result<Vec<Sample>>;
}
clone_trait_object!(Bench);
