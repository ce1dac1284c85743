use std::path::Path;

use common::{
    bench::Cmd,
    config::Config,
    runner::RemoteRunner,
    sample::{Metadata, Sample},
};
use eyre::{Context, Result};
use sysbench::result::add_metrics_for_output;
use tokio::fs::read_to_string;
use tracing::{debug, error, info};

pub async fn load_config(config_file: &Path) -> Result<Config> {
    let data = read_to_string(config_file)
        .await
        .context(format!("Reading {}", config_file.display()))?;
    serde_yml::from_str(&data).context("Parsing config")
}

pub async fn run_benchmark(config_file: &Path, skip_prepare: bool) -> Result<Vec<Sample>> {
    let config = load_config(config_file).await?;
    let runner = config.settings.runner.build();
    debug!("Using runner {runner:?}");
    run_with(&config, &*runner, skip_prepare).await
}

pub async fn run_with(
    config: &Config,
    runner: &dyn RemoteRunner,
    skip_prepare: bool,
) -> Result<Vec<Sample>> {
    let skip_prepare = skip_prepare || config.settings.skip_prepare.unwrap_or(false);
    let mut samples = Vec::new();

    for experiment in &config.benches {
        info!("Starting {} ({})", experiment.name, experiment.bench.name());
        if !skip_prepare {
            let prepared = experiment
                .bench
                .prepare(runner, &config.settings)
                .await
                .context(format!("Preparing {}", experiment.name))?;
            samples.extend(prepared);
        }

        match experiment.bench.run(runner, &config.settings).await {
            Ok(results) => {
                debug!("{} produced {} samples", experiment.name, results.len());
                samples.extend(results);
            }
            Err(err) => {
                error!("Failed to run benchmark {}: {err}", experiment.name);
                return Err(err);
            }
        }
    }

    Ok(samples)
}

/// Parses a captured sysbench log with no run metadata attached
pub async fn parse_file(file: &Path, prefix: &str) -> Result<Vec<Sample>> {
    let output = read_to_string(file)
        .await
        .context(format!("Reading {}", file.display()))?;
    let mut samples = Vec::new();
    add_metrics_for_output(&output, &mut samples, &Metadata::new(), prefix)
        .context(format!("Parsing {}", file.display()))?;
    Ok(samples)
}

pub fn commands(config: &Config) -> Result<Vec<(String, Cmd)>> {
    let mut cmds = Vec::new();
    for experiment in &config.benches {
        for cmd in experiment.bench.cmds()? {
            cmds.push((experiment.name.clone(), cmd));
        }
    }
    Ok(cmds)
}
