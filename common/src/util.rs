use std::{process::Stdio, time::Duration};

use eyre::{Context, Result, bail};
use tokio::process::Command;
use tracing::debug;

use crate::runner::CommandOutput;

/// Runs `cmd` to completion, killing it if `timeout` elapses first
pub async fn command_with_output(mut cmd: Command, timeout: Duration) -> Result<CommandOutput> {
    debug!("Running command: {cmd:?}");
    let child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .context("Spawning command")?;

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(output) => output.context("Waiting for command")?,
        Err(_) => bail!("Command timed out after {}s", timeout.as_secs()),
    };

    if !output.status.success() {
        bail!(
            "Process exited with {}, err: {}",
            output.status.code().unwrap_or_default(),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(CommandOutput {
        stdout: String::from_utf8(output.stdout).context("Command stdout is not utf-8")?,
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Joins command tokens, dropping empty ones
pub fn join_tokens<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter(|t| !t.as_ref().is_empty())
        .map(|t| t.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
