use core::fmt::Debug;
use std::time::Duration;

use eyre::Result;
use serde::{Deserialize, Serialize};
use tokio::process::Command;

use crate::util::command_with_output;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Executes shell commands on the benchmark client host
#[async_trait::async_trait]
pub trait RemoteRunner: Debug + Send + Sync {
    /// Runs `command` and returns its captured output
    ///
    /// Fails if the command could not be started, exits non-zero, or does not
    /// finish within `timeout`.
    async fn execute(&self, command: &str, timeout: Duration) -> Result<CommandOutput>;
}

/// Runs commands over `ssh`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SshRunner {
    pub host: String,
    pub user: Option<String>,
    pub key_file: Option<String>,
    pub port: Option<u16>,
}

impl SshRunner {
    fn destination(&self) -> String {
        match &self.user {
            Some(user) => format!("{user}@{}", self.host),
            None => self.host.clone(),
        }
    }

    pub fn ssh_args(&self, command: &str) -> Vec<String> {
        let mut args = vec![
            "-o".to_owned(),
            "BatchMode=yes".to_owned(),
            "-o".to_owned(),
            "StrictHostKeyChecking=no".to_owned(),
        ];
        if let Some(key) = &self.key_file {
            args.push("-i".to_owned());
            args.push(key.clone());
        }
        if let Some(port) = self.port {
            args.push("-p".to_owned());
            args.push(port.to_string());
        }
        args.push(self.destination());
        args.push(command.to_owned());
        args
    }
}

#[async_trait::async_trait]
impl RemoteRunner for SshRunner {
    async fn execute(&self, command: &str, timeout: Duration) -> Result<CommandOutput> {
        let mut cmd = Command::new("ssh");
        cmd.args(self.ssh_args(command));
        command_with_output(cmd, timeout).await
    }
}

/// Runs commands through `sh -c` on this machine
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LocalRunner;

#[async_trait::async_trait]
impl RemoteRunner for LocalRunner {
    async fn execute(&self, command: &str, timeout: Duration) -> Result<CommandOutput> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        command_with_output(cmd, timeout).await
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RunnerConfig {
    Ssh(SshRunner),
    #[default]
    Local,
}

impl RunnerConfig {
    pub fn build(&self) -> Box<dyn RemoteRunner> {
        match self {
            RunnerConfig::Ssh(ssh) => Box::new(ssh.clone()),
            RunnerConfig::Local => Box::new(LocalRunner),
        }
    }
}
