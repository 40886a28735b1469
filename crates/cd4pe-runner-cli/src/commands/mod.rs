//! CLI command definitions and dispatch.

pub mod pull;
pub mod run;

use std::path::PathBuf;

use cd4pe_runner_common::config::JobConfig;
use cd4pe_runner_common::constants::DEFAULT_CERTS_DIR;
use cd4pe_runner_common::types::{OsFamily, Secret};
use clap::{Args, Parser, Subcommand};

/// CD4PE job runner — emits container commands for CI/CD job steps.
#[derive(Parser, Debug)]
#[command(name = "cd4pe-runner", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure registry auth and emit the image pull command.
    Pull(pull::PullArgs),
    /// Emit the container run command for a lifecycle phase.
    Run(run::RunArgs),
}

/// Job parameters shared by every subcommand.
#[derive(Args, Debug)]
pub struct JobArgs {
    /// Job working directory on the host (must already exist).
    #[arg(long)]
    pub working_dir: PathBuf,

    /// Container image reference to pull and run.
    #[arg(long)]
    pub image: String,

    /// Base64-encoded registry credentials (docker config.json).
    #[arg(long, env = "CD4PE_IMAGE_PULL_CREDS", hide_env_values = true)]
    pub registry_creds: Option<String>,

    /// Base64-encoded CA certificate for the registry's TLS endpoint.
    #[arg(long, env = "CD4PE_CA_CERT", hide_env_values = true)]
    pub ca_cert: Option<String>,

    /// Extra argument spliced into `docker run`; repeatable, order kept.
    #[arg(long = "run-arg")]
    pub run_args: Vec<String>,

    /// Secret exposed to the container as NAME=VALUE; repeatable, order kept.
    #[arg(long = "secret", value_parser = parse_secret)]
    pub secrets: Vec<Secret>,

    /// Auth token for reporting results back to CD4PE.
    #[arg(long, env = "CD4PE_JOB_TOKEN", hide_env_values = true, default_value = "")]
    pub job_token: String,

    /// CD4PE web UI endpoint the job reports to.
    #[arg(long, default_value = "")]
    pub web_ui_endpoint: String,

    /// Owner of the job, for log correlation.
    #[arg(long, default_value = "")]
    pub job_owner: String,

    /// Identifier of this job instance, for log correlation.
    #[arg(long, default_value = "")]
    pub job_instance_id: String,

    /// Treat this as a Windows job (mounts the windows scripts directory).
    #[arg(long)]
    pub windows: bool,

    /// Host directory for per-registry CA certificates.
    #[arg(long, default_value = DEFAULT_CERTS_DIR)]
    pub certs_dir: PathBuf,
}

impl JobArgs {
    /// Assembles a [`JobConfig`] from the parsed arguments.
    #[must_use]
    pub fn into_config(self) -> JobConfig {
        let mut config = JobConfig::new(self.working_dir, self.image);
        config.image_pull_creds = self.registry_creds;
        config.ca_cert = self.ca_cert;
        config.container_run_args = self.run_args;
        config.secrets = self.secrets;
        config.job_token = self.job_token;
        config.web_ui_endpoint = self.web_ui_endpoint;
        config.job_owner = self.job_owner;
        config.job_instance_id = self.job_instance_id;
        config.os_family = if self.windows {
            OsFamily::Windows
        } else {
            OsFamily::Unix
        };
        config.certs_dir = self.certs_dir;
        config
    }
}

fn parse_secret(raw: &str) -> Result<Secret, String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok(Secret::new(name, value)),
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Pull(args) => pull::execute(args),
        Command::Run(args) => run::execute(args),
    }
}
