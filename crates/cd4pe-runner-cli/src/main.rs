//! # cd4pe-runner — CD4PE job runner CLI
//!
//! Prepares a job working directory (registry auth, CA certs) and emits the
//! container pull/run commands on stdout for the process executor to invoke.

mod commands;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
