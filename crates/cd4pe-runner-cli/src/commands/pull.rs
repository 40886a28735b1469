//! `cd4pe-runner pull` — configure registry auth and emit the pull command.

use clap::Args;

use cd4pe_runner_core::JobRunner;

use crate::commands::JobArgs;

/// Arguments for the `pull` command.
#[derive(Args, Debug)]
pub struct PullArgs {
    /// Shared job parameters.
    #[command(flatten)]
    pub job: JobArgs,
}

/// Executes the `pull` command.
///
/// Writes the registry auth config and CA certs when supplied, then prints
/// the pull command on stdout.
///
/// # Errors
///
/// Returns an error if the credentials or certificate are malformed, or the
/// auth artifacts cannot be written.
#[allow(clippy::print_stdout)]
pub fn execute(args: PullArgs) -> anyhow::Result<()> {
    let runner = JobRunner::new(args.job.into_config())?;
    println!("{}", runner.image_pull_cmd());
    Ok(())
}
