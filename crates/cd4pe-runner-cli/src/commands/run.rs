//! `cd4pe-runner run` — emit the container run command for a lifecycle phase.

use clap::Args;

use cd4pe_runner_core::JobRunner;

use crate::commands::JobArgs;

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Shared job parameters.
    #[command(flatten)]
    pub job: JobArgs,

    /// Lifecycle phase whose script runs inside the container,
    /// e.g. JOB, AFTER_JOB_SUCCESS, AFTER_JOB_FAILURE.
    pub phase: String,
}

/// Executes the `run` command.
///
/// Prints the container run command on stdout. Secret values never appear
/// in the command; the executor must export them into the environment.
///
/// # Errors
///
/// Returns an error if the credentials or certificate are malformed, or the
/// auth artifacts cannot be written.
#[allow(clippy::print_stdout)]
pub fn execute(args: RunArgs) -> anyhow::Result<()> {
    let RunArgs { job, phase } = args;
    let runner = JobRunner::new(job.into_config())?;
    println!("{}", runner.container_run_cmd(&phase));
    Ok(())
}
