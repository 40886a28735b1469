//! # cd4pe-runner-core
//!
//! The CD4PE job command builder. Given a [`cd4pe_runner_common::config::JobConfig`],
//! produces the container-runtime commands for one CI/CD job:
//!
//! 1. detect an available container runtime,
//! 2. persist registry auth and CA cert files when supplied,
//! 3. build the image pull command,
//! 4. build the container run command for a lifecycle phase.
//!
//! All operations are local and synchronous. Generated command strings are
//! handed to an external process executor; this crate never spawns the
//! runtime itself.

pub mod registry;
pub mod runner;
pub mod runtime;

pub use runner::JobRunner;
pub use runtime::{FixedRuntime, PathProbe, RuntimeDetector};
