//! Container runtime detection.
//!
//! Detection is a capability lookup over the supported runtime variants.
//! The default strategy is [`FixedRuntime`] pinned to docker, which is the
//! only runtime the rest of CD4PE currently drives; [`PathProbe`] resolves
//! runtime binaries on the search path and is the extension point for
//! multi-runtime hosts.

use std::ffi::OsString;
use std::path::Path;

use cd4pe_runner_common::error::{Result, RunnerError};
use cd4pe_runner_common::types::{ContainerRuntime, SUPPORTED_RUNTIMES};

/// Strategy for selecting the container runtime used by a job.
pub trait RuntimeDetector {
    /// Returns the runtime to use for this job.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::RuntimeNotFound`] if no supported runtime is
    /// discoverable.
    fn detect(&self) -> Result<ContainerRuntime>;
}

/// Detector that always yields a preselected runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRuntime(pub ContainerRuntime);

impl RuntimeDetector for FixedRuntime {
    fn detect(&self) -> Result<ContainerRuntime> {
        Ok(self.0)
    }
}

/// Detector that probes the search path for runtime binaries, in the order
/// given by [`SUPPORTED_RUNTIMES`].
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    search_path: Option<OsString>,
}

impl PathProbe {
    /// Probes the process `PATH`.
    #[must_use]
    pub const fn new() -> Self {
        Self { search_path: None }
    }

    /// Probes an explicit search path instead of the process `PATH`.
    #[must_use]
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn resolve(&self, binary: &str) -> bool {
        match &self.search_path {
            Some(paths) => which::which_in(binary, Some(paths), Path::new("/")).is_ok(),
            None => which::which(binary).is_ok(),
        }
    }
}

impl RuntimeDetector for PathProbe {
    fn detect(&self) -> Result<ContainerRuntime> {
        for runtime in SUPPORTED_RUNTIMES {
            if self.resolve(runtime.binary()) {
                tracing::debug!(runtime = %runtime, "resolved container runtime on search path");
                return Ok(runtime);
            }
        }
        Err(RunnerError::RuntimeNotFound {
            probed: SUPPORTED_RUNTIMES
                .iter()
                .map(|r| r.binary())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    #[test]
    fn fixed_detector_defaults_to_docker() {
        let runtime = FixedRuntime::default().detect().expect("fixed never fails");
        assert_eq!(runtime, ContainerRuntime::Docker);
    }

    #[test]
    fn fixed_detector_honors_selection() {
        let runtime = FixedRuntime(ContainerRuntime::Podman)
            .detect()
            .expect("fixed never fails");
        assert_eq!(runtime, ContainerRuntime::Podman);
    }

    #[test]
    fn path_probe_reports_missing_runtimes() {
        let empty = tempfile::tempdir().expect("tempdir");
        let probe = PathProbe::with_search_path(empty.path().as_os_str());
        let err = probe.detect().expect_err("no runtime binaries present");
        assert!(matches!(err, RunnerError::RuntimeNotFound { .. }));
        assert!(err.to_string().contains("docker"));
    }

    #[cfg(unix)]
    #[test]
    fn path_probe_finds_docker_binary() {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = tempfile::tempdir().expect("tempdir");
        let docker = bin_dir.path().join("docker");
        std::fs::write(&docker, "#!/bin/sh\n").expect("write stub");
        std::fs::set_permissions(&docker, std::fs::Permissions::from_mode(0o755))
            .expect("chmod stub");

        let probe = PathProbe::with_search_path(bin_dir.path().as_os_str());
        let runtime = probe.detect().expect("docker stub should resolve");
        assert_eq!(runtime, ContainerRuntime::Docker);
    }

    #[cfg(unix)]
    #[test]
    fn path_probe_falls_back_to_podman() {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = tempfile::tempdir().expect("tempdir");
        let podman = bin_dir.path().join("podman");
        std::fs::write(&podman, "#!/bin/sh\n").expect("write stub");
        std::fs::set_permissions(&podman, std::fs::Permissions::from_mode(0o755))
            .expect("chmod stub");

        let probe = PathProbe::with_search_path(bin_dir.path().as_os_str());
        let runtime = probe.detect().expect("podman stub should resolve");
        assert_eq!(runtime, ContainerRuntime::Podman);
    }
}
