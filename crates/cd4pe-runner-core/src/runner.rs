//! The job command builder.
//!
//! Turns a [`JobConfig`] into runnable shell command strings plus persisted
//! auth artifacts. Construction performs the side-effect writes (registry
//! auth, CA certs); command building afterwards is pure string assembly.

use std::path::PathBuf;

use cd4pe_runner_common::config::JobConfig;
use cd4pe_runner_common::constants::{JOB_DIR, JOB_MOUNT_POINT, REPO_MOUNT_POINT};
use cd4pe_runner_common::error::Result;
use cd4pe_runner_common::types::ContainerRuntime;

use crate::registry;
use crate::runtime::{FixedRuntime, RuntimeDetector};

/// Command builder for a single job invocation.
///
/// Creating a runner writes the registry auth config and CA cert files when
/// the config supplies them; the generated command strings then reference
/// those artifacts. Each runner owns its working directory — runners with
/// distinct working directories are fully independent.
#[derive(Debug)]
pub struct JobRunner {
    config: JobConfig,
    runtime: ContainerRuntime,
    docker_config_dir: Option<PathBuf>,
}

impl JobRunner {
    /// Creates a runner with the default runtime detector.
    ///
    /// # Errors
    ///
    /// Returns [`cd4pe_runner_common::error::RunnerError::InvalidCredentials`]
    /// or [`cd4pe_runner_common::error::RunnerError::InvalidCertificate`] on a
    /// malformed payload, or an I/O error if the auth artifacts cannot be
    /// written.
    pub fn new(config: JobConfig) -> Result<Self> {
        Self::with_detector(config, &FixedRuntime::default())
    }

    /// Creates a runner using an explicit runtime detection strategy.
    ///
    /// # Errors
    ///
    /// As [`JobRunner::new`], plus
    /// [`cd4pe_runner_common::error::RunnerError::RuntimeNotFound`] if the
    /// detector finds no supported runtime.
    pub fn with_detector(config: JobConfig, detector: &dyn RuntimeDetector) -> Result<Self> {
        let runtime = detector.detect()?;
        tracing::info!(
            job_instance_id = %config.job_instance_id,
            job_owner = %config.job_owner,
            web_ui_endpoint = %config.web_ui_endpoint,
            image = %config.container_image,
            runtime = %runtime,
            "preparing job runner"
        );

        let docker_config_dir = match &config.image_pull_creds {
            Some(creds_b64) => {
                let (config_dir, auth) =
                    registry::write_docker_config(&config.working_dir, creds_b64)?;
                if let Some(cert_b64) = &config.ca_cert {
                    for hostname in auth.auths.keys() {
                        let _ = registry::write_ca_cert(&config.certs_dir, hostname, cert_b64)?;
                    }
                }
                Some(config_dir)
            }
            None => None,
        };

        Ok(Self {
            config,
            runtime,
            docker_config_dir,
        })
    }

    /// Returns the container runtime this runner drives.
    #[must_use]
    pub const fn runtime(&self) -> ContainerRuntime {
        self.runtime
    }

    /// Builds the command that pulls the job's container image.
    ///
    /// Includes `--config <working_dir>/.docker` only when registry
    /// credentials were configured.
    #[must_use]
    pub fn image_pull_cmd(&self) -> String {
        let binary = self.runtime.binary();
        let image = &self.config.container_image;
        match &self.docker_config_dir {
            Some(config_dir) => {
                format!("{binary} --config {} pull {image}", config_dir.display())
            }
            None => format!("{binary} pull {image}"),
        }
    }

    /// Builds the command that runs one lifecycle script inside the
    /// container, e.g. `container_run_cmd("AFTER_JOB_SUCCESS")`.
    ///
    /// Token order is load-bearing: `run --rm`, caller run args, `-e` secret
    /// names in list order, the repo and jobs mounts, the image, and finally
    /// the quoted in-container script path.
    #[must_use]
    pub fn container_run_cmd(&self, lifecycle_phase: &str) -> String {
        let mut parts: Vec<String> = vec![
            self.runtime.binary().to_string(),
            "run".to_string(),
            "--rm".to_string(),
        ];
        parts.extend(self.config.container_run_args.iter().cloned());
        for secret in &self.config.secrets {
            parts.push("-e".to_string());
            parts.push(secret.name.clone());
        }
        parts.push("-v".to_string());
        parts.push(format!(
            "{}:{REPO_MOUNT_POINT}",
            self.host_repo_dir().display()
        ));
        parts.push("-v".to_string());
        parts.push(format!(
            "{}:{JOB_MOUNT_POINT}",
            self.host_jobs_dir().display()
        ));
        parts.push(self.config.container_image.clone());
        parts.push(format!("\"{JOB_MOUNT_POINT}/{lifecycle_phase}\""));
        parts.join(" ")
    }

    /// Host directory mounted at `/repo` inside the container.
    #[must_use]
    pub fn host_repo_dir(&self) -> PathBuf {
        self.config.working_dir.join(JOB_DIR).join("repo")
    }

    /// Host directory of lifecycle scripts mounted at `/cd4pe_job`.
    #[must_use]
    pub fn host_jobs_dir(&self) -> PathBuf {
        self.config
            .working_dir
            .join(JOB_DIR)
            .join("jobs")
            .join(self.config.os_family.as_str())
    }
}
