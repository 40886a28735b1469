//! Per-job configuration model for the command builder.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{OsFamily, Secret};

/// Everything the builder needs to know about a single job invocation.
///
/// Constructed once per job from caller-supplied parameters. The caller is
/// responsible for creating `working_dir` beforehand and removing it
/// afterwards; auth and cert files written during builder construction live
/// for the life of that directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Job-scoped scratch directory on the host. Should be absolute so the
    /// generated bind mounts and `--config` path are absolute.
    pub working_dir: PathBuf,
    /// Container image reference to pull and run.
    pub container_image: String,
    /// Base64-encoded docker `config.json` granting pull access to a
    /// private registry. `None` for public images.
    #[serde(default)]
    pub image_pull_creds: Option<String>,
    /// Base64-encoded CA certificate for the registry's TLS endpoint.
    #[serde(default)]
    pub ca_cert: Option<String>,
    /// Extra arguments spliced into `docker run`, in caller order.
    #[serde(default)]
    pub container_run_args: Vec<String>,
    /// Secrets exposed to the container, in injection order. An ordered
    /// list rather than a map so generated commands are deterministic.
    #[serde(default)]
    pub secrets: Vec<Secret>,
    /// Auth token for reporting job results back to CD4PE. Logged never.
    pub job_token: String,
    /// CD4PE web UI endpoint the job reports to.
    pub web_ui_endpoint: String,
    /// Owner of the job, for log correlation.
    pub job_owner: String,
    /// Identifier of this job instance, for log correlation.
    pub job_instance_id: String,
    /// OS family of the job scripts, selects the `jobs/<family>` mount.
    #[serde(default)]
    pub os_family: OsFamily,
    /// Host directory for per-registry CA certificates. Defaults to
    /// [`crate::constants::DEFAULT_CERTS_DIR`]; override for test isolation.
    #[serde(default = "default_certs_dir")]
    pub certs_dir: PathBuf,
}

fn default_certs_dir() -> PathBuf {
    PathBuf::from(crate::constants::DEFAULT_CERTS_DIR)
}

impl JobConfig {
    /// Creates a minimal config for the given working directory and image,
    /// with every optional input empty and the default certs directory.
    #[must_use]
    pub fn new(working_dir: impl Into<PathBuf>, container_image: impl Into<String>) -> Self {
        Self {
            working_dir: working_dir.into(),
            container_image: container_image.into(),
            image_pull_creds: None,
            ca_cert: None,
            container_run_args: Vec::new(),
            secrets: Vec::new(),
            job_token: String::new(),
            web_ui_endpoint: String::new(),
            job_owner: String::new(),
            job_instance_id: String::new(),
            os_family: OsFamily::default(),
            certs_dir: default_certs_dir(),
        }
    }
}
