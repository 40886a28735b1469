//! Fixed paths and names shared by the builder and the CLI.

/// Default host directory where per-registry CA certificates are installed.
///
/// Overridable per job via [`crate::config::JobConfig::certs_dir`].
pub const DEFAULT_CERTS_DIR: &str = "/etc/docker/certs.d";

/// Name of the docker client config directory created under the working dir.
pub const DOCKER_CONFIG_DIR: &str = ".docker";

/// File name of the registry auth config inside [`DOCKER_CONFIG_DIR`].
pub const DOCKER_CONFIG_FILE: &str = "config.json";

/// File name written for a registry CA certificate.
pub const CA_CERT_FILE: &str = "ca.crt";

/// Name of the job payload directory under the working dir.
pub const JOB_DIR: &str = "cd4pe_job";

/// In-container mount point for the control repo checkout.
pub const REPO_MOUNT_POINT: &str = "/repo";

/// In-container mount point for the lifecycle job scripts.
pub const JOB_MOUNT_POINT: &str = "/cd4pe_job";

/// Application name used in CLI output and log events.
pub const APP_NAME: &str = "cd4pe-runner";
