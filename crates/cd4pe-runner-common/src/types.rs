//! Domain primitive types used across the job runner workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Family of operating system the job's container scripts target.
///
/// Selects which `jobs/<family>` directory is mounted into the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    /// Linux and other Unix-like targets.
    #[default]
    Unix,
    /// Windows targets.
    Windows,
}

impl OsFamily {
    /// Returns the lowercase directory name for this family.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported container runtime, identified by its CLI binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerRuntime {
    /// Docker Engine via the `docker` CLI.
    #[default]
    Docker,
    /// Podman via the `podman` CLI.
    Podman,
}

/// Runtimes probed during detection, in preference order.
pub const SUPPORTED_RUNTIMES: [ContainerRuntime; 2] =
    [ContainerRuntime::Docker, ContainerRuntime::Podman];

impl ContainerRuntime {
    /// Returns the name of the runtime's CLI binary.
    #[must_use]
    pub const fn binary(self) -> &'static str {
        match self {
            Self::Docker => "docker",
            Self::Podman => "podman",
        }
    }
}

impl fmt::Display for ContainerRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// A named secret injected into the container environment.
///
/// Only the name ever appears in a generated command string; the value is
/// supplied through the process environment at execution time.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    /// Environment variable name passed to `-e`.
    pub name: String,
    /// Secret value, exported by the external executor.
    pub value: String,
}

impl Secret {
    /// Creates a secret from a name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

// Values stay out of Debug output so log events cannot leak them.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_family_directory_names() {
        assert_eq!(OsFamily::Unix.as_str(), "unix");
        assert_eq!(OsFamily::Windows.as_str(), "windows");
        assert_eq!(OsFamily::default(), OsFamily::Unix);
    }

    #[test]
    fn runtime_binary_names() {
        assert_eq!(ContainerRuntime::Docker.binary(), "docker");
        assert_eq!(ContainerRuntime::Podman.binary(), "podman");
        assert_eq!(ContainerRuntime::Docker.to_string(), "docker");
    }

    #[test]
    fn secret_debug_redacts_value() {
        let secret = Secret::new("DEPLOY_KEY", "hunter2");
        let rendered = format!("{secret:?}");
        assert!(rendered.contains("DEPLOY_KEY"));
        assert!(!rendered.contains("hunter2"));
    }
}
