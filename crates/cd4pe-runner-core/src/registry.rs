//! Private registry configuration: pull credentials and CA certificates.
//!
//! Credentials arrive as a base64-encoded docker `config.json`. The decoded
//! bytes are validated as JSON before anything touches the filesystem, then
//! written verbatim so the runtime's credential lookup sees exactly what the
//! caller supplied.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cd4pe_runner_common::constants::{CA_CERT_FILE, DOCKER_CONFIG_DIR, DOCKER_CONFIG_FILE};
use cd4pe_runner_common::error::{Result, RunnerError};
use serde::Deserialize;

/// Decoded registry auth document.
///
/// Only the `auths` hostnames are interpreted (to know where CA certs
/// belong); everything else passes through untouched.
#[derive(Debug, Deserialize)]
pub struct RegistryAuth {
    /// Auth entries keyed by registry hostname.
    #[serde(default)]
    pub auths: BTreeMap<String, serde_json::Value>,
}

// Upstream encoders wrap base64 at 60 columns, so embedded newlines are
// expected input, not corruption.
fn decode_b64(encoded: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    let compact: Vec<u8> = encoded
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    STANDARD.decode(compact)
}

/// Decodes and validates base64 registry credentials.
///
/// Returns the raw decoded bytes (for verbatim persistence) together with
/// the parsed auth document.
///
/// # Errors
///
/// Returns [`RunnerError::InvalidCredentials`] if the input is not valid
/// base64 or the decoded bytes are not valid JSON.
pub fn decode_credentials(creds_b64: &str) -> Result<(Vec<u8>, RegistryAuth)> {
    let raw = decode_b64(creds_b64).map_err(|e| RunnerError::InvalidCredentials {
        message: format!("base64 decode failed: {e}"),
    })?;
    let auth: RegistryAuth =
        serde_json::from_slice(&raw).map_err(|e| RunnerError::InvalidCredentials {
            message: format!("credential JSON parse failed: {e}"),
        })?;
    Ok((raw, auth))
}

/// Writes decoded credentials to `<working_dir>/.docker/config.json` and
/// returns the config directory path for use with `--config`.
///
/// Validation happens before any write, so a malformed payload leaves no
/// file behind.
///
/// # Errors
///
/// Returns [`RunnerError::InvalidCredentials`] on a malformed payload, or
/// [`RunnerError::Io`] if the config directory or file cannot be written.
pub fn write_docker_config(working_dir: &Path, creds_b64: &str) -> Result<(PathBuf, RegistryAuth)> {
    let (raw, auth) = decode_credentials(creds_b64)?;

    let config_dir = working_dir.join(DOCKER_CONFIG_DIR);
    std::fs::create_dir_all(&config_dir).map_err(|e| RunnerError::Io {
        path: config_dir.clone(),
        source: e,
    })?;

    let config_file = config_dir.join(DOCKER_CONFIG_FILE);
    std::fs::write(&config_file, &raw).map_err(|e| RunnerError::Io {
        path: config_file.clone(),
        source: e,
    })?;
    tracing::debug!(path = %config_file.display(), "wrote registry auth config");

    Ok((config_dir, auth))
}

/// Writes a decoded CA certificate to `<certs_dir>/<hostname>/ca.crt`,
/// creating directories as needed, and returns the written path.
///
/// # Errors
///
/// Returns [`RunnerError::InvalidCertificate`] if the input is not valid
/// base64, or [`RunnerError::Io`] on a filesystem failure.
pub fn write_ca_cert(certs_dir: &Path, hostname: &str, cert_b64: &str) -> Result<PathBuf> {
    let raw = decode_b64(cert_b64).map_err(|e| RunnerError::InvalidCertificate {
        message: format!("base64 decode failed: {e}"),
    })?;

    let host_dir = certs_dir.join(hostname);
    std::fs::create_dir_all(&host_dir).map_err(|e| RunnerError::Io {
        path: host_dir.clone(),
        source: e,
    })?;

    let cert_file = host_dir.join(CA_CERT_FILE);
    std::fs::write(&cert_file, &raw).map_err(|e| RunnerError::Io {
        path: cert_file.clone(),
        source: e,
    })?;
    tracing::debug!(hostname, path = %cert_file.display(), "registered registry CA cert");

    Ok(cert_file)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    fn encode(data: &str) -> String {
        STANDARD.encode(data)
    }

    #[test]
    fn decodes_valid_credentials() {
        let json = r#"{"auths":{"registry.example.com":{}}}"#;
        let (raw, auth) = decode_credentials(&encode(json)).expect("valid creds");
        assert_eq!(raw, json.as_bytes());
        assert!(auth.auths.contains_key("registry.example.com"));
    }

    #[test]
    fn tolerates_wrapped_base64() {
        let json = r#"{"auths":{"registry.example.com":{}}}"#;
        let mut wrapped = encode(json);
        wrapped.insert(20, '\n');
        wrapped.push('\n');
        let (raw, _) = decode_credentials(&wrapped).expect("wrapped base64 decodes");
        assert_eq!(raw, json.as_bytes());
    }

    #[test]
    fn rejects_bad_base64_credentials() {
        let err = decode_credentials("not-base-64!!!").expect_err("bad base64");
        assert!(matches!(err, RunnerError::InvalidCredentials { .. }));
    }

    #[test]
    fn rejects_non_json_credentials() {
        let err = decode_credentials(&encode("just some text")).expect_err("bad JSON");
        assert!(matches!(err, RunnerError::InvalidCredentials { .. }));
    }

    #[test]
    fn malformed_credentials_write_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err =
            write_docker_config(dir.path(), &encode("not json")).expect_err("parse should fail");
        assert!(matches!(err, RunnerError::InvalidCredentials { .. }));
        assert!(!dir.path().join(DOCKER_CONFIG_DIR).exists());
    }

    #[test]
    fn config_file_is_byte_identical_to_decoded_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let json = r#"{"auths":{"host1":{}}}"#;
        let (config_dir, auth) =
            write_docker_config(dir.path(), &encode(json)).expect("write config");
        assert_eq!(config_dir, dir.path().join(DOCKER_CONFIG_DIR));
        let written =
            std::fs::read(config_dir.join(DOCKER_CONFIG_FILE)).expect("config file exists");
        assert_eq!(written, json.as_bytes());
        assert_eq!(auth.auths.len(), 1);
    }

    #[test]
    fn ca_cert_lands_under_hostname_dir() {
        let certs = tempfile::tempdir().expect("tempdir");
        let path =
            write_ca_cert(certs.path(), "host1", &encode("junk")).expect("cert should write");
        assert_eq!(path, certs.path().join("host1").join(CA_CERT_FILE));
        assert_eq!(std::fs::read(path).expect("cert exists"), b"junk");
    }

    #[test]
    fn rejects_bad_base64_certificate() {
        let certs = tempfile::tempdir().expect("tempdir");
        let err = write_ca_cert(certs.path(), "host1", "###").expect_err("bad base64");
        assert!(matches!(err, RunnerError::InvalidCertificate { .. }));
        assert!(!certs.path().join("host1").exists());
    }
}
