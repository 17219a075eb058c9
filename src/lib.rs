//! Registry credential resolution from Docker-style config documents
//!
//! This crate resolves authentication credentials for container registries
//! from the `auths` section of a parsed `config.json`, the format written by
//! `docker login`. It takes an already-deserialized JSON document; locating
//! and reading the file from disk is the caller's job.
//!
//! ```
//! use docker_registry_auth::{CredentialProvider, DockerConfigProvider};
//!
//! let provider = DockerConfigProvider::from_json(
//!     r#"{"auths": {"ghcr.io": {"auth": "dXNlcjpwYXNz"}}}"#,
//! )
//! .unwrap();
//!
//! let cred = provider.get_credential("ghcr.io").unwrap();
//! assert_eq!(cred.username(), Some("user"));
//! assert_eq!(cred.password(), Some("pass"));
//! ```

pub mod registry;

pub use registry::{
    CredentialDiagnostics, CredentialProvider, DockerConfigProvider, NoopDiagnostics,
    RegistryCredential, TracingDiagnostics,
};
