pub mod diagnostics;
pub mod models;
pub mod providers;

pub use diagnostics::{CredentialDiagnostics, NoopDiagnostics, TracingDiagnostics};
pub use models::RegistryCredential;
pub use providers::DockerConfigProvider;

/// Trait for registry credential providers
///
/// A provider is one interchangeable source of registry credentials; callers
/// typically hold several (config file, OS credential store, environment) and
/// try them in order. `is_applicable` is a cheap pre-check so a caller can
/// skip providers that cannot know the hostname at all; an absent result from
/// `get_credential` means "tried, found nothing" and the caller moves on to
/// the next provider.
///
/// Providers are immutable after construction, so a single instance can be
/// shared across threads as an `Arc<dyn CredentialProvider>`.
pub trait CredentialProvider: Send + Sync {
    /// Whether this provider may hold credentials for the given hostname
    ///
    /// `hostname` is a bare registry host, without scheme or path
    /// (e.g. "ghcr.io", "localhost:5000").
    fn is_applicable(&self, hostname: &str) -> bool;

    /// Resolve credentials for the given hostname
    ///
    /// Returns `None` when this provider has no usable credential for the
    /// hostname, including every malformed-entry case; resolution never
    /// fails with an error.
    fn get_credential(&self, hostname: &str) -> Option<RegistryCredential>;
}
