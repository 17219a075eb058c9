use tracing::debug;

/// Observability hooks for credential resolution
///
/// Implementations receive notifications while a provider searches for
/// credentials. They carry no return values and must not influence the
/// resolution outcome; a provider behaves identically under any sink.
pub trait CredentialDiagnostics: Send + Sync {
    /// A provider started searching a section of its credential source
    fn searching(&self, section: &str);

    /// A credential was found for the given registry hostname
    fn found(&self, hostname: &str);
}

/// Diagnostics sink that emits `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl CredentialDiagnostics for TracingDiagnostics {
    fn searching(&self, section: &str) {
        debug!("Searching Docker registry credential in {} section", section);
    }

    fn found(&self, hostname: &str) {
        debug!("Docker registry credential found for {}", hostname);
    }
}

/// Diagnostics sink that discards all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiagnostics;

impl CredentialDiagnostics for NoopDiagnostics {
    fn searching(&self, _section: &str) {}

    fn found(&self, _hostname: &str) {}
}
