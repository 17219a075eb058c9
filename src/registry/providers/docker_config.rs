use anyhow::Context;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::Value;

use crate::registry::diagnostics::{CredentialDiagnostics, TracingDiagnostics};
use crate::registry::models::RegistryCredential;
use crate::registry::CredentialProvider;

/// Name of the config section this provider searches, as reported to the
/// diagnostics sink
const AUTHS_SECTION: &str = "auths";

/// Credential provider backed by a Docker-style config document
///
/// Reads the `auths` section of a parsed `config.json`, the format written
/// by `docker login` and understood by most container tools:
///
/// ```json
/// {
///   "auths": {
///     "ghcr.io": { "auth": "dXNlcjpwYXNz" },
///     "https://index.docker.io/v1/": { "identitytoken": "..." }
///   }
/// }
/// ```
///
/// Registry keys are stored either as bare hostnames or with an explicit
/// scheme; both forms match a hostname query, case-insensitively. When
/// several keys match (e.g. `"ghcr.io"` and `"https://ghcr.io"`), the last
/// one in document order wins, mirroring how a merged config file resolves
/// duplicate keys.
///
/// The provider snapshots the `auths` subtree at construction and is
/// immutable afterwards. Malformed documents or entries never fail
/// construction or resolution; they resolve to `None` so the caller can fall
/// through to another credential source.
pub struct DockerConfigProvider {
    /// The `auths` subtree, or `None` when the document has no such property
    auths: Option<Value>,
    diagnostics: Box<dyn CredentialDiagnostics>,
}

impl DockerConfigProvider {
    /// Create a provider over a parsed config document
    ///
    /// Only the top-level `auths` property is retained. Never fails,
    /// whatever the document's shape.
    pub fn new(document: &Value, diagnostics: Box<dyn CredentialDiagnostics>) -> Self {
        Self {
            auths: document.get("auths").cloned(),
            diagnostics,
        }
    }

    /// Create a provider over a parsed config document, reporting
    /// diagnostics through `tracing`
    pub fn from_document(document: &Value) -> Self {
        Self::new(document, Box::new(TracingDiagnostics))
    }

    /// Parse a config document from JSON text and create a provider over it
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let document: Value =
            serde_json::from_str(json).context("Failed to parse Docker config document")?;
        Ok(Self::from_document(&document))
    }

    /// The retained `auths` entries, when they form a JSON object
    fn entries(&self) -> Option<&serde_json::Map<String, Value>> {
        match &self.auths {
            Some(Value::Object(entries)) => Some(entries),
            _ => None,
        }
    }
}

/// Whether a registry key from an `auths` section refers to the given
/// hostname
///
/// Keys match either exactly (`"ghcr.io"`) or with an explicit scheme prefix
/// (`"https://ghcr.io"`); comparison is case-insensitive in both forms.
fn matches_registry_key(key: &str, hostname: &str) -> bool {
    let key = key.to_lowercase();
    let hostname = hostname.to_lowercase();
    key == hostname || key.ends_with(&format!("://{}", hostname))
}

impl CredentialProvider for DockerConfigProvider {
    fn is_applicable(&self, hostname: &str) -> bool {
        match self.entries() {
            Some(entries) => entries.keys().any(|key| matches_registry_key(key, hostname)),
            None => false,
        }
    }

    fn get_credential(&self, hostname: &str) -> Option<RegistryCredential> {
        self.diagnostics.searching(AUTHS_SECTION);

        if !self.is_applicable(hostname) {
            return None;
        }

        // Last matching entry in document order wins: later entries override
        // earlier ones with the same logical hostname.
        let (registry, entry) = self
            .entries()?
            .iter()
            .filter(|(key, _)| matches_registry_key(key, hostname))
            .last()?;

        let entry = entry.as_object()?;

        // A registry-issued identity token replaces the username/password
        // pair entirely. A non-string value here is ignored and the auth
        // field is consulted instead.
        if let Some(token) = entry.get("identitytoken") {
            if let Some(token) = token.as_str() {
                self.diagnostics.found(hostname);
                return Some(RegistryCredential::identity_token(registry, token));
            }
        }

        // Otherwise the auth field holds "username:password", base64
        // encoded; only the first colon separates the two.
        let auth = entry.get("auth")?.as_str()?;
        if auth.is_empty() {
            return None;
        }

        let decoded = BASE64.decode(auth).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        self.diagnostics.found(hostname);
        Some(RegistryCredential::basic(registry, username, password))
    }
}
