use serde::{Deserialize, Serialize};

/// Credentials resolved for a container registry
///
/// Exactly one of the username/password pair or the identity token is
/// populated. Registries that issued an identity token expect it to be used
/// instead of basic credentials, so the two never appear together.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RegistryCredential {
    /// The registry key the credential was stored under, as written in the
    /// config document (e.g. "ghcr.io" or "https://index.docker.io/v1/")
    registry: String,
    /// Username for basic authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    /// Password for basic authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    /// Registry-issued bearer token that replaces username/password
    #[serde(rename = "identitytoken", skip_serializing_if = "Option::is_none")]
    identity_token: Option<String>,
}

impl RegistryCredential {
    /// Create a credential carrying a username/password pair
    pub fn basic(
        registry: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            registry: registry.into(),
            username: Some(username.into()),
            password: Some(password.into()),
            identity_token: None,
        }
    }

    /// Create a credential carrying a registry-issued identity token
    pub fn identity_token(registry: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            registry: registry.into(),
            username: None,
            password: None,
            identity_token: Some(token.into()),
        }
    }

    /// The registry key this credential was stored under
    pub fn registry(&self) -> &str {
        &self.registry
    }

    /// Username for basic authentication, if this is a basic credential
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Password for basic authentication, if this is a basic credential
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The identity token, if this is a token credential
    pub fn token(&self) -> Option<&str> {
        self.identity_token.as_deref()
    }
}
