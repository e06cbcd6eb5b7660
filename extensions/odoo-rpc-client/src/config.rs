use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

pub const ENV_SERVER_URL: &str = "ODOO_URL";
pub const ENV_DATABASE: &str = "ODOO_DATABASE";
pub const ENV_USERNAME: &str = "ODOO_USERNAME";
pub const ENV_CREDENTIAL: &str = "ODOO_API_KEY";

/// Supplies connection settings to an [`OdooClient`](crate::OdooClient).
///
/// The client snapshots these values when it is created and reads them again
/// on [`test_connection`](crate::OdooClient::test_connection), so a provider
/// backed by mutable storage (a settings screen, a reloaded file) is picked
/// up there.
pub trait ConfigProvider {
    fn server_url(&self) -> String;
    fn database(&self) -> String;
    fn username(&self) -> String;

    /// API key or password.
    fn credential(&self) -> String;

    fn is_fully_configured(&self) -> bool {
        !self.server_url().is_empty()
            && !self.database().is_empty()
            && !self.username().is_empty()
            && !self.credential().is_empty()
    }
}

/// The four values needed to reach and authenticate against an Odoo database.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParameters {
    /// Base URL without a trailing slash, e.g. `https://erp.example.com`.
    #[serde(alias = "url", default)]
    pub server_url: String,

    #[serde(alias = "db", default)]
    pub database: String,

    #[serde(alias = "login", default)]
    pub username: String,

    #[serde(alias = "api_key", alias = "password", default)]
    pub credential: String,
}

impl ConnectionParameters {
    pub fn new(
        server_url: impl Into<String>,
        database: impl Into<String>,
        username: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            database: database.into(),
            username: username.into(),
            credential: credential.into(),
        }
        .normalized()
    }

    /// Snapshots whatever `provider` currently reports.
    pub fn from_provider(provider: &dyn ConfigProvider) -> Self {
        Self::new(
            provider.server_url(),
            provider.database(),
            provider.username(),
            provider.credential(),
        )
    }

    /// Reads `ODOO_URL`, `ODOO_DATABASE`, `ODOO_USERNAME` and `ODOO_API_KEY`.
    /// Unset variables are left empty.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self::new(
            var(ENV_SERVER_URL),
            var(ENV_DATABASE),
            var(ENV_USERNAME),
            var(ENV_CREDENTIAL),
        )
    }

    /// Loads parameters from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigLoadError> {
        let params: ConnectionParameters =
            toml::from_str(content).map_err(|err| ConfigLoadError::Parse(err.to_string()))?;
        Ok(params.normalized())
    }

    /// Names of the settings that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("server_url", &self.server_url),
            ("database", &self.database),
            ("username", &self.username),
            ("credential", &self.credential),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    fn normalized(mut self) -> Self {
        self.server_url = self.server_url.trim().trim_end_matches('/').to_owned();
        self
    }
}

impl ConfigProvider for ConnectionParameters {
    fn server_url(&self) -> String {
        self.server_url.clone()
    }

    fn database(&self) -> String {
        self.database.clone()
    }

    fn username(&self) -> String {
        self.username.clone()
    }

    fn credential(&self) -> String {
        self.credential.clone()
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for std::sync::Arc<P> {
    fn server_url(&self) -> String {
        (**self).server_url()
    }

    fn database(&self) -> String {
        (**self).database()
    }

    fn username(&self) -> String {
        (**self).username()
    }

    fn credential(&self) -> String {
        (**self).credential()
    }

    fn is_fully_configured(&self) -> bool {
        (**self).is_fully_configured()
    }
}

// The credential never ends up in logs.
impl fmt::Debug for ConnectionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParameters")
            .field("server_url", &self.server_url)
            .field("database", &self.database)
            .field("username", &self.username)
            .field(
                "credential",
                &if self.credential.is_empty() { "" } else { "***" },
            )
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigLoadError {
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid connection settings: {0}")]
    Parse(String),
}
