//! Configuration file management.
//!
//! Reads and validates `.cardvault.toml`: the service endpoint, the client
//! credentials and the customer scope used for every request.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::casing::KeyCase;
use crate::core::constants;
use crate::core::domain::{ClientCredentials, CustomerIdentifier};
use crate::error::{ConfigError, Result};

/// Contents of `.cardvault.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub credentials: CredentialsConfig,
    pub customer: CustomerConfig,
}

/// Where and how to reach the vault service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service URL requests are posted to
    pub endpoint: String,
    /// Target namespace of the service contract
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Prefix of the `SOAPAction` header; the namespace when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_prefix: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Casing of field keys inside the request envelope
    #[serde(default)]
    pub key_case: KeyCase,
}

/// Service-issued client identity
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub client_code: String,
    pub user_name: String,
    /// Falls back to `$CARDVAULT_PASSWORD` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Zeroizing<String>>,
}

/// Tenant scope cards are stored under
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerConfig {
    pub merchant_code: String,
    pub location_code: String,
    #[serde(default = "default_customer_code")]
    pub customer_code: String,
}

fn default_namespace() -> String {
    constants::DEFAULT_NAMESPACE.to_string()
}

fn default_timeout() -> u64 {
    constants::DEFAULT_TIMEOUT_SECS
}

fn default_customer_code() -> String {
    constants::DEFAULT_CUSTOMER_CODE.to_string()
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("client_code", &self.client_code)
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Candidate config paths, in lookup order.
    ///
    /// An explicit path wins, then `$CARDVAULT_CONFIG`, then
    /// `./.cardvault.toml`, then `~/.cardvault/config.toml`.
    pub fn search_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
        if let Some(path) = explicit {
            return vec![path.to_path_buf()];
        }
        if let Ok(path) = std::env::var(constants::CONFIG_ENV) {
            if !path.is_empty() {
                return vec![PathBuf::from(path)];
            }
        }

        let mut paths = vec![PathBuf::from(constants::CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(constants::GLOBAL_DIR)
                    .join(constants::GLOBAL_CONFIG_FILE),
            );
        }
        paths
    }

    /// Find the first existing config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` listing every path tried.
    pub fn locate(explicit: Option<&Path>) -> Result<PathBuf> {
        let candidates = Self::search_paths(explicit);
        if let Some(found) = candidates.iter().find(|p| p.is_file()) {
            return Ok(found.clone());
        }

        let tried = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(ConfigError::NotFound(tried).into())
    }

    /// Locate and load the configuration
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::locate(explicit)?;
        Self::load_from(&path)
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents =
            Zeroizing::new(std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?);
        let config = Self::parse(&contents)?;

        debug!(
            endpoint = %config.service.endpoint,
            customer = %config.customer_identifier(),
            "config loaded"
        );
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");
        let contents = Zeroizing::new(toml::to_string_pretty(self).map_err(ConfigError::Serialize)?);
        std::fs::write(path, contents.as_bytes())?;
        Ok(())
    }

    /// Validate the configuration contents
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingValue` for blank required fields and
    /// `ConfigError::InvalidValue` for unusable ones.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("service.endpoint", &self.service.endpoint),
            ("service.namespace", &self.service.namespace),
            ("credentials.client_code", &self.credentials.client_code),
            ("credentials.user_name", &self.credentials.user_name),
            ("customer.merchant_code", &self.customer.merchant_code),
            ("customer.location_code", &self.customer.location_code),
            ("customer.customer_code", &self.customer.customer_code),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingValue(name).into());
            }
        }

        let endpoint = &self.service.endpoint;
        if !endpoint.starts_with("https://") && !endpoint.starts_with("http://") {
            return Err(ConfigError::InvalidValue {
                name: "service.endpoint",
                reason: format!("{} is not an http(s) URL", endpoint),
            }
            .into());
        }

        if self.service.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "service.timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Customer scope for requests
    pub fn customer_identifier(&self) -> CustomerIdentifier {
        CustomerIdentifier::new(
            &self.customer.merchant_code,
            &self.customer.location_code,
            &self.customer.customer_code,
        )
    }

    /// Password from the file, else from `$CARDVAULT_PASSWORD`
    pub fn password(&self) -> Option<Zeroizing<String>> {
        self.credentials
            .password
            .clone()
            .filter(|p| !p.is_empty())
            .or_else(|| {
                std::env::var(constants::PASSWORD_ENV)
                    .ok()
                    .map(Zeroizing::new)
                    .filter(|p| !p.is_empty())
            })
    }

    /// Client credentials using the given password
    pub fn credentials_with(&self, password: Zeroizing<String>) -> ClientCredentials {
        ClientCredentials::with_secret(
            &self.credentials.client_code,
            &self.credentials.user_name,
            password,
        )
    }
}
