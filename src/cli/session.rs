//! Per-invocation state shared by the card commands.
//!
//! Loads the configuration, resolves the password and connects the
//! configured transport.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::client::VaultClient;
use crate::core::config::Config;
use crate::core::domain::{ClientCredentials, CustomerIdentifier};
use crate::core::request::{Request, RequestBuilder};
use crate::core::transport::Transport;
use crate::error::{ConfigError, Result};

/// Placeholder sent in place of the password in dry runs.
const REDACTED: &str = "********";

pub struct Session {
    config: Config,
    customer: CustomerIdentifier,
}

impl Session {
    /// Load configuration for this invocation
    pub fn open(config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path)?;
        let customer = config.customer_identifier();
        Ok(Self { config, customer })
    }

    pub fn customer(&self) -> &CustomerIdentifier {
        &self.customer
    }

    /// Credentials with the real password.
    ///
    /// Uses the config file, then `$CARDVAULT_PASSWORD`, then prompts when
    /// attached to a terminal.
    pub fn credentials(&self) -> Result<ClientCredentials> {
        if let Some(password) = self.config.password() {
            return Ok(self.config.credentials_with(password));
        }

        if !io::stdin().is_terminal() {
            return Err(ConfigError::MissingValue("credentials.password").into());
        }

        let password = Password::new()
            .with_prompt(format!("Password for {}", self.config.credentials.user_name))
            .interact()
            .map(Zeroizing::new)?;
        Ok(self.config.credentials_with(password))
    }

    /// Client over the configured transport
    pub fn client(&self) -> Result<VaultClient<Box<dyn Transport>>> {
        let transport = connect(&self.config)?;
        debug!(transport = transport.name(), "transport ready");
        Ok(VaultClient::new(transport).with_key_case(self.config.service.key_case))
    }

    /// Print the message `request` would send, with the password masked
    pub fn print_message(&self, request: Request<'_>) -> Result<()> {
        let credentials = self.config.credentials_with(Zeroizing::new(REDACTED.to_string()));
        let message = RequestBuilder::new(self.config.service.key_case).build(
            request,
            &credentials,
            &self.customer,
        )?;

        let printed = serde_json::json!({
            "operation": request.operation().action(),
            "endpoint": self.config.service.endpoint,
            "message": message,
        });
        println!("{}", serde_json::to_string_pretty(&printed)?);
        Ok(())
    }
}

#[cfg(feature = "soap")]
fn connect(config: &Config) -> Result<Box<dyn Transport>> {
    let transport = crate::core::transport::SoapTransport::from_config(&config.service)?;
    Ok(Box::new(transport))
}

#[cfg(not(feature = "soap"))]
fn connect(_config: &Config) -> Result<Box<dyn Transport>> {
    Err(crate::error::TransportError::Unavailable(
        "SOAP transport not compiled. Rebuild with: cargo install cardvault --features soap"
            .to_string(),
    )
    .into())
}
