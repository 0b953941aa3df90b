//! Cardvault - store and retrieve cards in a remote credit-card vault.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cardvault::cli::output;
use cardvault::cli::{execute, Cli};
use cardvault::core::constants;
use cardvault::error::{ConfigError, Error, TransportError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("cardvault=debug")
        } else {
            EnvFilter::new("cardvault=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match execute(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            let suggestion = match &e {
                Error::Config(ConfigError::NotFound(_)) => {
                    Some("create .cardvault.toml or pass --config <path>")
                }
                Error::Config(ConfigError::MissingValue("credentials.password")) => {
                    Some("set CARDVAULT_PASSWORD or add password to [credentials]")
                }
                Error::Transport(TransportError::Timeout) => {
                    Some("raise service.timeout_secs or check the endpoint")
                }
                Error::Transport(TransportError::Network(_)) => {
                    Some("check service.endpoint in your config")
                }
                Error::Structural(_) => {
                    Some("the reply did not match the expected schema; check service.key_case")
                }
                _ => None,
            };

            output::error(&e.to_string());
            if let Some(hint) = suggestion {
                output::hint(hint);
            }
            std::process::exit(1);
        }
    }
}
