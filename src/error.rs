//! Error types.
//!
//! Business failures reported by the vault are not errors: they come back as
//! [`OperationResult::Failure`](crate::core::domain::OperationResult). The
//! variants here cover everything that means "something is broken".

use thiserror::Error;

/// Top-level error for all cardvault operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The call to the remote service itself failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    #[error("service fault {code}: {reason}")]
    Fault { code: String, reason: String },

    #[error("could not decode reply: {0}")]
    Decode(String),

    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// The reply could not be read into the shape the operation expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("reply is missing `{path}`")]
    MissingField { path: String },

    #[error("reply field `{path}` is not {expected}")]
    UnexpectedType {
        path: String,
        expected: &'static str,
    },

    #[error("reply field `{path}` has invalid value `{value}`")]
    InvalidValue { path: String, value: String },
}

/// The caller broke an input contract before anything was sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("card carries a token; new cards must not have one (use update instead)")]
    TokenOnAdd,

    #[error("card has no token; updates must name the stored card")]
    MissingToken,

    #[error("vault token cannot be empty")]
    EmptyToken,
}

/// Configuration loading and validation failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no configuration found (looked in {0})")]
    NotFound(String),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing config value: {0}")]
    MissingValue(&'static str),

    #[error("invalid config value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error came from the transport or reply parsing, as
    /// opposed to caller input or local setup.
    pub fn is_operational(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Structural(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_error_message_names_path() {
        let err = StructuralError::MissingField {
            path: "envelope.body".to_string(),
        };
        assert_eq!(err.to_string(), "reply is missing `envelope.body`");
    }

    #[test]
    fn test_transport_and_structural_are_operational() {
        let transport: Error = TransportError::Timeout.into();
        let structural: Error = StructuralError::MissingField {
            path: "x".to_string(),
        }
        .into();
        let contract: Error = ContractError::MissingToken.into();

        assert!(transport.is_operational());
        assert!(structural.is_operational());
        assert!(!contract.is_operational());
    }

    #[test]
    fn test_transparent_display() {
        let err: Error = TransportError::Status(503).into();
        assert_eq!(err.to_string(), "unexpected HTTP status: 503");
    }
}
