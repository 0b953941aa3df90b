//! Vault token type.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Opaque handle for a stored card, issued by the vault on add
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct VaultToken(String);

impl VaultToken {
    /// Wrap a token string. Empty tokens are rejected; nothing else is
    /// assumed about the format.
    pub fn new(token: impl Into<String>) -> Result<Self, ContractError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ContractError::EmptyToken);
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for VaultToken {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for VaultToken {
    type Error = ContractError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::new(token)
    }
}

impl From<VaultToken> for String {
    fn from(token: VaultToken) -> Self {
        token.0
    }
}

impl AsRef<str> for VaultToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VaultToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
