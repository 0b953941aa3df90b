//! Client credentials type.
//!
//! Service-issued identity sent with every request.

use serde_json::{json, Value};
use zeroize::Zeroizing;

/// Credentials issued by the vault operator
#[derive(Clone)]
pub struct ClientCredentials {
    client_code: String,
    user_name: String,
    password: Zeroizing<String>,
}

impl ClientCredentials {
    /// Create credentials from their three parts
    pub fn new(
        client_code: impl Into<String>,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_code: client_code.into(),
            user_name: user_name.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Create credentials from a password that is already zeroizing
    pub fn with_secret(
        client_code: impl Into<String>,
        user_name: impl Into<String>,
        password: Zeroizing<String>,
    ) -> Self {
        Self {
            client_code: client_code.into(),
            user_name: user_name.into(),
            password,
        }
    }

    pub fn client_code(&self) -> &str {
        &self.client_code
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Wire form with snake_case keys
    pub fn to_wire_form(&self) -> Value {
        json!({
            "client_code": self.client_code,
            "password": self.password.as_str(),
            "user_name": self.user_name,
        })
    }
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_code", &self.client_code)
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_fields() {
        let creds = ClientCredentials::new("YachtClub", "operator", "s3cret");
        let wire = creds.to_wire_form();

        assert_eq!(wire["client_code"], "YachtClub");
        assert_eq!(wire["user_name"], "operator");
        assert_eq!(wire["password"], "s3cret");
        assert_eq!(wire.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_with_secret_keeps_password() {
        let creds = ClientCredentials::with_secret(
            "YachtClub",
            "operator",
            Zeroizing::new("s3cret".to_string()),
        );
        assert_eq!(creds.password(), "s3cret");
        assert_eq!(creds.to_wire_form()["password"], "s3cret");
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = ClientCredentials::new("YachtClub", "operator", "s3cret");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("operator"));
        assert!(!debug.contains("s3cret"));
    }
}
