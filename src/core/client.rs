//! Vault client.
//!
//! Each operation builds its message, invokes the transport once and reads
//! the reply. The client keeps no per-call state, so one instance can serve
//! any number of threads.

use serde_json::Value;
use tracing::debug;

use super::casing::KeyCase;
use super::domain::{
    ClientCredentials, CreditCard, CustomerIdentifier, OperationResult, VaultToken,
};
use super::operation::Operation;
use super::request::RequestBuilder;
use super::response;
use super::transport::Transport;
use crate::error::Result;

/// Client for the credit-card vault service
#[derive(Debug)]
pub struct VaultClient<T> {
    transport: T,
    builder: RequestBuilder,
}

impl<T: Transport> VaultClient<T> {
    /// Client using lowerCamel field keys
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            builder: RequestBuilder::default(),
        }
    }

    /// Use a different field key casing
    pub fn with_key_case(mut self, case: KeyCase) -> Self {
        self.builder = RequestBuilder::new(case);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Look up a stored card by token.
    ///
    /// An unknown token is a `Failure` reported by the vault, not an error.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the call fails, or `StructuralError` if
    /// the reply cannot be read.
    pub fn retrieve_card(
        &self,
        token: &VaultToken,
        credentials: &ClientCredentials,
        customer: &CustomerIdentifier,
    ) -> Result<OperationResult<CreditCard>> {
        debug!(customer = %customer, "retrieving stored card");
        let message = self.builder.retrieve(token, credentials, customer);
        let reply = self.call(Operation::GetStoredCreditCard, &message)?;
        Ok(response::interpret_retrieve(&reply)?)
    }

    /// Store a new card. On success the vault returns the token the caller
    /// keeps for later retrieval or update.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::TokenOnAdd` if the card already has a token,
    /// without contacting the service.
    pub fn add_card(
        &self,
        card: &CreditCard,
        credentials: &ClientCredentials,
        customer: &CustomerIdentifier,
    ) -> Result<OperationResult<VaultToken>> {
        debug!(customer = %customer, card = %card.masked_number(), "adding card");
        let message = self.builder.add(card, credentials, customer)?;
        let reply = self.call(Operation::AddStoredCreditCard, &message)?;
        Ok(response::interpret_add(&reply)?)
    }

    /// Overwrite the stored card named by `card.token()`.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::MissingToken` if the card has no token,
    /// without contacting the service.
    pub fn update_card(
        &self,
        card: &CreditCard,
        credentials: &ClientCredentials,
        customer: &CustomerIdentifier,
    ) -> Result<OperationResult<()>> {
        debug!(customer = %customer, card = %card.masked_number(), "updating card");
        let message = self.builder.update(card, credentials, customer)?;
        let reply = self.call(Operation::UpdateStoredCreditCard, &message)?;
        Ok(response::interpret_update(&reply)?)
    }

    fn call(&self, operation: Operation, message: &Value) -> Result<Value> {
        debug!(
            operation = %operation,
            transport = self.transport.name(),
            "invoking vault operation"
        );
        Ok(self.transport.invoke(operation, message)?)
    }
}

#[cfg(feature = "soap")]
impl VaultClient<super::transport::SoapTransport> {
    /// SOAP client for the service described by `config`
    pub fn from_config(config: &super::config::Config) -> Result<Self> {
        let transport = super::transport::SoapTransport::from_config(&config.service)?;
        Ok(Self::new(transport).with_key_case(config.service.key_case))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::ScriptedTransport;
    use crate::error::{ContractError, Error, StructuralError, TransportError};
    use serde_json::json;

    fn credentials() -> ClientCredentials {
        ClientCredentials::new("YachtClub", "operator", "s3cret")
    }

    fn customer() -> CustomerIdentifier {
        CustomerIdentifier::new("Marina", "Dock7", "DEFAULT")
    }

    fn card() -> CreditCard {
        CreditCard::new("4111111111111111", 10, 2030, "CARDHOLDER NAME", "44311")
    }

    #[test]
    fn test_add_returns_token() {
        let transport = ScriptedTransport::new().result(
            Operation::AddStoredCreditCard,
            json!({ "succeeded": true, "token": "C1000" }),
        );
        let client = VaultClient::new(transport);

        let result = client.add_card(&card(), &credentials(), &customer()).unwrap();
        assert_eq!(
            result,
            OperationResult::Success(VaultToken::new("C1000").unwrap())
        );

        let sent = client.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, Operation::AddStoredCreditCard);
        assert!(sent[0].1["addStoredCardParams"]["creditCard"]
            .get("token")
            .is_none());
    }

    #[test]
    fn test_contract_violation_skips_transport() {
        let client = VaultClient::new(ScriptedTransport::new());

        let err = client
            .update_card(&card(), &credentials(), &customer())
            .unwrap_err();
        assert!(matches!(err, Error::Contract(ContractError::MissingToken)));
        assert!(client.transport().sent().is_empty());
    }

    #[test]
    fn test_transport_error_is_not_business_failure() {
        let transport = ScriptedTransport::new()
            .fail(Operation::GetStoredCreditCard, TransportError::Timeout);
        let client = VaultClient::new(transport);
        let token = VaultToken::new("C1").unwrap();

        let err = client
            .retrieve_card(&token, &credentials(), &customer())
            .unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::Timeout)));
    }

    #[test]
    fn test_malformed_reply_is_structural() {
        let transport = ScriptedTransport::new()
            .reply(Operation::UpdateStoredCreditCard, json!({ "envelope": {} }));
        let client = VaultClient::new(transport);
        let card = card().with_token(VaultToken::new("C1").unwrap());

        let err = client
            .update_card(&card, &credentials(), &customer())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Structural(StructuralError::MissingField { .. })
        ));
    }

    #[test]
    fn test_key_case_applies_to_messages() {
        let transport = ScriptedTransport::new().result(
            Operation::GetStoredCreditCard,
            json!({ "succeeded": false, "failure_reason": "Unknown token" }),
        );
        let client = VaultClient::new(transport).with_key_case(KeyCase::UpperCamel);
        let token = VaultToken::new("C404").unwrap();

        let result = client
            .retrieve_card(&token, &credentials(), &customer())
            .unwrap();
        assert_eq!(result.failure_reason(), Some("Unknown token"));

        let message = client.transport().last_message().unwrap();
        assert_eq!(message["getStoredCreditCardParams"]["RetrieveCardNumber"], true);
    }
}
