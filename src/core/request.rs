//! Request message construction.
//!
//! Builds the envelope every operation sends:
//!
//! ```text
//! {
//!   clientCredentials: { clientCode, password, userName },
//!   <paramsKey>: { ...operation fields..., customerIdentifier: { ... } }
//! }
//! ```

use serde_json::{Map, Value};

use super::casing::{camelize_keys, KeyCase};
use super::domain::{ClientCredentials, CreditCard, CustomerIdentifier, VaultToken};
use super::operation::Operation;
use crate::error::ContractError;

/// Operation-specific input
#[derive(Debug, Clone, Copy)]
pub enum Request<'a> {
    Retrieve(&'a VaultToken),
    Add(&'a CreditCard),
    Update(&'a CreditCard),
}

impl Request<'_> {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Retrieve(_) => Operation::GetStoredCreditCard,
            Self::Add(_) => Operation::AddStoredCreditCard,
            Self::Update(_) => Operation::UpdateStoredCreditCard,
        }
    }

    /// `retrieve_card_number` is always true: callers get the full number.
    fn retrieve_params(token: &VaultToken) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("retrieve_card_number".to_string(), Value::Bool(true));
        params.insert("token".to_string(), Value::from(token.as_str()));
        params
    }

    /// Operation fields in snake_case, without the customer identifier
    fn params(&self) -> Result<Map<String, Value>, ContractError> {
        let mut params = Map::new();
        match self {
            Self::Retrieve(token) => return Ok(Self::retrieve_params(token)),
            Self::Add(card) => {
                if card.token().is_some() {
                    return Err(ContractError::TokenOnAdd);
                }
                params.insert("credit_card".to_string(), card.to_wire_form());
            }
            Self::Update(card) => {
                if card.token().is_none() {
                    return Err(ContractError::MissingToken);
                }
                params.insert("credit_card".to_string(), card.to_wire_form());
            }
        }
        Ok(params)
    }
}

/// Pure translation from domain values to wire messages
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestBuilder {
    case: KeyCase,
}

impl RequestBuilder {
    pub fn new(case: KeyCase) -> Self {
        Self { case }
    }

    pub fn key_case(&self) -> KeyCase {
        self.case
    }

    /// Build the full message for a request.
    ///
    /// # Errors
    ///
    /// Returns `ContractError` when an add carries a token or an update
    /// lacks one.
    pub fn build(
        &self,
        request: Request<'_>,
        credentials: &ClientCredentials,
        customer: &CustomerIdentifier,
    ) -> Result<Value, ContractError> {
        let params = request.params()?;
        Ok(self.envelope(request.operation(), params, credentials, customer))
    }

    pub fn retrieve(
        &self,
        token: &VaultToken,
        credentials: &ClientCredentials,
        customer: &CustomerIdentifier,
    ) -> Value {
        let request = Request::Retrieve(token);
        self.envelope(
            request.operation(),
            Request::retrieve_params(token),
            credentials,
            customer,
        )
    }

    pub fn add(
        &self,
        card: &CreditCard,
        credentials: &ClientCredentials,
        customer: &CustomerIdentifier,
    ) -> Result<Value, ContractError> {
        self.build(Request::Add(card), credentials, customer)
    }

    pub fn update(
        &self,
        card: &CreditCard,
        credentials: &ClientCredentials,
        customer: &CustomerIdentifier,
    ) -> Result<Value, ContractError> {
        self.build(Request::Update(card), credentials, customer)
    }

    fn envelope(
        &self,
        operation: Operation,
        mut params: Map<String, Value>,
        credentials: &ClientCredentials,
        customer: &CustomerIdentifier,
    ) -> Value {
        params.insert(
            "customer_identifier".to_string(),
            customer.to_wire_form(),
        );

        let mut message = Map::new();
        message.insert(
            "clientCredentials".to_string(),
            camelize_keys(credentials.to_wire_form(), self.case),
        );
        message.insert(
            operation.params_key().to_string(),
            camelize_keys(Value::Object(params), self.case),
        );
        Value::Object(message)
    }
}
