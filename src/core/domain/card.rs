//! Credit card type.
//!
//! The postal code lives in a nested billing address in wire form. The
//! remote schema has no flat postal code field.

use serde_json::{json, Map, Value};

use super::VaultToken;

/// Billing address attached to a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingAddress {
    postal_code: String,
}

impl BillingAddress {
    pub fn new(postal_code: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
        }
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn to_wire_form(&self) -> Value {
        json!({ "postal_code": self.postal_code })
    }
}

/// A credit card as stored in, or sent to, the vault
#[derive(Clone, PartialEq, Eq)]
pub struct CreditCard {
    card_account_number: String,
    expiration_month: u8,
    expiration_year: u16,
    name_on_card: String,
    billing_address: BillingAddress,
    card_type: Option<String>,
    token: Option<VaultToken>,
}

impl CreditCard {
    /// Create a card with no token, ready to be added
    pub fn new(
        card_account_number: impl Into<String>,
        expiration_month: u8,
        expiration_year: u16,
        name_on_card: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            card_account_number: card_account_number.into(),
            expiration_month,
            expiration_year,
            name_on_card: name_on_card.into(),
            billing_address: BillingAddress::new(postal_code),
            card_type: None,
            token: None,
        }
    }

    /// Attach the token of the stored card this value replaces
    pub fn with_token(mut self, token: VaultToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Card brand as reported by the vault (e.g. "Visa")
    pub fn with_card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    pub fn card_account_number(&self) -> &str {
        &self.card_account_number
    }

    pub fn expiration_month(&self) -> u8 {
        self.expiration_month
    }

    pub fn expiration_year(&self) -> u16 {
        self.expiration_year
    }

    pub fn name_on_card(&self) -> &str {
        &self.name_on_card
    }

    pub fn billing_address(&self) -> &BillingAddress {
        &self.billing_address
    }

    pub fn postal_code(&self) -> &str {
        self.billing_address.postal_code()
    }

    pub fn card_type(&self) -> Option<&str> {
        self.card_type.as_deref()
    }

    pub fn token(&self) -> Option<&VaultToken> {
        self.token.as_ref()
    }

    /// Account number with all but the last four digits hidden
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.card_account_number.chars().collect();
        let visible = digits.len().min(4);
        let hidden = digits.len() - visible;
        let tail: String = digits[hidden..].iter().collect();
        format!("{}{}", "*".repeat(hidden), tail)
    }

    /// Wire form with snake_case keys.
    ///
    /// `token` appears only when the card carries one. The card type is
    /// assigned by the vault and is never sent.
    pub fn to_wire_form(&self) -> Value {
        let mut wire = Map::new();
        wire.insert(
            "billing_address".to_string(),
            self.billing_address.to_wire_form(),
        );
        wire.insert(
            "card_account_number".to_string(),
            Value::from(self.card_account_number.as_str()),
        );
        wire.insert(
            "expiration_month".to_string(),
            Value::from(self.expiration_month),
        );
        wire.insert(
            "expiration_year".to_string(),
            Value::from(self.expiration_year),
        );
        wire.insert(
            "name_on_card".to_string(),
            Value::from(self.name_on_card.as_str()),
        );
        if let Some(token) = &self.token {
            wire.insert("token".to_string(), Value::from(token.as_str()));
        }
        Value::Object(wire)
    }
}

impl std::fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreditCard")
            .field("card_account_number", &self.masked_number())
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .field("name_on_card", &self.name_on_card)
            .field("billing_address", &self.billing_address)
            .field("card_type", &self.card_type)
            .field("token", &self.token)
            .finish()
    }
}
