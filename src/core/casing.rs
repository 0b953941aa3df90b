//! Key case conversion between domain and wire names.
//!
//! The vault ignores keys it does not recognize, so a mis-cased key is a
//! silent data loss rather than an error. Every key the service reads is
//! listed in [`WIRE_KEYS`] and pinned by tests.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Casing used for field keys inside the request envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyCase {
    /// `retrieveCardNumber`
    #[default]
    LowerCamel,
    /// `RetrieveCardNumber`
    UpperCamel,
}

/// Every snake_case key the service checks, with its lowerCamel wire name.
pub const WIRE_KEYS: &[(&str, &str)] = &[
    ("client_credentials", "clientCredentials"),
    ("client_code", "clientCode"),
    ("user_name", "userName"),
    ("password", "password"),
    ("customer_identifier", "customerIdentifier"),
    ("merchant_code", "merchantCode"),
    ("location_code", "locationCode"),
    ("customer_code", "customerCode"),
    ("retrieve_card_number", "retrieveCardNumber"),
    ("token", "token"),
    ("credit_card", "creditCard"),
    ("billing_address", "billingAddress"),
    ("postal_code", "postalCode"),
    ("card_account_number", "cardAccountNumber"),
    ("expiration_month", "expirationMonth"),
    ("expiration_year", "expirationYear"),
    ("name_on_card", "nameOnCard"),
    ("get_stored_credit_card_params", "getStoredCreditCardParams"),
    ("add_stored_card_params", "addStoredCardParams"),
    ("update_stored_card_params", "updateStoredCardParams"),
];

/// Convert a snake_case key to camel case.
pub fn camelize(key: &str, case: KeyCase) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, part) in key.split('_').filter(|p| !p.is_empty()).enumerate() {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            if i == 0 && case == KeyCase::LowerCamel {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Convert a camel or Pascal case name to snake_case.
///
/// Acronym runs stay together: `SOAPFault` becomes `soap_fault`.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '-' || ch == ' ' {
            out.push('_');
            continue;
        }
        if ch.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.extend(ch.to_lowercase());
    }
    out
}

/// Recursively rename every object key of `value` to camel case.
pub fn camelize_keys(value: Value, case: KeyCase) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (camelize(&k, case), camelize_keys(v, case)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|v| camelize_keys(v, case))
                .collect(),
        ),
        other => other,
    }
}
