//! Reply interpretation.
//!
//! A reply is a nested tree with snake_case keys:
//!
//! ```text
//! envelope.body.<operation>_response.<operation>_result
//!     succeeded       bool, always read first
//!     failure_reason  string, when succeeded is false
//!     token           string, add
//!     credit_card     object, retrieve
//! ```
//!
//! Success is decided only by `succeeded`. A reply that cannot be walked to
//! the result, or lacks the field the flag points at, is a
//! [`StructuralError`], never a `Failure`.

use serde_json::{Map, Value};
use tracing::{trace, warn};

use super::domain::{CreditCard, OperationResult, VaultToken};
use super::operation::Operation;
use crate::error::StructuralError;

type Object = Map<String, Value>;

/// Read a retrieve reply
pub fn interpret_retrieve(reply: &Value) -> Result<OperationResult<CreditCard>, StructuralError> {
    interpret(reply, Operation::GetStoredCreditCard, |result, path| {
        let card = object(result, "credit_card", path)?;
        parse_card(card, &join(path, "credit_card"))
    })
}

/// Read an add reply
pub fn interpret_add(reply: &Value) -> Result<OperationResult<VaultToken>, StructuralError> {
    interpret(reply, Operation::AddStoredCreditCard, |result, path| {
        let token_path = join(path, "token");
        let token = required_text(result, "token", path)?;
        VaultToken::new(token.clone()).map_err(|_| StructuralError::InvalidValue {
            path: token_path,
            value: token,
        })
    })
}

/// Read an update reply
pub fn interpret_update(reply: &Value) -> Result<OperationResult<()>, StructuralError> {
    interpret(reply, Operation::UpdateStoredCreditCard, |_, _| Ok(()))
}

/// Walk to the operation result, read the success flag, then either run
/// `extract` on the result or read the failure reason.
pub fn interpret<T>(
    reply: &Value,
    operation: Operation,
    extract: impl FnOnce(&Object, &str) -> Result<T, StructuralError>,
) -> Result<OperationResult<T>, StructuralError> {
    let (result, path) = result_node(reply, operation)?;

    if succeeded(result, &path)? {
        trace!(operation = %operation, "vault reported success");
        extract(result, &path).map(OperationResult::Success)
    } else {
        let reason = required_text(result, "failure_reason", &path)?;
        warn!(operation = %operation, reason = %reason, "vault reported failure");
        Ok(OperationResult::Failure(reason))
    }
}

/// Locate `envelope.body.<op>_response.<op>_result`
fn result_node(reply: &Value, operation: Operation) -> Result<(&Object, String), StructuralError> {
    let root = reply.as_object().ok_or(StructuralError::UnexpectedType {
        path: "reply".to_string(),
        expected: "an object",
    })?;

    let envelope = object(root, "envelope", "")?;
    let body = object(envelope, "body", "envelope")?;
    let response_key = operation.response_key();
    let response = object(body, &response_key, "envelope.body")?;
    let response_path = join("envelope.body", &response_key);
    let result_key = operation.result_key();
    let result = object(response, &result_key, &response_path)?;

    Ok((result, join(&response_path, &result_key)))
}

/// Read the success indicator, accepting `true`/`false` as booleans or strings
fn succeeded(result: &Object, path: &str) -> Result<bool, StructuralError> {
    let flag_path = join(path, "succeeded");
    match result.get("succeeded") {
        None | Some(Value::Null) => Err(StructuralError::MissingField { path: flag_path }),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => Ok(true),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => Ok(false),
        Some(_) => Err(StructuralError::UnexpectedType {
            path: flag_path,
            expected: "a boolean",
        }),
    }
}

fn parse_card(card: &Object, path: &str) -> Result<CreditCard, StructuralError> {
    let number = required_text(card, "card_account_number", path)?;
    let month: u8 = number_field(card, "expiration_month", path)?;
    let year: u16 = number_field(card, "expiration_year", path)?;
    let name = optional_text(card, "name_on_card", path)?.unwrap_or_default();

    let postal_code = match card.get("billing_address") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) if s.is_empty() => String::new(),
        Some(Value::Object(address)) => {
            optional_text(address, "postal_code", &join(path, "billing_address"))?
                .unwrap_or_default()
        }
        Some(_) => {
            return Err(StructuralError::UnexpectedType {
                path: join(path, "billing_address"),
                expected: "an object",
            })
        }
    };

    let mut parsed = CreditCard::new(number, month, year, name, postal_code);
    if let Some(card_type) = optional_text(card, "card_type", path)? {
        parsed = parsed.with_card_type(card_type);
    }
    if let Some(token) = optional_text(card, "token", path)? {
        // an empty token in a retrieve reply means "not echoed"
        if let Ok(token) = VaultToken::new(token) {
            parsed = parsed.with_token(token);
        }
    }
    Ok(parsed)
}

fn object<'a>(parent: &'a Object, key: &str, path: &str) -> Result<&'a Object, StructuralError> {
    match parent.get(key) {
        None | Some(Value::Null) => Err(StructuralError::MissingField {
            path: join(path, key),
        }),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(StructuralError::UnexpectedType {
            path: join(path, key),
            expected: "an object",
        }),
    }
}

/// Text value; numbers and booleans are accepted and rendered as text
fn optional_text(parent: &Object, key: &str, path: &str) -> Result<Option<String>, StructuralError> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(StructuralError::UnexpectedType {
            path: join(path, key),
            expected: "text",
        }),
    }
}

fn required_text(parent: &Object, key: &str, path: &str) -> Result<String, StructuralError> {
    optional_text(parent, key, path)?.ok_or_else(|| StructuralError::MissingField {
        path: join(path, key),
    })
}

fn number_field<T: std::str::FromStr>(
    parent: &Object,
    key: &str,
    path: &str,
) -> Result<T, StructuralError> {
    let raw = required_text(parent, key, path)?;
    raw.trim()
        .parse()
        .map_err(|_| StructuralError::InvalidValue {
            path: join(path, key),
            value: raw,
        })
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}
