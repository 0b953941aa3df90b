//! Get command.
//!
//! Retrieve a stored card by its vault token.

use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::cli::output;
use crate::cli::session::Session;
use crate::core::domain::{CreditCard, OperationResult, VaultToken};
use crate::core::request::Request;
use crate::error::Result;

/// Retrieve and print a stored card.
pub fn execute(
    config: Option<&Path>,
    token: &VaultToken,
    dry_run: bool,
    json: bool,
    reveal: bool,
) -> Result<bool> {
    info!("Retrieving card: {}", token);

    let session = Session::open(config)?;
    if dry_run {
        session.print_message(Request::Retrieve(token))?;
        return Ok(true);
    }

    let client = session.client()?;
    let credentials = session.credentials()?;
    let result = client.retrieve_card(token, &credentials, session.customer())?;

    if json {
        let shown = result.map(|card| card_json(&card, reveal));
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(shown.is_success());
    }

    match result {
        OperationResult::Success(card) => {
            print_card(token, &card, reveal);
            Ok(true)
        }
        OperationResult::Failure(reason) => {
            output::error(&reason);
            Ok(false)
        }
    }
}

fn number(card: &CreditCard, reveal: bool) -> String {
    if reveal {
        card.card_account_number().to_string()
    } else {
        card.masked_number()
    }
}

fn card_json(card: &CreditCard, reveal: bool) -> serde_json::Value {
    json!({
        "card_account_number": number(card, reveal),
        "card_type": card.card_type(),
        "expiration_month": card.expiration_month(),
        "expiration_year": card.expiration_year(),
        "name_on_card": card.name_on_card(),
        "billing_address": { "postal_code": card.postal_code() },
        "token": card.token().map(|t| t.as_str()),
    })
}

fn print_card(token: &VaultToken, card: &CreditCard, reveal: bool) {
    if reveal {
        output::warn("printing the full card number");
    }
    output::header(&format!("Card {}", output::token(token.as_str())));
    output::kv("number: ", number(card, reveal));
    if let Some(card_type) = card.card_type() {
        output::kv("type:   ", card_type);
    }
    output::kv(
        "expires:",
        format!("{:02}/{}", card.expiration_month(), card.expiration_year()),
    );
    output::kv("name:   ", card.name_on_card());
    if !card.postal_code().is_empty() {
        output::kv("postal: ", card.postal_code());
    }
}
