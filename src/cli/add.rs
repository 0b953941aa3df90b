//! Add command.
//!
//! Store a new card and print the token the vault assigns to it.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::cli::session::Session;
use crate::core::domain::{CreditCard, OperationResult};
use crate::core::request::Request;
use crate::error::Result;

/// Add a card to the vault.
pub fn execute(config: Option<&Path>, card: &CreditCard, dry_run: bool, json: bool) -> Result<bool> {
    info!("Adding card: {}", card.masked_number());

    let session = Session::open(config)?;
    if dry_run {
        session.print_message(Request::Add(card))?;
        return Ok(true);
    }

    let client = session.client()?;
    let credentials = session.credentials()?;
    let result = client.add_card(card, &credentials, session.customer())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result.is_success());
    }

    match result {
        OperationResult::Success(token) => {
            output::success(&format!(
                "stored {} as {}",
                card.masked_number(),
                output::token(token.as_str())
            ));
            output::hint("keep this token: it is the only way to retrieve or update the card");
            Ok(true)
        }
        OperationResult::Failure(reason) => {
            output::error(&reason);
            Ok(false)
        }
    }
}
