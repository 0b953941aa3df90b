//! Update command.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::cli::session::Session;
use crate::core::domain::{CreditCard, OperationResult};
use crate::core::request::Request;
use crate::error::Result;

/// Overwrite a stored card. The card carries the token of the entry to
/// replace.
pub fn execute(config: Option<&Path>, card: &CreditCard, dry_run: bool, json: bool) -> Result<bool> {
    let token = card.token().map(|t| t.as_str()).unwrap_or("-");
    info!("Updating card: {} ({})", token, card.masked_number());

    let session = Session::open(config)?;
    if dry_run {
        session.print_message(Request::Update(card))?;
        return Ok(true);
    }

    let client = session.client()?;
    let credentials = session.credentials()?;
    let result = client.update_card(card, &credentials, session.customer())?;

    if json {
        let shown = result.map(|()| serde_json::json!({ "succeeded": true }));
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(shown.is_success());
    }

    match result {
        OperationResult::Success(()) => {
            let token = card.token().map(|t| t.as_str()).unwrap_or_default();
            output::success(&format!("updated {}", output::token(token)));
            Ok(true)
        }
        OperationResult::Failure(reason) => {
            output::error(&reason);
            Ok(false)
        }
    }
}
