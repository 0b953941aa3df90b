//! Tests for the update command.

use crate::support::*;

#[test]
fn test_dry_run_update_carries_token() {
    let t = Test::configured();

    let mut args = vec!["update", TOKEN];
    args.extend_from_slice(CARD_ARGS);
    let output = t.dry_run(&args);
    assert_success(&output);

    let printed = stdout_json(&output);
    assert_eq!(printed["operation"], "UpdateStoredCreditCard");
    let params = &printed["message"]["updateStoredCardParams"];
    assert_eq!(params["creditCard"]["token"], TOKEN);
    assert_eq!(params["creditCard"]["billingAddress"]["postalCode"], "44311");
    assert_eq!(params["customerIdentifier"]["locationCode"], "Dock7");
}

#[test]
fn test_update_requires_token_argument() {
    let t = Test::configured();

    let mut args = vec!["update"];
    args.extend_from_slice(CARD_ARGS);
    let output = t.dry_run(&args);
    assert_failure(&output);
}
