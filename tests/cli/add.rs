//! Tests for the add command.

use crate::support::*;

#[test]
fn test_dry_run_add_message() {
    let t = Test::configured();

    let mut args = vec!["add"];
    args.extend_from_slice(CARD_ARGS);
    let output = t.dry_run(&args);
    assert_success(&output);

    let printed = stdout_json(&output);
    assert_eq!(printed["operation"], "AddStoredCreditCard");
    let card = &printed["message"]["addStoredCardParams"]["creditCard"];
    assert_eq!(card["cardAccountNumber"], VISA);
    assert_eq!(card["expirationMonth"], 10);
    assert_eq!(card["expirationYear"], 2030);
    assert_eq!(card["nameOnCard"], "CARDHOLDER NAME");
    assert_eq!(card["billingAddress"]["postalCode"], "44311");
    assert!(card.get("token").is_none());
}

#[test]
fn test_add_rejects_bad_month() {
    let t = Test::configured();

    let output = t.dry_run(&[
        "add",
        "--number",
        VISA,
        "--month",
        "13",
        "--year",
        "2030",
        "--name",
        "X",
        "--postal-code",
        "44311",
    ]);
    assert_failure(&output);
}

#[test]
fn test_add_requires_postal_code() {
    let t = Test::configured();

    let output = t.dry_run(&[
        "add", "--number", VISA, "--month", "10", "--year", "2030", "--name", "X",
    ]);
    assert_failure(&output);
    assert_stderr_contains(&output, "--postal-code");
}
