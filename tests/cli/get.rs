//! Tests for the get command.

use crate::support::*;

#[test]
fn test_dry_run_get_requests_card_number() {
    let t = Test::configured();

    let output = t.dry_run(&["get", TOKEN]);
    assert_success(&output);

    let printed = stdout_json(&output);
    assert_eq!(printed["operation"], "GetStoredCreditCard");
    let params = &printed["message"]["getStoredCreditCardParams"];
    assert_eq!(params["retrieveCardNumber"], true);
    assert_eq!(params["token"], TOKEN);
    assert_eq!(params["customerIdentifier"]["merchantCode"], "Marina");
    assert_eq!(params["customerIdentifier"]["customerCode"], "DEFAULT");
}

#[test]
fn test_dry_run_masks_password() {
    let t = Test::configured();

    let output = t
        .cmd()
        .env("CARDVAULT_PASSWORD", "hunter2")
        .args(["--dry-run", "get", TOKEN])
        .output()
        .unwrap();
    assert_success(&output);

    let printed = stdout_json(&output);
    assert_eq!(printed["message"]["clientCredentials"]["password"], "********");
    assert!(!stdout(&output).contains("hunter2"));
}

#[test]
fn test_dry_run_upper_camel_keys() {
    let t = Test::with_config(UPPER_CAMEL_CONFIG);

    let output = t.dry_run(&["get", TOKEN]);
    assert_success(&output);

    let printed = stdout_json(&output);
    let params = &printed["message"]["getStoredCreditCardParams"];
    assert_eq!(params["RetrieveCardNumber"], true);
    assert_eq!(printed["message"]["clientCredentials"]["ClientCode"], "YachtClub");
}

#[test]
fn test_explicit_config_path() {
    let t = Test::new();
    let config = t.home.path().join("vault.toml");
    std::fs::write(&config, SAMPLE_CONFIG).unwrap();

    let output = t.dry_run(&["--config", config.to_str().unwrap(), "get", TOKEN]);
    assert_success(&output);
}

#[test]
fn test_blank_token_rejected() {
    let t = Test::configured();

    let output = t.dry_run(&["get", "   "]);
    assert_failure(&output);
    assert_stderr_contains(&output, "vault token cannot be empty");
}

#[test]
fn test_unreachable_service_is_reported() {
    let t = Test::configured();

    let output = t
        .cmd()
        .env("CARDVAULT_PASSWORD", "hunter2")
        .args(["get", TOKEN])
        .output()
        .unwrap();
    assert_failure(&output);

    let err = stderr(&output);
    assert!(
        err.contains("network error") || err.contains("timed out"),
        "unexpected stderr: {}",
        err
    );
}
