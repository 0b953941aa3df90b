//! Test fixtures and constants.

/// Configuration pointing at an endpoint nothing listens on.
pub const SAMPLE_CONFIG: &str = r#"
[service]
endpoint = "http://127.0.0.1:1/CreditCardManagementService.svc"
timeout_secs = 2

[credentials]
client_code = "YachtClub"
user_name = "operator"

[customer]
merchant_code = "Marina"
location_code = "Dock7"
"#;

/// Same service, using PascalCase field keys.
pub const UPPER_CAMEL_CONFIG: &str = r#"
[service]
endpoint = "http://127.0.0.1:1/CreditCardManagementService.svc"
key_case = "upper-camel"

[credentials]
client_code = "YachtClub"
user_name = "operator"

[customer]
merchant_code = "Marina"
location_code = "Dock7"
"#;

/// Test card number.
pub const VISA: &str = "4111111111111111";

/// Token used for retrieve and update tests.
pub const TOKEN: &str = "C100000000582802";

/// Card flags for add/update commands.
pub const CARD_ARGS: &[&str] = &[
    "--number",
    VISA,
    "--month",
    "10",
    "--year",
    "2030",
    "--name",
    "CARDHOLDER NAME",
    "--postal-code",
    "44311",
];
