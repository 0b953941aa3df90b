//! Cardvault - a client for a SOAP credit-card vault service.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── get           # Retrieve a stored card
//! │   ├── add           # Store a new card
//! │   ├── update        # Overwrite a stored card
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── domain/       # Credentials, customer, card, token, outcome
//!     ├── casing        # snake_case <-> camelCase key mapping
//!     ├── operation     # Supported remote operations
//!     ├── request       # Wire message construction
//!     ├── response      # Reply interpretation
//!     ├── client        # VaultClient orchestration
//!     ├── transport/    # Transport trait and backends
//!     │   ├── scripted  # Canned replies for tests and dry runs
//!     │   └── soap      # SOAP 1.1 over HTTP (feature `soap`)
//!     └── config        # .cardvault.toml management
//! ```
//!
//! # Example
//!
//! ```ignore
//! use cardvault::{ClientCredentials, CreditCard, CustomerIdentifier, VaultClient};
//!
//! let client = VaultClient::new(transport);
//! let credentials = ClientCredentials::new("client", "user", "password");
//! let customer = CustomerIdentifier::new("merchant", "location", "DEFAULT");
//! let card = CreditCard::new("4111111111111111", 10, 2030, "CARDHOLDER NAME", "44311");
//!
//! match client.add_card(&card, &credentials, &customer)? {
//!     OperationResult::Success(token) => println!("stored as {}", token),
//!     OperationResult::Failure(reason) => eprintln!("vault refused: {}", reason),
//! }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::casing::KeyCase;
pub use crate::core::client::VaultClient;
pub use crate::core::config::Config;
pub use crate::core::domain::{
    BillingAddress, ClientCredentials, CreditCard, CustomerIdentifier, OperationResult, VaultToken,
};
pub use crate::core::operation::Operation;
pub use crate::core::transport::{ScriptedTransport, Transport};
pub use error::{Error, Result};
