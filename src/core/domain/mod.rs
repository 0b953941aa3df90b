//! Domain types.
//!
//! Immutable values the caller builds per request. Each one knows its own
//! wire form; key casing is applied later by the request builder.

mod card;
mod credentials;
mod customer;
mod outcome;
mod token;

pub use card::{BillingAddress, CreditCard};
pub use credentials::ClientCredentials;
pub use customer::CustomerIdentifier;
pub use outcome::OperationResult;
pub use token::VaultToken;
