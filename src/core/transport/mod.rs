//! Transport backends.
//!
//! A transport executes one named remote operation with a wire message and
//! returns the decoded reply tree. Retries, sessions and TLS all live behind
//! this trait; the client above it calls `invoke` exactly once per operation.
//!
//! ## Backends
//!
//! - **scripted**: Always available. Returns canned replies and records
//!   every message it was given.
//! - **soap**: Feature-gated (`soap`, on by default). SOAP 1.1 over HTTP.

use serde_json::Value;

use crate::core::operation::Operation;
use crate::error::TransportError;

mod scripted;

#[cfg(feature = "soap")]
pub mod soap;

#[cfg(feature = "soap")]
mod xml;

pub use scripted::ScriptedTransport;

#[cfg(feature = "soap")]
pub use soap::SoapTransport;

/// Executes remote operations.
///
/// Implementations must be shareable across threads: the client holds one
/// transport and may be called concurrently.
pub trait Transport: Send + Sync {
    /// Send `message` as `operation` and return the decoded reply.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the call could not be completed. A reply
    /// in which the service reports failure is not an error here.
    fn invoke(&self, operation: Operation, message: &Value) -> Result<Value, TransportError>;

    /// Backend name for logs
    fn name(&self) -> &'static str;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn invoke(&self, operation: Operation, message: &Value) -> Result<Value, TransportError> {
        (**self).invoke(operation, message)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn invoke(&self, operation: Operation, message: &Value) -> Result<Value, TransportError> {
        (**self).invoke(operation, message)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
