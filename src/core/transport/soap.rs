//! SOAP over HTTP transport.
//!
//! Sends each operation as a SOAP 1.1 envelope and decodes the reply into
//! the snake_case tree the interpreter reads. Enabled by the `soap` feature.
//!
//! ## Usage
//!
//! Point `.cardvault.toml` at the service:
//! ```toml
//! [service]
//! endpoint = "https://services.example.com/CreditCardManagementService.svc"
//! namespace = "http://tempuri.org/"
//! action_prefix = "http://tempuri.org/ICreditCardManagementService/"
//! ```

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, trace};

use super::xml;
use super::Transport;
use crate::core::config::ServiceConfig;
use crate::core::operation::Operation;
use crate::error::TransportError;

/// Blocking SOAP client for one service endpoint
#[derive(Debug, Clone)]
pub struct SoapTransport {
    http: Client,
    endpoint: String,
    namespace: String,
    action_prefix: String,
}

impl SoapTransport {
    /// Create a transport. `action_prefix` defaults to the namespace.
    pub fn new(
        endpoint: impl Into<String>,
        namespace: impl Into<String>,
        action_prefix: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let namespace = namespace.into();
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Unavailable(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            action_prefix: action_prefix.unwrap_or_else(|| namespace.clone()),
            namespace,
        })
    }

    pub fn from_config(service: &ServiceConfig) -> Result<Self, TransportError> {
        Self::new(
            service.endpoint.clone(),
            service.namespace.clone(),
            service.action_prefix.clone(),
            Duration::from_secs(service.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Value of the `SOAPAction` header for `operation`
    pub fn soap_action(&self, operation: Operation) -> String {
        format!("\"{}{}\"", self.action_prefix, operation.action())
    }
}

impl Transport for SoapTransport {
    fn name(&self) -> &'static str {
        "soap"
    }

    fn invoke(&self, operation: Operation, message: &Value) -> Result<Value, TransportError> {
        let body = xml::encode_envelope(operation.action(), &self.namespace, message);
        debug!(
            endpoint = %self.endpoint,
            operation = %operation,
            "sending SOAP request"
        );
        trace!(request_len = body.len(), "encoded SOAP envelope");

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", self.soap_action(operation))
            .body(body)
            .send()
            .map_err(from_reqwest)?;

        let status = response.status();
        let text = response.text().map_err(from_reqwest)?;
        trace!(status = status.as_u16(), reply_len = text.len(), "received SOAP reply");

        // faults usually arrive with a 500; report the fault, not the status
        let decoded = if text.trim().is_empty() {
            None
        } else {
            Some(xml::decode_reply(&text))
        };
        if let Some(Ok(reply)) = &decoded {
            if let Some(fault) = xml::fault(reply) {
                return Err(fault);
            }
        }
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        decoded.unwrap_or_else(|| Err(TransportError::Decode("empty reply body".to_string())))
    }
}

fn from_reqwest(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(err.to_string())
    }
}
