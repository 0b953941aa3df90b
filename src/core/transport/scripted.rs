//! Scripted transport.
//!
//! Answers from a fixed script instead of the network. Used by tests and by
//! the CLI dry-run mode, which records the outbound message without a reply.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::{json, Map, Value};
use tracing::trace;

use super::Transport;
use crate::core::operation::Operation;
use crate::error::TransportError;

type Handler = dyn Fn(Operation, &Value) -> Result<Value, TransportError> + Send + Sync;

/// Transport that replays scripted replies and records what it was sent
#[derive(Default)]
pub struct ScriptedTransport {
    replies: HashMap<Operation, Result<Value, TransportError>>,
    handler: Option<Box<Handler>>,
    sent: Mutex<Vec<(Operation, Value)>>,
}

impl ScriptedTransport {
    /// Transport with an empty script; every call fails as unavailable
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport that computes each reply from the request
    pub fn from_fn<F>(handler: F) -> Self
    where
        F: Fn(Operation, &Value) -> Result<Value, TransportError> + Send + Sync + 'static,
    {
        Self {
            handler: Some(Box::new(handler)),
            ..Self::default()
        }
    }

    /// Answer `operation` with the full reply tree `reply`
    pub fn reply(mut self, operation: Operation, reply: Value) -> Self {
        self.replies.insert(operation, Ok(reply));
        self
    }

    /// Answer `operation` with a result node wrapped in the reply envelope
    pub fn result(self, operation: Operation, result: Value) -> Self {
        self.reply(operation, Self::envelope(operation, result))
    }

    /// Fail `operation` with a transport error
    pub fn fail(mut self, operation: Operation, error: TransportError) -> Self {
        self.replies.insert(operation, Err(error));
        self
    }

    /// Wrap a result node as `envelope.body.<op>_response.<op>_result`
    pub fn envelope(operation: Operation, result: Value) -> Value {
        let mut response = Map::new();
        response.insert(operation.result_key(), result);
        let mut body = Map::new();
        body.insert(operation.response_key(), Value::Object(response));
        json!({ "envelope": { "body": Value::Object(body) } })
    }

    /// Every (operation, message) pair received so far, oldest first
    pub fn sent(&self) -> Vec<(Operation, Value)> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The most recent message received
    pub fn last_message(&self) -> Option<Value> {
        self.sent().pop().map(|(_, message)| message)
    }
}

impl Transport for ScriptedTransport {
    fn invoke(&self, operation: Operation, message: &Value) -> Result<Value, TransportError> {
        trace!(operation = %operation, "scripted transport invoked");
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((operation, message.clone()));

        if let Some(handler) = &self.handler {
            return handler(operation, message);
        }

        match self.replies.get(&operation) {
            Some(reply) => reply.clone(),
            None => Err(TransportError::Unavailable(format!(
                "no scripted reply for {}",
                operation
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

impl std::fmt::Debug for ScriptedTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedTransport")
            .field("replies", &self.replies.keys().collect::<Vec<_>>())
            .field("handler", &self.handler.is_some())
            .finish()
    }
}
