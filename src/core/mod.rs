//! Core library components.
//!
//! Domain values, the request builder and reply interpreter, the client
//! that wires them to a transport, and configuration handling.

pub mod casing;
pub mod client;
pub mod config;
pub mod constants;
pub mod domain;
pub mod operation;
pub mod request;
pub mod response;
pub mod transport;
