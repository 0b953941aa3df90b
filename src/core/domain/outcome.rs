//! Operation outcome type.

use serde::Serialize;

/// What the vault said about a request.
///
/// `Failure` carries the reason the service reported. Transport faults and
/// unreadable replies never end up here; they are [`crate::error::Error`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationResult<T> {
    Success(T),
    Failure(String),
}

impl<T> OperationResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Payload, if the operation succeeded
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Reason reported by the service, if it refused
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(reason) => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationResult<U> {
        match self {
            Self::Success(value) => OperationResult::Success(f(value)),
            Self::Failure(reason) => OperationResult::Failure(reason),
        }
    }

    /// Convert into a `Result` with the failure reason as the error
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(reason) => Err(reason),
        }
    }
}
