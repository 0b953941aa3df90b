//! Supported remote operations.
//!
//! Each variant owns the names the remote contract uses for it, so request
//! building and reply reading never derive names at runtime.

/// A vault operation the client can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Look up a stored card by token
    GetStoredCreditCard,
    /// Store a new card and receive its token
    AddStoredCreditCard,
    /// Overwrite the card stored under a token
    UpdateStoredCreditCard,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Self::GetStoredCreditCard,
        Self::AddStoredCreditCard,
        Self::UpdateStoredCreditCard,
    ];

    /// snake_case operation name, also the prefix of the reply keys
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetStoredCreditCard => "get_stored_credit_card",
            Self::AddStoredCreditCard => "add_stored_credit_card",
            Self::UpdateStoredCreditCard => "update_stored_credit_card",
        }
    }

    /// Remote action name
    pub fn action(&self) -> &'static str {
        match self {
            Self::GetStoredCreditCard => "GetStoredCreditCard",
            Self::AddStoredCreditCard => "AddStoredCreditCard",
            Self::UpdateStoredCreditCard => "UpdateStoredCreditCard",
        }
    }

    /// Envelope key holding the operation parameters.
    ///
    /// Add and update use `...StoredCardParams`, not `...StoredCreditCardParams`.
    pub fn params_key(&self) -> &'static str {
        match self {
            Self::GetStoredCreditCard => "getStoredCreditCardParams",
            Self::AddStoredCreditCard => "addStoredCardParams",
            Self::UpdateStoredCreditCard => "updateStoredCardParams",
        }
    }

    /// Reply key wrapping the result, under `envelope.body`
    pub fn response_key(&self) -> String {
        format!("{}_response", self.name())
    }

    /// Reply key holding `succeeded` and the payload
    pub fn result_key(&self) -> String {
        format!("{}_result", self.name())
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::casing::{camelize, snake_case, KeyCase};

    #[test]
    fn test_action_and_name_agree() {
        for op in Operation::ALL {
            assert_eq!(snake_case(op.action()), op.name());
            assert_eq!(camelize(op.name(), KeyCase::UpperCamel), op.action());
        }
    }

    #[test]
    fn test_reply_keys() {
        let op = Operation::AddStoredCreditCard;
        assert_eq!(op.response_key(), "add_stored_credit_card_response");
        assert_eq!(op.result_key(), "add_stored_credit_card_result");
    }

    #[test]
    fn test_params_keys() {
        assert_eq!(
            Operation::GetStoredCreditCard.params_key(),
            "getStoredCreditCardParams"
        );
        assert_eq!(Operation::AddStoredCreditCard.params_key(), "addStoredCardParams");
        assert_eq!(
            Operation::UpdateStoredCreditCard.params_key(),
            "updateStoredCardParams"
        );
    }
}
