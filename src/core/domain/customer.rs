//! Customer identifier type.

use serde_json::{json, Value};

/// Tenant scope a stored card belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerIdentifier {
    merchant_code: String,
    location_code: String,
    customer_code: String,
}

impl CustomerIdentifier {
    pub fn new(
        merchant_code: impl Into<String>,
        location_code: impl Into<String>,
        customer_code: impl Into<String>,
    ) -> Self {
        Self {
            merchant_code: merchant_code.into(),
            location_code: location_code.into(),
            customer_code: customer_code.into(),
        }
    }

    pub fn merchant_code(&self) -> &str {
        &self.merchant_code
    }

    pub fn location_code(&self) -> &str {
        &self.location_code
    }

    pub fn customer_code(&self) -> &str {
        &self.customer_code
    }

    /// Wire form with snake_case keys
    pub fn to_wire_form(&self) -> Value {
        json!({
            "customer_code": self.customer_code,
            "location_code": self.location_code,
            "merchant_code": self.merchant_code,
        })
    }
}

impl std::fmt::Display for CustomerIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.merchant_code, self.location_code, self.customer_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_fields() {
        let customer = CustomerIdentifier::new("Marina", "Dock7", "DEFAULT");
        let wire = customer.to_wire_form();

        assert_eq!(wire["merchant_code"], "Marina");
        assert_eq!(wire["location_code"], "Dock7");
        assert_eq!(wire["customer_code"], "DEFAULT");
    }

    #[test]
    fn test_display() {
        let customer = CustomerIdentifier::new("Marina", "Dock7", "DEFAULT");
        assert_eq!(customer.to_string(), "Marina/Dock7/DEFAULT");
    }
}
