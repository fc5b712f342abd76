//! Invoice payment status.

use serde::{Deserialize, Serialize};

/// Payment status synthesized at load time.
///
/// Serializes to its lowercase wire form (`"paid"` / `"unpaid"`), which is
/// also the form accepted by filter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
}

impl InvoiceStatus {
    /// Returns the lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_is_lowercase() {
        assert_eq!(InvoiceStatus::Paid.as_str(), "paid");
        assert_eq!(InvoiceStatus::Unpaid.to_string(), "unpaid");
    }

    #[test]
    fn serde_uses_wire_form() {
        assert_eq!(serde_json::to_string(&InvoiceStatus::Paid).unwrap(), "\"paid\"");
        let status: InvoiceStatus = serde_json::from_str("\"unpaid\"").unwrap();
        assert_eq!(status, InvoiceStatus::Unpaid);
    }
}
