//! Identifier newtypes shared across the system.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Unique invoice identifier in `INV-NNNNN` form.
///
/// Wraps the rendered string to provide type safety and prevent mixing up
/// invoice numbers with other string-based identifiers. Assigned from the
/// 1-based row position at load time and never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    /// Creates an invoice number from a 1-based row position.
    pub fn from_position(position: usize) -> Self {
        Self(format!("INV-{position:05}"))
    }

    /// Returns the invoice number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deterministic customer identifier derived from an email address.
///
/// The first 10 hex characters of the SHA-256 digest of the raw email
/// bytes, with no case folding or trimming. The same email always yields
/// the same identifier, within and across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    const HEX_LEN: usize = 10;

    /// Derives the customer ID for an email address.
    pub fn from_email(email: &str) -> Self {
        let digest = Sha256::digest(email.as_bytes());
        let mut encoded = hex::encode(digest);
        encoded.truncate(Self::HEX_LEN);
        Self(encoded)
    }

    /// Wraps an already-derived identifier, e.g. one received in a URL.
    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product identifier, kept opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new product ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the product ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_number_is_zero_padded() {
        assert_eq!(InvoiceNumber::from_position(1).as_str(), "INV-00001");
        assert_eq!(InvoiceNumber::from_position(42).as_str(), "INV-00042");
        assert_eq!(InvoiceNumber::from_position(12345).as_str(), "INV-12345");
    }

    #[test]
    fn invoice_number_serialization_is_transparent() {
        let number = InvoiceNumber::from_position(7);
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"INV-00007\"");
        let deserialized: InvoiceNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(number, deserialized);
    }

    #[test]
    fn customer_id_is_pure_function_of_email() {
        let a = CustomerId::from_email("ada@example.com");
        let b = CustomerId::from_email("ada@example.com");
        assert_eq!(a, b);
    }

    #[test]
    fn customer_id_differs_per_email() {
        let a = CustomerId::from_email("ada@example.com");
        let b = CustomerId::from_email("grace@example.com");
        assert_ne!(a, b);
    }

    #[test]
    fn customer_id_is_ten_lowercase_hex_chars() {
        let id = CustomerId::from_email("ada@example.com");
        assert_eq!(id.as_str().len(), 10);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id.as_str(), id.as_str().to_lowercase());
    }

    #[test]
    fn customer_id_distinguishes_raw_bytes() {
        // No normalization: case matters.
        let lower = CustomerId::from_email("ada@example.com");
        let upper = CustomerId::from_email("ADA@example.com");
        assert_ne!(lower, upper);
    }

    #[test]
    fn product_id_roundtrips_through_serde() {
        let id = ProductId::new("1017");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1017\"");
        let deserialized: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
