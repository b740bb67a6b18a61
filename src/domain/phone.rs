//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// Input is normalized at construction time: every non-digit character
/// (spaces, hyphens, parentheses, and so on) is discarded, and the result
/// must be exactly 10 decimal digits. The stored form is always the bare
/// digit string.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, normalizing and validating the input.
    ///
    /// # Validation Rules
    ///
    /// - Non-digit characters are stripped before validation
    /// - Exactly 10 digits must remain
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` carrying the original input
    /// if anything other than exactly 10 digits remains after stripping.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() != 10 {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(digits))
    }

    /// Get the normalized phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the stored digit string.
    ///
    /// Identical to [`as_str`](Self::as_str) since the stored form is
    /// already digits-only.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
