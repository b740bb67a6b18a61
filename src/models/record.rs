//! Record model representing one contact in the address book.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A single contact: a validated name plus an ordered list of validated
/// phone numbers.
///
/// The name is fixed at construction. Phone numbers are kept in insertion
/// order and duplicates are permitted; removal and editing always target
/// the first matching entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Contact name, immutable after construction
    name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a new record with the given name and no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
        })
    }

    /// Get the contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Get the contact's phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate and append a phone number.
    ///
    /// No deduplication is performed; adding the same number twice stores
    /// it twice.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input does not
    /// normalize to exactly 10 digits.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        debug!(name = %self.name, phone = %phone, "adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone number matching the normalized input.
    ///
    /// Returns `true` if an entry was removed, `false` if no entry matched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input itself fails
    /// validation. Invalid input is an error here, not a `false`;
    /// [`find_phone`](Self::find_phone) is the lenient lookup.
    pub fn remove_phone(&mut self, phone: impl Into<String>) -> Result<bool, ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        match self.phones.iter().position(|p| *p == phone) {
            Some(idx) => {
                debug!(name = %self.name, phone = %phone, "removing phone");
                self.phones.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace the first phone number matching `old_phone` with `new_phone`.
    ///
    /// `new_phone` is validated before any lookup, so a failed edit never
    /// mutates the record.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::Validation` if either number fails
    /// validation, or `AddressBookError::PhoneNotFound` if no entry matches
    /// the normalized `old_phone`.
    pub fn edit_phone(
        &mut self,
        old_phone: impl Into<String>,
        new_phone: impl Into<String>,
    ) -> AddressBookResult<()> {
        // Validate the replacement first so not-found is the only way to
        // fail after this point.
        let new_phone = PhoneNumber::new(new_phone)?;
        let old_phone = PhoneNumber::new(old_phone)?;

        match self.phones.iter_mut().find(|p| **p == old_phone) {
            Some(slot) => {
                debug!(name = %self.name, old = %old_phone, new = %new_phone, "editing phone");
                *slot = new_phone;
                Ok(())
            }
            None => Err(AddressBookError::PhoneNotFound(old_phone.into_inner())),
        }
    }

    /// Find the first phone number matching the normalized input.
    ///
    /// Unlike [`remove_phone`](Self::remove_phone) and
    /// [`edit_phone`](Self::edit_phone), input that fails validation is
    /// treated as "not found" rather than an error.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        let phone = PhoneNumber::new(phone).ok()?;
        self.phones.iter().find(|p| **p == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
