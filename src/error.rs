//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// A name or phone number failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number being edited does not exist on the record
    #[error("Old phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;
