//! Address Book - an in-memory contact directory with validated names and
//! phone numbers.
//!
//! This library stores contacts as records keyed by name, where each record
//! holds a validated name and an ordered list of validated 10-digit phone
//! numbers. Phone input is normalized by stripping formatting characters
//! before validation, so "098-765-4321" and "0987654321" refer to the same
//! number.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`ContactName`, `PhoneNumber`)
//! - **models**: The `Record` contact model
//! - **book**: The `AddressBook` directory keyed by name
//! - **error**: Custom error types for precise error handling
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//!
//! let mut john = Record::new("John")?;
//! john.add_phone("123-456-7890")?;
//! book.add_record(john);
//!
//! let record = book.find("John").unwrap();
//! assert!(record.find_phone("1234567890").is_some());
//! # Ok::<(), address_book::AddressBookError>(())
//! ```

// Re-export commonly used types
pub mod book;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{AddressBookError, AddressBookResult};
pub use models::Record;
