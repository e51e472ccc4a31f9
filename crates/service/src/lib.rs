//! Service layer for the address book.
//! - `storage` holds the collection handle abstraction and its implementations.
//! - `address` holds the id rules and the five collection operations.

pub mod address;
pub mod errors;
pub mod storage;
