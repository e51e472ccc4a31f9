//! Shared plumbing for the address book crates: logging setup, startup
//! environment checks and small response types.

pub mod env;
pub mod types;
pub mod utils;
