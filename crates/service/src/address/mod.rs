//! Address records and the operations over the collection.
//!
//! A record is a free-form JSON object; only `id` carries meaning here.

use serde_json::{Map, Value};

pub mod id;
pub mod service;

pub use service::AddressService;

/// One entry of the collection. Field order is kept as received.
pub type Address = Map<String, Value>;

/// Key of the server-assigned identifier.
pub const ID_FIELD: &str = "id";
