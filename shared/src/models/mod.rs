//! Data models
//!
//! Shared between the pricing core and the CRUD layer (via API).
//! All IDs are `i64` snowflake IDs, timestamps are Unix millis,
//! money is `Decimal` serialized as a JSON number.

pub mod parking_session;
pub mod pricing_table;
pub mod vehicle_type;

// Re-exports
pub use parking_session::*;
pub use pricing_table::*;
pub use vehicle_type::*;
