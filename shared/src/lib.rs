//! Shared types for the parking workspace
//!
//! Data models consumed by the pricing core and the CRUD layer,
//! the unified error type, and currency/time utilities.

pub mod error;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
