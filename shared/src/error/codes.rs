//! Unified error codes for the parking workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Pricing errors
//! - 5xxx: Parking session errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Pricing ====================
    /// No pricing table matched the vehicle type
    PricingTableNotFound = 4001,
    /// Pricing table has no periods
    PricingTableEmpty = 4002,
    /// More than one default table for a vehicle type
    PricingTableDefaultConflict = 4003,
    /// Pricing table belongs to another vehicle type
    PricingTableVehicleMismatch = 4004,
    /// Period has a non-positive duration
    PricingPeriodInvalidMinutes = 4101,
    /// Period or cap has a negative price
    PricingInvalidPrice = 4102,

    // ==================== 5xxx: Session ====================
    /// Parking session already closed
    SessionAlreadyClosed = 5002,

    // ==================== 9xxx: System ====================
    ConfigError = 9005,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Pricing
            ErrorCode::PricingTableNotFound => {
                "No pricing table matched; contact administrator"
            }
            ErrorCode::PricingTableEmpty => "Pricing table has no periods",
            ErrorCode::PricingTableDefaultConflict => {
                "Vehicle type already has a default pricing table"
            }
            ErrorCode::PricingTableVehicleMismatch => {
                "Pricing table does not apply to this vehicle type"
            }
            ErrorCode::PricingPeriodInvalidMinutes => "Period minutes must be positive",
            ErrorCode::PricingInvalidPrice => "Price must be non-negative",

            // Session
            ErrorCode::SessionAlreadyClosed => "Parking session is already closed",

            // System
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Pricing
            4001 => Ok(ErrorCode::PricingTableNotFound),
            4002 => Ok(ErrorCode::PricingTableEmpty),
            4003 => Ok(ErrorCode::PricingTableDefaultConflict),
            4004 => Ok(ErrorCode::PricingTableVehicleMismatch),
            4101 => Ok(ErrorCode::PricingPeriodInvalidMinutes),
            4102 => Ok(ErrorCode::PricingInvalidPrice),

            // Session
            5002 => Ok(ErrorCode::SessionAlreadyClosed),

            // System
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
