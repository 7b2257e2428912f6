//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 4xxx: Pricing errors
/// - 5xxx: Parking session errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Pricing table / calculator errors (4xxx)
    Pricing,
    /// Parking session errors (5xxx)
    Session,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..4000 => Self::General,
            4000..5000 => Self::Pricing,
            5000..6000 => Self::Session,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Pricing => "pricing",
            Self::Session => "session",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Pricing);
        assert_eq!(ErrorCategory::from_code(4999), ErrorCategory::Pricing);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Session);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(
            ErrorCode::ValidationFailed.category(),
            ErrorCategory::General
        );
        assert_eq!(
            ErrorCode::PricingTableNotFound.category(),
            ErrorCategory::Pricing
        );
        assert_eq!(
            ErrorCode::SessionAlreadyClosed.category(),
            ErrorCategory::Session
        );
        assert_eq!(ErrorCode::ConfigError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Pricing.name(), "pricing");
        assert_eq!(ErrorCategory::Session.name(), "session");
        assert_eq!(ErrorCategory::System.name(), "system");
    }
}
