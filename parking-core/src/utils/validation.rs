//! Input validation helpers
//!
//! Checks run by the CRUD layer before pricing tables and vehicle types are
//! persisted. The calculator itself never rejects a table.

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::{
    PricingPeriodCreate, PricingTable, PricingTableCreate, PricingTableUpdate, VehicleTypeCreate,
    VehicleTypeUpdate,
};

use crate::utils::{AppError, AppResult, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: pricing table, period, vehicle type
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Periods per table
pub const MAX_PERIODS: usize = 50;

// ── Generic helpers ─────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        )));
    }
    Ok(())
}

fn validate_price(value: Decimal, field: &str) -> AppResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::with_message(
            ErrorCode::PricingInvalidPrice,
            format!("{field} must be non-negative, got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

fn validate_tolerance(value: i64) -> AppResult<()> {
    if value < 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("tolerance_minutes must be non-negative, got {value}"),
        )
        .with_detail("field", "tolerance_minutes"));
    }
    Ok(())
}

// ── Pricing tables ──────────────────────────────────────────────────

/// Validate a single period definition
pub fn validate_period(name: &str, minutes: i64, price: Decimal) -> AppResult<()> {
    validate_required_text(name, "period name", MAX_NAME_LEN)?;
    if minutes <= 0 {
        return Err(AppError::with_message(
            ErrorCode::PricingPeriodInvalidMinutes,
            format!("period minutes must be positive, got {minutes}"),
        )
        .with_detail("period", name));
    }
    validate_price(price, "period price")
}

fn validate_period_list(periods: &[PricingPeriodCreate]) -> AppResult<()> {
    if periods.len() > MAX_PERIODS {
        return Err(AppError::validation(format!(
            "too many periods ({}, max {MAX_PERIODS})",
            periods.len()
        )));
    }
    for p in periods {
        validate_period(&p.name, p.minutes, p.price)?;
    }
    Ok(())
}

/// Validate a create payload
///
/// A table without periods is accepted (drafts), but it cannot be used to
/// close a session.
pub fn validate_pricing_table_create(payload: &PricingTableCreate) -> AppResult<()> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    if let Some(t) = payload.tolerance_minutes {
        validate_tolerance(t)?;
    }
    if let Some(max) = payload.max_value {
        validate_price(max, "max_value")?;
    }
    validate_period_list(&payload.periods)
}

/// Validate an update payload
pub fn validate_pricing_table_update(payload: &PricingTableUpdate) -> AppResult<()> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(t) = payload.tolerance_minutes {
        validate_tolerance(t)?;
    }
    if let Some(max) = payload.max_value {
        validate_price(max, "max_value")?;
    }
    if let Some(periods) = &payload.periods {
        validate_period_list(periods)?;
    }
    Ok(())
}

/// Validate a stored table
pub fn validate_pricing_table(table: &PricingTable) -> AppResult<()> {
    validate_required_text(&table.name, "name", MAX_NAME_LEN)?;
    validate_tolerance(table.tolerance_minutes)?;
    validate_price(table.max_value, "max_value")?;
    for p in &table.periods {
        validate_period(&p.name, p.minutes, p.price)?;
    }
    Ok(())
}

/// At most one default table per vehicle type
pub fn validate_single_default(tables: &[PricingTable]) -> AppResult<()> {
    let mut seen: HashMap<i64, i64> = HashMap::new();
    for table in tables.iter().filter(|t| t.is_default) {
        if let Some(existing) = seen.insert(table.vehicle_type_id, table.id) {
            return Err(AppError::new(ErrorCode::PricingTableDefaultConflict)
                .with_detail("vehicle_type_id", table.vehicle_type_id)
                .with_detail("pricing_table_ids", vec![existing, table.id]));
        }
    }
    Ok(())
}

// ── Vehicle types ───────────────────────────────────────────────────

pub fn validate_vehicle_type_create(payload: &VehicleTypeCreate) -> AppResult<()> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)
}

pub fn validate_vehicle_type_update(payload: &VehicleTypeUpdate) -> AppResult<()> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)
}
