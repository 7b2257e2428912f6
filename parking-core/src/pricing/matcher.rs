//! Pricing Table Matcher
//!
//! Picks the pricing table that applies to a vehicle type.

use shared::models::PricingTable;
use shared::{AppError, AppResult, ErrorCode};

/// Check if a table applies to a vehicle type
#[inline]
pub fn matches_vehicle_type(table: &PricingTable, vehicle_type_id: i64) -> bool {
    table.vehicle_type_id == vehicle_type_id
}

/// Select the default table for a vehicle type
///
/// Callers keep at most one default per vehicle type. If that is broken the
/// table with the smallest id wins so the choice stays stable across calls.
pub fn select_default_table(
    tables: &[PricingTable],
    vehicle_type_id: i64,
) -> AppResult<&PricingTable> {
    let mut defaults = tables
        .iter()
        .filter(|t| t.is_default && matches_vehicle_type(t, vehicle_type_id));

    let Some(first) = defaults.next() else {
        return Err(AppError::new(ErrorCode::PricingTableNotFound)
            .with_detail("vehicle_type_id", vehicle_type_id));
    };

    let rest: Vec<&PricingTable> = defaults.collect();
    if rest.is_empty() {
        return Ok(first);
    }

    tracing::warn!(
        vehicle_type_id,
        count = rest.len() + 1,
        "Multiple default pricing tables for vehicle type, using lowest id"
    );
    Ok(rest
        .into_iter()
        .fold(first, |best, t| if t.id < best.id { t } else { best }))
}

/// Select an explicit table, or the vehicle type's default when `table_id` is `None`
pub fn select_table(
    tables: &[PricingTable],
    vehicle_type_id: i64,
    table_id: Option<i64>,
) -> AppResult<&PricingTable> {
    let Some(table_id) = table_id else {
        return select_default_table(tables, vehicle_type_id);
    };

    let table = tables.iter().find(|t| t.id == table_id).ok_or_else(|| {
        AppError::new(ErrorCode::PricingTableNotFound).with_detail("pricing_table_id", table_id)
    })?;

    if !matches_vehicle_type(table, vehicle_type_id) {
        return Err(AppError::new(ErrorCode::PricingTableVehicleMismatch)
            .with_detail("pricing_table_id", table_id)
            .with_detail("vehicle_type_id", vehicle_type_id));
    }

    Ok(table)
}
