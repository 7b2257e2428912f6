//! Parking Pricing Engine
//!
//! Quotes open sessions and closes them on exit. Holds only the business
//! time zone and clock-skew threshold, so one instance can be shared across
//! request handlers.

use chrono::FixedOffset;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{ParkingSession, PricingTable, SessionStatus};
use shared::money::{format_brl, round_currency};
use shared::{AppError, AppResult, ErrorCode};

use super::calculator::{PricingBreakdown, calculate_breakdown};
use super::elapsed::elapsed_minutes;
use super::matcher::select_table;
use crate::core::Config;
use crate::utils::time::format_business_time;

/// Amount due for a session at a given instant
#[derive(Debug, Clone, Serialize)]
pub struct PricingQuote {
    pub session_id: i64,
    pub pricing_table_id: i64,
    pub entry_time: i64,
    /// Recorded exit, or the quote instant for open sessions
    pub exit_time: i64,
    pub elapsed_minutes: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// `R$ X,XX`
    pub formatted_amount: String,
    /// Entry in business time (`dd/mm/YYYY HH:MM`)
    pub entry_display: String,
    /// Exit in business time (`dd/mm/YYYY HH:MM`)
    pub exit_display: String,
    pub breakdown: PricingBreakdown,
}

/// Parking Pricing Engine
#[derive(Debug, Clone)]
pub struct PricingEngine {
    offset: FixedOffset,
    clock_skew_tolerance_ms: i64,
}

impl PricingEngine {
    pub fn new(offset: FixedOffset, clock_skew_tolerance_ms: i64) -> Self {
        Self {
            offset,
            clock_skew_tolerance_ms,
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(
            config.business_offset()?,
            config.clock_skew_tolerance_ms,
        ))
    }

    /// Business time zone offset
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Quote a session under `table`
    ///
    /// Open sessions are priced as if they left at `now_ms`.
    pub fn quote(&self, session: &ParkingSession, table: &PricingTable, now_ms: i64) -> PricingQuote {
        let exit_ms = session.exit_time.unwrap_or(now_ms);
        let elapsed = self.billable_minutes(session, exit_ms);
        let breakdown = calculate_breakdown(elapsed, table);

        PricingQuote {
            session_id: session.id,
            pricing_table_id: table.id,
            entry_time: session.entry_time,
            exit_time: exit_ms,
            elapsed_minutes: breakdown.elapsed_minutes,
            amount: breakdown.amount,
            formatted_amount: format_brl(breakdown.amount),
            entry_display: format_business_time(session.entry_time, self.offset),
            exit_display: format_business_time(exit_ms, self.offset),
            breakdown,
        }
    }

    /// Quote a session using its pinned table, or the vehicle type's default
    pub fn quote_with_tables(
        &self,
        session: &ParkingSession,
        tables: &[PricingTable],
        now_ms: i64,
    ) -> AppResult<PricingQuote> {
        let table = select_table(tables, session.vehicle_type_id, session.pricing_table_id)?;
        Ok(self.quote(session, table, now_ms))
    }

    /// Close an open session at `exit_ms`
    ///
    /// Fills in the exit time, the amount paid (rounded to centavos) and the
    /// table used. A table without periods is rejected so the operator sees a
    /// configuration error instead of a free exit.
    pub fn checkout(
        &self,
        mut session: ParkingSession,
        table: &PricingTable,
        exit_ms: i64,
    ) -> AppResult<ParkingSession> {
        if !session.is_open() {
            return Err(AppError::new(ErrorCode::SessionAlreadyClosed)
                .with_detail("session_id", session.id));
        }
        if table.vehicle_type_id != session.vehicle_type_id {
            return Err(AppError::new(ErrorCode::PricingTableVehicleMismatch)
                .with_detail("pricing_table_id", table.id)
                .with_detail("vehicle_type_id", session.vehicle_type_id));
        }
        if table.periods.is_empty() {
            return Err(AppError::new(ErrorCode::PricingTableEmpty)
                .with_detail("pricing_table_id", table.id));
        }

        let elapsed = self.billable_minutes(&session, exit_ms);
        let amount = round_currency(calculate_breakdown(elapsed, table).amount);

        tracing::info!(
            session_id = session.id,
            plate = %session.plate,
            pricing_table_id = table.id,
            elapsed,
            amount = %format_brl(amount),
            "Parking session closed"
        );

        session.exit_time = Some(exit_ms.max(session.entry_time));
        session.amount_paid = Some(amount);
        session.pricing_table_id = Some(table.id);
        session.status = SessionStatus::Closed;
        Ok(session)
    }

    /// Elapsed minutes, logging exits recorded before the entry
    fn billable_minutes(&self, session: &ParkingSession, exit_ms: i64) -> i64 {
        let skew = session.entry_time.saturating_sub(exit_ms);
        if skew > self.clock_skew_tolerance_ms {
            tracing::warn!(
                session_id = session.id,
                skew_ms = skew,
                "Exit time precedes entry time, charging as zero elapsed"
            );
        } else if skew > 0 {
            tracing::debug!(session_id = session.id, skew_ms = skew, "Minor clock skew");
        }
        elapsed_minutes(session.entry_time, exit_ms)
    }
}
