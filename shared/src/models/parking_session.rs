//! Parking Session Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::vehicle_type::VehicleTypeRef;

/// Session status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    #[default]
    Open,
    Closed,
}

/// Parking session (entrada/saída de um veículo)
///
/// Produced by the entry/exit workflow; the pricing core only reads the
/// timestamps and fills in the exit fields on checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingSession {
    pub id: i64,
    /// License plate (old Brazilian or Mercosul format, not validated here)
    pub plate: String,
    pub vehicle_type_id: i64,
    /// Joined vehicle type, present when the query embeds it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleTypeRef>,
    /// Entry time (Unix millis)
    pub entry_time: i64,
    /// Exit time (Unix millis), `None` while the vehicle is still parked
    pub exit_time: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount_paid: Option<Decimal>,
    pub pricing_table_id: Option<i64>,
    #[serde(default)]
    pub status: SessionStatus,
}

impl ParkingSession {
    pub fn is_open(&self) -> bool {
        self.status == SessionStatus::Open
    }
}
