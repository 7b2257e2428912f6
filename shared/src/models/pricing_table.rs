//! Pricing Table Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::util::snowflake_id;

/// Billing tier (e.g. "first hour", "additional hour")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPeriod {
    pub id: i64,
    pub name: String,
    /// Tier length in minutes (> 0)
    pub minutes: i64,
    /// Price charged per tier (R$)
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Display order in the admin UI, not used for pricing
    #[serde(alias = "order", default)]
    pub sort_order: i32,
}

/// Pricing table entity (tabela de preços)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTable {
    pub id: i64,
    pub name: String,
    pub vehicle_type_id: i64,
    pub is_default: bool,
    /// Grace window in minutes; sessions up to this length are free
    pub tolerance_minutes: i64,
    /// Maximum charge (0 = unlimited)
    #[serde(with = "rust_decimal::serde::float")]
    pub max_value: Decimal,
    #[serde(default)]
    pub periods: Vec<PricingPeriod>,
}

impl PricingTable {
    /// Whether the cap applies to this table
    pub fn has_cap(&self) -> bool {
        self.max_value > Decimal::ZERO
    }

    /// Build a new table from a create payload, assigning fresh IDs
    pub fn from_create(payload: PricingTableCreate) -> Self {
        let mut periods: Vec<PricingPeriod> = payload
            .periods
            .into_iter()
            .map(PricingPeriod::from_create)
            .collect();
        periods.sort_by_key(|p| p.sort_order);

        Self {
            id: snowflake_id(),
            name: payload.name,
            vehicle_type_id: payload.vehicle_type_id,
            is_default: payload.is_default.unwrap_or(false),
            tolerance_minutes: payload.tolerance_minutes.unwrap_or(0),
            max_value: payload.max_value.unwrap_or(Decimal::ZERO),
            periods,
        }
    }

    /// Merge a partial update into this table
    ///
    /// A present `periods` list replaces the existing one wholesale.
    pub fn apply_update(&mut self, update: PricingTableUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(vehicle_type_id) = update.vehicle_type_id {
            self.vehicle_type_id = vehicle_type_id;
        }
        if let Some(is_default) = update.is_default {
            self.is_default = is_default;
        }
        if let Some(tolerance) = update.tolerance_minutes {
            self.tolerance_minutes = tolerance;
        }
        if let Some(max_value) = update.max_value {
            self.max_value = max_value;
        }
        if let Some(periods) = update.periods {
            let mut periods: Vec<PricingPeriod> =
                periods.into_iter().map(PricingPeriod::from_create).collect();
            periods.sort_by_key(|p| p.sort_order);
            self.periods = periods;
        }
    }
}

impl PricingPeriod {
    pub fn from_create(payload: PricingPeriodCreate) -> Self {
        Self {
            id: snowflake_id(),
            name: payload.name,
            minutes: payload.minutes,
            price: payload.price,
            sort_order: payload.sort_order.unwrap_or(0),
        }
    }
}

/// Create period payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPeriodCreate {
    pub name: String,
    pub minutes: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(alias = "order")]
    pub sort_order: Option<i32>,
}

/// Create pricing table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingTableCreate {
    pub name: String,
    pub vehicle_type_id: i64,
    pub is_default: Option<bool>,
    pub tolerance_minutes: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub max_value: Option<Decimal>,
    #[serde(default)]
    pub periods: Vec<PricingPeriodCreate>,
}

/// Update pricing table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingTableUpdate {
    pub name: Option<String>,
    pub vehicle_type_id: Option<i64>,
    pub is_default: Option<bool>,
    pub tolerance_minutes: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub max_value: Option<Decimal>,
    pub periods: Option<Vec<PricingPeriodCreate>>,
}
