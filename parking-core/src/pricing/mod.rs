//! Parking Pricing Module
//!
//! Computes the fee owed for a parking session under a tiered pricing table
//! (tolerance window, base tier, overflow tier, maximum cap).

mod calculator;
pub mod elapsed;
mod engine;
pub mod matcher;

pub use calculator::*;
pub use elapsed::*;
pub use engine::*;
pub use matcher::*;
