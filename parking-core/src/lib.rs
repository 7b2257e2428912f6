//! Parking Core - 停车场计费核心
//!
//! Tiered time-based pricing for a parking lot: tolerance window, base tier,
//! overflow tier and maximum cap, applied to entry/exit timestamps.
//!
//! # 模块结构
//!
//! ```text
//! parking-core/src/
//! ├── core/          # 配置
//! ├── pricing/       # 计费: calculator, elapsed time, table matcher, engine
//! └── utils/         # 日志、业务时区、校验
//! ```
//!
//! # 示例
//!
//! ```
//! use parking_core::pricing::calculate_amount;
//! use shared::models::{PricingPeriod, PricingTable};
//! use shared::Decimal;
//!
//! let table = PricingTable {
//!     id: 1,
//!     name: "Carro".into(),
//!     vehicle_type_id: 1,
//!     is_default: true,
//!     tolerance_minutes: 10,
//!     max_value: Decimal::from(50),
//!     periods: vec![
//!         PricingPeriod { id: 1, name: "Primeira hora".into(), minutes: 60, price: Decimal::from(10), sort_order: 1 },
//!         PricingPeriod { id: 2, name: "Hora adicional".into(), minutes: 60, price: Decimal::from(7), sort_order: 2 },
//!     ],
//! };
//! assert_eq!(calculate_amount(90, &table), Decimal::from(17));
//! ```

pub mod core;
pub mod pricing;
pub mod utils;

// Re-export 公共类型
pub use crate::core::Config;
pub use pricing::{PricingBreakdown, PricingEngine, PricingQuote, calculate_amount};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
