//! 核心模块 - 配置
//!
//! - [`Config`] - 计费配置 (环境变量 / `.env`)

pub mod config;

pub use config::Config;
