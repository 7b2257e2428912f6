use chrono::FixedOffset;

use crate::utils::AppResult;
use crate::utils::time::business_offset;

/// 计费配置 - 定价核心的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (stdout) | 日志目录 (按天滚动) |
/// | LOG_JSON | false | JSON 格式日志 |
/// | BUSINESS_UTC_OFFSET_MINUTES | -180 | 业务时区 (UTC-3) |
/// | CLOCK_SKEW_TOLERANCE_MS | 5000 | 允许的终端时钟偏差 |
///
/// # 示例
///
/// ```ignore
/// BUSINESS_UTC_OFFSET_MINUTES=-240 LOG_LEVEL=debug ./parking
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 日志级别
    pub log_level: String,
    /// 日志目录，None 时输出到 stdout
    pub log_dir: Option<String>,
    /// JSON 格式日志
    pub log_json: bool,
    /// 业务时区偏移 (分钟，UTC 以东为正)
    pub business_utc_offset_minutes: i32,
    /// 出场时间早于入场时间的容忍范围 (毫秒)，超过则记录 warn
    pub clock_skew_tolerance_ms: i64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            business_utc_offset_minutes: std::env::var("BUSINESS_UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(-180),
            clock_skew_tolerance_ms: std::env::var("CLOCK_SKEW_TOLERANCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
        }
    }

    /// 先读取 `.env` 文件，再从环境变量加载
    pub fn load() -> Self {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }
        Self::from_env()
    }

    /// 业务时区
    pub fn business_offset(&self) -> AppResult<FixedOffset> {
        business_offset(self.business_utc_offset_minutes)
    }

    /// 初始化日志
    pub fn init_logger(&self) {
        crate::utils::logger::init_logger_with_file(
            Some(&self.log_level),
            Some(self.log_json),
            self.log_dir.as_deref(),
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ErrorCode;

    fn config() -> Config {
        Config {
            log_level: "info".to_string(),
            log_dir: None,
            log_json: false,
            business_utc_offset_minutes: -180,
            clock_skew_tolerance_ms: 5000,
        }
    }

    #[test]
    fn test_business_offset() {
        let offset = config().business_offset().unwrap();
        assert_eq!(offset.local_minus_utc(), -10_800);
    }

    #[test]
    fn test_invalid_offset_is_config_error() {
        let mut config = config();
        config.business_utc_offset_minutes = 5000;
        let err = config.business_offset().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }
}
