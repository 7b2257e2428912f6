//! 时间工具函数 — 业务时区转换
//!
//! Timestamps are stored as `i64` Unix millis and shown in the lot's fixed
//! regional offset (UTC-3 by default).

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

use super::{AppError, AppResult};

/// Display format for entry/exit times
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Build a fixed offset from minutes east of UTC (UTC-3 = -180)
pub fn business_offset(offset_minutes: i32) -> AppResult<FixedOffset> {
    offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            AppError::config(format!("Invalid UTC offset: {} minutes", offset_minutes))
        })
}

/// Unix millis → business-time datetime
///
/// Out-of-range timestamps fall back to the Unix epoch.
pub fn to_business_time(millis: i64, offset: FixedOffset) -> DateTime<FixedOffset> {
    DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .with_timezone(&offset)
}

/// Unix millis → `dd/mm/YYYY HH:MM` in business time
pub fn format_business_time(millis: i64, offset: FixedOffset) -> String {
    to_business_time(millis, offset)
        .format(DISPLAY_FORMAT)
        .to_string()
}

/// Parse `dd/mm/YYYY HH:MM` (business time) → Unix millis
pub fn parse_business_time(value: &str, offset: FixedOffset) -> AppResult<i64> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), DISPLAY_FORMAT)
        .map_err(|_| AppError::validation(format!("Invalid date/time format: {}", value)))?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| AppError::validation(format!("Ambiguous local time: {}", value)))
}
