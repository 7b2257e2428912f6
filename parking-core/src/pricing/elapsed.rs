//! Elapsed parking time
//!
//! Sessions are billed in whole minutes, rounding any started minute up.

/// Milliseconds per billable minute
pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// Billable minutes between two Unix-millis timestamps
///
/// `ceil((exit - entry) / 60000)`, or 0 when exit is not after entry.
pub fn elapsed_minutes(entry_ms: i64, exit_ms: i64) -> i64 {
    let diff = exit_ms.saturating_sub(entry_ms);
    if diff <= 0 {
        return 0;
    }
    diff / MILLIS_PER_MINUTE + i64::from(diff % MILLIS_PER_MINUTE != 0)
}

/// Billable minutes for a session that may still be open
///
/// A missing exit is replaced by `now_ms`.
pub fn elapsed_minutes_until(entry_ms: i64, exit_ms: Option<i64>, now_ms: i64) -> i64 {
    elapsed_minutes(entry_ms, exit_ms.unwrap_or(now_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: i64 = 1_700_000_000_000;

    #[test]
    fn test_started_minute_rounds_up() {
        assert_eq!(elapsed_minutes(ENTRY, ENTRY + 1), 1);
        assert_eq!(elapsed_minutes(ENTRY, ENTRY + 59_999), 1);
        assert_eq!(elapsed_minutes(ENTRY, ENTRY + 60_000), 1);
        assert_eq!(elapsed_minutes(ENTRY, ENTRY + 60_001), 2);
        assert_eq!(elapsed_minutes(ENTRY, ENTRY + 90 * MILLIS_PER_MINUTE), 90);
    }

    #[test]
    fn test_same_instant_is_zero() {
        assert_eq!(elapsed_minutes(ENTRY, ENTRY), 0);
    }

    #[test]
    fn test_exit_before_entry_clamps_to_zero() {
        assert_eq!(elapsed_minutes(ENTRY, ENTRY - 3_000), 0);
        assert_eq!(elapsed_minutes(ENTRY, 0), 0);
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        assert_eq!(elapsed_minutes(i64::MAX, i64::MIN), 0);
        assert!(elapsed_minutes(i64::MIN, i64::MAX) > 0);
    }

    #[test]
    fn test_open_session_uses_now() {
        let now = ENTRY + 45 * MILLIS_PER_MINUTE + 10;
        assert_eq!(elapsed_minutes_until(ENTRY, None, now), 46);
        assert_eq!(
            elapsed_minutes_until(ENTRY, Some(ENTRY + MILLIS_PER_MINUTE), now),
            1
        );
    }
}
