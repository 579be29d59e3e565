//! Time helpers

use chrono::{TimeZone, Utc};

/// Current time as unix milliseconds. All persisted timestamps use this.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render a unix-millisecond timestamp for emails and admin views.
pub fn format_millis(millis: i64) -> String {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| millis.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_timestamp() {
        // 2026-01-15 12:30:00 UTC
        assert_eq!(format_millis(1_768_480_200_000), "2026-01-15 12:30 UTC");
    }

    #[test]
    fn out_of_range_falls_back_to_raw() {
        assert_eq!(format_millis(i64::MAX), i64::MAX.to_string());
    }
}
