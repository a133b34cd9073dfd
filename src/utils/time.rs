//! Timestamps written into the `Created At` column.

use chrono::{Local, NaiveDateTime};

/// Local time with microseconds, e.g. `2025-08-27T09:14:03.512044`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn now_timestamp() -> String {
    format_timestamp(&Local::now().naive_local())
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a `Created At` value; accepts any fractional precision.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%dT%H:%M:%S%.f").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn format_has_microseconds() {
        let ts = NaiveDate::from_ymd_opt(2025, 8, 27)
            .unwrap()
            .and_hms_micro_opt(9, 14, 3, 512_044)
            .unwrap();
        assert_eq!(format_timestamp(&ts), "2025-08-27T09:14:03.512044");
        assert_eq!(parse_timestamp("2025-08-27T09:14:03.512044"), Some(ts));
    }

    #[test]
    fn now_round_trips_through_parse() {
        assert!(parse_timestamp(&now_timestamp()).is_some());
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
