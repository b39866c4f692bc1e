use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseResult};

pub struct TimeUtils;

impl TimeUtils {
    /// MetaTrader export date column, e.g. `2025.01.02`
    pub const BROKER_DATE_FORMAT: &str = "%Y.%m.%d";
    /// MetaTrader export time column, e.g. `01:05:00`
    pub const BROKER_TIME_FORMAT: &str = "%H:%M:%S";
    /// Used when printing timestamps in the report
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Combine the separate date and time columns of the export into one timestamp.
pub fn parse_broker_timestamp(date: &str, time: &str) -> ParseResult<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), TimeUtils::BROKER_DATE_FORMAT)?;
    let time = NaiveTime::parse_from_str(time.trim(), TimeUtils::BROKER_TIME_FORMAT)?;
    Ok(date.and_time(time))
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_broker_timestamp() {
        let ts = parse_broker_timestamp("2025.01.02", "01:05:00").unwrap();
        assert_eq!(format_timestamp(&ts), "2025-01-02 01:05:00");
        assert_eq!(ts.hour(), 1);
    }

    #[test]
    fn test_rejects_iso_dates() {
        assert!(parse_broker_timestamp("2025-01-02", "01:05:00").is_err());
        assert!(parse_broker_timestamp("2025.01.02", "25:00:00").is_err());
    }
}
