use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn today_string() -> String {
    today().format(DATE_FORMAT).to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(parse_date("2025-08-27"), NaiveDate::from_ymd_opt(2025, 8, 27));
        assert_eq!(parse_date(" 2025-08-28 "), NaiveDate::from_ymd_opt(2025, 8, 28));
        assert_eq!(parse_date("Aug 28"), None);
        assert_eq!(parse_date("2025-02-30"), None);
    }

    #[test]
    fn today_string_is_parseable() {
        assert_eq!(parse_date(&today_string()), Some(today()));
    }
}
