use chrono::NaiveDate;

/// `Date Read` format used by the export
pub const DATE_READ_FORMAT: &str = "%Y/%m/%d";

/// Stand-in for a missing or unparseable read date; sorts after every real
/// date under descending order
pub const SENTINEL_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("invalid sentinel date"),
};

/// Parse a `Date Read` cell
///
/// # Arguments
/// - `raw`: cell text, surrounding whitespace ignored
///
/// # Returns
/// The read date; [`SENTINEL_DATE`] for blank or malformed input. The year
/// must be exactly four digits, month and day may be unpadded.
pub fn parse_date_read(raw: &str) -> NaiveDate {
    let raw = raw.trim();
    if raw.is_empty() {
        return SENTINEL_DATE;
    }

    if !has_four_digit_year(raw) {
        tracing::debug!("unparseable read date '{}': year is not four digits", raw);
        return SENTINEL_DATE;
    }

    match NaiveDate::parse_from_str(raw, DATE_READ_FORMAT) {
        Ok(date) => date,
        Err(e) => {
            tracing::debug!("unparseable read date '{}': {}", raw, e);
            SENTINEL_DATE
        }
    }
}

// chrono's %Y takes any digit count and a sign
fn has_four_digit_year(raw: &str) -> bool {
    match raw.split_once('/') {
        Some((year, _)) => year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

pub fn is_sentinel(date: NaiveDate) -> bool {
    date == SENTINEL_DATE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(parse_date_read("2023/04/01"), ymd(2023, 4, 1));
        assert_eq!(parse_date_read("  2019/12/31 "), ymd(2019, 12, 31));
    }

    #[test]
    fn test_blank_is_sentinel() {
        assert_eq!(parse_date_read(""), SENTINEL_DATE);
        assert_eq!(parse_date_read("   "), SENTINEL_DATE);
    }

    #[test]
    fn test_wrong_format_is_sentinel() {
        assert_eq!(parse_date_read("2023-04-01"), SENTINEL_DATE);
        assert_eq!(parse_date_read("04/01/2023"), SENTINEL_DATE);
        assert_eq!(parse_date_read("yesterday"), SENTINEL_DATE);
        assert_eq!(parse_date_read("99/01/01"), SENTINEL_DATE);
        assert_eq!(parse_date_read("12345/01/01"), SENTINEL_DATE);
        assert_eq!(parse_date_read("+2023/04/01"), SENTINEL_DATE);
        assert_eq!(parse_date_read("-2023/04/01"), SENTINEL_DATE);
    }

    #[test]
    fn test_unpadded_month_and_day() {
        assert_eq!(parse_date_read("2023/4/1"), ymd(2023, 4, 1));
        assert_eq!(parse_date_read("2023/11/5"), ymd(2023, 11, 5));
    }

    #[test]
    fn test_impossible_date_is_sentinel() {
        assert_eq!(parse_date_read("2023/02/30"), SENTINEL_DATE);
        assert_eq!(parse_date_read("2023/13/01"), SENTINEL_DATE);
    }

    #[test]
    fn test_sentinel_sorts_before_real_dates() {
        assert!(SENTINEL_DATE < ymd(1901, 1, 1));
        assert!(is_sentinel(parse_date_read("")));
        assert!(!is_sentinel(parse_date_read("2000/01/01")));
    }
}
