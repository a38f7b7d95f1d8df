// Date/time parsing and formatting
//
// Two distinct layouts: a flexible human input form with a canonical
// display rendering, and a fixed-width numeric layout used only by the
// storage codec.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Date/time text that could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid date/time '{0}'")]
pub struct InvalidDateTime(pub String);

/// Width of the fixed layout produced by [`encode_date_time`]:
/// ddMMyyyyHHmm, concatenated with no separators.
pub const ENCODED_WIDTH: usize = 12;

/// Parse flexible human date/time input.
///
/// Accepts the keywords `now`, `tmr`, and `tomorrow` (resolved against the
/// current moment), or `d/M[/yyyy][ HHmm]` with the current year and
/// midnight as defaults for omitted components.
pub fn parse_date_time(text: &str) -> Result<NaiveDateTime, InvalidDateTime> {
    match text {
        "now" => return Ok(Local::now().naive_local()),
        "tmr" | "tomorrow" => return Ok(Local::now().naive_local() + Duration::days(1)),
        _ => {}
    }

    let invalid = || InvalidDateTime(text.to_string());
    let mut parts = text.split_whitespace();
    let date_part = parts.next().ok_or_else(invalid)?;
    let time_part = parts.next();
    if parts.next().is_some() {
        return Err(invalid());
    }

    let date = parse_date(date_part).ok_or_else(invalid)?;
    let time = match time_part {
        Some(t) => parse_time(t).ok_or_else(invalid)?,
        None => NaiveTime::MIN,
    };
    Ok(NaiveDateTime::new(date, time))
}

/// `d/M` or `d/M/yyyy`; the year defaults to the current one.
///
/// Years are limited to 1000..=9999: the codec layout stores the year in
/// exactly four digits, so anything wider could not round-trip.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let mut fields = s.split('/');
    let day: u32 = fields.next()?.parse().ok()?;
    let month: u32 = fields.next()?.parse().ok()?;
    let year: i32 = match fields.next() {
        Some(y) => y.parse().ok()?,
        None => Local::now().year(),
    };
    if fields.next().is_some() {
        return None;
    }
    if !(1000..=9999).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// 24-hour `HHmm`, exactly four digits.
fn parse_time(s: &str) -> Option<NaiveTime> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = s[..2].parse().ok()?;
    let minute: u32 = s[2..].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Canonical display form, e.g. `{19-Feb-2023 1935}`.
pub fn format_date_time(dt: &NaiveDateTime) -> String {
    format!("{{{}}}", dt.format("%d-%b-%Y %H%M"))
}

/// Fixed-width codec form, e.g. `190220231935`. Always [`ENCODED_WIDTH`]
/// characters, so the codec never needs a length prefix for it.
pub fn encode_date_time(dt: &NaiveDateTime) -> String {
    dt.format("%d%m%Y%H%M").to_string()
}

/// Reverse of [`encode_date_time`]. Rejects anything that is not exactly
/// twelve digits encoding a real calendar date and time.
pub fn decode_date_time(text: &str) -> Result<NaiveDateTime, InvalidDateTime> {
    let invalid = || InvalidDateTime(text.to_string());
    if text.len() != ENCODED_WIDTH || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // All-digit input, so the integer parses cannot fail; range checks
    // happen in from_ymd_opt/from_hms_opt.
    let day: u32 = text[0..2].parse().map_err(|_| invalid())?;
    let month: u32 = text[2..4].parse().map_err(|_| invalid())?;
    let year: i32 = text[4..8].parse().map_err(|_| invalid())?;
    let hour: u32 = text[8..10].parse().map_err(|_| invalid())?;
    let minute: u32 = text[10..12].parse().map_err(|_| invalid())?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;
    Ok(NaiveDateTime::new(date, time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_full_date_time() {
        assert_eq!(parse_date_time("19/2/2023 1935"), Ok(dt(2023, 2, 19, 19, 35)));
        assert_eq!(parse_date_time("05/03/2023 0000"), Ok(dt(2023, 3, 5, 0, 0)));
    }

    #[test]
    fn test_parse_defaults_midnight() {
        assert_eq!(parse_date_time("31/12/2025"), Ok(dt(2025, 12, 31, 0, 0)));
    }

    #[test]
    fn test_parse_defaults_current_year() {
        let year = Local::now().year();
        assert_eq!(parse_date_time("5/3"), Ok(dt(year, 3, 5, 0, 0)));
        assert_eq!(parse_date_time("5/3 1000"), Ok(dt(year, 3, 5, 10, 0)));
    }

    #[test]
    fn test_parse_keywords() {
        let now = parse_date_time("now").unwrap();
        let tomorrow = parse_date_time("tomorrow").unwrap();
        assert!(tomorrow > now);
        assert_eq!(parse_date_time("tmr").unwrap().date(), tomorrow.date());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "hello", "19-2-2023", "32/1/2025", "1/13/2025", "1/1/2025 2460", "1/1/2025 10:00", "1/1/2025 1000 extra", "1/2/3/4"] {
            assert!(parse_date_time(text).is_err(), "accepted {:?}", text);
        }
    }

    #[test]
    fn test_parse_rejects_years_outside_four_digits() {
        // The codec stores the year in exactly four digits; wider or
        // negative years must be rejected at input, not at save time.
        for text in ["1/1/12345", "1/1/999", "1/1/0", "1/1/-44"] {
            assert!(parse_date_time(text).is_err(), "accepted {:?}", text);
        }
        assert!(parse_date_time("1/1/1000").is_ok());
        assert!(parse_date_time("31/12/9999").is_ok());
    }

    #[test]
    fn test_format() {
        assert_eq!(format_date_time(&dt(2023, 2, 19, 19, 35)), "{19-Feb-2023 1935}");
        assert_eq!(format_date_time(&dt(2025, 12, 5, 0, 0)), "{05-Dec-2025 0000}");
    }

    #[test]
    fn test_encode_fixed_width() {
        let encoded = encode_date_time(&dt(2023, 2, 19, 19, 35));
        assert_eq!(encoded, "190220231935");
        assert_eq!(encoded.len(), ENCODED_WIDTH);
        assert_eq!(encode_date_time(&dt(2025, 3, 5, 0, 0)), "050320250000");
    }

    #[test]
    fn test_decode_fixed_width() {
        assert_eq!(decode_date_time("190220231935"), Ok(dt(2023, 2, 19, 19, 35)));
        assert_eq!(decode_date_time("050320250000"), Ok(dt(2025, 3, 5, 0, 0)));
    }

    #[test]
    fn test_decode_rejects_malformed() {
        for text in ["", "1902202319", "1902202319350", "19022023193x", "320220231935", "190220232460"] {
            assert!(decode_date_time(text).is_err(), "accepted {:?}", text);
        }
    }
}
