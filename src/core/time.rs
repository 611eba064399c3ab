//! Swim time codec
//!
//! Converts between the human-entered forms `SS(.ff)`, `MM:SS(.ff)` and
//! `HH:MM:SS(.ff)` and a seconds value, and formats seconds back for display.

use crate::core::error::CompareError;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const CENTIS_PER_MINUTE: u64 = 6_000;
const CENTIS_PER_HOUR: u64 = 360_000;
/// Upper bound (exclusive) on a parsed time: one day
pub const MAX_SECONDS: f64 = 86_400.0;

/// Parse a time string into total seconds.
///
/// One component is seconds, two are `minutes:seconds`, three are
/// `hours:minutes:seconds`. Hours and minutes must be whole numbers; seconds
/// may carry a fractional part. Once a larger unit is present, the smaller
/// ones must stay below 60. The total must be below [`MAX_SECONDS`].
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns [`CompareError::InvalidFormat`] when the string is empty, has more
/// than three components, contains anything other than digits and a single
/// decimal point in the seconds field, or breaks the range rules above.
/// The result is always finite.
///
/// # Examples
/// ```
/// use swim_compare::core::time::parse_time;
///
/// assert!((parse_time("1:49.55").unwrap() - 109.55).abs() < 1e-9);
/// assert!(parse_time("99:99").is_err());
/// ```
pub fn parse_time(input: &str) -> Result<f64, CompareError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CompareError::invalid_format(input, "time is empty"));
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [secs] => (0, 0, parse_seconds(input, secs)?),
        [mins, secs] => (
            0,
            parse_whole(input, mins, "minutes")?,
            parse_seconds(input, secs)?,
        ),
        [hrs, mins, secs] => (
            parse_whole(input, hrs, "hours")?,
            parse_whole(input, mins, "minutes")?,
            parse_seconds(input, secs)?,
        ),
        _ => {
            return Err(CompareError::invalid_format(
                input,
                format!(
                    "expected at most 3 ':'-separated components, found {}",
                    parts.len()
                ),
            ))
        }
    };

    if parts.len() >= 2 && seconds >= SECONDS_PER_MINUTE {
        return Err(CompareError::invalid_format(
            input,
            "seconds must be below 60 when minutes are given",
        ));
    }
    if parts.len() == 3 && minutes >= 60 {
        return Err(CompareError::invalid_format(
            input,
            "minutes must be below 60 when hours are given",
        ));
    }

    let total = f64::from(hours).mul_add(
        SECONDS_PER_HOUR,
        f64::from(minutes).mul_add(SECONDS_PER_MINUTE, seconds),
    );
    if total >= MAX_SECONDS {
        return Err(CompareError::invalid_format(input, "time must be below 24 hours"));
    }
    Ok(total)
}

fn parse_whole(input: &str, field: &str, unit: &str) -> Result<u32, CompareError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CompareError::invalid_format(
            input,
            format!("{unit} must be a whole number, got '{field}'"),
        ));
    }
    field
        .parse()
        .map_err(|_| CompareError::invalid_format(input, format!("{unit} value is too large")))
}

fn parse_seconds(input: &str, field: &str) -> Result<f64, CompareError> {
    let (whole, fraction) = field.split_once('.').unwrap_or((field, ""));
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let has_fraction = field.contains('.');

    let bad_fraction = has_fraction && (fraction.is_empty() || !digits(fraction));
    if whole.is_empty() || !digits(whole) || bad_fraction {
        return Err(CompareError::invalid_format(
            input,
            format!("seconds must look like 'SS' or 'SS.ff', got '{field}'"),
        ));
    }
    let value: f64 = field.parse().map_err(|_| {
        CompareError::invalid_format(input, format!("unreadable seconds '{field}'"))
    })?;
    if !value.is_finite() {
        return Err(CompareError::invalid_format(input, "seconds value is too large"));
    }
    Ok(value)
}

/// Split a seconds value into a sign flag and whole hundredths.
///
/// Rounding happens here, before the value is broken into fields, so that a
/// value like 59.999 carries into the next minute instead of printing `60.00`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn to_centis(seconds: f64) -> (bool, u64) {
    let centis = (seconds.abs() * 100.0).round() as u64;
    (seconds.is_sign_negative() && centis > 0, centis)
}

fn seconds_field(centis: u64) -> String {
    let within_minute = centis % CENTIS_PER_MINUTE;
    format!("{:02}.{:02}", within_minute / 100, within_minute % 100)
}

/// Format seconds for display as `MM:SS.ss`, or `HH:MM:SS.ss` from one hour up.
///
/// Negative values get a leading `-`.
///
/// # Examples
/// ```
/// use swim_compare::core::time::format_long;
///
/// assert_eq!(format_long(50.03), "00:50.03");
/// assert_eq!(format_long(944.97), "15:44.97");
/// assert_eq!(format_long(3723.5), "01:02:03.50");
/// ```
#[must_use]
pub fn format_long(seconds: f64) -> String {
    let (negative, centis) = to_centis(seconds);
    let sign = if negative { "-" } else { "" };
    let hours = centis / CENTIS_PER_HOUR;
    let minutes = (centis / CENTIS_PER_MINUTE) % 60;
    let secs = seconds_field(centis);

    if hours > 0 {
        format!("{sign}{hours:02}:{minutes:02}:{secs}")
    } else {
        format!("{sign}{minutes:02}:{secs}")
    }
}

/// Compact `M:SS.ss` form used for chart axes and tooltips.
///
/// Minutes are not padded and never roll over into hours.
///
/// # Examples
/// ```
/// use swim_compare::core::time::format_short;
///
/// assert_eq!(format_short(50.03), "0:50.03");
/// assert_eq!(format_short(109.55), "1:49.55");
/// ```
#[must_use]
pub fn format_short(seconds: f64) -> String {
    let (negative, centis) = to_centis(seconds);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{}:{}", centis / CENTIS_PER_MINUTE, seconds_field(centis))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parses_seconds_only() {
        assert!(approx(parse_time("50.03").unwrap(), 50.03));
        assert!(approx(parse_time("22").unwrap(), 22.0));
        assert!(approx(parse_time("  55.00 ").unwrap(), 55.0));
    }

    #[test]
    fn lone_seconds_may_exceed_a_minute() {
        assert!(approx(parse_time("75.5").unwrap(), 75.5));
    }

    #[test]
    fn parses_minutes_and_seconds() {
        assert!(approx(parse_time("1:49.55").unwrap(), 109.55));
        assert!(approx(parse_time("15:44.97").unwrap(), 944.97));
        assert!(approx(parse_time("0:45.00").unwrap(), 45.0));
    }

    #[test]
    fn parses_hours_minutes_seconds() {
        assert!(approx(parse_time("01:02:03.5").unwrap(), 3723.5));
        assert!(approx(parse_time("0:00:00").unwrap(), 0.0));
    }

    #[test]
    fn rejects_too_many_components() {
        let err = parse_time("1:2:3:4").unwrap_err();
        assert!(matches!(err, CompareError::InvalidFormat { .. }));
    }

    #[test]
    fn rejects_malformed_components() {
        for bad in [
            "", "   ", "abc", "1:", ":30", "1:3a", "-5", "1.5:30", "30.", ".5", "1e2", "NaN",
            "1:2.3.4", "1 :30",
        ] {
            assert!(parse_time(bad).is_err(), "expected '{bad}' to be rejected");
        }
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(parse_time("99:99").is_err());
        assert!(parse_time("1:60.00").is_err());
        assert!(parse_time("1:60:00").is_err());
        assert!(parse_time("1:59:59.99").is_ok());
    }

    #[test]
    fn rejects_seconds_beyond_f64_range() {
        let huge = "9".repeat(400);
        match parse_time(&huge) {
            Err(CompareError::InvalidFormat { reason, .. }) => {
                assert_eq!(reason, "seconds value is too large");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(parse_time(&format!("1:{huge}")).is_err());
    }

    #[test]
    fn rejects_times_of_a_day_or_more() {
        assert!(parse_time(&format!("17{}", "0".repeat(307))).is_err());
        assert!(parse_time("86400").is_err());
        assert!(parse_time("24:00:00").is_err());
        assert!(parse_time("4294967295:00:00").is_err());
        assert!(approx(parse_time("23:59:59.99").unwrap(), 86_399.99));
        assert!(approx(parse_time("86399.5").unwrap(), 86_399.5));
    }

    #[test]
    fn invalid_format_keeps_original_input() {
        match parse_time(" 1:xx ") {
            Err(CompareError::InvalidFormat { input, .. }) => assert_eq!(input, " 1:xx "),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn long_format_pads_fields() {
        assert_eq!(format_long(0.0), "00:00.00");
        assert_eq!(format_long(3.45), "00:03.45");
        assert_eq!(format_long(109.55), "01:49.55");
        assert_eq!(format_long(3600.0), "01:00:00.00");
    }

    #[test]
    fn long_format_carries_rounding_into_minutes() {
        assert_eq!(format_long(59.999), "01:00.00");
        assert_eq!(format_long(3599.996), "01:00:00.00");
    }

    #[test]
    fn short_format_has_unpadded_minutes() {
        assert_eq!(format_short(0.0), "0:00.00");
        assert_eq!(format_short(944.97), "15:44.97");
        assert_eq!(format_short(3723.5), "62:03.50");
    }

    #[test]
    fn negative_values_get_a_sign() {
        assert_eq!(format_long(-5.0), "-00:05.00");
        assert_eq!(format_short(-65.25), "-1:05.25");
        assert_eq!(format_short(-0.001), "0:00.00");
    }
}
