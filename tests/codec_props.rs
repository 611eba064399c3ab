//! Property tests for the time codec

use proptest::prelude::*;
use swim_compare::core::time::{format_long, format_short, parse_time, MAX_SECONDS};

/// `M:SS.ss` with at least one minute digit
fn is_short_shape(text: &str) -> bool {
    let Some((minutes, rest)) = text.split_once(':') else {
        return false;
    };
    let Some((seconds, hundredths)) = rest.split_once('.') else {
        return false;
    };
    !minutes.is_empty()
        && minutes.bytes().all(|b| b.is_ascii_digit())
        && seconds.len() == 2
        && seconds.bytes().all(|b| b.is_ascii_digit())
        && hundredths.len() == 2
        && hundredths.bytes().all(|b| b.is_ascii_digit())
}

proptest! {
    #[test]
    fn long_format_round_trips(seconds in 0.0f64..3600.0) {
        let text = format_long(seconds);
        let parsed = parse_time(&text).unwrap();
        prop_assert!((parsed - seconds).abs() <= 0.01, "{seconds} -> {text} -> {parsed}");
    }

    #[test]
    fn short_format_has_fixed_shape(seconds in 0.0f64..100_000.0) {
        let text = format_short(seconds);
        prop_assert!(is_short_shape(&text), "{seconds} -> {text}");
    }

    #[test]
    fn short_format_parses_back(seconds in 0.0f64..3600.0) {
        let parsed = parse_time(&format_short(seconds)).unwrap();
        prop_assert!((parsed - seconds).abs() <= 0.01);
    }

    #[test]
    fn parse_never_panics(input in "\\PC{0,16}") {
        let _ = parse_time(&input);
    }

    #[test]
    fn parsed_times_stay_in_range(input in "[0-9]{1,400}(\\.[0-9]{1,4})?") {
        if let Ok(seconds) = parse_time(&input) {
            prop_assert!(seconds.is_finite());
            prop_assert!((0.0..MAX_SECONDS).contains(&seconds), "{input} -> {seconds}");
        }
    }
}

#[test]
fn shape_checker_rejects_bad_text() {
    assert!(is_short_shape("0:05.00"));
    assert!(is_short_shape("123:05.99"));
    assert!(!is_short_shape(":05.00"));
    assert!(!is_short_shape("1:5.00"));
    assert!(!is_short_shape("1:05.0"));
}
