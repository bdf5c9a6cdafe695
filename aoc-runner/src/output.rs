//! Output formatting for run results

use chrono::TimeDelta;

/// Format a duration as milliseconds with microsecond precision, `12.345 ms`
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    format!("{}.{:03} ms", micros / 1000, micros % 1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::zero()), "0.000 ms");
        assert_eq!(format_duration(TimeDelta::microseconds(7)), "0.007 ms");
        assert_eq!(format_duration(TimeDelta::microseconds(12_345)), "12.345 ms");
        assert_eq!(format_duration(TimeDelta::seconds(2)), "2000.000 ms");
        assert_eq!(format_duration(TimeDelta::microseconds(-1_500)), "-1.500 ms");
        assert_eq!(format_duration(TimeDelta::nanoseconds(999)), "0.000 ms");
    }

    proptest! {
        #[test]
        fn prop_millis_with_three_decimals(micros in 0i64..1_000_000_000_000) {
            let text = format_duration(TimeDelta::microseconds(micros));
            prop_assert_eq!(&text, &format!("{}.{:03} ms", micros / 1000, micros % 1000));

            let (whole, rest) = text.trim_end_matches(" ms").split_once('.').unwrap();
            prop_assert_eq!(rest.len(), 3);
            let parsed = whole.parse::<i64>().unwrap() * 1000 + rest.parse::<i64>().unwrap();
            prop_assert_eq!(parsed, micros);
        }

        #[test]
        fn prop_negative_is_prefixed(micros in 1i64..1_000_000_000) {
            prop_assert_eq!(
                format_duration(TimeDelta::microseconds(-micros)),
                format!("-{}", format_duration(TimeDelta::microseconds(micros)))
            );
        }
    }
}
