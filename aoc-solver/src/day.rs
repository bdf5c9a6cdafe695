//! Puzzle day identification and the part rule

use std::fmt;
use std::ops::RangeInclusive;

/// First year of Advent of Code
pub const BASE_YEAR: u16 = 2015;
/// Last year whose event ends on day 25
pub const LAST_25_DAY_YEAR: u16 = 2024;
/// Days per event up to and including [`LAST_25_DAY_YEAR`]
pub const DAYS_PER_YEAR: u8 = 25;
/// Final day of the shortened events starting in 2025
pub const SHORT_EVENT_FINAL_DAY: u8 = 12;

/// Identifies one puzzle day and how many parts it has
///
/// Parts are always `1..=parts`, so a day can never have part 2 without
/// part 1. Ordering is by year, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DaySpec {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this day has (1 or 2)
    pub parts: u8,
}

impl DaySpec {
    /// Create a day spec, deriving its parts from [`parts_for`]
    pub const fn new(year: u16, day: u8) -> Self {
        Self {
            year,
            day,
            parts: parts_for(year, day),
        }
    }

    /// Range of available part numbers
    pub fn part_range(&self) -> RangeInclusive<u8> {
        1..=self.parts
    }

    /// Directory name of this day, e.g. `day07`
    pub fn dir_name(&self) -> String {
        day_dir_name(self.day)
    }
}

impl fmt::Display for DaySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/day{:02}", self.year, self.day)
    }
}

/// Number of parts for a year/day
///
/// The final day of every event only has one part: day 25 up to 2024 and
/// day 12 from 2025 on.
pub const fn parts_for(year: u16, day: u8) -> u8 {
    if (year <= LAST_25_DAY_YEAR && day == DAYS_PER_YEAR)
        || (year > LAST_25_DAY_YEAR && day == SHORT_EVENT_FINAL_DAY)
    {
        1
    } else {
        2
    }
}

/// Directory (and file stem) name of a day, e.g. `day07`
pub fn day_dir_name(day: u8) -> String {
    format!("day{:02}", day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_final_days_have_one_part() {
        assert_eq!(DaySpec::new(2024, 25).parts, 1);
        assert_eq!(DaySpec::new(2023, 25).parts, 1);
        assert_eq!(DaySpec::new(2015, 25).parts, 1);
        assert_eq!(DaySpec::new(2025, 12).parts, 1);
    }

    #[test]
    fn test_regular_days_have_two_parts() {
        assert_eq!(DaySpec::new(2024, 24).parts, 2);
        assert_eq!(DaySpec::new(2025, 11).parts, 2);
        assert_eq!(DaySpec::new(2024, 12).parts, 2);
        assert_eq!(DaySpec::new(2026, 25).parts, 2);
    }

    #[test]
    fn test_display_and_dir_name() {
        let spec = DaySpec::new(2023, 7);
        assert_eq!(spec.to_string(), "2023/day07");
        assert_eq!(spec.dir_name(), "day07");
    }

    #[test]
    fn test_sort_by_year_then_day() {
        let mut specs = vec![
            DaySpec::new(2024, 2),
            DaySpec::new(2023, 25),
            DaySpec::new(2024, 1),
            DaySpec::new(2023, 3),
        ];
        specs.sort();
        let keys: Vec<_> = specs.iter().map(|s| (s.year, s.day)).collect();
        assert_eq!(keys, vec![(2023, 3), (2023, 25), (2024, 1), (2024, 2)]);
    }

    proptest! {
        #[test]
        fn prop_parts_are_a_prefix(year in 2015u16..2040, day in 1u8..=25) {
            let spec = DaySpec::new(year, day);
            let parts: Vec<u8> = spec.part_range().collect();
            prop_assert!(parts == vec![1] || parts == vec![1, 2]);
            prop_assert_eq!(parts.len(), usize::from(spec.parts));
        }
    }
}
