//! Date utility functions for birthday scheduling.
//!
//! Everything here is pure calendar math on `NaiveDate`. Callers supply
//! "today" explicitly (use `Local::now().date_naive()` at the edges), which
//! keeps the functions deterministic and testable against fixed dates.

use chrono::{Datelike, NaiveDate};

use crate::models::birthday::Birthday;

/// Scheduling facts derived from a birthday relative to a reference date.
///
/// Never persisted; recomputed on every render pass since it is a function
/// of "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayInfo {
    /// Whole days until the next occurrence. 0 means it is today.
    pub days_remaining: i64,
    /// Age the person turns on the next occurrence.
    pub age_turning: i32,
    /// Date of the next occurrence; always `today` or later.
    pub next_occurrence: NaiveDate,
    pub is_today: bool,
}

/// Compute days remaining, the age being turned, and the next occurrence
/// date for a birthday, relative to `today`.
///
/// Feb 29 birthdays are celebrated on Mar 1 in non-leap years.
pub fn calculate_birthday_info(birthday: &Birthday, today: NaiveDate) -> BirthdayInfo {
    let birth = birthday.date_of_birth;

    let mut next_occurrence = occurrence_in_year(today.year(), birth);
    if next_occurrence < today {
        next_occurrence = occurrence_in_year(today.year() + 1, birth);
    }

    let days_remaining = (next_occurrence - today).num_days();

    BirthdayInfo {
        days_remaining,
        age_turning: next_occurrence.year() - birth.year(),
        next_occurrence,
        is_today: days_remaining == 0,
    }
}

/// The birthday's occurrence in the given year, rolling Feb 29 forward to
/// Mar 1 when the year is not a leap year.
fn occurrence_in_year(year: i32, birth: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"))
}

/// Format a date as "October 24" for cards and share messages.
pub fn format_month_day(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}

/// English ordinal suffix for a number ("st", "nd", "rd", "th").
pub fn ordinal_suffix(n: i32) -> &'static str {
    let tens = n % 100;
    match n % 10 {
        1 if tens != 11 => "st",
        2 if tens != 12 => "nd",
        3 if tens != 13 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::birthday::Relation;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn birthday(date_of_birth: NaiveDate) -> Birthday {
        Birthday {
            id: "test".to_string(),
            name: "Test".to_string(),
            date_of_birth,
            relation: Relation::Friend,
        }
    }

    #[test]
    fn test_birthday_today() {
        // Spec example: born 1990-03-15, evaluated on 2024-03-15.
        let info = calculate_birthday_info(&birthday(ymd(1990, 3, 15)), ymd(2024, 3, 15));
        assert_eq!(info.days_remaining, 0);
        assert_eq!(info.age_turning, 34);
        assert!(info.is_today);
        assert_eq!(info.next_occurrence, ymd(2024, 3, 15));
    }

    #[test]
    fn test_birthday_later_this_year() {
        let info = calculate_birthday_info(&birthday(ymd(1995, 10, 24)), ymd(2024, 10, 20));
        assert_eq!(info.days_remaining, 4);
        assert_eq!(info.age_turning, 29);
        assert!(!info.is_today);
        assert_eq!(info.next_occurrence, ymd(2024, 10, 24));
    }

    #[test]
    fn test_birthday_already_passed_rolls_to_next_year() {
        let info = calculate_birthday_info(&birthday(ymd(1988, 3, 15)), ymd(2024, 3, 16));
        assert_eq!(info.next_occurrence, ymd(2025, 3, 15));
        assert_eq!(info.days_remaining, 364);
        assert_eq!(info.age_turning, 37);
    }

    #[test]
    fn test_birthday_tomorrow() {
        let info = calculate_birthday_info(&birthday(ymd(2000, 1, 1)), ymd(2023, 12, 31));
        assert_eq!(info.days_remaining, 1);
        assert_eq!(info.next_occurrence, ymd(2024, 1, 1));
        assert_eq!(info.age_turning, 24);
    }

    #[test]
    fn test_leap_day_in_leap_year() {
        let info = calculate_birthday_info(&birthday(ymd(2000, 2, 29)), ymd(2024, 2, 1));
        assert_eq!(info.next_occurrence, ymd(2024, 2, 29));
        assert_eq!(info.days_remaining, 28);
        assert_eq!(info.age_turning, 24);
    }

    #[test]
    fn test_leap_day_rolls_to_march_first_in_common_year() {
        let info = calculate_birthday_info(&birthday(ymd(2000, 2, 29)), ymd(2023, 2, 20));
        assert_eq!(info.next_occurrence, ymd(2023, 3, 1));
        assert_eq!(info.days_remaining, 9);
    }

    #[test]
    fn test_leap_day_on_march_first_counts_as_today() {
        let info = calculate_birthday_info(&birthday(ymd(2000, 2, 29)), ymd(2023, 3, 1));
        assert!(info.is_today);
        assert_eq!(info.days_remaining, 0);
        assert_eq!(info.age_turning, 23);
    }

    #[test]
    fn test_leap_day_passed_in_common_year_advances_to_leap_year() {
        let info = calculate_birthday_info(&birthday(ymd(2000, 2, 29)), ymd(2023, 3, 2));
        assert_eq!(info.next_occurrence, ymd(2024, 2, 29));
    }

    #[test]
    fn test_format_month_day() {
        assert_eq!(format_month_day(ymd(2024, 10, 24)), "October 24");
        assert_eq!(format_month_day(ymd(2024, 3, 5)), "March 5");
    }

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(34), "th");
        assert_eq!(ordinal_suffix(101), "st");
        assert_eq!(ordinal_suffix(111), "th");
    }
}
