//! Calendar arithmetic shared by the date-aware widgets.
//!
//! Everything here works on [`chrono::NaiveDate`]. A `NaiveDate` carries no
//! time-of-day, so plain equality between two values *is* calendar-day
//! equality; the widgets rely on that for selection and disabled-date
//! membership checks.

use chrono::{Datelike, Days, NaiveDate};

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Two-letter weekday headers, Sunday first.
pub const WEEKDAYS_SHORT: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month (1-12).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Sunday-based weekday index of the first day of the month (0 = Sunday).
///
/// This is the number of leading blank cells in a Sunday-first month grid.
pub fn first_weekday_offset(year: i32, month: u32) -> usize {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday() as usize)
        .unwrap_or(0)
}

/// Partition a month into week rows of up to 7 cells.
///
/// Leading cells before day 1 are `None`; the last row is cut short rather
/// than padded with trailing blanks.
pub fn month_grid(year: i32, month: u32) -> Vec<Vec<Option<u32>>> {
    let mut cells: Vec<Option<u32>> = vec![None; first_weekday_offset(year, month)];
    cells.extend((1..=days_in_month(year, month)).map(Some));
    cells.chunks(7).map(|week| week.to_vec()).collect()
}

/// Build a date, clamping the day into the target month.
///
/// `clamped_ymd(2021, 2, 31)` is February 28th. This is the semantics of
/// stepping a cursor month-by-month or year-by-year: the day sticks to the
/// end of short months instead of spilling over.
pub fn clamped_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Build a date, letting an oversized day roll into the following month.
///
/// `rolled_ymd(2019, 2, 31)` is March 3rd. This mirrors the set-field
/// semantics of typical calendar libraries, used when jumping the cursor
/// straight to a month or year while keeping its day field.
pub fn rolled_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default();
    first
        .checked_add_days(Days::new(u64::from(day.max(1)) - 1))
        .unwrap_or(first)
}

/// Step one month forward or backward, clamping the day.
pub fn step_month(date: NaiveDate, forward: bool) -> NaiveDate {
    let mut year = date.year();
    let mut month0 = date.month0() as i32 + if forward { 1 } else { -1 };
    if month0 > 11 {
        month0 = 0;
        year += 1;
    } else if month0 < 0 {
        month0 = 11;
        year -= 1;
    }
    clamped_ymd(year, month0 as u32 + 1, date.day())
}

/// Step one year forward or backward, clamping the day (Feb 29 -> Feb 28).
pub fn step_year(date: NaiveDate, forward: bool) -> NaiveDate {
    let year = date.year() + if forward { 1 } else { -1 };
    clamped_ymd(year, date.month(), date.day())
}

/// Set the month (0-based index), keeping year and day with roll-over.
pub fn with_month_rolled(date: NaiveDate, month0: u32) -> NaiveDate {
    rolled_ymd(date.year(), month0 + 1, date.day())
}

/// Set the year, keeping month and day with roll-over (Feb 29 -> Mar 1).
pub fn with_year_rolled(date: NaiveDate, year: i32) -> NaiveDate {
    rolled_ymd(year, date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2019, 1), 31);
        assert_eq!(days_in_month(2019, 4), 30);
        assert_eq!(days_in_month(2019, 2), 28);
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28); // century, not leap
        assert_eq!(days_in_month(2000, 2), 29); // divisible by 400
    }

    #[test]
    fn october_2019_starts_on_tuesday() {
        assert_eq!(first_weekday_offset(2019, 10), 2);
    }

    #[test]
    fn september_2019_starts_on_sunday() {
        assert_eq!(first_weekday_offset(2019, 9), 0);
    }

    #[test]
    fn grid_has_leading_blanks_and_short_last_row() {
        let grid = month_grid(2019, 10);
        assert_eq!(grid[0], vec![None, None, Some(1), Some(2), Some(3), Some(4), Some(5)]);
        // 2 blanks + 31 days = 33 cells, so the last row holds 5 cells.
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[4], vec![Some(27), Some(28), Some(29), Some(30), Some(31)]);
    }

    #[test]
    fn grid_counts_every_day_once() {
        let grid = month_grid(2020, 2);
        let days: Vec<u32> = grid.iter().flatten().filter_map(|c| *c).collect();
        assert_eq!(days, (1..=29).collect::<Vec<_>>());
        assert!(grid.iter().all(|week| week.len() <= 7));
    }

    #[test]
    fn clamped_sticks_to_month_end() {
        assert_eq!(clamped_ymd(2021, 2, 31), ymd(2021, 2, 28));
        assert_eq!(clamped_ymd(2020, 2, 31), ymd(2020, 2, 29));
        assert_eq!(clamped_ymd(2021, 7, 15), ymd(2021, 7, 15));
    }

    #[test]
    fn rolled_spills_into_next_month() {
        assert_eq!(rolled_ymd(2019, 2, 31), ymd(2019, 3, 3));
        assert_eq!(rolled_ymd(2020, 2, 30), ymd(2020, 3, 1));
        assert_eq!(rolled_ymd(2019, 10, 17), ymd(2019, 10, 17));
    }

    #[test]
    fn step_month_clamps_day() {
        assert_eq!(step_month(ymd(2019, 1, 31), true), ymd(2019, 2, 28));
        assert_eq!(step_month(ymd(2019, 3, 31), false), ymd(2019, 2, 28));
    }

    #[test]
    fn step_month_crosses_year_boundary() {
        assert_eq!(step_month(ymd(2019, 12, 15), true), ymd(2020, 1, 15));
        assert_eq!(step_month(ymd(2019, 1, 15), false), ymd(2018, 12, 15));
    }

    #[test]
    fn step_year_handles_leap_day() {
        assert_eq!(step_year(ymd(2020, 2, 29), true), ymd(2021, 2, 28));
        assert_eq!(step_year(ymd(2020, 2, 29), false), ymd(2019, 2, 28));
    }

    #[test]
    fn jump_month_rolls_overflowing_day() {
        // January 31st, jumping to February (index 1), rolls to March 3rd.
        assert_eq!(with_month_rolled(ymd(2019, 1, 31), 1), ymd(2019, 3, 3));
        assert_eq!(with_month_rolled(ymd(2019, 1, 15), 5), ymd(2019, 6, 15));
    }

    #[test]
    fn jump_year_rolls_leap_day() {
        assert_eq!(with_year_rolled(ymd(2020, 2, 29), 2021), ymd(2021, 3, 1));
        assert_eq!(with_year_rolled(ymd(2020, 2, 29), 2024), ymd(2024, 2, 29));
    }
}
