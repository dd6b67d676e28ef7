use chrono::{Datelike, Duration, NaiveDate};

use crate::day::{Bounds, DayCell, Selection};
use crate::error::CalendarError;

/// Weekday remap for Monday-first grids: indexed by days-from-Sunday
/// (0=Sun..6=Sat), yields the leading padding before day 1.
const MONDAY_FIRST: [i64; 7] = [6, 0, 1, 2, 3, 4, 5];

/// Gregorian leap rule: divisible by 4 and not by 100, or divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day count for a calendar month. Month numbers outside 1-12 yield 0.
pub fn days_in_month(month_number: u32, year: i32) -> u32 {
    match month_number {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Boundary check for caller-supplied month numbers.
pub fn validate_month(month_number: u32) -> Result<u32, CalendarError> {
    if (1..=12).contains(&month_number) {
        Ok(month_number)
    } else {
        Err(CalendarError::MonthOutOfRange(month_number))
    }
}

/// Build the Monday-first day grid for one month: every in-month day plus
/// enough adjacent-month padding on both sides to span whole weeks. The
/// result length is always a multiple of 7.
///
/// Selection and visibility flags are applied at construction, so a single
/// call per render suffices. An unrepresentable `(month_number, year)`
/// degrades to an empty grid.
pub fn build_month_days(
    month_number: u32,
    year: i32,
    selection: Selection,
    bounds: Bounds,
) -> Vec<DayCell> {
    let Some(first_of_month) = NaiveDate::from_ymd_opt(year, month_number, 1) else {
        return Vec::new();
    };

    let month_days = days_in_month(month_number, year) as i64;
    let lead = MONDAY_FIRST[first_of_month.weekday().num_days_from_sunday() as usize];
    let partial_week = (lead + month_days) % 7;
    let trail = if partial_week > 0 { 7 - partial_week } else { 0 };

    let mut days = Vec::with_capacity((lead + month_days + trail) as usize);
    for i in -lead..month_days + trail {
        let date = first_of_month + Duration::days(i);
        let is_month_date = i >= 0 && i < month_days;

        let (is_start_date, is_end_date, is_active) = match (selection.start, selection.end) {
            (Some(start), Some(end)) => (
                is_month_date && date == start,
                is_month_date && date == end,
                is_month_date && date >= start && date <= end,
            ),
            // Single-date mode matches padding cells too.
            (Some(start), None) if date == start => (true, true, true),
            _ => (false, false, false),
        };

        days.push(DayCell {
            id: format!("{month_number}-{}", date.format("%Y-%m-%d")),
            date,
            is_month_date,
            is_active,
            is_start_date,
            is_end_date,
            is_visible: is_month_date && bounds.contains(date),
        });
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plain_grid(month: u32, year: i32) -> Vec<DayCell> {
        build_month_days(month, year, Selection::default(), Bounds::default())
    }

    #[test]
    fn grid_spans_whole_weeks() {
        for year in [1900, 2023, 2024] {
            for month in 1..=12 {
                let days = plain_grid(month, year);
                assert_eq!(days.len() % 7, 0, "{year}-{month}");
                let in_month = days.iter().filter(|d| d.is_month_date).count();
                assert_eq!(in_month, days_in_month(month, year) as usize, "{year}-{month}");
            }
        }
    }

    #[test]
    fn leap_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));

        assert_eq!(days_in_month(2, 2000), 29);
        assert_eq!(days_in_month(2, 2024), 29);
        assert_eq!(days_in_month(2, 1900), 28);
        assert_eq!(days_in_month(2, 2023), 28);
    }

    #[test]
    fn february_grid_has_exact_leap_day_count() {
        let count = |year| {
            plain_grid(2, year)
                .iter()
                .filter(|d| d.is_month_date)
                .count()
        };
        assert_eq!(count(2024), 29);
        assert_eq!(count(2000), 29);
        assert_eq!(count(2023), 28);
        assert_eq!(count(1900), 28);
    }

    #[test]
    fn first_row_runs_monday_to_sunday() {
        for (month, year) in [(1, 2024), (2, 2024), (3, 2024), (12, 2023), (6, 1999)] {
            let days = plain_grid(month, year);
            assert_eq!(days[0].date.weekday(), Weekday::Mon, "{year}-{month}");
            assert_eq!(days[6].date.weekday(), Weekday::Sun, "{year}-{month}");
        }
    }

    #[test]
    fn month_starting_monday_has_no_leading_padding() {
        // April 2024 begins on a Monday.
        let days = plain_grid(4, 2024);
        assert_eq!(days[0].date, date(2024, 4, 1));
        assert!(days[0].is_month_date);
    }

    #[test]
    fn month_ending_sunday_has_no_trailing_padding() {
        // March 2024 ends on a Sunday.
        let days = plain_grid(3, 2024);
        assert_eq!(days.last().unwrap().date, date(2024, 3, 31));
        assert!(days.last().unwrap().is_month_date);
    }

    #[test]
    fn padding_days_come_from_adjacent_months() {
        // March 2024 begins on a Friday: four leading cells from February.
        let days = plain_grid(3, 2024);
        assert_eq!(days[0].date, date(2024, 2, 26));
        assert!(!days[0].is_month_date);
        assert_eq!(days[3].date, date(2024, 2, 29));
        assert!(!days[3].is_month_date);
        assert_eq!(days[4].date, date(2024, 3, 1));
        assert!(days[4].is_month_date);
    }

    #[test]
    fn cell_ids_use_owning_month_and_calendar_date() {
        let days = plain_grid(3, 2024);
        // Padding cell: owning month 3, February date.
        assert_eq!(days[0].id, "3-2024-02-26");
        assert_eq!(days[4].id, "3-2024-03-01");
    }

    #[test]
    fn builder_is_idempotent() {
        let selection = Selection::range(date(2024, 3, 10), date(2024, 3, 15));
        let bounds = Bounds {
            min: Some(date(2024, 3, 1)),
            max: Some(date(2024, 3, 31)),
        };
        let first = build_month_days(3, 2024, selection, bounds);
        let second = build_month_days(3, 2024, selection, bounds);
        assert_eq!(first, second);
    }

    #[test]
    fn range_selection_marks_inclusive_span() {
        let selection = Selection::range(date(2024, 3, 10), date(2024, 3, 15));
        let days = build_month_days(3, 2024, selection, Bounds::default());

        let active: Vec<_> = days.iter().filter(|d| d.is_active).collect();
        assert_eq!(active.len(), 6);
        assert!(active.iter().all(|d| d.is_month_date));

        let start = days.iter().find(|d| d.is_start_date).unwrap();
        assert_eq!(start.date, date(2024, 3, 10));
        let end = days.iter().find(|d| d.is_end_date).unwrap();
        assert_eq!(end.date, date(2024, 3, 15));
    }

    #[test]
    fn range_selection_never_activates_padding() {
        // Range covering the leading February padding of the March grid.
        let selection = Selection::range(date(2024, 2, 20), date(2024, 3, 5));
        let days = build_month_days(3, 2024, selection, Bounds::default());
        for day in days.iter().filter(|d| !d.is_month_date) {
            assert!(!day.is_active, "{}", day.id);
            assert!(!day.is_start_date);
            assert!(!day.is_end_date);
        }
        // In-month days inside the range are still active.
        assert!(days.iter().any(|d| d.is_active));
    }

    #[test]
    fn single_date_selection_marks_exactly_one_cell() {
        let selection = Selection::single(date(2024, 3, 10));
        let days = build_month_days(3, 2024, selection, Bounds::default());
        let chosen: Vec<_> = days
            .iter()
            .filter(|d| d.is_active || d.is_start_date || d.is_end_date)
            .collect();
        assert_eq!(chosen.len(), 1);
        assert_eq!(chosen[0].date, date(2024, 3, 10));
        assert!(chosen[0].is_start_date && chosen[0].is_end_date && chosen[0].is_active);
    }

    #[test]
    fn single_date_selection_matches_padding_cells() {
        // May 3 falls in the trailing padding of the April 2024 grid.
        let selection = Selection::single(date(2024, 5, 3));
        let days = build_month_days(4, 2024, selection, Bounds::default());
        let chosen = days.iter().find(|d| d.is_active).unwrap();
        assert_eq!(chosen.date, date(2024, 5, 3));
        assert!(!chosen.is_month_date);
        assert!(chosen.is_start_date && chosen.is_end_date);
    }

    #[test]
    fn single_date_outside_grid_marks_nothing() {
        let selection = Selection::single(date(2030, 1, 1));
        let days = build_month_days(3, 2024, selection, Bounds::default());
        assert!(days.iter().all(|d| !d.is_active));
    }

    #[test]
    fn bounds_clamp_day_visibility() {
        let bounds = Bounds {
            min: Some(date(2024, 3, 10)),
            max: Some(date(2024, 3, 20)),
        };
        let days = build_month_days(3, 2024, Selection::default(), bounds);
        let visible = days.iter().filter(|d| d.is_visible).count();
        assert_eq!(visible, 11);
        // Padding stays invisible even inside the bounds.
        assert!(days.iter().filter(|d| !d.is_month_date).all(|d| !d.is_visible));
    }

    #[test]
    fn unbounded_grid_has_all_month_days_visible() {
        let days = plain_grid(3, 2024);
        for day in &days {
            assert_eq!(day.is_visible, day.is_month_date);
        }
    }

    #[test]
    fn unrepresentable_month_yields_empty_grid() {
        assert!(build_month_days(13, 2024, Selection::default(), Bounds::default()).is_empty());
        assert!(build_month_days(0, 2024, Selection::default(), Bounds::default()).is_empty());
    }

    #[test]
    fn validate_month_bounds() {
        assert_eq!(validate_month(1).unwrap(), 1);
        assert_eq!(validate_month(12).unwrap(), 12);
        assert!(matches!(
            validate_month(13),
            Err(CalendarError::MonthOutOfRange(13))
        ));
        assert!(validate_month(0).is_err());
    }
}
