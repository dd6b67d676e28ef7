use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cell of a Monday-first month grid.
///
/// A grid always spans whole weeks, so it carries padding cells from the
/// previous/next month; those have `is_month_date = false`. Cells are
/// immutable values: selection changes replace cells rather than mutating
/// them in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Composite key `"{month_number}-{YYYY-MM-DD}"`. The month number is
    /// the grid's owning month; the date part is the cell's own calendar
    /// date, which differs for padding cells.
    pub id: String,
    pub date: NaiveDate,
    /// False for padding cells borrowed from the adjacent months.
    pub is_month_date: bool,
    pub is_active: bool,
    pub is_start_date: bool,
    pub is_end_date: bool,
    /// True iff the cell is an in-month day inside the optional min/max
    /// bounds. Independent of month-level visibility.
    pub is_visible: bool,
}

/// Caller-chosen selection range, threaded through the builders.
///
/// A `start` without an `end` is single-date mode: exactly one cell across
/// the whole grid (padding included) carries all three selection flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Selection {
    pub fn single(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

/// Optional clamp on day-level visibility. Absent bounds leave every
/// in-month day visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl Bounds {
    /// True iff `date` satisfies both bounds (absent bounds always pass).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }
}

/// True iff the triple denotes a representable calendar date.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn valid_date_accepts_leap_day() {
        assert!(is_valid_date(2024, 2, 29));
        assert!(is_valid_date(2000, 2, 29));
    }

    #[test]
    fn valid_date_rejects_nonexistent_days() {
        assert!(!is_valid_date(2023, 2, 29));
        assert!(!is_valid_date(1900, 2, 29));
        assert!(!is_valid_date(2024, 4, 31));
        assert!(!is_valid_date(2024, 13, 1));
        assert!(!is_valid_date(2024, 0, 1));
    }

    #[test]
    fn bounds_default_contains_everything() {
        let bounds = Bounds::default();
        assert!(bounds.contains(date(1900, 1, 1)));
        assert!(bounds.contains(date(2100, 12, 31)));
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = Bounds {
            min: Some(date(2024, 3, 10)),
            max: Some(date(2024, 3, 20)),
        };
        assert!(bounds.contains(date(2024, 3, 10)));
        assert!(bounds.contains(date(2024, 3, 20)));
        assert!(!bounds.contains(date(2024, 3, 9)));
        assert!(!bounds.contains(date(2024, 3, 21)));
    }

    #[test]
    fn bounds_one_sided() {
        let bounds = Bounds {
            min: Some(date(2024, 3, 10)),
            max: None,
        };
        assert!(!bounds.contains(date(2024, 3, 9)));
        assert!(bounds.contains(date(2030, 1, 1)));
    }
}
