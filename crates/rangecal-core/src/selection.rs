use chrono::NaiveDate;

use crate::day::DayCell;

/// Recompute the selection flags over an existing day sequence, leaving
/// every other field untouched. Returns fresh cells; the input is never
/// mutated.
///
/// Without an `end_date` (single-date mode) the chosen date is matched
/// against every cell, padding included. With an `end_date` (range mode)
/// only in-month cells can carry flags; padding always ends up all-false.
pub fn mark_selected_days(
    days: &[DayCell],
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> Vec<DayCell> {
    days.iter()
        .map(|day| {
            let (is_start_date, is_end_date, is_active) = match end_date {
                None => {
                    let chosen = day.date == start_date;
                    (chosen, chosen, chosen)
                }
                Some(end) => (
                    day.is_month_date && day.date == start_date,
                    day.is_month_date && day.date == end,
                    day.is_month_date && day.date >= start_date && day.date <= end,
                ),
            };
            DayCell {
                is_start_date,
                is_end_date,
                is_active,
                ..day.clone()
            }
        })
        .collect()
}
