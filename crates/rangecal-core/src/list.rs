use chrono::{Datelike, NaiveDate};

use crate::day::{Bounds, Selection};
use crate::grid::build_month_days;
use crate::locale::MonthNames;
use crate::month::MonthRecord;

/// Build `months_length + 1` consecutive month records starting at the
/// month containing `starting_month`, rolling December into January.
///
/// The seed record is always visible; after it, the first
/// `visible_months_count - 1` records are visible and the rest are not.
/// Pure function of its inputs.
pub fn build_month_list(
    starting_month: NaiveDate,
    months_length: usize,
    visible_months_count: usize,
    selection: Selection,
    bounds: Bounds,
    names: &MonthNames,
) -> Vec<MonthRecord> {
    let mut months = Vec::with_capacity(months_length + 1);
    let mut year = starting_month.year();
    let mut month_number = starting_month.month();

    months.push(month_record(month_number, year, selection, bounds, names, true));

    for count in 1..=months_length {
        if month_number < 12 {
            month_number += 1;
        } else {
            month_number = 1;
            year += 1;
        }

        months.push(month_record(
            month_number,
            year,
            selection,
            bounds,
            names,
            count < visible_months_count,
        ));
    }

    months
}

fn month_record(
    month_number: u32,
    year: i32,
    selection: Selection,
    bounds: Bounds,
    names: &MonthNames,
    is_visible: bool,
) -> MonthRecord {
    MonthRecord {
        id: format!("{year}-{month_number}"),
        month_number,
        year,
        name: format!("{} {year}", names.name(month_number)),
        days: build_month_days(month_number, year, selection, bounds),
        start_date: selection.start,
        end_date: selection.end,
        is_visible,
    }
}
