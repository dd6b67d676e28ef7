use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};

use crate::month::MonthRecord;

/// Narrow a month list for virtualized rendering: re-flag visibility to a
/// window of `diff_visible` months around the month containing
/// `start_date`, then truncate the list to at most `max_list_size` records
/// with an asymmetric 40/60 split around that focus.
///
/// A list already within `max_list_size` is returned unchanged. A focus
/// month that is missing from the list behaves exactly like a focus at
/// position 0: both take the plain front-truncation path. The above-middle
/// branch keeps the whole list when its trailing reserve does not fit.
/// Never fails.
pub fn select_initial_window(
    months: Vec<MonthRecord>,
    start_date: NaiveDate,
    max_list_size: usize,
    diff_visible: usize,
) -> Vec<MonthRecord> {
    if months.len() <= max_list_size {
        return months;
    }

    let focus_index = months
        .iter()
        .position(|m| m.month_number == start_date.month() && m.year == start_date.year())
        .unwrap_or(0);

    // The seed month is always counted visible at index 0, so a focus there
    // gets one extra month of slack.
    let diff = if focus_index > 0 {
        diff_visible
    } else {
        diff_visible + 1
    };

    let flagged: Vec<MonthRecord> = months
        .into_iter()
        .enumerate()
        .map(|(i, month)| MonthRecord {
            is_visible: focus_index.abs_diff(i) <= diff,
            ..month
        })
        .collect();

    truncate_around(flagged, focus_index, max_list_size)
}

/// Truncation policy keyed on the focus position relative to the middle of
/// the list. Below the middle, 40% of the budget is reserved before the
/// focus; above it, 60%.
fn truncate_around(
    months: Vec<MonthRecord>,
    focus_index: usize,
    max_list_size: usize,
) -> Vec<MonthRecord> {
    if focus_index == 0 {
        return take_front(months, max_list_size);
    }

    let list_size = months.len();
    let middle = list_size.div_ceil(2);

    match focus_index.cmp(&middle) {
        Ordering::Less => {
            let firsts = max_list_size * 2 / 5;
            let lasts = max_list_size - firsts;
            if focus_index >= firsts {
                take_front(months, focus_index + lasts)
            } else {
                take_front(months, max_list_size)
            }
        }
        Ordering::Greater => {
            let firsts = max_list_size * 3 / 5;
            let lasts = max_list_size - firsts;
            if focus_index + lasts <= list_size {
                take_front(months, focus_index + lasts)
            } else {
                // Trailing reserve does not fit: keep the whole list rather
                // than cutting into the focus window.
                months
            }
        }
        Ordering::Equal => {
            // Half-window ends truncate after halving, so an odd budget
            // still yields a full-size window.
            let half = max_list_size as f64 / 2.0;
            let from = (middle as f64 - half).max(0.0) as usize;
            let to = ((middle as f64 + half) as usize).min(list_size);
            months.into_iter().skip(from).take(to - from).collect()
        }
    }
}

fn take_front(mut months: Vec<MonthRecord>, len: usize) -> Vec<MonthRecord> {
    months.truncate(len);
    months
}
