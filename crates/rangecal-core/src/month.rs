use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::day::DayCell;

/// One month of the picker model, owning its Monday-first day grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// Key `"{year}-{month_number}"`.
    pub id: String,
    /// 1-based calendar month, 1-12.
    pub month_number: u32,
    pub year: i32,
    /// Localized display name, e.g. "March 2024".
    pub name: String,
    pub days: Vec<DayCell>,
    /// Echo of the selection the list was built with.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// List-position visibility for virtualized rendering. Independent of
    /// the day-level `is_visible` flags; the only field the window selector
    /// overwrites.
    pub is_visible: bool,
}
