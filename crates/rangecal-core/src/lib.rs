//! Calendar data model for date-range pickers.
//!
//! Produces the month records a virtualized picker view renders: each month
//! owns a Monday-first, whole-week day grid with selection and visibility
//! flags. Four units compose linearly:
//!
//! - [`grid::build_month_days`] builds one month's padded day grid.
//! - [`list::build_month_list`] assembles a run of consecutive months.
//! - [`selection::mark_selected_days`] recomputes selection flags on an
//!   existing grid after user interaction.
//! - [`window::select_initial_window`] bounds how many months stay
//!   materialized around a focus date.
//!
//! Everything is synchronous and pure: functions return freshly allocated
//! output and never mutate their inputs, so repeated and concurrent calls
//! are safe. The algorithms never fail; malformed input degrades to defined
//! output, and explicit validation exists only at the boundaries
//! ([`grid::validate_month`], [`locale::MonthNames::new`]).

pub mod day;
pub mod error;
pub mod grid;
pub mod list;
pub mod locale;
pub mod month;
pub mod selection;
pub mod window;

pub use day::{Bounds, DayCell, Selection, is_valid_date};
pub use error::CalendarError;
pub use grid::{build_month_days, days_in_month, is_leap_year, validate_month};
pub use list::build_month_list;
pub use locale::MonthNames;
pub use month::MonthRecord;
pub use selection::mark_selected_days;
pub use window::select_initial_window;
