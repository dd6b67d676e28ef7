use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("month number out of range: {0} (expected 1-12)")]
    MonthOutOfRange(u32),

    #[error("month name table must have 12 entries, got {0}")]
    NameTableSize(usize),
}
