use crate::error::CalendarError;

const ENGLISH: [&str; 12] = [
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

const SPANISH: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Injectable month-name table: 12 display strings, January first.
///
/// Callers supply their own table per locale; the builders never consult a
/// global one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNames {
    names: [String; 12],
}

impl MonthNames {
    /// Build a table from caller-supplied strings. Rejects tables whose
    /// length is not exactly 12.
    pub fn new(names: Vec<String>) -> Result<Self, CalendarError> {
        let len = names.len();
        let names: [String; 12] = names
            .try_into()
            .map_err(|_| CalendarError::NameTableSize(len))?;
        Ok(Self { names })
    }

    pub fn english() -> Self {
        Self::from_table(&ENGLISH)
    }

    pub fn spanish() -> Self {
        Self::from_table(&SPANISH)
    }

    fn from_table(table: &[&str; 12]) -> Self {
        Self {
            names: table.map(str::to_string),
        }
    }

    /// Display name for a 1-based month number. Out-of-range numbers
    /// degrade to an empty string rather than failing.
    pub fn name(&self, month_number: u32) -> &str {
        month_number
            .checked_sub(1)
            .and_then(|i| self.names.get(i as usize))
            .map_or("", String::as_str)
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        Self::english()
    }
}
