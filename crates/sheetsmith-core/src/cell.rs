//! Cell value types

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

/// Represents the value stored in a cell
///
/// Exactly one variant is active; writers match exhaustively so a new
/// variant cannot silently fall through either backend.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell (no value)
    Empty,

    /// Text value
    Text(String),

    /// Integer value
    Integer(i64),

    /// Decimal value (finite f64, validated at construction)
    Decimal(f64),

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Date or date-time value
    DateTime(DateTimeValue),

    /// Formula expression, stored verbatim and never evaluated
    Formula(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Create a new integer value
    pub fn integer(n: i64) -> Self {
        CellValue::Integer(n)
    }

    /// Create a new decimal value, rejecting NaN and infinities
    pub fn decimal(n: f64) -> Result<Self> {
        if !n.is_finite() {
            return Err(Error::NonFiniteNumber(n));
        }
        Ok(CellValue::Decimal(n))
    }

    /// Create a new boolean value
    pub fn boolean(b: bool) -> Self {
        CellValue::Boolean(b)
    }

    /// Create a date-only value from a calendar date
    pub fn date(date: NaiveDate) -> Self {
        CellValue::DateTime(DateTimeValue::from_date(date))
    }

    /// Create a date-time value
    pub fn date_time(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(DateTimeValue::from_date_time(dt))
    }

    /// Create a date-only value from year/month/day, rejecting invalid dates
    pub fn ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| Error::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))?;
        Ok(Self::date(date))
    }

    /// Create a date-time value from calendar and clock parts, rejecting invalid instants
    pub fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| Error::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))?;
        let dt = date.and_hms_opt(hour, min, sec).ok_or_else(|| {
            Error::InvalidDate(format!("{:02}:{:02}:{:02}", hour, min, sec))
        })?;
        Ok(Self::date_time(dt))
    }

    /// Create a new formula value
    pub fn formula<S: Into<String>>(expr: S) -> Self {
        CellValue::Formula(expr.into())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula(_))
    }

    /// Get the semantic type tag used by the writers
    pub fn semantic_type(&self) -> CellType {
        match self {
            CellValue::Empty => CellType::Empty,
            CellValue::Text(_) => CellType::Text,
            CellValue::Integer(_) => CellType::Integer,
            CellValue::Decimal(_) => CellType::Decimal,
            CellValue::Boolean(_) => CellType::Boolean,
            CellValue::DateTime(_) => CellType::DateTime,
            CellValue::Formula(_) => CellType::Formula,
        }
    }

    /// Render the canonical text form of this value
    ///
    /// This is the form the delimited-text writer emits. `Formula` renders
    /// as its verbatim expression text, a defined lossy conversion for
    /// formats that cannot represent formulas.
    pub fn render_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(n) => n.to_string(),
            CellValue::Decimal(n) => n.to_string(),
            CellValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellValue::DateTime(dt) => dt.render_text(),
            CellValue::Formula(expr) => expr.clone(),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_text())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Integer(n as i64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::date_time(dt)
    }
}

/// Semantic type of a cell value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    /// No value
    Empty,
    /// Text
    Text,
    /// Integer number
    Integer,
    /// Decimal number
    Decimal,
    /// Boolean
    Boolean,
    /// Date or date-time
    DateTime,
    /// Formula expression
    Formula,
}

/// A calendar instant with a precision flag
///
/// `date_only` distinguishes pure dates from date-times so writers can
/// pick the appropriate serial representation and display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeValue {
    /// The instant (midnight for date-only values)
    value: NaiveDateTime,
    /// True if this value carries no time-of-day component
    date_only: bool,
}

impl DateTimeValue {
    /// Create a date-only value (time component is midnight)
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            value: date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            date_only: true,
        }
    }

    /// Create a date-time value
    pub fn from_date_time(dt: NaiveDateTime) -> Self {
        Self {
            value: dt,
            date_only: false,
        }
    }

    /// Get the underlying instant
    pub fn value(&self) -> NaiveDateTime {
        self.value
    }

    /// Get the calendar date
    pub fn date(&self) -> NaiveDate {
        self.value.date()
    }

    /// Check whether this value carries a time-of-day component
    pub fn is_date_only(&self) -> bool {
        self.date_only
    }

    /// Render the canonical text form (`2025-01-15` or `2025-01-15 09:30:00`)
    pub fn render_text(&self) -> String {
        if self.date_only {
            self.value.format("%Y-%m-%d").to_string()
        } else {
            self.value.format("%Y-%m-%d %H:%M:%S").to_string()
        }
    }
}
