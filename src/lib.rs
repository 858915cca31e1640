mod calendar;
mod consts;
mod layout;
mod library;
mod prelude;

pub use calendar::{days_in_month, is_leap_year};
pub use consts::*;
pub use layout::{Converter, LayoutKind, converter, parse, parse_any};
pub use library::{
    ConversionLibrary, LibraryError, ValueKeywordArgs, call_independent_function,
    keyword_int_value_float_string, parse_value_keyword,
};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A year, month and day as written in a date argument.
///
/// Dotted and slashed input is not checked against the calendar, so a
/// value such as `31.2.2024` comes through unchanged. Use
/// [`CalendarDate::is_valid`] when a real day is required.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "year: {year}, month: {month}, day: {day}")]
pub struct CalendarDate {
    year:  u16,
    month: u8,
    day:   u8,
}

/// A date argument that does not match the layout it was converted with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Expected date in format '{expected}', got '{text}'.")]
pub struct FormatError {
    text:     String,
    expected: &'static str,
}

impl FormatError {
    pub fn new(text: impl Into<String>, expected: &'static str) -> Self {
        Self {
            text: text.into(),
            expected,
        }
    }

    /// The rejected input
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Description of the layout the input had to follow
    pub const fn expected(&self) -> &'static str {
        self.expected
    }
}

impl CalendarDate {
    /// Creates a date from its components without any range checks
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Display form, `year: Y, month: M, day: D`
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Whether the components name a real Gregorian day in `MIN_YEAR..=MAX_YEAR`.
    pub fn is_valid(&self) -> bool {
        (MIN_YEAR..=MAX_YEAR).contains(&self.year)
            && days_in_month(self.year, self.month).is_some_and(|max| (1..=max).contains(&self.day))
    }

    /// Converts to a chrono date; `None` for values that are not real days.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if !self.is_valid() {
            return None;
        }
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

/// Renders a date for display. Same as [`CalendarDate::render`].
pub fn render(date: &CalendarDate) -> String {
    date.render()
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = FormatError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year())
            .ok()
            .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year));
        let month = u8::try_from(date.month()).ok();
        let day = u8::try_from(date.day()).ok();

        match (year, month, day) {
            (Some(year), Some(month), Some(day)) => Ok(Self::new(year, month, day)),
            _ => Err(FormatError::new(date.to_string(), ISO_DESCRIPTION)),
        }
    }
}

/// Parses the ISO layout only. Other layouts have to be asked for with
/// [`parse`] so that `12.11.2024` is never read the wrong way round.
impl FromStr for CalendarDate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, LayoutKind::Iso)
    }
}
