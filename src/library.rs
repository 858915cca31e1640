use std::{
    io::{self, Write},
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;

use crate::{CalendarDate, FormatError, LayoutKind, VALUE_KEYWORD_PATTERN, parse, parse_any};

#[allow(clippy::expect_used)] // constant pattern
static VALUE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VALUE_KEYWORD_PATTERN).expect("value keyword pattern"));

/// Error type for keyword calls.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// Date argument did not follow its layout.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Name does not fit the embedded-argument keyword.
    #[error("No keyword matching name '{0}'")]
    NoKeywordMatch(String),

    /// Embedded value matched the pattern but does not fit its type.
    #[error("Invalid {kind} value '{value}'")]
    InvalidValue { kind: &'static str, value: String },

    /// Writing the rendered date failed.
    #[error("Failed to write keyword output: {0}")]
    Io(#[from] io::Error),
}

/// Values embedded in `Keyword With Integer Value <int> Float Value <float> And String <string>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueKeywordArgs {
    pub int_value:    u64,
    pub float_value:  f64,
    pub string_value: String,
}

/// Extracts the embedded values from a keyword name.
///
/// # Errors
/// `NoKeywordMatch` when the name does not fit the pattern,
/// `InvalidValue` when the integer does not fit `u64`.
pub fn parse_value_keyword(name: &str) -> Result<ValueKeywordArgs, LibraryError> {
    let (_, [int_value, float_value, string_value]) = VALUE_KEYWORD
        .captures(name)
        .ok_or_else(|| LibraryError::NoKeywordMatch(name.to_owned()))?
        .extract();

    Ok(ValueKeywordArgs {
        int_value:    int_value.parse().map_err(|_| LibraryError::InvalidValue {
            kind:  "integer",
            value: int_value.to_owned(),
        })?,
        float_value:  float_value.parse().map_err(|_| LibraryError::InvalidValue {
            kind:  "float",
            value: float_value.to_owned(),
        })?,
        string_value: string_value.to_owned(),
    })
}

/// Runs `Keyword With Integer Value .. Float Value .. And String ..` and
/// logs the embedded values.
///
/// # Errors
/// See [`parse_value_keyword`].
pub fn keyword_int_value_float_string(name: &str) -> Result<ValueKeywordArgs, LibraryError> {
    let args = parse_value_keyword(name)?;
    tracing::info!(
        "Integer value: {}, Float value: {} and String value: {}",
        args.int_value,
        args.float_value,
        args.string_value
    );
    Ok(args)
}

/// Plain function living next to the library struct; only logs its name.
pub fn call_independent_function() {
    tracing::info!("Function name is call_independent_function");
}

/// Date keywords that convert their argument and print it.
///
/// Every keyword writes one `year: Y, month: M, day: D` line to the
/// wrapped writer and nothing at all when conversion fails.
#[derive(Debug)]
pub struct ConversionLibrary<W> {
    out: W,
}

impl ConversionLibrary<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConversionLibrary<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConversionLibrary<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives back the writer, e.g. to inspect captured output
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints a date given as `dd.mm.yyyy`
    ///
    /// # Errors
    /// Returns `LibraryError::Format` for any other layout.
    pub fn finnish_format(&mut self, arg: &str) -> Result<(), LibraryError> {
        let date = parse(arg, LayoutKind::DayMonthYearDotted)?;
        self.print("finnish_format", &date)
    }

    /// Prints a date given as `mm/dd/yyyy`
    ///
    /// # Errors
    /// Returns `LibraryError::Format` for any other layout.
    pub fn us_format(&mut self, arg: &str) -> Result<(), LibraryError> {
        let date = parse(arg, LayoutKind::MonthDayYearSlashed)?;
        self.print("us_format", &date)
    }

    /// Prints a date given as `yyyy-mm-dd`
    ///
    /// # Errors
    /// Returns `LibraryError::Format` for any other layout.
    pub fn iso_8601(&mut self, arg: &str) -> Result<(), LibraryError> {
        let date = parse(arg, LayoutKind::Iso)?;
        self.print("iso_8601", &date)
    }

    /// Prints a date given in any supported layout, trying dotted, then
    /// slashed, then ISO.
    ///
    /// # Errors
    /// Returns `LibraryError::Format` when no layout accepts `arg`.
    pub fn any(&mut self, arg: &str) -> Result<(), LibraryError> {
        let date = parse_any(arg)?;
        self.print("any", &date)
    }

    fn print(&mut self, keyword: &str, date: &CalendarDate) -> Result<(), LibraryError> {
        tracing::info!(keyword, %date, "printing converted date");
        writeln!(self.out, "{date}")?;
        Ok(())
    }
}
