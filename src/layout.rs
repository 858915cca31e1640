use std::{str::FromStr, sync::LazyLock};

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    ANY_DESCRIPTION, CalendarDate, DOTTED_DESCRIPTION, DOTTED_PATTERN, FormatError,
    ISO_DESCRIPTION, ISO_PATTERN, SLASHED_DESCRIPTION, SLASHED_PATTERN, prelude::*,
};

#[allow(clippy::expect_used)] // constant pattern
static DOTTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DOTTED_PATTERN).expect("dotted date pattern"));

#[allow(clippy::expect_used)] // constant pattern
static SLASHED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SLASHED_PATTERN).expect("slashed date pattern"));

#[allow(clippy::expect_used)] // constant pattern
static ISO: LazyLock<Regex> = LazyLock::new(|| Regex::new(ISO_PATTERN).expect("iso date pattern"));

/// Textual arrangement of a date argument.
/// Displays as the pattern a user is expected to type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// `dd.mm.yyyy`, the Finnish way
    #[display(fmt = "{}", DOTTED_DESCRIPTION)]
    DayMonthYearDotted,
    /// `mm/dd/yyyy`, the US way
    #[display(fmt = "{}", SLASHED_DESCRIPTION)]
    MonthDayYearSlashed,
    /// `yyyy-mm-dd`, ISO 8601
    #[display(fmt = "{}", ISO_DESCRIPTION)]
    Iso,
}

impl LayoutKind {
    /// Every layout, in the order [`parse_any`] tries them.
    pub const ALL: [Self; 3] = [
        Self::DayMonthYearDotted,
        Self::MonthDayYearSlashed,
        Self::Iso,
    ];

    /// Human-readable pattern reported in a [`FormatError`]
    pub const fn expected(self) -> &'static str {
        match self {
            Self::DayMonthYearDotted => DOTTED_DESCRIPTION,
            Self::MonthDayYearSlashed => SLASHED_DESCRIPTION,
            Self::Iso => ISO_DESCRIPTION,
        }
    }
}

/// Turns one date argument into a [`CalendarDate`].
pub type Converter = fn(&str) -> Result<CalendarDate, FormatError>;

/// The converter registered for `layout`.
pub const fn converter(layout: LayoutKind) -> Converter {
    match layout {
        LayoutKind::DayMonthYearDotted => parse_dotted,
        LayoutKind::MonthDayYearSlashed => parse_slashed,
        LayoutKind::Iso => parse_iso,
    }
}

/// Converts `text` using exactly the requested layout.
///
/// Dotted and slashed input is matched against an anchored pattern and
/// the captured numbers are taken as they are: `99.1.2024` gives day 99.
/// ISO input must be exactly `yyyy-mm-dd` and is then checked by chrono,
/// so it has to be a real date.
///
/// # Errors
/// Returns [`FormatError`] when `text` does not follow `layout`.
pub fn parse(text: &str, layout: LayoutKind) -> Result<CalendarDate, FormatError> {
    let result = converter(layout)(text);
    match &result {
        Ok(date) => tracing::debug!(%layout, text, %date, "converted date argument"),
        Err(err) => tracing::debug!(%layout, text, %err, "date argument rejected"),
    }
    result
}

/// Converts `text` with the first layout in [`LayoutKind::ALL`] that accepts it.
///
/// # Errors
/// Returns [`FormatError`] listing every layout when none of them match.
pub fn parse_any(text: &str) -> Result<CalendarDate, FormatError> {
    LayoutKind::ALL
        .iter()
        .find_map(|&layout| parse(text, layout).ok())
        .ok_or_else(|| FormatError::new(text, ANY_DESCRIPTION))
}

fn parse_dotted(text: &str) -> Result<CalendarDate, FormatError> {
    let expected = LayoutKind::DayMonthYearDotted.expected();
    let (_, [day, month, year]) = DOTTED
        .captures(text)
        .ok_or_else(|| FormatError::new(text, expected))?
        .extract();

    Ok(CalendarDate::new(
        number(year, text, expected)?,
        number(month, text, expected)?,
        number(day, text, expected)?,
    ))
}

fn parse_slashed(text: &str) -> Result<CalendarDate, FormatError> {
    let expected = LayoutKind::MonthDayYearSlashed.expected();
    let (_, [month, day, year]) = SLASHED
        .captures(text)
        .ok_or_else(|| FormatError::new(text, expected))?
        .extract();

    Ok(CalendarDate::new(
        number(year, text, expected)?,
        number(month, text, expected)?,
        number(day, text, expected)?,
    ))
}

fn parse_iso(text: &str) -> Result<CalendarDate, FormatError> {
    let expected = LayoutKind::Iso.expected();
    let (_, [year, month, day]) = ISO
        .captures(text)
        .ok_or_else(|| FormatError::new(text, expected))?
        .extract();

    let date = NaiveDate::from_ymd_opt(
        number(year, text, expected)?,
        number(month, text, expected)?,
        number(day, text, expected)?,
    )
    .ok_or_else(|| FormatError::new(text, expected))?;
    CalendarDate::try_from(date).map_err(|_| FormatError::new(text, expected))
}

/// Helper to parse a captured digit group, reporting the whole input on failure
fn number<T: FromStr>(digits: &str, text: &str, expected: &'static str) -> Result<T, FormatError> {
    digits
        .parse::<T>()
        .map_err(|_| FormatError::new(text, expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted() {
        let date = parse("24.12.2024", LayoutKind::DayMonthYearDotted).unwrap();
        assert_eq!(date, CalendarDate::new(2024, 12, 24));
    }

    #[test]
    fn test_parse_slashed() {
        let date = parse("12/24/2024", LayoutKind::MonthDayYearSlashed).unwrap();
        assert_eq!(date, CalendarDate::new(2024, 12, 24));
    }

    #[test]
    fn test_parse_iso() {
        let date = parse("2024-12-24", LayoutKind::Iso).unwrap();
        assert_eq!(date, CalendarDate::new(2024, 12, 24));
    }

    #[test]
    fn test_single_digit_components() {
        let date = parse("5.1.2024", LayoutKind::DayMonthYearDotted).unwrap();
        assert_eq!(date, CalendarDate::new(2024, 1, 5));

        let date = parse("1/5/2024", LayoutKind::MonthDayYearSlashed).unwrap();
        assert_eq!(date, CalendarDate::new(2024, 1, 5));

        let date = parse("05.01.2024", LayoutKind::DayMonthYearDotted).unwrap();
        assert_eq!(date, CalendarDate::new(2024, 1, 5));
    }

    #[test]
    fn test_wrong_separator_for_layout() {
        let err = parse("24/12/2024", LayoutKind::DayMonthYearDotted).unwrap_err();
        assert_eq!(err.text(), "24/12/2024");
        assert_eq!(err.expected(), "dd.mm.yyyy");

        let err = parse("12.24.2024", LayoutKind::MonthDayYearSlashed).unwrap_err();
        assert_eq!(err.expected(), "mm/dd/yyyy");

        assert!(parse("24.12.2024", LayoutKind::Iso).is_err());
        assert!(parse("2024-12-24", LayoutKind::DayMonthYearDotted).is_err());
    }

    #[test]
    fn test_year_must_have_four_digits() {
        assert!(parse("1.1.24", LayoutKind::DayMonthYearDotted).is_err());
        assert!(parse("1.1.20245", LayoutKind::DayMonthYearDotted).is_err());
        assert!(parse("1/1/24", LayoutKind::MonthDayYearSlashed).is_err());
    }

    #[test]
    fn test_digit_group_mismatch() {
        assert!(parse("123.1.2024", LayoutKind::DayMonthYearDotted).is_err());
        assert!(parse("1.123.2024", LayoutKind::DayMonthYearDotted).is_err());
        assert!(parse(".1.2024", LayoutKind::DayMonthYearDotted).is_err());
        assert!(parse("1/123/2024", LayoutKind::MonthDayYearSlashed).is_err());
        assert!(parse("aa.bb.cccc", LayoutKind::DayMonthYearDotted).is_err());
    }

    #[test]
    fn test_whole_string_is_anchored() {
        assert!(parse("x24.12.2024", LayoutKind::DayMonthYearDotted).is_err());
        assert!(parse("24.12.2024x", LayoutKind::DayMonthYearDotted).is_err());
        assert!(parse(" 24.12.2024", LayoutKind::DayMonthYearDotted).is_err());
        assert!(parse("24.12.2024\n", LayoutKind::DayMonthYearDotted).is_err());
        assert!(parse("on 12/24/2024", LayoutKind::MonthDayYearSlashed).is_err());
        assert!(parse("", LayoutKind::DayMonthYearDotted).is_err());
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(parse("٢٤.١٢.٢٠٢٤", LayoutKind::DayMonthYearDotted).is_err());
    }

    #[test]
    fn test_no_range_validation() {
        let date = parse("31.2.2024", LayoutKind::DayMonthYearDotted).unwrap();
        assert_eq!(date, CalendarDate::new(2024, 2, 31));
        assert!(!date.is_valid());

        let date = parse("99.99.0000", LayoutKind::DayMonthYearDotted).unwrap();
        assert_eq!(date, CalendarDate::new(0, 99, 99));

        let date = parse("0/0/2024", LayoutKind::MonthDayYearSlashed).unwrap();
        assert_eq!(date, CalendarDate::new(2024, 0, 0));
    }

    #[test]
    fn test_iso_is_native() {
        assert!(parse("2024-02-30", LayoutKind::Iso).is_err());
        assert!(parse("2024-13-01", LayoutKind::Iso).is_err());
        assert!(parse("2024-02-29", LayoutKind::Iso).is_ok());
        assert!(parse("2023-02-29", LayoutKind::Iso).is_err());
        assert!(parse("0000-01-01", LayoutKind::Iso).is_err());
    }

    #[test]
    fn test_iso_is_anchored() {
        let rejected = [
            " 2024-12-24",
            "2024-12-24 ",
            "2024 -12-24",
            "+2024-12-24",
            "-2024-12-24",
            "2024-12-24\n",
            "2024-1-5",
            "2024-01-5",
            "24-12-24",
            "12024-12-24",
            "2024/12/24",
            "",
        ];

        for text in rejected {
            let err = parse(text, LayoutKind::Iso).unwrap_err();
            assert_eq!(err.text(), text);
            assert_eq!(err.expected(), "yyyy-mm-dd");
        }

        let date = parse("2024-01-05", LayoutKind::Iso).unwrap();
        assert_eq!(date, CalendarDate::new(2024, 1, 5));
    }

    #[test]
    fn test_requested_layout_only() {
        // Valid under both layouts once separators are swapped; never auto-detected.
        let dotted = parse("12.11.2024", LayoutKind::DayMonthYearDotted).unwrap();
        let slashed = parse("12/11/2024", LayoutKind::MonthDayYearSlashed).unwrap();
        assert_eq!(dotted, CalendarDate::new(2024, 11, 12));
        assert_eq!(slashed, CalendarDate::new(2024, 12, 11));
    }

    #[test]
    fn test_parse_then_render_keeps_numbers() {
        let cases = [
            ("1.2.2024", LayoutKind::DayMonthYearDotted, "year: 2024, month: 2, day: 1"),
            ("09.10.1999", LayoutKind::DayMonthYearDotted, "year: 1999, month: 10, day: 9"),
            ("2/1/2024", LayoutKind::MonthDayYearSlashed, "year: 2024, month: 2, day: 1"),
            ("2000-01-31", LayoutKind::Iso, "year: 2000, month: 1, day: 31"),
        ];

        for (text, layout, rendered) in cases {
            let date = parse(text, layout).unwrap();
            assert_eq!(date.render(), rendered, "{text} as {layout}");
        }
    }

    #[test]
    fn test_converter_table() {
        for layout in LayoutKind::ALL {
            let err = converter(layout)("not a date").unwrap_err();
            assert_eq!(err.expected(), layout.expected());
        }
        assert_eq!(
            converter(LayoutKind::DayMonthYearDotted)("24.12.2024").unwrap(),
            CalendarDate::new(2024, 12, 24)
        );
    }

    #[test]
    fn test_parse_any_order() {
        assert_eq!(
            parse_any("12.11.2024").unwrap(),
            CalendarDate::new(2024, 11, 12)
        );
        assert_eq!(
            parse_any("12/11/2024").unwrap(),
            CalendarDate::new(2024, 12, 11)
        );
        assert_eq!(
            parse_any("2024-11-12").unwrap(),
            CalendarDate::new(2024, 11, 12)
        );
    }

    #[test]
    fn test_parse_any_failure() {
        let err = parse_any("24 Dec 2024").unwrap_err();
        assert_eq!(err.text(), "24 Dec 2024");
        assert_eq!(err.expected(), ANY_DESCRIPTION);
    }

    #[test]
    fn test_layout_display() {
        assert_eq!(LayoutKind::DayMonthYearDotted.to_string(), "dd.mm.yyyy");
        assert_eq!(LayoutKind::MonthDayYearSlashed.to_string(), "mm/dd/yyyy");
        assert_eq!(LayoutKind::Iso.to_string(), "yyyy-mm-dd");
    }

    #[test]
    fn test_layout_serde() {
        let json = serde_json::to_string(&LayoutKind::DayMonthYearDotted).unwrap();
        assert_eq!(json, r#""day_month_year_dotted""#);

        let layout: LayoutKind = serde_json::from_str(r#""iso""#).unwrap();
        assert_eq!(layout, LayoutKind::Iso);

        let result: Result<LayoutKind, _> = serde_json::from_str(r#""julian""#);
        assert!(result.is_err());
    }
}
