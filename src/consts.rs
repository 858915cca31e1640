/// Smallest year a native ISO date may carry
pub const MIN_YEAR: u16 = 1;
/// Largest year a native ISO date may carry (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Day-first layout with dots, groups are day, month, year.
/// Digits are ASCII only; other Unicode decimal digits never match.
pub const DOTTED_PATTERN: &str = r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$";
/// Month-first layout with slashes, groups are month, day, year
pub const SLASHED_PATTERN: &str = r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$";
/// Shape check for ISO 8601 input before chrono validates the day
pub const ISO_PATTERN: &str = r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$";

/// Human-readable form of the dotted layout
pub const DOTTED_DESCRIPTION: &str = "dd.mm.yyyy";
/// Human-readable form of the slashed layout
pub const SLASHED_DESCRIPTION: &str = "mm/dd/yyyy";
/// Human-readable form of the ISO 8601 layout
pub const ISO_DESCRIPTION: &str = "yyyy-mm-dd";
/// Reported when no layout accepts the input
pub const ANY_DESCRIPTION: &str = "dd.mm.yyyy, mm/dd/yyyy or yyyy-mm-dd";

/// Name pattern of the embedded-argument keyword
pub const VALUE_KEYWORD_PATTERN: &str = r"^Keyword With Integer Value ([0-9]+) Float Value ([0-9]*\.[0-9]+|[0-9]+) And String (.*)$";
