//! The fuzzy date value type.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::calendar;
use crate::codec;
use crate::error::Error;

/// Largest year magnitude the stored-integer form can carry (11 decimal
/// digits).
pub const MAX_YEAR: i64 = 99_999_999_999;

/// Weekday display names, Sunday-first. Indexed by the weekday field.
pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Month display names, indexed by month number minus one.
pub(crate) const MONTH_NAMES: [&str; 12] = [
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

/// A date that may be only partially known.
///
/// Any subset of {year, month, day, weekday} can be present, each field
/// independently. On top of that the date can be flagged as approximate
/// (`circa`) or as falling before the common era (`bce`). A value with no
/// fields at all is the "unknown" date.
///
/// The type is immutable: every transformation builds a new value. Ordering
/// compares the sortable stored-integer projection (see [`crate::codec`]),
/// which agrees with chronological order for fully specified dates.
///
/// ```
/// use fuzzydate_core::FuzzyDate;
///
/// let date = FuzzyDate::builder().year(1066).weekday(0).circa(true).build()?;
/// assert!(date.is_circa());
/// assert!(!date.is_complete());
/// assert_eq!(date.to_string(), "circa Sunday 1066");
/// # Ok::<(), fuzzydate_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FuzzyDate {
    /// Year magnitude; the sign lives in `bce`.
    year: Option<i64>,
    month: Option<u32>,
    day: Option<u32>,
    weekday: Option<u32>,
    circa: bool,
    bce: bool,
}

/// Validating builder for [`FuzzyDate`].
///
/// Pass the year signed: a negative year builds a BCE date. Out-of-range
/// fields fail [`FuzzyDateBuilder::build`]; nothing is clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyDateBuilder {
    year: Option<i64>,
    month: Option<u32>,
    day: Option<u32>,
    weekday: Option<u32>,
    circa: bool,
}

impl FuzzyDateBuilder {
    /// Set the year. Negative values mean BCE.
    #[must_use]
    pub fn year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the month, 1..=12.
    #[must_use]
    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Set the day of month, 1..=31.
    #[must_use]
    pub fn day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    /// Set the weekday, 0..=6 with Sunday = 0.
    #[must_use]
    pub fn weekday(mut self, weekday: u32) -> Self {
        self.weekday = Some(weekday);
        self
    }

    /// Flag the date as approximate.
    #[must_use]
    pub fn circa(mut self, circa: bool) -> Self {
        self.circa = circa;
        self
    }

    /// Validate the collected fields and build the date.
    pub fn build(self) -> Result<FuzzyDate, Error> {
        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                return Err(Error::MonthOutOfRange(month));
            }
        }
        if let Some(day) = self.day {
            if !(1..=31).contains(&day) {
                return Err(Error::DayOutOfRange(day));
            }
        }
        if let Some(weekday) = self.weekday {
            if weekday > 6 {
                return Err(Error::WeekdayOutOfRange(weekday));
            }
        }
        if let Some(year) = self.year {
            if year.checked_abs().is_none_or(|magnitude| magnitude > MAX_YEAR) {
                return Err(Error::YearOutOfRange(year.to_string()));
            }
        }
        Ok(FuzzyDate {
            year: self.year.map(i64::abs),
            month: self.month,
            day: self.day,
            weekday: self.weekday,
            circa: self.circa,
            bce: self.year.is_some_and(|year| year < 0),
        })
    }
}

impl FuzzyDate {
    /// Start building a date field by field.
    #[must_use]
    pub fn builder() -> FuzzyDateBuilder {
        FuzzyDateBuilder::default()
    }

    /// The completely unknown date: no fields, no flags.
    #[must_use]
    pub fn unknown() -> Self {
        FuzzyDate {
            year: None,
            month: None,
            day: None,
            weekday: None,
            circa: false,
            bce: false,
        }
    }

    /// Lift a complete chrono date. The weekday is left to derivation.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        // chrono years always fit the 11-digit bound, and its month/day are
        // valid by construction, so this cannot fail validation.
        FuzzyDate {
            year: Some(i64::from(date.year().unsigned_abs())),
            month: Some(date.month()),
            day: Some(date.day()),
            weekday: None,
            circa: false,
            bce: date.year() < 0,
        }
    }

    /// Parse a free-text date expression. See [`crate::parse`].
    pub fn parse(input: &str) -> Result<Self, Error> {
        crate::parse::parse(input)
    }

    /// Encode into the sortable stored-integer form. See [`crate::codec`].
    #[must_use]
    pub fn to_stored(&self) -> i64 {
        codec::encode(self)
    }

    /// Decode the stored-integer form; `0` is the absent value.
    pub fn from_stored(raw: i64) -> Result<Option<Self>, Error> {
        codec::decode(raw)
    }

    pub(crate) fn from_parts(
        year: Option<i64>,
        month: Option<u32>,
        day: Option<u32>,
        weekday: Option<u32>,
        circa: bool,
    ) -> Result<Self, Error> {
        let mut builder = FuzzyDate::builder();
        builder.year = year;
        builder.month = month;
        builder.day = day;
        builder.weekday = weekday;
        builder.circa = circa;
        builder.build()
    }

    /// Year magnitude; combine with [`FuzzyDate::is_bce`] for the sign.
    #[must_use]
    pub fn year(&self) -> Option<i64> {
        self.year
    }

    /// Month number, 1..=12.
    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.month
    }

    /// Day of month, 1..=31.
    #[must_use]
    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Weekday, 0..=6 with Sunday = 0.
    ///
    /// When no weekday was supplied but the date is complete and not BCE, it
    /// is derived from the calendar on demand. BCE dates never derive a
    /// weekday; proleptic weekday arithmetic for negative years is out of
    /// scope.
    #[must_use]
    pub fn weekday(&self) -> Option<u32> {
        if self.weekday.is_some() {
            return self.weekday;
        }
        if !self.is_complete() || self.bce {
            return None;
        }
        calendar::weekday_of(self.year?, self.month?, self.day?)
    }

    /// The weekday exactly as stored, without derivation.
    #[must_use]
    pub fn stored_weekday(&self) -> Option<u32> {
        self.weekday
    }

    /// Is the date approximate?
    #[must_use]
    pub fn is_circa(&self) -> bool {
        self.circa
    }

    /// Does the date fall before the common era?
    #[must_use]
    pub fn is_bce(&self) -> bool {
        self.bce
    }

    /// Are year, month, and day all present? The weekday does not count.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    /// Are year, month, day, and weekday all absent? Flags do not count.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none() && self.weekday.is_none()
    }

    /// Month and day folded into one comparable number (`month * 100 + day`),
    /// for year-independent birthday comparisons.
    #[must_use]
    pub fn birthday_key(&self) -> Option<u32> {
        Some(self.month? * 100 + self.day?)
    }

    /// The chrono date, when this one is complete, not BCE, and within
    /// chrono's range.
    #[must_use]
    pub fn to_date(&self) -> Option<NaiveDate> {
        if !self.is_complete() || self.bce {
            return None;
        }
        let year = i32::try_from(self.year?).ok()?;
        NaiveDate::from_ymd_opt(year, self.month?, self.day?)
    }
}

impl fmt::Display for FuzzyDate {
    /// Human-readable rendering: `circa` prefix, weekday name, day, month
    /// name, year, `bce` suffix, whichever parts are present; the word
    /// `unknown` when nothing is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("unknown");
        }
        let mut out = String::new();
        if self.circa {
            out.push_str("circa ");
        }
        if let Some(weekday) = self.weekday() {
            out.push_str(WEEKDAY_NAMES[weekday as usize]);
            out.push(' ');
        }
        if let Some(day) = self.day {
            let _ = write!(out, "{day} ");
        }
        if let Some(month) = self.month {
            out.push_str(MONTH_NAMES[(month - 1) as usize]);
            out.push(' ');
        }
        if let Some(year) = self.year {
            let _ = write!(out, "{year}");
        }
        if self.bce {
            out.push_str(" bce");
        }
        f.write_str(out.trim())
    }
}

impl FromStr for FuzzyDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}

impl PartialOrd for FuzzyDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FuzzyDate {
    /// Total order via the stored-integer projection. The projection is
    /// injective over constructible values, so `Ordering::Equal` coincides
    /// with field equality.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_stored().cmp(&other.to_stored())
    }
}
