//! Stored-integer codec.
//!
//! A fuzzy date persists as one signed integer whose numeric order matches
//! chronological order, so a plain BIGINT column can sort it. Digit layout,
//! left to right:
//!
//! ```text
//! (-) YYYY..Y MM DD w k c
//! ```
//!
//! - `YYYY..Y`: the year's decimal digits; empty when the year is absent
//!   *or zero* (the `k` digit tells those apart)
//! - `MM`: month, zero-padded; `13` = unknown
//! - `DD`: day, zero-padded; `32` = unknown
//! - `w`:  weekday + 1 (`1` = Sunday .. `7` = Saturday); `8` = unknown
//! - `k`:  `0` = year present, `1` = year absent
//! - `c`:  `1` = circa
//!
//! The whole string read as an integer, negated for BCE. Year digits sit in
//! the most significant position so sorting follows chronology; the tail
//! fields are fixed width so stripping leading zeros loses nothing; the
//! sentinels (13, 32, 8) are out of range for their field, so the decoder can
//! tell "unknown" from every real value.
//!
//! The integer `0` is reserved for "no date at all" and decodes to `None`,
//! distinct from the all-unknown date, which encodes to `1332810`
//! (all-sentinel tail, year-absent digit set).

use tracing::trace;

use crate::date::FuzzyDate;
use crate::error::Error;

// The shortest well-formed value has six digits: a zero-padded month like
// `09` loses its leading zero on the integer round trip.
const MIN_STORED: i64 = 100_000;

/// Encode a date into its sortable stored form. Always nonzero.
#[must_use]
pub fn encode(date: &FuzzyDate) -> i64 {
    let mut n: i64 = date.year().unwrap_or(0);
    n = n * 100 + i64::from(date.month().unwrap_or(13));
    n = n * 100 + i64::from(date.day().unwrap_or(32));
    n = n * 10 + i64::from(date.stored_weekday().map_or(8, |weekday| weekday + 1));
    n = n * 10 + i64::from(date.year().is_none());
    n = n * 10 + i64::from(date.is_circa());
    if date.is_bce() {
        -n
    } else {
        n
    }
}

/// Decode a stored integer.
///
/// `Ok(None)` for `0` (no date); [`Error::MalformedStored`] when the digit
/// pattern is too short to hold the fixed tail. Out-of-range field values
/// inside a well-formed pattern decode as absent fields.
pub fn decode(raw: i64) -> Result<Option<FuzzyDate>, Error> {
    if raw == 0 {
        return Ok(None);
    }
    let bce = raw < 0;
    let Some(mut n) = raw.checked_abs() else {
        return Err(Error::MalformedStored(raw));
    };
    if n < MIN_STORED {
        trace!(raw, "stored value shorter than the fixed tail");
        return Err(Error::MalformedStored(raw));
    }

    let circa = n % 10 == 1;
    n /= 10;
    let year_absent = n % 10 == 1;
    n /= 10;
    let weekday = match n % 10 {
        digit @ 1..=7 => Some((digit - 1) as u32),
        _ => None,
    };
    n /= 10;
    let day = match n % 100 {
        digits @ 1..=31 => Some(digits as u32),
        _ => None,
    };
    n /= 100;
    let month = match n % 100 {
        digits @ 1..=12 => Some(digits as u32),
        _ => None,
    };
    n /= 100;
    // No leading digits left still means year zero when the year-known digit
    // says present.
    let mut year = if n > 0 {
        Some(n)
    } else if year_absent {
        None
    } else {
        Some(0)
    };
    if bce {
        year = year.map(|magnitude| -magnitude);
    }

    FuzzyDate::from_parts(year, month, day, weekday, circa).map(Some)
}

impl serde::Serialize for FuzzyDate {
    /// Serializes as the stored integer, the only lossless wire form.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(encode(self))
    }
}

impl<'de> serde::Deserialize<'de> for FuzzyDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        match decode(raw) {
            Ok(Some(date)) => Ok(date),
            Ok(None) => Err(serde::de::Error::custom(
                "stored value 0 is the absent date; deserialize Option<FuzzyDate> instead",
            )),
            Err(err) => Err(serde::de::Error::custom(err)),
        }
    }
}
