//! Best-effort natural-language parsing.
//!
//! Turns free-text date expressions into [`FuzzyDate`] values:
//! - Complete dates: `Thurs 31 december 1998`
//! - Bare years: `1540`
//! - Month- or weekday-only: `september`, `tuesday`
//! - Approximation markers: `circa 1850`, `c 1066`, `about 1900`
//! - Before-common-era markers: `23 march 366 bc`
//! - The literal `unknown`
//!
//! The pipeline strips modifier tokens first, classifies what remains, hands
//! ambiguous fragments to the [`crate::calendar`] helper, and patches up the
//! two cases loose extraction gets wrong (a lone number is a year, not a
//! day). Unparseable fragments degrade to absent fields; only the final
//! constructor validation can fail.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::calendar::{self, Components};
use crate::date::FuzzyDate;
use crate::error::Error;

struct ModifierPatterns {
    // Circa synonyms in priority order; the first hit wins and at most one
    // token is stripped. `ca` and `c` only count at the start of the text,
    // anything else would eat month abbreviations.
    circa: [Regex; 7],
    // `bce` before `bc`, so the longer token is consumed whole.
    bce: [Regex; 2],
    unknown: Regex,
    bare_number: Regex,
    word_number: Regex,
}

fn patterns() -> &'static ModifierPatterns {
    static PATTERNS: OnceLock<ModifierPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| ModifierPatterns {
        circa: [
            Regex::new(r"(?i)circa").unwrap(),
            Regex::new(r"(?i)^ca ").unwrap(),
            Regex::new(r"(?i)^c ").unwrap(),
            Regex::new(r"(?i)about").unwrap(),
            Regex::new(r"(?i)around").unwrap(),
            Regex::new(r"(?i)round").unwrap(),
            Regex::new(r"(?i)approx").unwrap(),
        ],
        bce: [
            Regex::new(r"(?i)bce").unwrap(),
            Regex::new(r"(?i)bc").unwrap(),
        ],
        unknown: Regex::new(r"(?i)unknown").unwrap(),
        bare_number: Regex::new(r"^\d+$").unwrap(),
        word_number: Regex::new(r"^(\w+)\s+(\d+)$").unwrap(),
    })
}

/// Remove the first matching pattern from `text`; true when one was removed.
fn strip_first(text: &mut String, pats: &[Regex]) -> bool {
    for pat in pats {
        if let Some(found) = pat.find(text) {
            let range = found.range();
            text.replace_range(range, "");
            return true;
        }
    }
    false
}

/// Parse a free-text date expression.
///
/// Empty or whitespace-only input is the unknown date, not an error; so is
/// text containing the word `unknown` (any circa/BCE markers around it are
/// discarded). Validation failures from the extracted values (a year too
/// large to store, for instance) propagate.
pub fn parse(input: &str) -> Result<FuzzyDate, Error> {
    let mut text = input.trim().to_owned();
    if text.is_empty() {
        return Ok(FuzzyDate::unknown());
    }
    let pats = patterns();

    let circa = strip_first(&mut text, &pats.circa);
    let mut bce = strip_first(&mut text, &pats.bce);
    if pats.unknown.is_match(&text) {
        debug!(input, "explicitly unknown date");
        return Ok(FuzzyDate::unknown());
    }

    let rest = text.trim();
    let mut parts = if pats.bare_number.is_match(rest) {
        // A bare number can only be a year.
        let year = rest
            .parse::<i64>()
            .map_err(|_| Error::YearOutOfRange(rest.to_owned()))?;
        Components {
            year: Some(year),
            ..Components::default()
        }
    } else if let Some(caps) = pats.word_number.captures(rest) {
        let number = &caps[2];
        let value = number
            .parse::<i64>()
            .map_err(|_| Error::YearOutOfRange(number.to_owned()))?;
        if value > 31 {
            // `sunday 1066`, `march 1999`: the number is past any day of
            // month, so resolve the word alone and keep the number as year.
            let mut fragment = calendar::parse_components(&caps[1]);
            fragment.year = Some(value);
            fragment
        } else {
            calendar::parse_components(rest)
        }
    } else {
        calendar::parse_components(rest)
    };
    trace!(?parts, circa, bce, "extracted components");

    // Loose extraction reads a lone number as a day of month. Without a
    // month or year alongside it, a year is the likelier reading; same when
    // the "day" is too large to be one.
    if (parts.day.is_some() && parts.month.is_none() && parts.year.is_none())
        || (parts.year.is_none() && parts.day.is_some_and(|day| day > 31))
    {
        parts.year = parts.day.map(i64::from);
        parts.day = None;
    }
    if parts.year.is_some_and(|year| year < 0) {
        parts.year = parts.year.map(i64::abs);
        bce = true;
    }

    let year = if bce {
        parts.year.map(|magnitude| -magnitude)
    } else {
        parts.year
    };
    let date = FuzzyDate::from_parts(year, parts.month, parts.day, parts.weekday, circa)?;
    debug!(input, %date, "parsed");
    Ok(date)
}
