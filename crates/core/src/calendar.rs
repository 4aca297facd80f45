//! Calendar helper.
//!
//! The single delegation boundary to real calendar arithmetic and loose text
//! heuristics. The parser and the value type treat this module as a black
//! box: complete dates get their weekday computed here (via chrono), and
//! free-form text fragments get a best-effort pass that extracts whatever
//! date components it can recognize.
//!
//! Every operation degrades to absence rather than failing: a date chrono
//! cannot represent yields no weekday, and text with nothing recognizable
//! yields empty [`Components`].

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::date::{MONTH_NAMES, WEEKDAY_NAMES};

/// Loosely extracted date components.
///
/// Every field is best-effort; a partial or empty result is the normal
/// outcome for text that only mentions some components (or none).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Components {
    /// Candidate year, sign preserved.
    pub year: Option<i64>,
    /// Candidate month, 1..=12.
    pub month: Option<u32>,
    /// Candidate day of month, 1..=31.
    pub day: Option<u32>,
    /// Candidate weekday, 0..=6 with Sunday = 0.
    pub weekday: Option<u32>,
}

/// Weekday of a complete date, 0..=6 with Sunday = 0.
///
/// `None` when chrono cannot represent the date: year outside its range, or
/// a day that does not exist in that month (February 31st).
#[must_use]
pub fn weekday_of(year: i64, month: u32, day: u32) -> Option<u32> {
    let year = i32::try_from(year).ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.weekday().num_days_from_sunday())
}

/// Resolve a month name, or an unambiguous prefix of at least three letters
/// (`sept`, `dec`), to its 1..=12 number.
#[must_use]
pub fn month_from_name(word: &str) -> Option<u32> {
    resolve_name(word, &MONTH_NAMES).map(|index| index + 1)
}

/// Resolve a weekday name, or an unambiguous prefix of at least three
/// letters (`thurs`, `tue`), to its 0..=6 index, Sunday = 0.
#[must_use]
pub fn weekday_from_name(word: &str) -> Option<u32> {
    resolve_name(word, &WEEKDAY_NAMES)
}

fn resolve_name(word: &str, names: &[&str]) -> Option<u32> {
    // Three letters is the shortest unambiguous prefix in both tables.
    if word.len() < 3 || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    names
        .iter()
        .position(|name| name.len() >= word.len() && name[..word.len()].eq_ignore_ascii_case(word))
        .map(|index| index as u32)
}

struct TextPatterns {
    // 1998-12-31, 1998/12, year-first with a 3+ digit year
    ymd: Regex,
    // 23/3/1998, 23.3.1998, day-first
    dmy: Regex,
    // 15th, 23rd
    ordinal: Regex,
}

fn patterns() -> &'static TextPatterns {
    static PATTERNS: OnceLock<TextPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| TextPatterns {
        ymd: Regex::new(r"^(\d{3,})[-/.](\d{1,2})(?:[-/.](\d{1,2}))?$").unwrap(),
        dmy: Regex::new(r"^(\d{1,2})[-/.](\d{1,2})[-/.](\d+)$").unwrap(),
        ordinal: Regex::new(r"^(\d{1,2})(?:st|nd|rd|th)$").unwrap(),
    })
}

/// Best-effort extraction of date components from free text.
///
/// Recognizes numeric triples (`1998-12-31` year-first, `23/3/1998`
/// day-first), month and weekday names with their common abbreviations,
/// ordinal day numbers (`15th`), and assigns bare numbers to day or year by
/// magnitude. Anything unrecognized is skipped.
#[must_use]
pub fn parse_components(text: &str) -> Components {
    let mut parts = Components::default();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return parts;
    }
    let pats = patterns();

    if let Some(caps) = pats.ymd.captures(trimmed) {
        parts.year = caps[1].parse().ok();
        parts.month = bounded(&caps[2], 1, 12);
        parts.day = caps.get(3).and_then(|day| bounded(day.as_str(), 1, 31));
        return parts;
    }
    if let Some(caps) = pats.dmy.captures(trimmed) {
        parts.day = bounded(&caps[1], 1, 31);
        parts.month = bounded(&caps[2], 1, 12);
        parts.year = caps[3].parse().ok();
        return parts;
    }

    for raw in trimmed.split(|c: char| c.is_whitespace() || c == ',') {
        let token = raw.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '-');
        if token.is_empty() {
            continue;
        }
        if parts.weekday.is_none() {
            if let Some(weekday) = weekday_from_name(token) {
                parts.weekday = Some(weekday);
                continue;
            }
        }
        if parts.month.is_none() {
            if let Some(month) = month_from_name(token) {
                parts.month = Some(month);
                continue;
            }
        }
        let number = match pats.ordinal.captures(token) {
            Some(caps) => caps[1].parse::<i64>().ok(),
            None => token.parse::<i64>().ok(),
        };
        let Some(number) = number else { continue };
        // A small number is a day candidate; everything else (including
        // negatives) can only be a year. First assignment wins.
        if (1..=31).contains(&number) && parts.day.is_none() {
            parts.day = Some(number as u32);
        } else if parts.year.is_none() {
            parts.year = Some(number);
        }
    }
    parts
}

fn bounded(digits: &str, lo: u32, hi: u32) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|n| (lo..=hi).contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_of_known_dates() {
        // 1998-12-31 was a Thursday, 2000-04-23 a Sunday.
        assert_eq!(weekday_of(1998, 12, 31), Some(4));
        assert_eq!(weekday_of(2000, 4, 23), Some(0));
    }

    #[test]
    fn test_weekday_of_nonexistent_day() {
        assert_eq!(weekday_of(1998, 2, 31), None);
    }

    #[test]
    fn test_weekday_of_year_outside_chrono_range() {
        assert_eq!(weekday_of(99_999_999_999, 1, 1), None);
    }

    #[test]
    fn test_name_resolution() {
        assert_eq!(month_from_name("september"), Some(9));
        assert_eq!(month_from_name("sept"), Some(9));
        assert_eq!(month_from_name("SEP"), Some(9));
        assert_eq!(month_from_name("ma"), None); // too short
        assert_eq!(month_from_name("notamonth"), None);
        assert_eq!(weekday_from_name("thurs"), Some(4));
        assert_eq!(weekday_from_name("Sunday"), Some(0));
        assert_eq!(weekday_from_name("sundayish"), None);
    }

    #[test]
    fn test_components_from_words_and_numbers() {
        let parts = parse_components("Thurs 31 december 1998");
        assert_eq!(parts.weekday, Some(4));
        assert_eq!(parts.day, Some(31));
        assert_eq!(parts.month, Some(12));
        assert_eq!(parts.year, Some(1998));
    }

    #[test]
    fn test_components_ordinal_day() {
        let parts = parse_components("march 15th");
        assert_eq!(parts.month, Some(3));
        assert_eq!(parts.day, Some(15));
        assert_eq!(parts.year, None);
    }

    #[test]
    fn test_components_numeric_triples() {
        let iso = parse_components("1998-12-31");
        assert_eq!((iso.year, iso.month, iso.day), (Some(1998), Some(12), Some(31)));

        let slashed = parse_components("23/3/1998");
        assert_eq!(
            (slashed.year, slashed.month, slashed.day),
            (Some(1998), Some(3), Some(23))
        );
    }

    #[test]
    fn test_components_empty_text() {
        assert_eq!(parse_components("   "), Components::default());
        assert_eq!(parse_components("gibberish !!"), Components::default());
    }

    #[test]
    fn test_components_negative_year_token() {
        let parts = parse_components("march -366");
        assert_eq!(parts.month, Some(3));
        assert_eq!(parts.year, Some(-366));
    }
}
