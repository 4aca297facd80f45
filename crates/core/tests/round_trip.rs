//! Storage-form round trips, ordering, and the serde binding, end to end.

use fuzzydate_core::{Error, FuzzyDate, MAX_YEAR};
use pretty_assertions::assert_eq;

/// A spread of field combinations covering every corner of the
/// representation: absent/zero/huge years, sentinels next to real values,
/// both flags, both signs.
fn corpus() -> Vec<FuzzyDate> {
    let b = FuzzyDate::builder;
    vec![
        FuzzyDate::unknown(),
        b().circa(true).build().unwrap(),
        b().year(0).build().unwrap(),
        b().year(1).build().unwrap(),
        b().year(1540).build().unwrap(),
        b().year(MAX_YEAR).build().unwrap(),
        b().year(-1).build().unwrap(),
        b().year(-99).month(12).build().unwrap(),
        b().month(9).build().unwrap(),
        b().day(15).build().unwrap(),
        b().weekday(0).build().unwrap(),
        b().weekday(6).circa(true).build().unwrap(),
        b().year(1998).month(12).day(31).build().unwrap(),
        b().year(1998).month(12).day(31).weekday(4).build().unwrap(),
        b().year(-366).month(3).day(23).build().unwrap(),
        b().year(1066).weekday(0).circa(true).build().unwrap(),
        b().year(2024).month(2).day(29).build().unwrap(),
        b().year(-MAX_YEAR).month(1).day(1).weekday(3).circa(true).build().unwrap(),
    ]
}

#[test]
fn stored_form_round_trips_every_field() {
    for date in corpus() {
        let stored = date.to_stored();
        assert_ne!(stored, 0, "{date} must not collide with the reserved zero");
        let back = FuzzyDate::from_stored(stored)
            .unwrap_or_else(|err| panic!("{date} ({stored}) failed to decode: {err}"))
            .unwrap_or_else(|| panic!("{date} ({stored}) decoded to no value"));
        assert_eq!(back, date, "decode(encode) for {date}");
        assert_eq!(back.to_stored(), stored, "encode(decode) for {stored}");
    }
}

#[test]
fn stored_zero_is_the_absent_value() {
    assert_eq!(FuzzyDate::from_stored(0), Ok(None));
}

#[test]
fn stored_form_boundaries() {
    // Six digits is the shortest well-formed value (a zero-padded month
    // loses its leading zero as an integer).
    assert!(FuzzyDate::from_stored(100_000).is_ok());
    assert_eq!(
        FuzzyDate::from_stored(99_999),
        Err(Error::MalformedStored(99_999))
    );
    // The all-unknown date sits at its documented encoding.
    assert_eq!(FuzzyDate::unknown().to_stored(), 1_332_810);
    assert!(FuzzyDate::from_stored(1_332_810).unwrap().unwrap().is_unknown());
}

#[test]
fn encoding_orders_complete_dates_chronologically() {
    let b = FuzzyDate::builder;
    let chronological = [
        b().year(-366).month(3).day(23).build().unwrap(),
        b().year(-1).month(12).day(31).build().unwrap(),
        b().year(33).month(4).day(3).build().unwrap(),
        b().year(1066).month(10).day(14).build().unwrap(),
        b().year(1998).month(12).day(30).build().unwrap(),
        b().year(1998).month(12).day(31).build().unwrap(),
        b().year(1999).month(1).day(1).build().unwrap(),
        b().year(2024).month(2).day(29).build().unwrap(),
    ];
    for pair in chronological.windows(2) {
        assert!(
            pair[0].to_stored() < pair[1].to_stored(),
            "{} should sort before {}",
            pair[0],
            pair[1]
        );
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn comparisons_follow_parse() {
    let date = |s: &str| FuzzyDate::parse(s).unwrap();
    assert_eq!(date("23 april 2000"), date("23 april 2000"));
    assert!(date("24 april 2000") > date("23 april 2000"));
    assert!(date("april 2000") > date("march 2000"));
    assert!(date("jan 2001") > date("dec 2000"));
    assert!(date("sept") > date("july"));
}

#[test]
fn serde_round_trips_the_corpus() {
    for date in corpus() {
        let json = serde_json::to_value(date).unwrap();
        assert_eq!(json, serde_json::json!(date.to_stored()), "wire form of {date}");
        let back: FuzzyDate = serde_json::from_value(json).unwrap();
        assert_eq!(back, date);
    }
}

#[test]
fn serde_inside_option_handles_absence() {
    let none: Option<FuzzyDate> = serde_json::from_str("null").unwrap();
    assert_eq!(none, None);
    let some: Option<FuzzyDate> = serde_json::from_str("1332810").unwrap();
    assert!(some.unwrap().is_unknown());
}
