//! Error types.

/// Errors produced by the validating constructor and the stored-integer codec.
///
/// Construction never clamps: a field outside its declared range fails with
/// the matching variant. Decoding fails only on a structurally malformed
/// stored value; out-of-range *field* digits inside a well-formed value decode
/// as absent instead (see [`crate::codec`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Month outside 1..=12.
    #[error("month out of range (1-12): {0}")]
    MonthOutOfRange(u32),

    /// Day of month outside 1..=31.
    #[error("day out of range (1-31): {0}")]
    DayOutOfRange(u32),

    /// Weekday outside 0..=6 (Sunday = 0).
    #[error("weekday out of range (0-6, Sunday = 0): {0}")]
    WeekdayOutOfRange(u32),

    /// Year magnitude above the 11-digit storage bound.
    #[error("year magnitude too large (max 99999999999): {0}")]
    YearOutOfRange(String),

    /// A stored integer whose digit pattern cannot hold a fuzzy date.
    #[error("malformed stored fuzzy date: {0}")]
    MalformedStored(i64),
}
