//! Fuzzydate Core
//!
//! Dates that are only partially known. A [`FuzzyDate`] records any subset
//! of {year, month, day, weekday}, can be flagged approximate (`circa`) or
//! before the common era (`bce`), round-trips losslessly through a single
//! sortable integer for storage, and parses from free text.
//!
//! # Quick Start
//!
//! ```
//! use fuzzydate_core::FuzzyDate;
//!
//! let date: FuzzyDate = "Thurs 31 december 1998".parse()?;
//! assert_eq!(date.day(), Some(31));
//! assert_eq!(date.month(), Some(12));
//! assert_eq!(date.year(), Some(1998));
//! assert_eq!(date.weekday(), Some(4)); // Thursday, Sunday = 0
//! assert!(date.is_complete());
//! assert_eq!(date.to_string(), "Thursday 31 December 1998");
//!
//! // The sortable storage form is a lossless round trip
//! let stored = date.to_stored();
//! assert_eq!(FuzzyDate::from_stored(stored)?, Some(date));
//! # Ok::<(), fuzzydate_core::Error>(())
//! ```
//!
//! # Partial and approximate dates
//!
//! ```
//! use fuzzydate_core::FuzzyDate;
//!
//! let hastings: FuzzyDate = "c sunday 1066".parse()?;
//! assert!(hastings.is_circa());
//! assert_eq!(hastings.weekday(), Some(0));
//! assert_eq!(hastings.year(), Some(1066));
//! assert_eq!(hastings.to_string(), "circa Sunday 1066");
//!
//! let founding: FuzzyDate = "23 march 366 bc".parse()?;
//! assert!(founding.is_bce());
//! assert!(founding.is_complete());
//!
//! assert!(FuzzyDate::parse("")?.is_unknown());
//! # Ok::<(), fuzzydate_core::Error>(())
//! ```
//!
//! # Ordering
//!
//! Comparison uses the stored-integer projection, which follows chronology
//! for fully specified dates:
//!
//! ```
//! use fuzzydate_core::FuzzyDate;
//!
//! let earlier: FuzzyDate = "march 2000".parse()?;
//! let later: FuzzyDate = "april 2000".parse()?;
//! assert!(earlier < later);
//! # Ok::<(), fuzzydate_core::Error>(())
//! ```

pub mod calendar;
pub mod codec;
pub mod date;
pub mod error;
pub mod parse;

pub use date::{FuzzyDate, FuzzyDateBuilder, MAX_YEAR};
pub use error::Error;
