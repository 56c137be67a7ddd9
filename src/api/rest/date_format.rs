//! # Query Date Parsing
//!
//! Accepted layouts for the `date` query parameter, tried in order:
//!
//! | Layout                      | Example                      |
//! |-----------------------------|------------------------------|
//! | `%Y-%m-%d %H:%M:%S`         | `2020-06-14 10:00:00`        |
//! | `%Y-%m-%d %H:%M`            | `2020-06-14 10:00`           |
//! | `%Y-%m-%d-%H.%M.%S`         | `2020-06-14-10.00.00`        |
//! | `%Y-%m-%d-%H.%M`            | `2020-06-14-10.00`           |
//! | `%Y-%m-%dT%H:%M:%S%.f`      | `2020-06-14T10:00:00.250`    |
//! | `%Y-%m-%dT%H:%M`            | `2020-06-14T10:00`           |

use crate::domain::value_objects::Timestamp;
use chrono::NaiveDateTime;
use thiserror::Error;

const LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d-%H.%M.%S",
    "%Y-%m-%d-%H.%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Human-readable list of accepted layouts, for error messages.
pub const SUPPORTED_FORMATS: &str = "yyyy-MM-dd HH:mm:ss, yyyy-MM-dd HH:mm, \
     yyyy-MM-dd-HH.mm.ss, yyyy-MM-dd-HH.mm, yyyy-MM-ddTHH:mm[:ss[.SSS]]";

/// The input matched none of the accepted layouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date format '{input}'. Supported formats: {}", SUPPORTED_FORMATS)]
pub struct InvalidDateFormat {
    /// Offending input, trimmed.
    pub input: String,
}

/// Parses a query date in any accepted layout.
///
/// # Errors
///
/// Returns [`InvalidDateFormat`] if no layout matches.
pub fn parse_query_date(raw: &str) -> Result<Timestamp, InvalidDateFormat> {
    let input = raw.trim();
    LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
        .map(Timestamp::new)
        .ok_or_else(|| InvalidDateFormat {
            input: input.to_string(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ts(h: u32, m: u32, s: u32) -> Timestamp {
        Timestamp::from_ymd_hms(2020, 6, 14, h, m, s).unwrap()
    }

    #[test]
    fn canonical_layout() {
        assert_eq!(parse_query_date("2020-06-14 10:00:00").unwrap(), ts(10, 0, 0));
    }

    #[test]
    fn minutes_only_layout() {
        assert_eq!(parse_query_date("2020-06-14 16:30").unwrap(), ts(16, 30, 0));
    }

    #[test]
    fn dotted_layouts() {
        assert_eq!(parse_query_date("2020-06-14-21.00.05").unwrap(), ts(21, 0, 5));
        assert_eq!(parse_query_date("2020-06-14-21.00").unwrap(), ts(21, 0, 0));
    }

    #[test]
    fn iso_layouts() {
        assert_eq!(parse_query_date("2020-06-14T10:00:00").unwrap(), ts(10, 0, 0));
        assert_eq!(parse_query_date("2020-06-14T10:00").unwrap(), ts(10, 0, 0));

        let fractional = parse_query_date("2020-06-14T10:00:00.250").unwrap();
        assert_eq!(fractional.get().and_utc().timestamp_subsec_millis(), 250);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_query_date("  2020-06-14 10:00:00 ").unwrap(), ts(10, 0, 0));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse_query_date("14/06/2020").unwrap_err();
        assert_eq!(err.input, "14/06/2020");
        assert!(err.to_string().starts_with("Invalid date format"));
    }

    #[test]
    fn impossible_dates_are_rejected() {
        assert!(parse_query_date("2020-02-30 10:00:00").is_err());
        assert!(parse_query_date("2020-06-14 25:00:00").is_err());
        assert!(parse_query_date("").is_err());
    }
}
