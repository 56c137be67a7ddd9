//! # Validity Window
//!
//! Inclusive time range during which a price record applies.
//!
//! [`ValidityWindow::contains`] is the one definition of "applicable" in the
//! crate. Store adapters and the query service both go through it so the
//! best-match and convention lookups agree on the bounds.
//!
//! # Examples
//!
//! ```
//! use price_resolver::domain::value_objects::{Timestamp, ValidityWindow};
//!
//! let start = Timestamp::from_ymd_hms(2020, 6, 14, 15, 0, 0).unwrap();
//! let end = Timestamp::from_ymd_hms(2020, 6, 14, 18, 30, 0).unwrap();
//! let window = ValidityWindow::new(start, end).unwrap();
//!
//! assert!(window.contains(start));
//! assert!(window.contains(end));
//! assert!(!window.contains(Timestamp::from_ymd_hms(2020, 6, 14, 18, 30, 1).unwrap()));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive `[start, end]` range.
///
/// # Invariants
///
/// - `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct ValidityWindow {
    start: Timestamp,
    end: Timestamp,
}

#[derive(Deserialize)]
struct RawWindow {
    start: Timestamp,
    end: Timestamp,
}

impl TryFrom<RawWindow> for ValidityWindow {
    type Error = DomainError;

    fn try_from(raw: RawWindow) -> DomainResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl ValidityWindow {
    /// Creates a window.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValidityWindow` if `start > end`.
    pub fn new(start: Timestamp, end: Timestamp) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::invalid_window(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// First instant of the window.
    #[inline]
    #[must_use]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Last instant of the window.
    #[inline]
    #[must_use]
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Returns true if `start <= instant <= end`.
    #[inline]
    #[must_use]
    pub fn contains(&self, instant: Timestamp) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Returns true if the two windows share at least one instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for ValidityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ts(day: u32, hour: u32, min: u32) -> Timestamp {
        Timestamp::from_ymd_hms(2020, 6, day, hour, min, 0).unwrap()
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = ValidityWindow::new(ts(15, 0, 0), ts(14, 0, 0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValidityWindow(_)));
    }

    #[test]
    fn single_instant_window_is_allowed() {
        let window = ValidityWindow::new(ts(14, 10, 0), ts(14, 10, 0)).unwrap();
        assert!(window.contains(ts(14, 10, 0)));
        assert!(!window.contains(ts(14, 10, 1)));
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let window = ValidityWindow::new(ts(14, 15, 0), ts(14, 18, 30)).unwrap();
        assert!(window.contains(ts(14, 15, 0)));
        assert!(window.contains(ts(14, 16, 0)));
        assert!(window.contains(ts(14, 18, 30)));
        assert!(!window.contains(ts(14, 14, 59)));
        assert!(!window.contains(ts(14, 18, 31)));
    }

    #[test]
    fn overlaps_detects_shared_instants() {
        let a = ValidityWindow::new(ts(14, 0, 0), ts(14, 12, 0)).unwrap();
        let b = ValidityWindow::new(ts(14, 12, 0), ts(15, 0, 0)).unwrap();
        let c = ValidityWindow::new(ts(15, 0, 1), ts(16, 0, 0)).unwrap();
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn deserialize_enforces_ordering() {
        let json = r#"{"start":"2020-06-15 00:00:00","end":"2020-06-14 00:00:00"}"#;
        let result: Result<ValidityWindow, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
