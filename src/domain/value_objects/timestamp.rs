//! # Timestamp Value Object
//!
//! Wall-clock instant used by price lists.
//!
//! Price lists are authored in the local time of the brand, so instants carry
//! no time zone. They serialize as `yyyy-MM-dd HH:mm:ss`.
//!
//! # Examples
//!
//! ```
//! use price_resolver::domain::value_objects::Timestamp;
//!
//! let opening = Timestamp::from_ymd_hms(2020, 6, 14, 0, 0, 0).unwrap();
//! let afternoon = Timestamp::from_ymd_hms(2020, 6, 14, 16, 0, 0).unwrap();
//!
//! assert!(afternoon.is_after(&opening));
//! assert_eq!(afternoon.to_string(), "2020-06-14 16:00:00");
//! ```

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A zone-less instant with second precision on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Canonical wire format: `yyyy-MM-dd HH:mm:ss`.
    pub const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Wraps a `NaiveDateTime`.
    #[inline]
    #[must_use]
    pub const fn new(inner: NaiveDateTime) -> Self {
        Self(inner)
    }

    /// Current instant, read from the UTC clock.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().naive_utc())
    }

    /// Builds a timestamp from calendar fields.
    ///
    /// Returns `None` for an impossible date or time.
    #[must_use]
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, min, sec))
            .map(Self)
    }

    /// Parses the canonical format only.
    ///
    /// # Errors
    ///
    /// Returns the chrono parse error when `s` is not `yyyy-MM-dd HH:mm:ss`.
    pub fn parse_canonical(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, Self::FORMAT).map(Self)
    }

    /// Returns the inner `NaiveDateTime`.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns true if `self` is strictly after `other`.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Returns true if `self` is strictly before `other`.
    #[inline]
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(inner: NaiveDateTime) -> Self {
        Self(inner)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_canonical(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_ymd_hms_rejects_impossible_dates() {
        assert!(Timestamp::from_ymd_hms(2020, 2, 30, 0, 0, 0).is_none());
        assert!(Timestamp::from_ymd_hms(2020, 6, 14, 24, 0, 0).is_none());
    }

    #[test]
    fn display_uses_canonical_format() {
        let ts = Timestamp::from_ymd_hms(2020, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(ts.to_string(), "2020-12-31 23:59:59");
    }

    #[test]
    fn ordering_follows_wall_clock() {
        let a = Timestamp::from_ymd_hms(2020, 6, 14, 10, 0, 0).unwrap();
        let b = Timestamp::from_ymd_hms(2020, 6, 14, 10, 0, 1).unwrap();
        assert!(a < b);
        assert!(a.is_before(&b));
        assert!(!a.is_after(&a));
    }

    #[test]
    fn serde_uses_canonical_string() {
        let ts = Timestamp::from_ymd_hms(2020, 6, 14, 15, 0, 0).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2020-06-14 15:00:00\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn deserialize_rejects_other_formats() {
        let result: Result<Timestamp, _> = serde_json::from_str("\"2020-06-14T15:00:00\"");
        assert!(result.is_err());
    }
}
