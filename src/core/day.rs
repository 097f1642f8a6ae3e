//! Calendar day resolution
//!
//! One puzzle per calendar day, where "day" depends on the acting user's
//! timezone. Round lookup and streak continuity must agree on the day, so
//! both consume this single resolution point.

use chrono::{Duration, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar day in the puzzle schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameDay(NaiveDate);

impl GameDay {
    /// Wrap an explicit date
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Resolve "today" for a user-supplied UTC offset
    ///
    /// Accepts offsets like `+05:30`, `-08:00`, `+0200` or `Z`/`UTC`. A
    /// missing or unparseable offset falls back to UTC, so a client that
    /// never sends a timezone still gets a consistent schedule.
    #[must_use]
    pub fn today(timezone: Option<&str>) -> Self {
        let offset = timezone
            .map(str::trim)
            .filter(|tz| !tz.is_empty())
            .and_then(parse_offset)
            .unwrap_or_else(|| Utc.fix());

        Self(Utc::now().with_timezone(&offset).date_naive())
    }

    /// The underlying date
    #[inline]
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// The previous calendar day
    #[must_use]
    pub fn previous(self) -> Self {
        Self(self.0 - Duration::days(1))
    }

    /// The next calendar day
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + Duration::days(1))
    }

    /// True when `other` is exactly one calendar day before `self`
    #[must_use]
    pub fn follows(self, other: Self) -> bool {
        other.next() == self
    }
}

impl fmt::Display for GameDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for GameDay {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}

/// Parse a UTC offset string
///
/// `Z` and `UTC` mean zero offset; otherwise the RFC-3339 forms `+HH:MM`,
/// `-HH:MM` and the compact `+HHMM` are accepted.
fn parse_offset(tz: &str) -> Option<FixedOffset> {
    if tz.eq_ignore_ascii_case("z") || tz.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match tz.as_bytes().first()? {
        b'+' => (1i32, &tz[1..]),
        b'-' => (-1i32, &tz[1..]),
        _ => return None,
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?),
        None => match rest.len() {
            4 => (rest[..2].parse().ok()?, rest[2..].parse().ok()?),
            1 | 2 => (rest.parse().ok()?, 0),
            _ => return None,
        },
    };

    if hours > 14 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> GameDay {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display_round_trip() {
        let d = day("2024-03-15");
        assert_eq!(d.to_string(), "2024-03-15");
    }

    #[test]
    fn previous_and_next() {
        let d = day("2024-03-01");
        assert_eq!(d.previous(), day("2024-02-29")); // leap year
        assert_eq!(d.next(), day("2024-03-02"));
    }

    #[test]
    fn follows_consecutive_days() {
        assert!(day("2024-03-15").follows(day("2024-03-14")));
        assert!(!day("2024-03-15").follows(day("2024-03-13")));
        assert!(!day("2024-03-15").follows(day("2024-03-15")));
        assert!(!day("2024-03-14").follows(day("2024-03-15")));
    }

    #[test]
    fn offset_parsing() {
        assert_eq!(parse_offset("UTC"), FixedOffset::east_opt(0));
        assert_eq!(parse_offset("Z"), FixedOffset::east_opt(0));
        assert_eq!(parse_offset("+05:30"), FixedOffset::east_opt(5 * 3600 + 1800));
        assert_eq!(parse_offset("-08:00"), FixedOffset::east_opt(-8 * 3600));
        assert_eq!(parse_offset("+0200"), FixedOffset::east_opt(2 * 3600));
        assert_eq!(parse_offset("+2"), FixedOffset::east_opt(2 * 3600));
        assert_eq!(parse_offset("gibberish"), None);
        assert_eq!(parse_offset("+25:00"), None);
    }

    #[test]
    fn today_falls_back_to_utc() {
        // Unparseable and missing timezones must resolve identically
        let fallback = GameDay::today(Some("not-a-zone"));
        let utc = GameDay::today(None);
        // Not equal only if the test straddles midnight; both must be within a day
        assert!(fallback == utc || fallback == utc.next() || fallback == utc.previous());
    }

    #[test]
    fn serde_round_trip() {
        let d = day("2024-07-04");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-07-04\"");
        let back: GameDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
