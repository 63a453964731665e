//! Purpose: Calendar-day and offset-timestamp value types used by records and queries.
//! Exports: `Day`, `Timestamp`, `format_query_date`, `format_query_datetime`.
//! Role: The only place that knows the wire formats for dates and times.
//! Invariants: Days are `YYYY-MM-DD` both on decode and when written back.
//! Invariants: Payload timestamps are RFC 3339; query datetimes always carry a numeric offset.
use crate::core::error::{Error, ErrorKind};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const QUERY_DATETIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

/// A calendar day with no time-of-day component.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Day(Date);

impl Day {
    pub fn new(date: Date) -> Self {
        Self(date)
    }

    pub fn parse(input: &str) -> Result<Self, time::error::Parse> {
        Date::parse(input, DAY_FORMAT).map(Self)
    }

    pub fn date(&self) -> Date {
        self.0
    }
}

impl From<Date> for Day {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_query_date(self.0))
    }
}

impl Serialize for Day {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_query_date(self.0))
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Day::parse(&raw).map_err(|err| de::Error::custom(format!("invalid day {raw:?}: {err}")))
    }
}

/// A point in time with the UTC offset the upstream reported it in.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn new(value: OffsetDateTime) -> Self {
        Self(value)
    }

    pub fn parse(input: &str) -> Result<Self, time::error::Parse> {
        OffsetDateTime::parse(input, &Rfc3339).map(Self)
    }

    pub fn as_offset_datetime(&self) -> OffsetDateTime {
        self.0
    }

    pub fn day(&self) -> Day {
        Day(self.0.date())
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(value: OffsetDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = self
            .0
            .format(&Rfc3339)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw)
            .map_err(|err| de::Error::custom(format!("invalid timestamp {raw:?}: {err}")))
    }
}

pub fn format_query_date(date: Date) -> String {
    // The format only contains date components, so it cannot fail for a `Date`.
    date.format(DAY_FORMAT).unwrap_or_default()
}

/// Format a range bound as `YYYY-MM-DDTHH:MM:SS±HH:MM`.
///
/// The query form has no room for offset seconds, so such values are sent in UTC.
pub fn format_query_datetime(value: OffsetDateTime) -> Result<String, Error> {
    let value = if value.offset().seconds_past_minute() != 0 {
        value.to_offset(UtcOffset::UTC)
    } else {
        value
    };
    value.format(QUERY_DATETIME_FORMAT).map_err(|err| {
        Error::new(ErrorKind::Transport)
            .with_message(format!("cannot format query datetime {value}"))
            .with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use super::{Day, Timestamp, format_query_date, format_query_datetime};
    use serde_json::json;
    use time::macros::{date, datetime};

    #[test]
    fn day_parses_and_formats_back() {
        let day = Day::parse("2024-01-01").expect("day");
        assert_eq!(day.date(), date!(2024 - 01 - 01));
        assert_eq!(day.to_string(), "2024-01-01");
        let again = Day::parse(&day.to_string()).expect("reparse");
        assert_eq!(again, day);
    }

    #[test]
    fn day_rejects_datetime_and_empty_strings() {
        assert!(Day::parse("2024-01-01T00:00:00+00:00").is_err());
        assert!(Day::parse("").is_err());
        assert!(serde_json::from_value::<Day>(json!(20240101)).is_err());
    }

    #[test]
    fn timestamp_accepts_numeric_offset_and_zulu() {
        let numeric = Timestamp::parse("2024-01-01T15:04:05+00:00").expect("numeric");
        assert_eq!(
            numeric.as_offset_datetime(),
            datetime!(2024-01-01 15:04:05 UTC)
        );
        let zulu = Timestamp::parse("2024-01-06T16:43:56Z").expect("zulu");
        assert_eq!(zulu.as_offset_datetime(), datetime!(2024-01-06 16:43:56 UTC));
    }

    #[test]
    fn timestamp_keeps_reported_offset() {
        let ts: Timestamp = serde_json::from_value(json!("2024-01-10T01:45:45-05:00")).expect("ts");
        assert_eq!(ts.as_offset_datetime().offset().whole_hours(), -5);
        assert_eq!(ts.day().to_string(), "2024-01-10");
    }

    #[test]
    fn timestamp_rejects_garbage() {
        assert!(Timestamp::parse("").is_err());
        assert!(Timestamp::parse("invalid").is_err());
    }

    #[test]
    fn query_formats_are_upstream_shaped() {
        assert_eq!(format_query_date(date!(2024 - 03 - 09)), "2024-03-09");
        assert_eq!(
            format_query_datetime(datetime!(2024-01-10 01:45:45 UTC)).expect("utc"),
            "2024-01-10T01:45:45+00:00"
        );
        assert_eq!(
            format_query_datetime(datetime!(2024-01-10 01:45:45 -5:30)).expect("offset"),
            "2024-01-10T01:45:45-05:30"
        );
    }

    #[test]
    fn query_datetime_with_offset_seconds_is_sent_in_utc() {
        let value = datetime!(2024-01-10 01:45:45 +1:00:30);
        assert_eq!(
            format_query_datetime(value).expect("utc"),
            "2024-01-10T00:45:15+00:00"
        );
    }
}
