//! Purpose: Collection envelope and the range bounds used to request one.
//! Exports: `Page`, `RangeBound`.
//! Role: Shape of every get-many result; carries the caller-driven continuation token.
//! Invariants: Items keep upstream order; nothing is re-sorted or de-duplicated.
//! Invariants: A `null` or empty-string token both decode to `None` (no further pages).
use crate::core::calendar::{format_query_date, format_query_datetime};
use crate::core::error::Error;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "data")]
    pub items: Vec<T>,
    #[serde(deserialize_with = "continuation_token")]
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.next_token.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

fn continuation_token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token.filter(|token| !token.is_empty()))
}

/// A value that can bound a get-many request.
///
/// Day-granular resources are bounded by `Date` (`start_date`/`end_date`);
/// sample-granular ones by `OffsetDateTime` (`start_datetime`/`end_datetime`).
pub trait RangeBound: Copy {
    const START_PARAM: &'static str;
    const END_PARAM: &'static str;

    fn to_query_value(&self) -> Result<String, Error>;
}

impl RangeBound for Date {
    const START_PARAM: &'static str = "start_date";
    const END_PARAM: &'static str = "end_date";

    fn to_query_value(&self) -> Result<String, Error> {
        Ok(format_query_date(*self))
    }
}

impl RangeBound for OffsetDateTime {
    const START_PARAM: &'static str = "start_datetime";
    const END_PARAM: &'static str = "end_datetime";

    fn to_query_value(&self) -> Result<String, Error> {
        format_query_datetime(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, RangeBound};
    use serde_json::json;
    use time::macros::{date, datetime};
    use time::{Date, OffsetDateTime};

    #[test]
    fn empty_and_null_tokens_mean_no_more_pages() {
        for token in [json!(null), json!("")] {
            let page: Page<u8> =
                serde_json::from_value(json!({"data": [1], "next_token": token})).expect("page");
            assert_eq!(page.next_token(), None);
            assert!(!page.has_more());
        }
    }

    #[test]
    fn token_and_items_survive() {
        let page: Page<u8> =
            serde_json::from_value(json!({"data": [3, 1, 2], "next_token": "abc"})).expect("page");
        assert_eq!(page.next_token(), Some("abc"));
        assert_eq!(page.len(), 3);
        assert_eq!(page.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn date_bound_uses_day_params() {
        assert_eq!(<Date as RangeBound>::START_PARAM, "start_date");
        assert_eq!(date!(2024 - 01 - 31).to_query_value().expect("date"), "2024-01-31");
    }

    #[test]
    fn datetime_bound_uses_datetime_params() {
        assert_eq!(<OffsetDateTime as RangeBound>::END_PARAM, "end_datetime");
        let value = datetime!(2024-01-01 20:00:00 +1:00).to_query_value().expect("datetime");
        assert_eq!(value, "2024-01-01T20:00:00+01:00");
    }
}
