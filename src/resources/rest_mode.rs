//! Purpose: Rest mode periods and the episodes logged during them.
//! Exports: `RestModePeriod`, `RestModeEpisode`, their schemas.
//! Invariants: `end_day`/`end_time` are `null` while a period is ongoing.
use super::{Document, Resource};
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::{Day, Timestamp};
use crate::core::nullable::Nullable;
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::Date;

pub static REST_MODE_EPISODE: Schema = Schema {
    name: "RestModeEpisode",
    fields: &[Field::scalar("tags"), Field::scalar("timestamp")],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestModeEpisode {
    pub tags: Vec<String>,
    pub timestamp: Timestamp,
}

impl Record for RestModeEpisode {
    fn schema() -> &'static Schema {
        &REST_MODE_EPISODE
    }
}

pub static REST_MODE_PERIOD: Schema = Schema {
    name: "RestModePeriod",
    fields: &[
        Field::scalar("id"),
        Field::scalar("end_day"),
        Field::scalar("end_time"),
        Field::list("episodes", &REST_MODE_EPISODE),
        Field::scalar("start_day"),
        Field::scalar("start_time"),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestModePeriod {
    pub id: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub end_day: Nullable<Day>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub end_time: Nullable<Timestamp>,
    pub episodes: Vec<RestModeEpisode>,
    pub start_day: Day,
    pub start_time: Timestamp,
}

impl RestModePeriod {
    /// True until upstream reports an end time for the period.
    pub fn is_ongoing(&self) -> bool {
        self.end_time.value().is_none()
    }
}

impl Record for RestModePeriod {
    fn schema() -> &'static Schema {
        &REST_MODE_PERIOD
    }
}

impl Resource for RestModePeriod {
    const PATH: &'static str = "usercollection/rest_mode_period";
    type Bound = Date;
}

impl Document for RestModePeriod {}

impl OuraClient {
    pub fn rest_mode_period(&self, id: &str) -> ApiResult<RestModePeriod> {
        self.document(id)
    }

    pub fn rest_mode_periods(
        &self,
        start: Date,
        end: Date,
        next_token: Option<&str>,
    ) -> ApiResult<Page<RestModePeriod>> {
        self.collection(start, end, next_token)
    }
}

#[cfg(test)]
mod tests {
    use super::RestModePeriod;
    use crate::core::strict::decode_document;

    const FIXTURE: &str = include_str!("../../tests/fixtures/rest_mode_period.json");

    #[test]
    fn ongoing_period_decodes() {
        let period: RestModePeriod = decode_document(FIXTURE.as_bytes()).expect("period");
        assert!(period.is_ongoing());
        assert_eq!(period.episodes.len(), 2);
        assert_eq!(period.episodes[0].tags, vec!["sick", "fever"]);
    }

    #[test]
    fn period_with_end_time_is_closed() {
        let mut value: serde_json::Value = serde_json::from_str(FIXTURE).expect("fixture");
        value["end_day"] = "2024-01-04".into();
        value["end_time"] = "2024-01-04T09:30:00+00:00".into();
        let bytes = serde_json::to_vec(&value).expect("encode");
        let period: RestModePeriod = decode_document(&bytes).expect("period");
        assert!(!period.is_ongoing());
        assert_eq!(
            period.end_time.value().map(ToString::to_string).as_deref(),
            Some("2024-01-04T09:30:00Z")
        );
    }

    #[test]
    fn episode_missing_tags_reports_list_index() {
        let mut value: serde_json::Value = serde_json::from_str(FIXTURE).expect("fixture");
        value["episodes"][1]
            .as_object_mut()
            .expect("episode")
            .remove("tags");
        let bytes = serde_json::to_vec(&value).expect("encode");
        let err = decode_document::<RestModePeriod>(&bytes).expect_err("err");
        assert_eq!(err.missing_field(), Some("tags"));
        assert_eq!(err.path(), Some("episodes[1]"));
    }
}
