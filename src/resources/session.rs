//! Purpose: Guided or unguided sessions (breathing, meditation, naps).
//! Exports: `Session`, `SESSION`.
use super::common::{INTERVAL_SERIES, IntervalSeries};
use super::{Document, Resource};
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::{Day, Timestamp};
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::Date;

pub static SESSION: Schema = Schema {
    name: "Session",
    fields: &[
        Field::scalar("id"),
        Field::scalar("day"),
        Field::scalar("start_datetime"),
        Field::scalar("end_datetime"),
        Field::scalar("type"),
        Field::record("heart_rate", &INTERVAL_SERIES),
        Field::record("heart_rate_variability", &INTERVAL_SERIES),
        Field::scalar("mood"),
        Field::record("motion_count", &INTERVAL_SERIES),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub day: Day,
    pub start_datetime: Timestamp,
    pub end_datetime: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    pub heart_rate: IntervalSeries,
    pub heart_rate_variability: IntervalSeries,
    pub mood: String,
    pub motion_count: IntervalSeries,
}

impl Record for Session {
    fn schema() -> &'static Schema {
        &SESSION
    }
}

impl Resource for Session {
    const PATH: &'static str = "usercollection/session";
    type Bound = Date;
}

impl Document for Session {}

impl OuraClient {
    pub fn session(&self, id: &str) -> ApiResult<Session> {
        self.document(id)
    }

    pub fn sessions(
        &self,
        start: Date,
        end: Date,
        next_token: Option<&str>,
    ) -> ApiResult<Page<Session>> {
        self.collection(start, end, next_token)
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::core::strict::decode_document;

    const FIXTURE: &str = include_str!("../../tests/fixtures/session.json");

    #[test]
    fn decodes_fixture() {
        let session: Session = decode_document(FIXTURE.as_bytes()).expect("session");
        assert_eq!(session.kind, "breathing");
        assert_eq!(session.heart_rate.items, vec![62.0, 0.0, 60.0]);
    }

    #[test]
    fn nested_series_checked_in_schema_order() {
        let mut value: serde_json::Value = serde_json::from_str(FIXTURE).expect("fixture");
        value["heart_rate_variability"]
            .as_object_mut()
            .expect("hrv")
            .remove("items");
        value["motion_count"]
            .as_object_mut()
            .expect("motion")
            .remove("interval");
        let bytes = serde_json::to_vec(&value).expect("encode");
        let err = decode_document::<Session>(&bytes).expect_err("err");
        assert_eq!(err.missing_field(), Some("items"));
        assert_eq!(err.path(), Some("heart_rate_variability"));
    }
}
