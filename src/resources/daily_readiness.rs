//! Purpose: Daily readiness score and its contributors.
//! Exports: `DailyReadiness`, `DAILY_READINESS`.
use super::common::{READINESS_CONTRIBUTORS, ReadinessContributors};
use super::{Document, Resource};
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::{Day, Timestamp};
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::Date;

pub static DAILY_READINESS: Schema = Schema {
    name: "DailyReadiness",
    fields: &[
        Field::scalar("id"),
        Field::record("contributors", &READINESS_CONTRIBUTORS),
        Field::scalar("day"),
        Field::scalar("score"),
        Field::scalar("temperature_deviation"),
        Field::scalar("temperature_trend_deviation"),
        Field::scalar("timestamp"),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyReadiness {
    pub id: String,
    pub contributors: ReadinessContributors,
    pub day: Day,
    pub score: i64,
    /// Degrees Celsius from the personal baseline.
    pub temperature_deviation: f64,
    pub temperature_trend_deviation: f64,
    pub timestamp: Timestamp,
}

impl Record for DailyReadiness {
    fn schema() -> &'static Schema {
        &DAILY_READINESS
    }
}

impl Resource for DailyReadiness {
    const PATH: &'static str = "usercollection/daily_readiness";
    type Bound = Date;
}

impl Document for DailyReadiness {}

impl OuraClient {
    pub fn daily_readiness(&self, id: &str) -> ApiResult<DailyReadiness> {
        self.document(id)
    }

    pub fn daily_readinesses(
        &self,
        start: Date,
        end: Date,
        next_token: Option<&str>,
    ) -> ApiResult<Page<DailyReadiness>> {
        self.collection(start, end, next_token)
    }
}

#[cfg(test)]
mod tests {
    use super::DailyReadiness;
    use crate::core::strict::decode_document;
    use time::macros::date;

    const FIXTURE: &str = include_str!("../../tests/fixtures/daily_readiness.json");

    #[test]
    fn decodes_full_document() {
        let readiness: DailyReadiness = decode_document(FIXTURE.as_bytes()).expect("readiness");
        assert_eq!(readiness.score, 63);
        assert_eq!(readiness.day.date(), date!(2024 - 01 - 01));
        assert_eq!(readiness.contributors.activity_balance, 56);
        assert_eq!(readiness.contributors.sleep_balance, 57);
        assert_eq!(readiness.temperature_deviation, -0.1);
    }

    #[test]
    fn unrelated_object_reports_id_first() {
        let err = decode_document::<DailyReadiness>(br#"{"message":"invalid"}"#).expect_err("err");
        assert_eq!(err.missing_field(), Some("id"));
    }

    #[test]
    fn missing_contributor_carries_nested_path() {
        let mut value: serde_json::Value = serde_json::from_str(FIXTURE).expect("fixture");
        value["contributors"]
            .as_object_mut()
            .expect("contributors")
            .remove("recovery_index");
        let bytes = serde_json::to_vec(&value).expect("encode");
        let err = decode_document::<DailyReadiness>(&bytes).expect_err("err");
        assert_eq!(err.missing_field(), Some("recovery_index"));
        assert_eq!(err.path(), Some("contributors"));
    }
}
