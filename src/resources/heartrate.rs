//! Purpose: Heart-rate samples, listed by datetime range.
//! Exports: `HeartRate`, `HEART_RATE`.
//! Invariants: Samples carry no ID, so there is no get-one accessor.
use super::Resource;
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::Timestamp;
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub static HEART_RATE: Schema = Schema {
    name: "HeartRate",
    fields: &[
        Field::scalar("bpm"),
        Field::scalar("source"),
        Field::scalar("timestamp"),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeartRate {
    pub bpm: i64,
    /// Measurement context such as `awake`, `rest`, `sleep` or `workout`.
    pub source: String,
    pub timestamp: Timestamp,
}

impl Record for HeartRate {
    fn schema() -> &'static Schema {
        &HEART_RATE
    }
}

impl Resource for HeartRate {
    const PATH: &'static str = "usercollection/heartrate";
    type Bound = OffsetDateTime;
}

impl OuraClient {
    pub fn heart_rates(
        &self,
        start: OffsetDateTime,
        end: OffsetDateTime,
        next_token: Option<&str>,
    ) -> ApiResult<Page<HeartRate>> {
        self.collection(start, end, next_token)
    }
}
