//! Purpose: Daily sleep score.
//! Exports: `DailySleep`, `SleepContributors`, their schemas.
use super::{Document, Resource};
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::{Day, Timestamp};
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::Date;

pub static SLEEP_CONTRIBUTORS: Schema = Schema {
    name: "SleepContributors",
    fields: &[
        Field::scalar("deep_sleep"),
        Field::scalar("efficiency"),
        Field::scalar("latency"),
        Field::scalar("rem_sleep"),
        Field::scalar("restfulness"),
        Field::scalar("timing"),
        Field::scalar("total_sleep"),
    ],
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepContributors {
    pub deep_sleep: i64,
    pub efficiency: i64,
    pub latency: i64,
    pub rem_sleep: i64,
    pub restfulness: i64,
    pub timing: i64,
    pub total_sleep: i64,
}

impl Record for SleepContributors {
    fn schema() -> &'static Schema {
        &SLEEP_CONTRIBUTORS
    }
}

pub static DAILY_SLEEP: Schema = Schema {
    name: "DailySleep",
    fields: &[
        Field::scalar("id"),
        Field::record("contributors", &SLEEP_CONTRIBUTORS),
        Field::scalar("day"),
        Field::scalar("score"),
        Field::scalar("timestamp"),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailySleep {
    pub id: String,
    pub contributors: SleepContributors,
    pub day: Day,
    pub score: i64,
    pub timestamp: Timestamp,
}

impl Record for DailySleep {
    fn schema() -> &'static Schema {
        &DAILY_SLEEP
    }
}

impl Resource for DailySleep {
    const PATH: &'static str = "usercollection/daily_sleep";
    type Bound = Date;
}

impl Document for DailySleep {}

impl OuraClient {
    pub fn daily_sleep(&self, id: &str) -> ApiResult<DailySleep> {
        self.document(id)
    }

    pub fn daily_sleeps(
        &self,
        start: Date,
        end: Date,
        next_token: Option<&str>,
    ) -> ApiResult<Page<DailySleep>> {
        self.collection(start, end, next_token)
    }
}
