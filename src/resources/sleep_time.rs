//! Purpose: Recommended bedtime window.
//! Exports: `SleepTime`, `OptimalBedtime`, their schemas.
use super::{Document, Resource};
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::Day;
use crate::core::nullable::Nullable;
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::Date;

pub static OPTIMAL_BEDTIME: Schema = Schema {
    name: "OptimalBedtime",
    fields: &[
        Field::scalar("day_tz"),
        Field::scalar("end_offset"),
        Field::scalar("start_offset"),
    ],
};

/// Offsets are seconds relative to midnight in the `day_tz` offset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalBedtime {
    pub day_tz: i64,
    pub end_offset: i64,
    pub start_offset: i64,
}

impl Record for OptimalBedtime {
    fn schema() -> &'static Schema {
        &OPTIMAL_BEDTIME
    }
}

pub static SLEEP_TIME: Schema = Schema {
    name: "SleepTime",
    fields: &[
        Field::scalar("id"),
        Field::scalar("day"),
        Field::record("optimal_bedtime", &OPTIMAL_BEDTIME),
        Field::scalar("recommendation"),
        Field::scalar("status"),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepTime {
    pub id: String,
    pub day: Day,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub optimal_bedtime: Nullable<OptimalBedtime>,
    pub recommendation: String,
    pub status: String,
}

impl Record for SleepTime {
    fn schema() -> &'static Schema {
        &SLEEP_TIME
    }
}

impl Resource for SleepTime {
    const PATH: &'static str = "usercollection/sleep_time";
    type Bound = Date;
}

impl Document for SleepTime {}

impl OuraClient {
    pub fn sleep_time(&self, id: &str) -> ApiResult<SleepTime> {
        self.document(id)
    }

    pub fn sleep_times(
        &self,
        start: Date,
        end: Date,
        next_token: Option<&str>,
    ) -> ApiResult<Page<SleepTime>> {
        self.collection(start, end, next_token)
    }
}
