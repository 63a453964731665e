//! Purpose: Detailed sleep periods with embedded readiness.
//! Exports: `Sleep`, `SleepReadiness`, their schemas.
//! Invariants: Nested order is heart_rate, hrv, readiness, then readiness.contributors.
use super::common::{INTERVAL_SERIES, IntervalSeries, READINESS_CONTRIBUTORS, ReadinessContributors};
use super::{Document, Resource};
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::{Day, Timestamp};
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::Date;

pub static SLEEP_READINESS: Schema = Schema {
    name: "SleepReadiness",
    fields: &[
        Field::record("contributors", &READINESS_CONTRIBUTORS),
        Field::scalar("score"),
        Field::scalar("temperature_deviation"),
        Field::scalar("temperature_trend_deviation"),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepReadiness {
    pub contributors: ReadinessContributors,
    pub score: i64,
    pub temperature_deviation: f64,
    pub temperature_trend_deviation: f64,
}

impl Record for SleepReadiness {
    fn schema() -> &'static Schema {
        &SLEEP_READINESS
    }
}

pub static SLEEP: Schema = Schema {
    name: "Sleep",
    fields: &[
        Field::scalar("id"),
        Field::scalar("average_breath"),
        Field::scalar("average_heart_rate"),
        Field::scalar("average_hrv"),
        Field::scalar("awake_time"),
        Field::scalar("bedtime_end"),
        Field::scalar("bedtime_start"),
        Field::scalar("day"),
        Field::scalar("deep_sleep_duration"),
        Field::scalar("efficiency"),
        Field::record("heart_rate", &INTERVAL_SERIES),
        Field::record("hrv", &INTERVAL_SERIES),
        Field::scalar("latency"),
        Field::scalar("light_sleep_duration"),
        Field::scalar("low_battery_alert"),
        Field::scalar("lowest_heart_rate"),
        Field::scalar("movement_30_sec"),
        Field::scalar("period"),
        Field::record("readiness", &SLEEP_READINESS),
        Field::scalar("readiness_score_delta"),
        Field::scalar("rem_sleep_duration"),
        Field::scalar("restless_periods"),
        Field::scalar("sleep_phase_5_min"),
        Field::scalar("sleep_score_delta"),
        Field::scalar("sleep_algorithm_version"),
        Field::scalar("time_in_bed"),
        Field::scalar("total_sleep_duration"),
        Field::scalar("type"),
    ],
};

/// One sleep period. Durations are seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sleep {
    pub id: String,
    pub average_breath: f64,
    pub average_heart_rate: f64,
    pub average_hrv: i64,
    pub awake_time: i64,
    pub bedtime_end: Timestamp,
    pub bedtime_start: Timestamp,
    pub day: Day,
    pub deep_sleep_duration: i64,
    pub efficiency: i64,
    pub heart_rate: IntervalSeries,
    pub hrv: IntervalSeries,
    pub latency: i64,
    pub light_sleep_duration: i64,
    pub low_battery_alert: bool,
    pub lowest_heart_rate: i64,
    pub movement_30_sec: String,
    pub period: i64,
    pub readiness: SleepReadiness,
    pub readiness_score_delta: i64,
    pub rem_sleep_duration: i64,
    pub restless_periods: i64,
    /// One character per five minutes: `1` deep, `2` light, `3` REM, `4` awake.
    pub sleep_phase_5_min: String,
    pub sleep_score_delta: i64,
    pub sleep_algorithm_version: String,
    pub time_in_bed: i64,
    pub total_sleep_duration: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Record for Sleep {
    fn schema() -> &'static Schema {
        &SLEEP
    }
}

impl Resource for Sleep {
    const PATH: &'static str = "usercollection/sleep";
    type Bound = Date;
}

impl Document for Sleep {}

impl OuraClient {
    pub fn sleep(&self, id: &str) -> ApiResult<Sleep> {
        self.document(id)
    }

    pub fn sleeps(
        &self,
        start: Date,
        end: Date,
        next_token: Option<&str>,
    ) -> ApiResult<Page<Sleep>> {
        self.collection(start, end, next_token)
    }
}
