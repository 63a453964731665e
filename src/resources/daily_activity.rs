//! Purpose: Daily activity summary, including the MET time series.
//! Exports: `DailyActivity`, `ActivityContributors`, their schemas.
//! Invariants: `met` is checked against the interval series schema after the summary's own keys.
use super::common::{INTERVAL_SERIES, IntervalSeries};
use super::{Document, Resource};
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::{Day, Timestamp};
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::Date;

pub static ACTIVITY_CONTRIBUTORS: Schema = Schema {
    name: "ActivityContributors",
    fields: &[
        Field::scalar("meet_daily_targets"),
        Field::scalar("move_every_hour"),
        Field::scalar("recovery_time"),
        Field::scalar("stay_active"),
        Field::scalar("training_frequency"),
        Field::scalar("training_volume"),
    ],
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityContributors {
    pub meet_daily_targets: i64,
    pub move_every_hour: i64,
    pub recovery_time: i64,
    pub stay_active: i64,
    pub training_frequency: i64,
    pub training_volume: i64,
}

impl Record for ActivityContributors {
    fn schema() -> &'static Schema {
        &ACTIVITY_CONTRIBUTORS
    }
}

pub static DAILY_ACTIVITY: Schema = Schema {
    name: "DailyActivity",
    fields: &[
        Field::scalar("id"),
        Field::scalar("class_5_min"),
        Field::scalar("score"),
        Field::scalar("active_calories"),
        Field::scalar("average_met_minutes"),
        Field::record("contributors", &ACTIVITY_CONTRIBUTORS),
        Field::scalar("equivalent_walking_distance"),
        Field::scalar("high_activity_met_minutes"),
        Field::scalar("high_activity_time"),
        Field::scalar("inactivity_alerts"),
        Field::scalar("low_activity_met_minutes"),
        Field::scalar("low_activity_time"),
        Field::scalar("medium_activity_met_minutes"),
        Field::scalar("medium_activity_time"),
        Field::record("met", &INTERVAL_SERIES),
        Field::scalar("meters_to_target"),
        Field::scalar("non_wear_time"),
        Field::scalar("resting_time"),
        Field::scalar("sedentary_met_minutes"),
        Field::scalar("sedentary_time"),
        Field::scalar("steps"),
        Field::scalar("target_calories"),
        Field::scalar("target_meters"),
        Field::scalar("total_calories"),
        Field::scalar("day"),
        Field::scalar("timestamp"),
    ],
};

/// One day of movement. Durations are seconds, distances meters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub id: String,
    /// One character per five minutes, `0` (non-wear) through `5` (high).
    pub class_5_min: String,
    pub score: i64,
    pub active_calories: i64,
    pub average_met_minutes: f64,
    pub contributors: ActivityContributors,
    pub equivalent_walking_distance: i64,
    pub high_activity_met_minutes: i64,
    pub high_activity_time: i64,
    pub inactivity_alerts: i64,
    pub low_activity_met_minutes: i64,
    pub low_activity_time: i64,
    pub medium_activity_met_minutes: i64,
    pub medium_activity_time: i64,
    pub met: IntervalSeries,
    pub meters_to_target: i64,
    pub non_wear_time: i64,
    pub resting_time: i64,
    pub sedentary_met_minutes: i64,
    pub sedentary_time: i64,
    pub steps: i64,
    pub target_calories: i64,
    pub target_meters: i64,
    pub total_calories: i64,
    pub day: Day,
    pub timestamp: Timestamp,
}

impl Record for DailyActivity {
    fn schema() -> &'static Schema {
        &DAILY_ACTIVITY
    }
}

impl Resource for DailyActivity {
    const PATH: &'static str = "usercollection/daily_activity";
    type Bound = Date;
}

impl Document for DailyActivity {}

impl OuraClient {
    pub fn daily_activity(&self, id: &str) -> ApiResult<DailyActivity> {
        self.document(id)
    }

    pub fn daily_activities(
        &self,
        start: Date,
        end: Date,
        next_token: Option<&str>,
    ) -> ApiResult<Page<DailyActivity>> {
        self.collection(start, end, next_token)
    }
}
