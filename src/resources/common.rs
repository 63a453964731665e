//! Purpose: Sub-records shared by several resource families.
//! Exports: `IntervalSeries`, `ReadinessContributors` and their schemas.
//! Invariants: A `null` sample inside `items` decodes to `0.0`; the `items` key itself is still required.
use crate::core::calendar::Timestamp;
use crate::core::schema::{Field, Record, Schema};
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

pub static INTERVAL_SERIES: Schema = Schema {
    name: "IntervalSeries",
    fields: &[
        Field::scalar("interval"),
        Field::scalar("items"),
        Field::scalar("timestamp"),
    ],
};

/// Evenly spaced samples anchored at `timestamp`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntervalSeries {
    /// Seconds between consecutive samples.
    pub interval: f64,
    #[serde(deserialize_with = "gap_filled")]
    pub items: Vec<f64>,
    /// Time of sample index 0.
    pub timestamp: Timestamp,
}

impl IntervalSeries {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Record for IntervalSeries {
    fn schema() -> &'static Schema {
        &INTERVAL_SERIES
    }
}

fn gap_filled<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let samples = Vec::<Option<f64>>::deserialize(deserializer)?;
    Ok(samples
        .into_iter()
        .map(|sample| sample.unwrap_or_default())
        .collect())
}

pub static READINESS_CONTRIBUTORS: Schema = Schema {
    name: "ReadinessContributors",
    fields: &[
        Field::scalar("activity_balance"),
        Field::scalar("body_temperature"),
        Field::scalar("hrv_balance"),
        Field::scalar("previous_day_activity"),
        Field::scalar("previous_night"),
        Field::scalar("recovery_index"),
        Field::scalar("resting_heart_rate"),
        Field::scalar("sleep_balance"),
    ],
};

/// Sub-scores (1-100) feeding a readiness score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessContributors {
    pub activity_balance: i64,
    pub body_temperature: i64,
    pub hrv_balance: i64,
    pub previous_day_activity: i64,
    pub previous_night: i64,
    pub recovery_index: i64,
    pub resting_heart_rate: i64,
    pub sleep_balance: i64,
}

impl Record for ReadinessContributors {
    fn schema() -> &'static Schema {
        &READINESS_CONTRIBUTORS
    }
}
