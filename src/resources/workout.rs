//! Purpose: Recorded workouts.
//! Exports: `Workout`, `WORKOUT`.
use super::{Document, Resource};
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::{Day, Timestamp};
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::Date;

pub static WORKOUT: Schema = Schema {
    name: "Workout",
    fields: &[
        Field::scalar("id"),
        Field::scalar("activity"),
        Field::scalar("calories"),
        Field::scalar("day"),
        Field::scalar("distance"),
        Field::scalar("end_datetime"),
        Field::scalar("intensity"),
        Field::scalar("label"),
        Field::scalar("source"),
        Field::scalar("start_datetime"),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub activity: String,
    pub calories: f64,
    pub day: Day,
    /// Meters.
    pub distance: f64,
    pub end_datetime: Timestamp,
    pub intensity: String,
    pub label: String,
    pub source: String,
    pub start_datetime: Timestamp,
}

impl Record for Workout {
    fn schema() -> &'static Schema {
        &WORKOUT
    }
}

impl Resource for Workout {
    const PATH: &'static str = "usercollection/workout";
    type Bound = Date;
}

impl Document for Workout {}

impl OuraClient {
    pub fn workout(&self, id: &str) -> ApiResult<Workout> {
        self.document(id)
    }

    pub fn workouts(
        &self,
        start: Date,
        end: Date,
        next_token: Option<&str>,
    ) -> ApiResult<Page<Workout>> {
        self.collection(start, end, next_token)
    }
}

#[cfg(test)]
mod tests {
    use super::Workout;
    use crate::core::strict::decode_document;

    #[test]
    fn decodes_fixture() {
        let raw = include_bytes!("../../tests/fixtures/workout.json");
        let workout: Workout = decode_document(raw).expect("workout");
        assert_eq!(workout.activity, "cycling");
        assert_eq!(workout.day.to_string(), "2024-01-01");
        assert!(workout.end_datetime.as_offset_datetime() > workout.start_datetime.as_offset_datetime());
    }
}
