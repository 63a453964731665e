//! Purpose: Daily stress and recovery time.
//! Exports: `DailyStress`, `DAILY_STRESS`.
use super::{Document, Resource};
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::Day;
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::Date;

pub static DAILY_STRESS: Schema = Schema {
    name: "DailyStress",
    fields: &[
        Field::scalar("id"),
        Field::scalar("day"),
        Field::scalar("stress_high"),
        Field::scalar("recovery_high"),
        Field::scalar("day_summary"),
    ],
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStress {
    pub id: String,
    pub day: Day,
    /// Seconds spent in high stress.
    pub stress_high: i64,
    /// Seconds spent in high recovery.
    pub recovery_high: i64,
    pub day_summary: String,
}

impl Record for DailyStress {
    fn schema() -> &'static Schema {
        &DAILY_STRESS
    }
}

impl Resource for DailyStress {
    const PATH: &'static str = "usercollection/daily_stress";
    type Bound = Date;
}

impl Document for DailyStress {}

impl OuraClient {
    pub fn daily_stress(&self, id: &str) -> ApiResult<DailyStress> {
        self.document(id)
    }

    pub fn daily_stresses(
        &self,
        start: Date,
        end: Date,
        next_token: Option<&str>,
    ) -> ApiResult<Page<DailyStress>> {
        self.collection(start, end, next_token)
    }
}

#[cfg(test)]
mod tests {
    use super::DailyStress;
    use crate::core::strict::decode_document;

    #[test]
    fn decodes_fixture() {
        let raw = include_bytes!("../../tests/fixtures/daily_stress.json");
        let stress: DailyStress = decode_document(raw).expect("stress");
        assert_eq!(stress.stress_high, 5400);
        assert_eq!(stress.day_summary, "normal");
    }
}
