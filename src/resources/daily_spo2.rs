//! Purpose: Daily blood-oxygen average.
//! Exports: `DailySpo2`, `Spo2Percentage`, their schemas.
use super::{Document, Resource};
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::Day;
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::Date;

pub static SPO2_PERCENTAGE: Schema = Schema {
    name: "Spo2Percentage",
    fields: &[Field::scalar("average")],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spo2Percentage {
    pub average: f64,
}

impl Record for Spo2Percentage {
    fn schema() -> &'static Schema {
        &SPO2_PERCENTAGE
    }
}

pub static DAILY_SPO2: Schema = Schema {
    name: "DailySpo2",
    fields: &[
        Field::scalar("id"),
        Field::scalar("day"),
        Field::record("spo2_percentage", &SPO2_PERCENTAGE),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailySpo2 {
    pub id: String,
    pub day: Day,
    pub spo2_percentage: Spo2Percentage,
}

impl Record for DailySpo2 {
    fn schema() -> &'static Schema {
        &DAILY_SPO2
    }
}

impl Resource for DailySpo2 {
    const PATH: &'static str = "usercollection/daily_spo2";
    type Bound = Date;
}

impl Document for DailySpo2 {}

impl OuraClient {
    pub fn daily_spo2(&self, id: &str) -> ApiResult<DailySpo2> {
        self.document(id)
    }

    pub fn daily_spo2s(
        &self,
        start: Date,
        end: Date,
        next_token: Option<&str>,
    ) -> ApiResult<Page<DailySpo2>> {
        self.collection(start, end, next_token)
    }
}
