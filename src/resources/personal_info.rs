//! Purpose: The account owner's profile; one document per user, no ID in the path.
//! Exports: `PersonalInfo`, `PERSONAL_INFO`.
use crate::api::{ApiResult, OuraClient};
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "usercollection/personal_info";

pub static PERSONAL_INFO: Schema = Schema {
    name: "PersonalInfo",
    fields: &[
        Field::scalar("id"),
        Field::scalar("age"),
        Field::scalar("weight"),
        Field::scalar("height"),
        Field::scalar("biological_sex"),
        Field::scalar("email"),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub id: String,
    pub age: i64,
    /// Kilograms.
    pub weight: f64,
    /// Meters.
    pub height: f64,
    pub biological_sex: String,
    pub email: String,
}

impl Record for PersonalInfo {
    fn schema() -> &'static Schema {
        &PERSONAL_INFO
    }
}

impl OuraClient {
    pub fn personal_info(&self) -> ApiResult<PersonalInfo> {
        self.singleton(PATH)
    }
}
