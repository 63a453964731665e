//! Purpose: Physical ring details.
//! Exports: `RingConfiguration`, `RING_CONFIGURATION`.
use super::{Document, Resource};
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::Timestamp;
use crate::core::nullable::Nullable;
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::Date;

pub static RING_CONFIGURATION: Schema = Schema {
    name: "RingConfiguration",
    fields: &[
        Field::scalar("id"),
        Field::scalar("color"),
        Field::scalar("design"),
        Field::scalar("firmware_version"),
        Field::scalar("hardware_type"),
        Field::scalar("set_up_at"),
        Field::scalar("size"),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingConfiguration {
    pub id: String,
    pub color: String,
    pub design: String,
    pub firmware_version: String,
    pub hardware_type: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub set_up_at: Nullable<Timestamp>,
    pub size: i64,
}

impl Record for RingConfiguration {
    fn schema() -> &'static Schema {
        &RING_CONFIGURATION
    }
}

impl Resource for RingConfiguration {
    const PATH: &'static str = "usercollection/ring_configuration";
    type Bound = Date;
}

impl Document for RingConfiguration {}

impl OuraClient {
    pub fn ring_configuration(&self, id: &str) -> ApiResult<RingConfiguration> {
        self.document(id)
    }

    pub fn ring_configurations(
        &self,
        start: Date,
        end: Date,
        next_token: Option<&str>,
    ) -> ApiResult<Page<RingConfiguration>> {
        self.collection(start, end, next_token)
    }
}
