//! Purpose: User-entered tags with optional time spans.
//! Exports: `EnhancedTag`, `ENHANCED_TAG`.
//! Invariants: Time-span keys must be present; each may be `null`.
use super::{Document, Resource};
use crate::api::{ApiResult, OuraClient, Page};
use crate::core::calendar::{Day, Timestamp};
use crate::core::nullable::Nullable;
use crate::core::schema::{Field, Record, Schema};
use serde::{Deserialize, Serialize};
use time::Date;

pub static ENHANCED_TAG: Schema = Schema {
    name: "EnhancedTag",
    fields: &[
        Field::scalar("id"),
        Field::scalar("tag_type_code"),
        Field::scalar("start_time"),
        Field::scalar("end_time"),
        Field::scalar("start_day"),
        Field::scalar("end_day"),
        Field::scalar("comment"),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnhancedTag {
    pub id: String,
    pub tag_type_code: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub start_time: Nullable<Timestamp>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub end_time: Nullable<Timestamp>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub start_day: Nullable<Day>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub end_day: Nullable<Day>,
    pub comment: String,
}

impl Record for EnhancedTag {
    fn schema() -> &'static Schema {
        &ENHANCED_TAG
    }
}

impl Resource for EnhancedTag {
    const PATH: &'static str = "usercollection/enhanced_tag";
    type Bound = Date;
}

impl Document for EnhancedTag {}

impl OuraClient {
    pub fn enhanced_tag(&self, id: &str) -> ApiResult<EnhancedTag> {
        self.document(id)
    }

    pub fn enhanced_tags(
        &self,
        start: Date,
        end: Date,
        next_token: Option<&str>,
    ) -> ApiResult<Page<EnhancedTag>> {
        self.collection(start, end, next_token)
    }
}
