//! Purpose: Typed records for every upstream resource family.
//! Exports: One module per resource, plus the `Resource` and `Document` traits.
//! Role: Binds each record to its endpoint path and range granularity.
//! Invariants: `PATH` is relative to the client base URL and has no leading slash.
use crate::api::RangeBound;
use crate::core::schema::Record;

pub mod common;
pub mod daily_activity;
pub mod daily_readiness;
pub mod daily_sleep;
pub mod daily_spo2;
pub mod daily_stress;
pub mod enhanced_tag;
pub mod heartrate;
pub mod personal_info;
pub mod rest_mode;
pub mod ring_configuration;
pub mod session;
pub mod sleep;
pub mod sleep_time;
pub mod workout;

pub use common::{IntervalSeries, ReadinessContributors};
pub use daily_activity::{ActivityContributors, DailyActivity};
pub use daily_readiness::DailyReadiness;
pub use daily_sleep::{DailySleep, SleepContributors};
pub use daily_spo2::{DailySpo2, Spo2Percentage};
pub use daily_stress::DailyStress;
pub use enhanced_tag::EnhancedTag;
pub use heartrate::HeartRate;
pub use personal_info::PersonalInfo;
pub use rest_mode::{RestModeEpisode, RestModePeriod};
pub use ring_configuration::RingConfiguration;
pub use session::Session;
pub use sleep::{Sleep, SleepReadiness};
pub use sleep_time::{OptimalBedtime, SleepTime};
pub use workout::Workout;

/// A record listed by a get-many endpoint.
pub trait Resource: Record {
    /// Endpoint path below the base URL, e.g. `usercollection/sleep`.
    const PATH: &'static str;
    /// Bound type for the range query (`Date` or `OffsetDateTime`).
    type Bound: RangeBound;
}

/// A resource that can also be fetched one document at a time by ID.
pub trait Document: Resource {}
