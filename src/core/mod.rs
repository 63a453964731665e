// Core modules implementing decoding, value types, and error modeling.
pub mod calendar;
pub mod error;
pub mod nullable;
pub mod schema;
pub mod strict;
