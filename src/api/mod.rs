//! Purpose: Define the public Rust API boundary for the client.
//! Exports: Client, transport seam, collection envelope, shared value types, errors.
//! Role: Single import path for callers; resource records live in `crate::resources`.
//! Invariants: Everything reachable here is additive-only public surface.

pub mod client;
mod page;
mod transport;

pub use crate::core::calendar::{Day, Timestamp};
#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{DecodeFailure, Error, ErrorKind};
pub use crate::core::nullable::Nullable;
pub use crate::core::schema::{Field, FieldKind, Record, Schema};
pub use crate::core::strict;
pub use crate::resources::{Document, Resource};
pub use client::{ApiResult, ClientConfig, DEFAULT_BASE_URL, OuraClient};
pub use page::{Page, RangeBound};
pub use transport::{HttpRequest, HttpResponse, Transport, UreqTransport};
