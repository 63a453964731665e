//! Purpose: Typed client library for the Oura v2 REST API.
//! Exports: `api` (client surface), `core` (strict decoding, errors), `resources` (records).
//! Role: Backs the `oura` CLI and is usable on its own as a library.
//! Invariants: Records are only produced from payloads carrying every declared key.
//! Invariants: Calls are synchronous, one HTTP request each, with no hidden paging.
pub mod api;
pub mod core;
pub mod resources;
