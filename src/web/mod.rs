//! HTTP session service for browser-based visualizers.
//!
//! Each session owns a generated graph, the snapshot it resets to and the
//! last shortest path query.

pub mod api;
pub mod models;
pub mod server;
