//! HTTP server for the video catalog.

pub mod api;
pub mod metrics;
pub mod state;
