//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the catalog server:
//! - HTTP request metrics (latency, counts, in flight)
//! - Listing metrics per record kind
//! - Stored record counts (collected dynamically)

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, IntGaugeVec, Opts,
    Registry, TextEncoder,
};
use regex_lite::Regex;
use tracing::warn;

use crate::state::AppState;

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "catalog_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("catalog_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "catalog_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Listing Metrics
// =============================================================================

/// List requests served, by record kind.
pub static SEARCH_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("catalog_search_requests_total", "Total list requests"),
        &["kind"],
    )
    .unwrap()
});

/// Records matching the filter of a list request, before paging.
pub static SEARCH_RESULT_TOTAL: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "catalog_search_result_total",
            "Matching records per list request, before paging",
        )
        .buckets(vec![0.0, 1.0, 5.0, 15.0, 50.0, 100.0, 500.0, 1000.0, 5000.0]),
        &["kind"],
    )
    .unwrap()
});

/// Stored records by kind (collected dynamically).
pub static RECORDS_STORED: Lazy<IntGaugeVec> = Lazy::new(|| {
    IntGaugeVec::new(
        Opts::new("catalog_records_stored", "Current record count by kind"),
        &["kind"],
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Listing
    registry
        .register(Box::new(SEARCH_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(SEARCH_RESULT_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(RECORDS_STORED.clone()))
        .unwrap();
}

/// Record one served list request and how many records matched its filter.
pub fn record_search(kind: &str, total: u64) {
    SEARCH_REQUESTS_TOTAL.with_label_values(&[kind]).inc();
    SEARCH_RESULT_TOTAL
        .with_label_values(&[kind])
        .observe(total as f64);
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        warn!("Failed to encode metrics: {}", e);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Collect dynamic metrics from current application state.
///
/// Called before encoding so record gauges reflect the stores.
pub fn collect_dynamic_metrics(state: &AppState) {
    let counts = [
        ("category", state.categories().count()),
        ("genre", state.genres().count()),
        ("cast_member", state.cast_members().count()),
        ("video", state.videos().count()),
    ];
    for (kind, count) in counts {
        match count {
            Ok(count) => RECORDS_STORED.with_label_values(&[kind]).set(count as i64),
            Err(e) => warn!(kind, "Failed to count records: {}", e),
        }
    }
}

static UUID_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")
        .unwrap()
});

static NUMERIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+(/|$)").unwrap());

/// Normalize a path for metric labels (replace IDs with placeholders).
pub fn normalize_path(path: &str) -> String {
    let result = UUID_SEGMENT.replace_all(path, "{id}");
    let result = NUMERIC_SEGMENT.replace_all(&result, "/{id}$1");
    result.to_string()
}
