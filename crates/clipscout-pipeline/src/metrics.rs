//! Pipeline metrics collection.
//!
//! Provides standardized metrics for monitoring dispatch behavior:
//! - Slot counters by outcome
//! - Result-wait latency histograms

use metrics::{counter, histogram};

// =============================================================================
// Metric Names
// =============================================================================

/// Metric name constants for consistency.
pub mod names {
    /// Total dispatched slots by outcome.
    pub const DISPATCH_SLOTS_TOTAL: &str = "pipeline_dispatch_slots_total";

    /// Per-slot result wait in seconds by outcome.
    pub const DISPATCH_WAIT_SECONDS: &str = "pipeline_dispatch_wait_seconds";
}

// =============================================================================
// Recording Functions
// =============================================================================

/// Record metrics for a settled dispatch slot.
pub fn record_slot(outcome: &str, wait_ms: f64) {
    counter!(
        names::DISPATCH_SLOTS_TOTAL,
        "outcome" => outcome.to_string()
    )
    .increment(1);

    histogram!(
        names::DISPATCH_WAIT_SECONDS,
        "outcome" => outcome.to_string()
    )
    .record(wait_ms / 1000.0);
}

// =============================================================================
// Tests
// =============================================================================
