//! Process-local HTTP metrics.
//!
//! [`HttpMetrics`] is constructed once at startup and injected into
//! [`crate::state::AppState`]; middleware and handlers go through the shared
//! instance instead of a process-wide registry, which keeps the lifecycle
//! explicit and tests isolated.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;

/// Counters collected by the HTTP metrics middleware.
#[derive(Debug)]
pub struct HttpMetrics {
    started_at: Instant,
    requests_total: AtomicU64,
    in_flight: AtomicU64,
    responses_2xx: AtomicU64,
    responses_3xx: AtomicU64,
    responses_4xx: AtomicU64,
    responses_5xx: AtomicU64,
    latency_micros_total: AtomicU64,
}

/// Point-in-time view of [`HttpMetrics`], served at `GET /metrics`.
#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub uptime_seconds: u64,
    pub requests_total: u64,
    pub in_flight: u64,
    pub responses: ResponseClasses,
    pub latency_micros_total: u64,
}

/// Response counts grouped by status class.
#[derive(Debug, Serialize)]
pub struct ResponseClasses {
    #[serde(rename = "2xx")]
    pub success: u64,
    #[serde(rename = "3xx")]
    pub redirect: u64,
    #[serde(rename = "4xx")]
    pub client_error: u64,
    #[serde(rename = "5xx")]
    pub server_error: u64,
}

impl HttpMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            requests_total: AtomicU64::new(0),
            in_flight: AtomicU64::new(0),
            responses_2xx: AtomicU64::new(0),
            responses_3xx: AtomicU64::new(0),
            responses_4xx: AtomicU64::new(0),
            responses_5xx: AtomicU64::new(0),
            latency_micros_total: AtomicU64::new(0),
        }
    }

    /// Records an inbound request before it is handled.
    pub fn request_started(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.in_flight.fetch_add(1, Ordering::Relaxed);
    }

    /// Records the response status and latency once a request completes.
    pub fn request_finished(&self, status: u16, latency: Duration) {
        self.in_flight.fetch_sub(1, Ordering::Relaxed);

        let counter = match status {
            200..=299 => &self.responses_2xx,
            300..=399 => &self.responses_3xx,
            400..=499 => &self.responses_4xx,
            _ => &self.responses_5xx,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        self.latency_micros_total
            .fetch_add(latency.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            uptime_seconds: self.started_at.elapsed().as_secs(),
            requests_total: self.requests_total.load(Ordering::Relaxed),
            in_flight: self.in_flight.load(Ordering::Relaxed),
            responses: ResponseClasses {
                success: self.responses_2xx.load(Ordering::Relaxed),
                redirect: self.responses_3xx.load(Ordering::Relaxed),
                client_error: self.responses_4xx.load(Ordering::Relaxed),
                server_error: self.responses_5xx.load(Ordering::Relaxed),
            },
            latency_micros_total: self.latency_micros_total.load(Ordering::Relaxed),
        }
    }
}

impl Default for HttpMetrics {
    fn default() -> Self {
        Self::new()
    }
}
