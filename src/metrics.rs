//! Prometheus metrics for the HTTP surface and level detection

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
    pub level_computations_total: IntCounter,
    pub levels_detected_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "Number of HTTP requests currently being served",
        )?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let level_computations_total = IntCounter::new(
            "level_computations_total",
            "Number of support/resistance detection runs",
        )?;
        let levels_detected_total = IntCounter::new(
            "levels_detected_total",
            "Number of levels accepted across all detection runs",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(level_computations_total.clone()))?;
        registry.register(Box::new(levels_detected_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            level_computations_total,
            levels_detected_total,
        })
    }

    /// Record one detection run that accepted `levels` levels
    pub fn record_detection(&self, levels: usize) {
        self.level_computations_total.inc();
        self.levels_detected_total.inc_by(levels as u64);
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
