use std::fmt;

use once_cell::sync::Lazy;
use prometheus::{Gauge, IntCounter, Registry};

/// Prometheus-tellere for prosessoren. `Metrics::new()` gir et eget register;
/// kloner deler tellere, og `SampleProcessor::new()` bruker den globale instansen.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    accepted: IntCounter,
    throttled: IntCounter,
    rejected: IntCounter,
    smoothed_pressure: Gauge,
}

static DEFAULT_METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let accepted = IntCounter::new(
            "barometer_samples_accepted_total",
            "Samples som ga utdata",
        )
        .expect("gyldig metrikknavn");
        let throttled = IntCounter::new(
            "barometer_samples_throttled_total",
            "Samples droppet av intervall-struping",
        )
        .expect("gyldig metrikknavn");
        let rejected = IntCounter::new(
            "barometer_samples_rejected_total",
            "Samples avvist pga ugyldig trykk",
        )
        .expect("gyldig metrikknavn");
        let smoothed_pressure = Gauge::new(
            "barometer_smoothed_pressure_hpa",
            "Siste glattede trykk (hPa)",
        )
        .expect("gyldig metrikknavn");

        // Navnene er unike innen registeret
        for c in [&accepted, &throttled, &rejected] {
            registry
                .register(Box::new(c.clone()))
                .expect("unikt metrikknavn");
        }
        registry
            .register(Box::new(smoothed_pressure.clone()))
            .expect("unikt metrikknavn");

        Self { registry, accepted, throttled, rejected, smoothed_pressure }
    }

    /// Prosess-global instans for verter som ikke vil eie sin egen.
    pub fn global() -> &'static Metrics {
        &DEFAULT_METRICS
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics")
            .field("accepted", &self.accepted.get())
            .field("throttled", &self.throttled.get())
            .field("rejected", &self.rejected.get())
            .finish()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

pub fn samples_accepted_total(m: &Metrics) -> &IntCounter {
    &m.accepted
}

pub fn samples_throttled_total(m: &Metrics) -> &IntCounter {
    &m.throttled
}

pub fn samples_rejected_total(m: &Metrics) -> &IntCounter {
    &m.rejected
}

pub fn smoothed_pressure_hpa(m: &Metrics) -> &Gauge {
    &m.smoothed_pressure
}
