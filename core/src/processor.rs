// core/src/processor.rs
use log::{debug, info, warn};

use crate::error::{BarometerError, Result};
use crate::metrics::{
    samples_accepted_total, samples_rejected_total, samples_throttled_total,
    smoothed_pressure_hpa, Metrics,
};
use crate::models::{
    validate_interval, validate_local_pressure, validate_smoothing_factor, OutputSample,
    ProcessorConfig, RawSample,
};
use crate::physics::{altitude_asl, altitude_from_pressure, vertical_speed};
use crate::smoothing::ExpSmoother;

/// All løpende tilstand for én prosessor. Muteres kun av `ingest` (og nullstilles av start/stop).
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorState {
    pub last_sample_time: i64,
    pub altitude_asl: f64,
    pub altitude: f64, // mot lokalt referansetrykk
    pub initial_altitude_asl: Option<f64>,
    pub relative_altitude: f64,
    pub vertical_speed: f64,
    pub interval_ms: i64,
    pub local_pressure_hpa: f64,
    pub is_active: bool,
    smoother: ExpSmoother,
}

impl ProcessorState {
    fn new(cfg: &ProcessorConfig) -> Self {
        Self {
            last_sample_time: 0,
            altitude_asl: 0.0,
            altitude: 0.0,
            initial_altitude_asl: None,
            relative_altitude: 0.0,
            vertical_speed: 0.0,
            interval_ms: cfg.interval_ms,
            local_pressure_hpa: cfg.local_pressure_hpa,
            is_active: false,
            smoother: ExpSmoother::new(cfg.smoothing_factor),
        }
    }

    /// None frem til første aksepterte sample etter start.
    pub fn smoothed_pressure(&self) -> Option<f64> {
        self.smoother.value()
    }

    pub fn smoothing_factor(&self) -> f64 {
        self.smoother.factor()
    }

    pub fn has_sample(&self) -> bool {
        self.smoother.value().is_some()
    }

    // Tilbake til "ingen tidligere sample", konfig beholdes
    fn clear(&mut self) {
        self.last_sample_time = 0;
        self.altitude_asl = 0.0;
        self.altitude = 0.0;
        self.initial_altitude_asl = None;
        self.relative_altitude = 0.0;
        self.vertical_speed = 0.0;
        self.smoother.reset();
    }
}

/// Gjør en høyfrekvent strøm av rå trykkmålinger om til en strupet,
/// glattet strøm av høyde/trykk. Ingen intern samtidighet: verten serialiserer kallene.
#[derive(Debug)]
pub struct SampleProcessor {
    state: ProcessorState,
    metrics: Metrics,
}

impl Default for SampleProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleProcessor {
    /// Inaktiv prosessor med standardkonfig og prosess-globale metrikker.
    pub fn new() -> Self {
        Self::with_metrics(Metrics::global().clone())
    }

    pub fn with_metrics(metrics: Metrics) -> Self {
        Self {
            state: ProcessorState::new(&ProcessorConfig::default()),
            metrics,
        }
    }

    pub fn start(&mut self, interval_ms: i64, smoothing_factor: f64) -> Result<()> {
        let cfg = ProcessorConfig {
            interval_ms,
            smoothing_factor,
            local_pressure_hpa: self.state.local_pressure_hpa,
        };
        self.start_with(&cfg)
    }

    /// Starter med full konfig (inkl. lokalt referansetrykk).
    pub fn start_with(&mut self, cfg: &ProcessorConfig) -> Result<()> {
        cfg.validate()?;
        self.state = ProcessorState::new(cfg);
        self.state.is_active = true;
        info!(
            "barometer start: interval_ms={} smoothing_factor={} local_pressure_hpa={}",
            cfg.interval_ms, cfg.smoothing_factor, cfg.local_pressure_hpa
        );
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.state.is_active {
            info!("barometer stop (last_sample_time={})", self.state.last_sample_time);
        }
        self.state.is_active = false;
        self.state.clear();
    }

    /// Returnerer `Ok(None)` når samplet strupes (for tidlig eller ute av rekkefølge).
    pub fn ingest(&mut self, raw: RawSample) -> Result<Option<OutputSample>> {
        if !self.state.is_active {
            return Err(BarometerError::NotStarted);
        }
        if !(raw.pressure_hpa.is_finite() && raw.pressure_hpa > 0.0) {
            samples_rejected_total(&self.metrics).inc();
            warn!(
                "avviser sample t={} med trykk {} hPa",
                raw.timestamp, raw.pressure_hpa
            );
            return Err(BarometerError::InvalidSample {
                pressure_hpa: raw.pressure_hpa,
                timestamp: raw.timestamp,
            });
        }

        let st = &mut self.state;
        let first = !st.has_sample();
        let dt_ms = raw.timestamp.saturating_sub(st.last_sample_time);

        if !first && dt_ms < st.interval_ms {
            samples_throttled_total(&self.metrics).inc();
            debug!("strupet sample t={} (dt={} ms < {} ms)", raw.timestamp, dt_ms, st.interval_ms);
            return Ok(None);
        }

        let pressure = st.smoother.update(raw.pressure_hpa);
        let prev_asl = st.altitude_asl;
        st.altitude_asl = altitude_asl(pressure);
        st.altitude = altitude_from_pressure(pressure, st.local_pressure_hpa);

        if first {
            st.initial_altitude_asl = Some(st.altitude_asl);
            st.vertical_speed = 0.0;
        } else {
            st.vertical_speed = vertical_speed(prev_asl, st.altitude_asl, dt_ms);
        }
        st.relative_altitude = st
            .initial_altitude_asl
            .map(|h0| st.altitude_asl - h0)
            .unwrap_or(0.0);
        st.last_sample_time = raw.timestamp;

        samples_accepted_total(&self.metrics).inc();
        smoothed_pressure_hpa(&self.metrics).set(pressure);
        debug!(
            "sample t={} p={:.3} hPa alt={:.2} m",
            raw.timestamp, pressure, st.altitude_asl
        );

        Ok(Some(OutputSample {
            pressure_hpa: pressure,
            altitude_m: st.altitude_asl,
            local_altitude_m: st.altitude,
            relative_altitude_m: st.relative_altitude,
            vertical_speed_mps: st.vertical_speed,
            timestamp: raw.timestamp,
        }))
    }

    /// Nytt minimumsintervall. Er prosessoren aktiv, startes strømmen på nytt.
    pub fn set_interval(&mut self, interval_ms: i64) -> Result<()> {
        validate_interval(interval_ms)?;
        self.state.interval_ms = interval_ms;
        if self.state.is_active {
            info!("barometer restart: interval_ms={}", interval_ms);
            self.state.clear();
        }
        Ok(())
    }

    /// Gjelder fra neste aksepterte sample; eksisterende glatting beholdes.
    pub fn set_smoothing_factor(&mut self, factor: f64) -> Result<()> {
        validate_smoothing_factor(factor)?;
        self.state.smoother.set_factor(factor);
        Ok(())
    }

    pub fn set_local_pressure(&mut self, pressure_hpa: f64) -> Result<()> {
        validate_local_pressure(pressure_hpa)?;
        self.state.local_pressure_hpa = pressure_hpa;
        Ok(())
    }

    pub fn interval_ms(&self) -> i64 {
        self.state.interval_ms
    }

    pub fn smoothing_factor(&self) -> f64 {
        self.state.smoothing_factor()
    }

    pub fn local_pressure_hpa(&self) -> f64 {
        self.state.local_pressure_hpa
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    pub fn state(&self) -> &ProcessorState {
        &self.state
    }

    pub fn config(&self) -> ProcessorConfig {
        ProcessorConfig {
            interval_ms: self.state.interval_ms,
            smoothing_factor: self.state.smoothing_factor(),
            local_pressure_hpa: self.state.local_pressure_hpa,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
