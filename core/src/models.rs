use serde::{Deserialize, Serialize};

use crate::error::BarometerError;
use crate::physics::SEA_LEVEL_HPA;

pub const DEFAULT_INTERVAL_MS: i64 = 200;
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.3;

/// Rå trykkmåling slik sensorkilden leverer den (én per callback).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    #[serde(alias = "pressure", alias = "pressure_hPa")]
    pub pressure_hpa: f64, // hPa
    pub timestamp: i64,    // monoton ms
}

impl RawSample {
    pub fn new(pressure_hpa: f64, timestamp: i64) -> Self {
        Self { pressure_hpa, timestamp }
    }
}

/// Utdata per akseptert sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputSample {
    pub pressure_hpa: f64,        // glattet trykk
    pub altitude_m: f64,          // ASL, mot 1013.25 hPa
    pub local_altitude_m: f64,    // mot lokalt referansetrykk
    pub relative_altitude_m: f64, // endring siden første sample etter start
    pub vertical_speed_mps: f64,
    pub timestamp: i64,
}

/// Konfigurasjon fra verten. Manglende felt i JSON får standardverdier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    #[serde(alias = "interval", alias = "intervalMillis")]
    pub interval_ms: i64,
    #[serde(alias = "smoothingFactor")]
    pub smoothing_factor: f64,
    #[serde(alias = "localPressure", alias = "local_pressure")]
    pub local_pressure_hpa: f64,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            local_pressure_hpa: SEA_LEVEL_HPA,
        }
    }
}

impl ProcessorConfig {
    pub fn new(interval_ms: i64, smoothing_factor: f64) -> Self {
        Self {
            interval_ms,
            smoothing_factor,
            ..Default::default()
        }
    }

    /// Sjekker at intervall og glattefaktor er innenfor gyldige grenser.
    pub fn validate(&self) -> Result<(), BarometerError> {
        validate_interval(self.interval_ms)?;
        validate_smoothing_factor(self.smoothing_factor)?;
        validate_local_pressure(self.local_pressure_hpa)
    }
}

pub(crate) fn validate_interval(interval_ms: i64) -> Result<(), BarometerError> {
    if interval_ms < 0 {
        return Err(BarometerError::InvalidConfig {
            parameter: "interval_ms",
            reason: format!("must be >= 0, got {interval_ms}"),
        });
    }
    Ok(())
}

pub(crate) fn validate_smoothing_factor(factor: f64) -> Result<(), BarometerError> {
    // NaN faller også ut her
    if !(factor > 0.0 && factor <= 1.0) {
        return Err(BarometerError::InvalidConfig {
            parameter: "smoothing_factor",
            reason: format!("must be in (0, 1], got {factor}"),
        });
    }
    Ok(())
}

pub(crate) fn validate_local_pressure(hpa: f64) -> Result<(), BarometerError> {
    if !(hpa.is_finite() && hpa > 0.0) {
        return Err(BarometerError::InvalidConfig {
            parameter: "local_pressure_hpa",
            reason: format!("must be a positive finite pressure, got {hpa}"),
        });
    }
    Ok(())
}
