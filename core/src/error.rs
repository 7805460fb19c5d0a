use thiserror::Error;

/// Feiltyper for sample-prosessoren. Alle er lokale og kan rettes av kalleren.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BarometerError {
    /// Ugyldige argumenter til start/set_*
    #[error("invalid config: {parameter} {reason}")]
    InvalidConfig {
        parameter: &'static str,
        reason: String,
    },

    /// ingest før start eller etter stop
    #[error("processor not started")]
    NotStarted,

    /// Ikke-positivt (eller ikke-endelig) trykk
    #[error("invalid sample at t={timestamp}: pressure {pressure_hpa} hPa")]
    InvalidSample { pressure_hpa: f64, timestamp: i64 },
}

pub type Result<T> = std::result::Result<T, BarometerError>;
