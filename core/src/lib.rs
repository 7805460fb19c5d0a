pub mod error;
pub mod metrics;
pub mod models;
pub mod physics;
pub mod processor;
pub mod smoothing;
pub mod storage;

pub use error::BarometerError;
pub use metrics::Metrics;
pub use models::{OutputSample, ProcessorConfig, RawSample};
pub use physics::{altitude_asl, altitude_from_pressure, SEA_LEVEL_HPA};
pub use processor::{ProcessorState, SampleProcessor};
pub use storage::{load_config, save_config};
