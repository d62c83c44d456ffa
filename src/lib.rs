
pub mod axis;
pub mod correlation;
pub mod error;
pub mod mapping;
pub mod modulator;
pub mod noise;
pub mod plot;
pub mod pulse;
pub mod sequence;
pub mod state_log;
pub mod tracing_init;
pub mod train;

pub use axis::TimeAxis;
pub use error::SignalError;
pub use mapping::{MappingOptions, ShapeKind};
pub use train::PulseShape;
