pub mod binding; // Map control values onto concrete parameter ranges
pub mod contract; // Raw-constant contract shared with external tooling
pub mod curve; // Interpolation and waveform math
pub mod error;
pub mod preset; // Serializable automation descriptors
pub mod source; // Control sources: parameter value as a function of time
pub mod sync; // Hand-off of computed values to a realtime consumer
pub mod timing; // Nanosecond timestamps and timed control points

pub use error::Error;

pub const MAX_BLOCK_VALUES: usize = 2048;
pub(crate) const MIN_FREQUENCY_HZ: f64 = 1e-9;
