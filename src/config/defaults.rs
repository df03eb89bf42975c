//! Default configuration values

/// Log level used when neither `-v` nor the settings file choose one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Whether template parameters are derived from the target system
pub const DEFAULT_DERIVE_PARAMS: bool = true;

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
