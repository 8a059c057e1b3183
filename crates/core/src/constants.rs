/// Constants used throughout the verdict codebase
// Environment variable names
pub const VERDICT_LOG_VAR: &str = "VERDICT_LOG";
pub const VERDICT_LOG_LIFECYCLE_VAR: &str = "VERDICT_LOG_LIFECYCLE";
pub const VERDICT_CAPTURE_PANICS_VAR: &str = "VERDICT_CAPTURE_PANICS";
pub const VERDICT_PREFIX_DESCRIPTION_VAR: &str = "VERDICT_PREFIX_DESCRIPTION";

// Default log filter when VERDICT_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// Kind tag for panics whose payload carries no message
pub const PANIC_KIND: &str = "panic";
