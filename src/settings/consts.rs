pub const APP_QUALIFIER: &str = "dev";
pub const APP_ORGANIZATION: &str = "echo-progress";
pub const APP_NAME: &str = "echo-progress";

/// Console default; the stderr layer stays quiet under a live progress
/// line unless RUST_LOG asks for more.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const LOG_FILE: &str = "echo-progress.log";
