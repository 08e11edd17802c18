pub mod app;

pub use app::config::{Config, ConfigError};
pub use app::models::{ResolvedConfig, ScanOutcome};
pub use app::scanner::{ScanError, ScanWarning, Scanner};
