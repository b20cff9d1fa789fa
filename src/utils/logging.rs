// ============================================================================
// Logging Setup
// tracing-subscriber initialization for binaries, demos and benchmarks
// ============================================================================

use crate::platform::TargetCapabilities;
use tracing::Level;

/// Subscriber settings for [`init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Most verbose level emitted
    pub level: Level,
    /// Include the module path of each event
    pub with_target: bool,
    /// Colorize output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_target: true,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Everything, including out-of-range `at` calls (logged at TRACE).
    pub fn verbose() -> Self {
        Self {
            level: Level::TRACE,
            ..Self::default()
        }
    }

    /// Warnings and errors only.
    pub fn quiet() -> Self {
        Self {
            level: Level::WARN,
            ..Self::default()
        }
    }
}

/// Install a global `fmt` subscriber.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_target(config.with_target)
        .with_ansi(config.ansi)
        .try_init()
        .map_err(|e| format!("failed to install tracing subscriber: {}", e))?;

    tracing::info!(target_caps = %TargetCapabilities::detect(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(config.with_target);
        assert!(config.ansi);
    }

    #[test]
    fn test_presets() {
        assert_eq!(LoggingConfig::verbose().level, Level::TRACE);
        assert_eq!(LoggingConfig::quiet().level, Level::WARN);
        assert_eq!(LoggingConfig::quiet().ansi, LoggingConfig::default().ansi);
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig {
            ansi: false,
            ..LoggingConfig::default()
        };
        // The first call may lose to another test; the second never wins
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
