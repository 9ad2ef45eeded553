//! Window and diagnostics settings from environment variables.

use std::env;

/// UI environment configuration
#[derive(Debug, Clone)]
pub struct UiEnvConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Log lines kept in the diagnostics strip
    pub log_lines: usize,
}

impl Default for UiEnvConfig {
    fn default() -> Self {
        Self {
            window_width: 1100.0,
            window_height: 820.0,
            log_lines: 200,
        }
    }
}

impl UiEnvConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            window_width: env::var("LFPM_WINDOW_WIDTH")
                .ok()
                .and_then(|v| v.parse::<f32>().ok())
                .filter(|w| *w > 0.0)
                .unwrap_or(defaults.window_width),
            window_height: env::var("LFPM_WINDOW_HEIGHT")
                .ok()
                .and_then(|v| v.parse::<f32>().ok())
                .filter(|h| *h > 0.0)
                .unwrap_or(defaults.window_height),
            log_lines: env::var("LFPM_LOG_LINES")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(defaults.log_lines),
        }
    }
}
