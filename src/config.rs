//! Application configuration.
//!
//! Loaded from `$XDG_CONFIG_HOME/hyprlocal/config.json`.  Every field is
//! optional — a missing file or a minimal `{}` is valid and falls back to
//! the compiled-in defaults, so the tool works without any setup.
//!
//! # Example
//!
//! ```json
//! {
//!   "timeout_ms": 2000,
//!   "compact": true
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deadline for each compositor IPC request, in milliseconds.
    pub timeout_ms: u64,

    /// Whether navigation and moves run the gap-closing compaction pass.
    /// The `--no-compact` flag forces this off for one invocation.
    pub compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_ms: 2_000,
            compact: true,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// The per-request IPC deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_config() {
        let json = r#"{ "timeout_ms": 500, "compact": false }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.timeout_ms, 500);
        assert!(!cfg.compact);
        assert_eq!(cfg.timeout(), Duration::from_millis(500));
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        let defaults = Config::default();
        assert_eq!(cfg.timeout_ms, defaults.timeout_ms);
        assert_eq!(cfg.compact, defaults.compact);
    }

    #[test]
    fn deserialize_partial_keeps_other_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "timeout_ms": 100 }"#).unwrap();
        assert_eq!(cfg.timeout_ms, 100);
        assert!(cfg.compact);
    }

    #[test]
    fn unknown_keys_ignored() {
        // Should not fail — unknown keys are silently ignored.
        let _cfg: Config =
            serde_json::from_str(r#"{ "compact": true, "future_section": { "key": 42 } }"#)
                .unwrap();
    }
}
