//! Configuration surface for scrub
//!
//! Loaded once at startup and read-only afterwards. Context callbacks and
//! custom formatters are code-level registrations on the engine builders,
//! not part of this file-backed surface.

use scrub_id::IdMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Master switch; when off the manager passes every error through.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether the host runs in verbose/debug mode.
    #[serde(default)]
    pub debug: bool,

    /// Keep sanitizing even in debug mode.
    #[serde(default)]
    pub sanitize_in_debug: bool,

    /// Log the unsanitized original before sanitizing.
    #[serde(default = "default_true")]
    pub log_original: bool,

    /// Redact the call-stack trace of sanitized errors.
    #[serde(default = "default_true")]
    pub trace_redaction: bool,

    /// Ordered redaction patterns.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,

    /// Replacement token substituted for pattern matches.
    #[serde(default = "default_replacement")]
    pub replacement: String,

    /// Error kinds sanitized regardless of message content.
    #[serde(default)]
    pub always_sanitize: Vec<String>,

    /// Error kinds never sanitized; takes precedence over everything.
    #[serde(default)]
    pub never_sanitize: Vec<String>,

    /// Formatter used when the caller names none.
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Fixed replacement message per error kind, bypassing patterns.
    #[serde(default)]
    pub generic_messages: HashMap<String, String>,

    /// Category tags recorded to the context store per error kind.
    #[serde(default)]
    pub exception_tags: HashMap<String, Vec<String>>,

    #[serde(default)]
    pub identifier: IdentifierConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentifierConfig {
    #[serde(default)]
    pub mode: IdMode,

    /// Template with `{message}` / `{id}` placeholders applied to the
    /// already-sanitized message once an identifier was issued.
    #[serde(default)]
    pub template: Option<String>,

    /// Context store key the issued identifier is recorded under.
    #[serde(default)]
    pub context_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: false,
            sanitize_in_debug: false,
            log_original: true,
            trace_redaction: true,
            patterns: default_patterns(),
            replacement: default_replacement(),
            always_sanitize: Vec::new(),
            never_sanitize: Vec::new(),
            generic_messages: HashMap::new(),
            exception_tags: HashMap::new(),
            identifier: IdentifierConfig::default(),
            default_format: default_format(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_replacement() -> String {
    "[REDACTED]".to_string()
}

fn default_format() -> String {
    "simple".to_string()
}

fn default_patterns() -> Vec<String> {
    scrub_security::default_patterns()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "scrub", "scrub") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.scrub/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.enabled);
        assert!(config.log_original);
        assert!(config.trace_redaction);
        assert!(!config.sanitize_in_debug);
        assert_eq!(config.replacement, "[REDACTED]");
        assert_eq!(config.default_format, "simple");
        assert_eq!(config.identifier.mode, IdMode::None);
        assert!(!config.patterns.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.enabled, config.enabled);
        assert_eq!(parsed.patterns, config.patterns);
        assert_eq!(parsed.identifier.mode, config.identifier.mode);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            debug = true

            [identifier]
            mode = "sortable"
            template = "{message} (ref: {id})"
            context_key = "error_id"
            "#,
        )
        .unwrap();

        assert!(config.debug);
        assert!(config.enabled);
        assert_eq!(config.identifier.mode, IdMode::Sortable);
        assert_eq!(
            config.identifier.template.as_deref(),
            Some("{message} (ref: {id})")
        );
        assert_eq!(config.identifier.context_key.as_deref(), Some("error_id"));
        assert_eq!(config.replacement, "[REDACTED]");
    }

    #[test]
    fn test_kind_maps_deserialize() {
        let config: Config = toml::from_str(
            r#"
            always_sanitize = ["DbError"]
            never_sanitize = ["ValidationError"]

            [generic_messages]
            AuthError = "Authentication failed"

            [exception_tags]
            DbError = ["database", "critical"]
            "#,
        )
        .unwrap();

        assert_eq!(config.always_sanitize, vec!["DbError"]);
        assert_eq!(config.never_sanitize, vec!["ValidationError"]);
        assert_eq!(config.generic_messages["AuthError"], "Authentication failed");
        assert_eq!(config.exception_tags["DbError"], vec!["database", "critical"]);
    }
}
