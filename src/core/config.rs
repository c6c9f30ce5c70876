//! Startup configuration.
//!
//! `index.html` may define `window.__SPOOKY_MATRIX__ = { ... }` before the
//! wasm bundle boots. Any field left out falls back to its default; a value
//! that cannot be decoded makes the whole object fall back to defaults.

use serde::Deserialize;
use log::LevelFilter;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Global the config object is read from.
pub const CONFIG_GLOBAL: &str = "__SPOOKY_MATRIX__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config object could not be decoded: {0}")]
    Js(String),
    #[error("title must not be empty")]
    EmptyTitle,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub title: String,
    pub input_placeholder: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Spooky Task Matrix".to_string(),
            input_placeholder: "Enter a new task".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.validate()
    }

    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        let config: AppConfig =
            serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Js(e.to_string()))?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        Ok(self)
    }

    /// Reads the config global from `window`. Never fails: a missing global
    /// yields defaults, a broken one yields defaults plus a warning.
    pub fn load() -> Self {
        let window = leptos::prelude::window();
        let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };

        match Self::from_js(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_object_overrides_only_given_fields() {
        let config = AppConfig::from_json(r#"{"title":"Chores","logLevel":"debug"}"#).unwrap();

        assert_eq!(config.title, "Chores");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.input_placeholder, "Enter a new task");
    }

    #[rstest]
    #[case("off", LevelFilter::Off)]
    #[case("warn", LevelFilter::Warn)]
    #[case("INFO", LevelFilter::Info)]
    #[case("Trace", LevelFilter::Trace)]
    fn log_level_names_parse_case_insensitively(#[case] name: &str, #[case] expected: LevelFilter) {
        let config = AppConfig::from_json(&format!(r#"{{"logLevel":"{name}"}}"#)).unwrap();
        assert_eq!(config.log_level, expected);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = AppConfig::from_json(r#"{"logLevel":"shout"}"#).unwrap_err();

        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = AppConfig::from_json(r#"{"title":"  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyTitle));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(AppConfig::from_json("{title:"), Err(ConfigError::Json(_))));
    }
}
