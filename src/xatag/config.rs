use crate::error::{Result, XatagError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// The reserved attribute namespace and default-group naming, shared by
/// every tag operation in the process.
pub struct Namespace {
    /// Prefix for user-writable attributes on platforms that require one.
    pub user_prefix: &'static str,
    /// Attribute name of the default tag group, without the user prefix.
    pub base_name: &'static str,
    /// Internal key of the default group.
    pub default_key: &'static str,
    /// How the default group is written in serialized tag expressions.
    pub default_key_name: &'static str,
}

pub static NAMESPACE: Lazy<Namespace> = Lazy::new(|| Namespace {
    user_prefix: "user.",
    base_name: "org.xatag.tags",
    default_key: "",
    default_key_name: "tags",
});

/// Configuration for xatag, stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct XatagConfig {
    /// Print plain tags without the `tags:` key prefix
    #[serde(default = "default_true")]
    pub omit_default_key: bool,

    /// Print each file's tags on a single line
    #[serde(default)]
    pub one_line: bool,
}

fn default_true() -> bool {
    true
}

impl Default for XatagConfig {
    fn default() -> Self {
        Self {
            omit_default_key: true,
            one_line: false,
        }
    }
}

impl XatagConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(XatagError::Io)?;
        let config: XatagConfig =
            serde_json::from_str(&content).map_err(XatagError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(XatagError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(XatagError::Serialization)?;
        fs::write(config_path, content).map_err(XatagError::Io)?;
        Ok(())
    }

    /// Get a config value by key, formatted for display
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "omit-default-key" => Some(self.omit_default_key.to_string()),
            "one-line" => Some(self.one_line.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key; returns a message on unknown key or value
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let parsed: bool = value
            .parse()
            .map_err(|_| format!("Expected true or false, got {}", value))?;
        match key {
            "omit-default-key" => {
                self.omit_default_key = parsed;
                Ok(())
            }
            "one-line" => {
                self.one_line = parsed;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = XatagConfig::default();
        assert!(config.omit_default_key);
        assert!(!config.one_line);
    }

    #[test]
    fn test_get_known_keys() {
        let config = XatagConfig::default();
        assert_eq!(config.get("omit-default-key"), Some("true".to_string()));
        assert_eq!(config.get("one-line"), Some("false".to_string()));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_set_known_key() {
        let mut config = XatagConfig::default();
        config.set("one-line", "true").unwrap();
        assert!(config.one_line);
    }

    #[test]
    fn test_set_rejects_bad_value() {
        let mut config = XatagConfig::default();
        assert!(config.set("one-line", "yes").is_err());
        assert!(config.set("unknown", "true").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = env::temp_dir().join("xatag_test_config_missing");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = XatagConfig::load(&temp_dir).unwrap();
        assert_eq!(config, XatagConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = env::temp_dir().join("xatag_test_config_save");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let mut config = XatagConfig::default();
        config.set("omit-default-key", "false").unwrap();
        config.save(&temp_dir).unwrap();

        let loaded = XatagConfig::load(&temp_dir).unwrap();
        assert!(!loaded.omit_default_key);

        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_namespace_constants() {
        assert_eq!(NAMESPACE.base_name, "org.xatag.tags");
        assert_eq!(NAMESPACE.default_key, "");
        assert_eq!(NAMESPACE.default_key_name, "tags");
    }
}
