use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fallback greeting when neither the caller nor the config supplies one.
pub const DEFAULT_GREETING: &str = "Hello";
/// Fallback name when neither the caller nor the config supplies one.
pub const DEFAULT_NAME: &str = "World";

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub greeting: Option<String>,
    pub name: Option<String>,
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(greeting) = &self.greeting {
            if greeting.trim().is_empty() {
                return Err("greeting must not be empty".to_string());
            }
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("name must not be empty".to_string());
            }
        }
        Ok(())
    }

    /// Configured greeting, or the built-in default.
    pub fn greeting_or_default(&self) -> &str {
        self.greeting.as_deref().unwrap_or(DEFAULT_GREETING)
    }

    /// Configured name, or the built-in default.
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }
}

pub fn default_config_path() -> PathBuf {
    // Minimal: ~/.config/salut/config.toml
    // (XDG support can be added later)
    if let Some(home) = env::var_os("HOME") {
        PathBuf::from(home)
            .join(".config")
            .join("salut")
            .join("config.toml")
    } else {
        PathBuf::from(".config/salut/config.toml")
    }
}

/// Path the config is read from: `SALUT_CONFIG` if set, else the default.
pub fn config_path() -> PathBuf {
    env::var("SALUT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_path())
}

pub fn load_config() -> Result<(Config, PathBuf), String> {
    let path = config_path();
    let data = fs::read_to_string(&path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let cfg: Config = toml::from_str(&data).map_err(|e| format!("failed to parse TOML: {}", e))?;
    Ok((cfg, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_path(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        env::temp_dir().join(format!("salut-{prefix}-{nanos}.toml"))
    }

    #[test]
    fn validate_rejects_empty_greeting() {
        let cfg = Config {
            greeting: Some("".to_string()),
            name: Some("World".to_string()),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let cfg = Config {
            greeting: Some("Hello".to_string()),
            name: Some("   ".to_string()),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_absent_fields() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = Config::default();
        assert_eq!(cfg.greeting_or_default(), "Hello");
        assert_eq!(cfg.name_or_default(), "World");
    }

    #[test]
    fn configured_values_win_over_defaults() {
        let cfg = Config {
            greeting: Some("Hej".to_string()),
            name: Some("Verden".to_string()),
        };
        assert_eq!(cfg.greeting_or_default(), "Hej");
        assert_eq!(cfg.name_or_default(), "Verden");
    }

    #[test]
    fn load_config_reads_toml() {
        let _guard = crate::test_support::ENV_LOCK
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let path = unique_temp_path("config-load");
        let data = "greeting = \"Hej\"\nname = \"Verden\"\n";
        fs::write(&path, data).expect("write config");

        let prev = env::var("SALUT_CONFIG").ok();
        env::set_var("SALUT_CONFIG", &path);

        let (cfg, loaded_path) = load_config().expect("load config");
        assert_eq!(loaded_path, path);
        assert_eq!(cfg.greeting.as_deref(), Some("Hej"));
        assert_eq!(cfg.name.as_deref(), Some("Verden"));

        if let Some(value) = prev {
            env::set_var("SALUT_CONFIG", value);
        } else {
            env::remove_var("SALUT_CONFIG");
        }
        let _ = fs::remove_file(&path);
    }
}
