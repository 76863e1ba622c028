//! Configuration management

use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use crate::theme::Theme;

const APP_DIR_NAME: &str = "theme-switcher";

#[cfg(not(target_arch = "wasm32"))]
/// Prefix for environment overrides (THEME_SWITCHER_DEFAULT_THEME, etc.)
const ENV_PREFIX: &str = "THEME_SWITCHER";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeConfig {
    /// Key the preference is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Theme used when nothing usable is stored
    #[serde(default)]
    pub default_theme: Theme,

    /// Write the value adopted at load back to the store
    #[serde(default)]
    pub reconcile_on_load: bool,

    /// Directory holding preferences.json (native only)
    #[serde(default = "get_data_dir")]
    pub data_dir: PathBuf,
}

fn default_storage_key() -> String {
    "theme".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_theme: Theme::default(),
            reconcile_on_load: false,
            data_dir: get_data_dir(),
        }
    }
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("THEME_SWITCHER_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

/// Get data directory (XDG_DATA_HOME or platform default)
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("THEME_SWITCHER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local/share").join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("LOCALAPPDATA") {
            return PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }

    // Fallback to ./data
    PathBuf::from("./data")
}

/// Load configuration: defaults, then `<config_dir>/theme-switcher.*`, then env
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> Result<ThemeConfig> {
    let config_dir = get_config_dir();

    let config = ::config::Config::builder()
        .set_default("storage_key", default_storage_key())?
        .set_default("default_theme", Theme::default().as_str())?
        .set_default("reconcile_on_load", false)?
        .set_default("data_dir", get_data_dir().to_string_lossy().to_string())?
        .add_source(
            ::config::File::with_name(&config_dir.join(APP_DIR_NAME).to_string_lossy())
                .required(false),
        )
        .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?;

    let config: ThemeConfig = config.try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

/// No files or environment in the browser; defaults only
#[cfg(target_arch = "wasm32")]
pub fn load_config() -> Result<ThemeConfig> {
    Ok(ThemeConfig::default())
}

#[cfg(not(target_arch = "wasm32"))]
fn validate(config: &ThemeConfig) -> Result<()> {
    if config.storage_key.trim().is_empty() {
        anyhow::bail!("storage_key must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for var in [
            "THEME_SWITCHER_STORAGE_KEY",
            "THEME_SWITCHER_DEFAULT_THEME",
            "THEME_SWITCHER_RECONCILE_ON_LOAD",
            "THEME_SWITCHER_DATA_DIR",
        ] {
            env::remove_var(var);
        }
        // Ensure no config file interferes
        env::set_var("THEME_SWITCHER_CONFIG_DIR", "/tmp/theme-switcher-test-nonexistent");
    }

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        clear_env();

        let config = load_config().expect("config should load");
        env::remove_var("THEME_SWITCHER_CONFIG_DIR");

        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.default_theme, Theme::Light);
        assert!(!config.reconcile_on_load);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("THEME_SWITCHER_DEFAULT_THEME", "dark");
        env::set_var("THEME_SWITCHER_RECONCILE_ON_LOAD", "true");
        env::set_var("THEME_SWITCHER_DATA_DIR", "/tmp/theme-switcher-data");

        let config = load_config().expect("config should load");

        env::remove_var("THEME_SWITCHER_DEFAULT_THEME");
        env::remove_var("THEME_SWITCHER_RECONCILE_ON_LOAD");
        env::remove_var("THEME_SWITCHER_DATA_DIR");
        env::remove_var("THEME_SWITCHER_CONFIG_DIR");

        assert_eq!(config.default_theme, Theme::Dark);
        assert!(config.reconcile_on_load);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/theme-switcher-data"));
    }

    #[test]
    #[serial]
    fn test_unknown_default_theme_is_rejected() {
        clear_env();
        env::set_var("THEME_SWITCHER_DEFAULT_THEME", "blue");

        let result = load_config();

        env::remove_var("THEME_SWITCHER_DEFAULT_THEME");
        env::remove_var("THEME_SWITCHER_CONFIG_DIR");

        let err = result.expect_err("blue is not a theme");
        assert!(format!("{:#}", err).contains("unknown theme"), "{:#}", err);
    }

    #[test]
    #[serial]
    fn test_config_file_is_read() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("theme-switcher.toml"),
            "storage_key = \"site-theme\"\ndefault_theme = \"dark\"\n",
        )
        .unwrap();
        env::set_var("THEME_SWITCHER_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");
        env::remove_var("THEME_SWITCHER_CONFIG_DIR");

        assert_eq!(config.storage_key, "site-theme");
        assert_eq!(config.default_theme, Theme::Dark);
    }

    #[test]
    #[serial]
    fn test_blank_storage_key_is_rejected() {
        clear_env();
        env::set_var("THEME_SWITCHER_STORAGE_KEY", "  ");

        let result = load_config();

        env::remove_var("THEME_SWITCHER_STORAGE_KEY");
        env::remove_var("THEME_SWITCHER_CONFIG_DIR");

        assert!(result.is_err());
    }
}
