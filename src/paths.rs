//! XDG-style path utilities for the settings document.
//!
//! Paths follow the XDG Base Directory conventions on every platform
//! instead of the OS-specific locations `dirs` would pick.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::settings::STORAGE_KEY;

/// Returns the configuration directory for ultima.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/ultima` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/ultima` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("ultima")),
        _ => Ok(home_dir()?.join(".config").join("ultima")),
    }
}

/// Returns the path of the settings document, named after the storage key.
pub fn settings_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(format!("{STORAGE_KEY}.json")))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_default() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        let dir = config_dir().unwrap();
        assert!(dir.ends_with(".config/ultima"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };

        let dir = config_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/custom/config/ultima"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }

    #[test]
    #[serial]
    fn test_settings_file_uses_storage_key() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };

        let file = settings_file().unwrap();
        assert_eq!(
            file,
            PathBuf::from("/custom/config/ultima/ultima_data_v3.json")
        );

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }
}
