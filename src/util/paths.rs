use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

const CONFIG_DIR_ENV: &str = "DUMPCHOOSER_CONFIG_DIR";

// Global config directory override (for --config flag and tests)
static CONFIG_DIR_OVERRIDE: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Set config directory override (used by --config flag and tests)
pub fn set_config_dir_override(path: Option<PathBuf>) {
    let mut override_path = CONFIG_DIR_OVERRIDE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *override_path = path;
}

/// Get current config directory override
pub fn get_config_dir_override() -> Option<PathBuf> {
    CONFIG_DIR_OVERRIDE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Find config directory by searching in priority order:
/// 1. Override from --config flag or set_config_dir_override()
/// 2. Environment variable DUMPCHOOSER_CONFIG_DIR
/// 3. User config directory (`~/.config/dumpchooser/` on Unix, `%APPDATA%\dumpchooser\` on Windows)
/// 4. Current working directory (`./config/`)
/// 5. Executable directory (`<exe_dir>/config/`)
///
/// If no config directory is found, creates one in the user config directory.
pub fn find_config_directory() -> Result<PathBuf> {
    if let Some(override_path) = get_config_dir_override() {
        if override_path.is_dir() {
            tracing::debug!("Using config directory override: {:?}", override_path);
            return Ok(override_path);
        }
        tracing::warn!("Config directory override does not exist: {:?}", override_path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_DIR_ENV) {
        let env_config = PathBuf::from(env_path);
        if env_config.is_dir() {
            tracing::debug!("Found config directory from {}: {:?}", CONFIG_DIR_ENV, env_config);
            return Ok(env_config);
        }
    }

    if let Ok(user_config) = get_user_config_dir() {
        if user_config.is_dir() {
            tracing::debug!("Found config directory at: {:?}", user_config);
            return Ok(user_config);
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        let cwd_config = cwd.join("config");
        if cwd_config.is_dir() {
            tracing::debug!("Found config directory at: {:?}", cwd_config);
            return Ok(cwd_config);
        }
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let exe_config = exe_dir.join("config");
            if exe_config.is_dir() {
                tracing::debug!("Found config directory at: {:?}", exe_config);
                return Ok(exe_config);
            }
        }
    }

    let user_config = get_user_config_dir()?;
    std::fs::create_dir_all(&user_config).context("Failed to create user config directory")?;
    tracing::info!("Created config directory at: {:?}", user_config);
    Ok(user_config)
}

/// Platform-specific user config directory
fn get_user_config_dir() -> Result<PathBuf> {
    let base_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine user config directory"))?;
    Ok(base_dir.join("dumpchooser"))
}

/// Get absolute path to settings.toml
pub fn get_app_config_path() -> Result<PathBuf> {
    let config_dir = find_config_directory()?;
    Ok(config_dir.join("settings.toml"))
}

/// Resolve a relative path against the config directory.
///
/// Absolute paths are returned as-is. Falls back to the original path if the
/// config directory cannot be determined.
pub fn resolve_relative_to_config(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match find_config_directory() {
        Ok(config_dir) => config_dir.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Get absolute path to logs directory
pub fn get_logs_dir() -> Result<PathBuf> {
    let config_dir = find_config_directory()?;
    Ok(config_dir.join(".logs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn reset_test_state() {
        set_config_dir_override(None);
        unsafe { std::env::remove_var(CONFIG_DIR_ENV) };
    }

    #[test]
    #[serial]
    fn test_config_dir_override() {
        reset_test_state();
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().to_path_buf();

        set_config_dir_override(Some(config_dir.clone()));
        assert_eq!(find_config_directory().unwrap(), config_dir);
        assert_eq!(get_app_config_path().unwrap(), config_dir.join("settings.toml"));
        assert_eq!(get_logs_dir().unwrap(), config_dir.join(".logs"));

        reset_test_state();
    }

    #[test]
    #[serial]
    fn test_config_dir_from_env_variable() {
        reset_test_state();
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().to_path_buf();

        unsafe { std::env::set_var(CONFIG_DIR_ENV, config_dir.to_str().unwrap()) };
        assert_eq!(find_config_directory().unwrap(), config_dir);

        reset_test_state();
    }

    #[test]
    #[serial]
    fn test_missing_override_falls_through_to_env() {
        reset_test_state();
        let temp_dir = TempDir::new().unwrap();
        let env_dir = temp_dir.path().join("env");
        std::fs::create_dir_all(&env_dir).unwrap();

        set_config_dir_override(Some(temp_dir.path().join("missing")));
        unsafe { std::env::set_var(CONFIG_DIR_ENV, env_dir.to_str().unwrap()) };

        assert_eq!(find_config_directory().unwrap(), env_dir);

        reset_test_state();
    }

    #[test]
    #[serial]
    fn test_resolve_relative_to_config() {
        reset_test_state();
        let temp_dir = TempDir::new().unwrap();
        set_config_dir_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(
            resolve_relative_to_config(Path::new("dumps")),
            temp_dir.path().join("dumps")
        );
        let absolute = temp_dir.path().join("elsewhere");
        assert_eq!(resolve_relative_to_config(&absolute), absolute);

        reset_test_state();
    }

    #[test]
    fn test_get_user_config_dir_returns_valid_path() {
        let user_dir = get_user_config_dir().unwrap();
        assert!(user_dir.to_str().unwrap().contains("dumpchooser"));
    }
}
