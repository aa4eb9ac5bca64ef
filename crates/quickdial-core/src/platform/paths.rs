//! Platform-specific path utilities.
//!
//! This module resolves the directories the shortcut layer writes into:
//! the launcher-menu applications directory, the user's desktop, the icon
//! theme, and the per-user config directory holding the instance record.

use crate::error::{QuickdialError, Result};
use std::path::PathBuf;

/// Get the launcher applications directory.
///
/// Generated dynamic-shortcut entries land here.
///
/// # Platform Behavior
/// - **Linux**: `~/.local/share/applications` (XDG spec)
/// - **Windows**: `%APPDATA%/Microsoft/Windows/Start Menu/Programs`
/// - **macOS**: unsupported (launcher entries are .app bundles)
pub fn applications_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let home = dirs::home_dir().ok_or_else(|| QuickdialError::Config {
            message: "Could not determine home directory".to_string(),
        })?;
        Ok(home.join(".local").join("share").join("applications"))
    }

    #[cfg(target_os = "windows")]
    {
        let data_dir = dirs::data_dir().ok_or_else(|| QuickdialError::Config {
            message: "Could not determine app data directory".to_string(),
        })?;
        Ok(data_dir
            .join("Microsoft")
            .join("Windows")
            .join("Start Menu")
            .join("Programs"))
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        Err(QuickdialError::Config {
            message: "Unsupported platform for applications directory".to_string(),
        })
    }
}

/// Get the user's desktop directory.
///
/// Pinned-shortcut entries land here.
///
/// # Platform Behavior
/// Uses the `dirs` crate which handles platform differences:
/// - **Linux**: `~/Desktop` or XDG user dirs
/// - **Windows**: `C:\Users\{user}\Desktop`
/// - **macOS**: `~/Desktop`
pub fn desktop_dir() -> Result<PathBuf> {
    dirs::desktop_dir().ok_or_else(|| QuickdialError::Config {
        message: "Could not determine desktop directory".to_string(),
    })
}

/// Get the scalable-icon directory of the user's hicolor theme.
///
/// # Platform Behavior
/// - **Linux**: `~/.local/share/icons/hicolor/scalable/apps`
/// - **Windows/macOS**: no system icon theme; resolution fails
pub fn icon_scalable_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let home = dirs::home_dir().ok_or_else(|| QuickdialError::Config {
            message: "Could not determine home directory".to_string(),
        })?;
        Ok(home
            .join(".local")
            .join("share")
            .join("icons")
            .join("hicolor")
            .join("scalable")
            .join("apps"))
    }

    #[cfg(not(target_os = "linux"))]
    {
        Err(QuickdialError::Config {
            message: "No icon theme directory on this platform".to_string(),
        })
    }
}

/// Get the Quickdial per-user configuration directory.
///
/// This is the well-known location for cross-process shared state,
/// i.e. the single-instance record.
///
/// # Platform Behavior
/// - **Linux**: `~/.config/quickdial` (XDG_CONFIG_HOME)
/// - **Windows**: `%APPDATA%\quickdial`
/// - **macOS**: `~/Library/Application Support/quickdial`
pub fn app_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| QuickdialError::Config {
        message: "Could not determine platform config directory".to_string(),
    })?;
    Ok(config_dir.join(crate::config::InstanceConfig::CONFIG_DIR_NAME))
}

/// Check if a command exists in the system PATH.
///
/// # Platform Behavior
/// - **Linux/macOS**: Uses `which` command
/// - **Windows**: Uses `where` command
pub fn command_exists(cmd: &str) -> bool {
    #[cfg(unix)]
    {
        std::process::Command::new("which")
            .arg(cmd)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    #[cfg(windows)]
    {
        std::process::Command::new("where")
            .arg(cmd)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}
