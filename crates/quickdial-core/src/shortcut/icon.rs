//! Icon installation for shortcuts.
//!
//! Installs the application icon into the XDG hicolor theme so desktop
//! entries can refer to it by name.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::AppConfig;
use crate::error::{QuickdialError, Result};
use crate::platform;
use tracing::{debug, warn};

/// Installs the application icon into the user's icon theme.
pub struct IconInstaller {
    /// Scalable apps directory (`.../hicolor/scalable/apps`).
    scalable_dir: PathBuf,
    /// Icon name used in .desktop files.
    icon_name: String,
}

impl IconInstaller {
    /// Create an installer targeting the user's hicolor theme.
    pub fn new() -> Result<Self> {
        Ok(Self {
            scalable_dir: platform::icon_scalable_dir()?,
            icon_name: AppConfig::ICON_NAME.to_string(),
        })
    }

    /// Create an installer targeting a specific scalable apps directory.
    pub fn with_theme_dir(scalable_dir: impl AsRef<Path>) -> Self {
        Self {
            scalable_dir: scalable_dir.as_ref().to_path_buf(),
            icon_name: AppConfig::ICON_NAME.to_string(),
        }
    }

    /// Path the icon is installed to for a given source extension.
    pub fn installed_path(&self, source: &Path) -> PathBuf {
        let extension = source.extension().unwrap_or_default().to_string_lossy();
        self.scalable_dir
            .join(format!("{}.{}", self.icon_name, extension))
    }

    /// Whether an icon with this name is already installed.
    pub fn is_installed(&self) -> bool {
        for ext in ["svg", "png"] {
            if self
                .scalable_dir
                .join(format!("{}.{}", self.icon_name, ext))
                .exists()
            {
                return true;
            }
        }
        false
    }

    /// Install a scalable icon from `source`.
    ///
    /// Copies the file into the scalable apps directory and refreshes the
    /// icon cache when the tooling is available.
    ///
    /// # Returns
    ///
    /// The icon name to use in .desktop files.
    pub fn install_scalable(&self, source: &Path) -> Result<String> {
        if !source.exists() {
            return Err(QuickdialError::Config {
                message: format!("icon source not found: {}", source.display()),
            });
        }

        fs::create_dir_all(&self.scalable_dir).map_err(|e| QuickdialError::Io {
            message: "create scalable icon directory".to_string(),
            path: Some(self.scalable_dir.clone()),
            source: Some(e),
        })?;

        let dest = self.installed_path(source);

        fs::copy(source, &dest).map_err(|e| QuickdialError::Io {
            message: "copy icon".to_string(),
            path: Some(dest.clone()),
            source: Some(e),
        })?;

        debug!("Installed icon at {:?}", dest);

        self.update_icon_cache();

        Ok(self.icon_name.clone())
    }

    /// Update the GTK icon cache for the hicolor theme.
    ///
    /// Best effort: a missing tool or a failed run only logs a warning.
    fn update_icon_cache(&self) {
        // scalable_dir is <theme>/scalable/apps
        let Some(theme_dir) = self.scalable_dir.parent().and_then(Path::parent) else {
            return;
        };

        if !platform::command_exists("gtk-update-icon-cache") {
            debug!("gtk-update-icon-cache not available, skipping cache update");
            return;
        }

        let result = Command::new("gtk-update-icon-cache")
            .args(["-f", "-t"])
            .arg(theme_dir)
            .output();

        match result {
            Ok(output) if output.status.success() => {
                debug!("Updated icon cache for {:?}", theme_dir);
            }
            Ok(output) => {
                warn!(
                    "Icon cache update failed: {}",
                    String::from_utf8_lossy(&output.stderr)
                );
            }
            Err(e) => {
                warn!("Failed to run gtk-update-icon-cache: {}", e);
            }
        }
    }
}
