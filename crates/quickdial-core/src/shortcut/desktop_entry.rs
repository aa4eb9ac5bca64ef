//! Desktop entry (.desktop file) generation.
//!
//! Implements the XDG Desktop Entry Specification for the entries this
//! library materializes from shortcut descriptors.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::AppConfig;
use crate::error::{QuickdialError, Result};
use crate::shortcut::descriptor::ShortcutDescriptor;
use tracing::debug;

/// A desktop entry representation.
#[derive(Debug, Clone)]
pub struct DesktopEntry {
    /// Entry name (shown in menus).
    pub name: String,
    /// Comment/description.
    pub comment: Option<String>,
    /// Executable command.
    pub exec: String,
    /// Icon name or path.
    pub icon: String,
    /// Whether to run in a terminal.
    pub terminal: bool,
    /// Entry type (usually "Application").
    pub entry_type: String,
    /// Categories (semicolon-separated).
    pub categories: Vec<String>,
    /// StartupWMClass for window matching.
    pub startup_wm_class: Option<String>,
}

impl Default for DesktopEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            comment: None,
            exec: String::new(),
            icon: String::new(),
            terminal: false,
            entry_type: "Application".to_string(),
            categories: vec!["Network".to_string(), "InstantMessaging".to_string()],
            startup_wm_class: Some(AppConfig::WM_CLASS.to_string()),
        }
    }
}

impl DesktopEntry {
    /// Build an entry from a shortcut descriptor.
    ///
    /// `exec_path` is the binary the entry launches; the descriptor's launch
    /// extras become its arguments so activation delivers the launch signal.
    pub fn from_descriptor(descriptor: &ShortcutDescriptor, exec_path: &Path) -> Self {
        Self {
            name: descriptor.short_label.clone(),
            comment: descriptor.long_label.clone(),
            exec: exec_line(exec_path, &descriptor.launch_args()),
            icon: descriptor.icon.entry_value(),
            ..Self::default()
        }
    }

    /// Generate the .desktop file content.
    pub fn to_string(&self) -> String {
        let mut content = String::new();

        writeln!(content, "[Desktop Entry]").unwrap();
        writeln!(content, "Name={}", self.name).unwrap();

        if let Some(ref comment) = self.comment {
            writeln!(content, "Comment={}", comment).unwrap();
        }

        writeln!(content, "Exec={}", self.exec).unwrap();
        writeln!(content, "Icon={}", self.icon).unwrap();
        writeln!(
            content,
            "Terminal={}",
            if self.terminal { "true" } else { "false" }
        )
        .unwrap();
        writeln!(content, "Type={}", self.entry_type).unwrap();

        if !self.categories.is_empty() {
            writeln!(content, "Categories={};", self.categories.join(";")).unwrap();
        }

        if let Some(ref wm_class) = self.startup_wm_class {
            writeln!(content, "StartupWMClass={}", wm_class).unwrap();
        }

        content
    }

    /// Write the desktop entry to a file.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| QuickdialError::Io {
                message: "create directory".to_string(),
                path: Some(parent.to_path_buf()),
                source: Some(e),
            })?;
        }

        // Write content
        let content = self.to_string();
        let mut file = fs::File::create(path).map_err(|e| QuickdialError::Io {
            message: "create desktop file".to_string(),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;

        file.write_all(content.as_bytes())
            .map_err(|e| QuickdialError::Io {
                message: "write desktop file".to_string(),
                path: Some(path.to_path_buf()),
                source: Some(e),
            })?;

        // Make executable (required for desktop files to be trusted)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let metadata = fs::metadata(path).map_err(|e| QuickdialError::Io {
                message: "get file metadata".to_string(),
                path: Some(path.to_path_buf()),
                source: Some(e),
            })?;

            let mut permissions = metadata.permissions();
            permissions.set_mode(0o755);

            fs::set_permissions(path, permissions).map_err(|e| QuickdialError::Io {
                message: "set permissions".to_string(),
                path: Some(path.to_path_buf()),
                source: Some(e),
            })?;
        }

        debug!("Wrote desktop entry to {:?}", path);

        Ok(())
    }
}

/// Assemble an `Exec=` line from a binary path and its arguments.
///
/// The binary path is always quoted; arguments are quoted when they contain
/// whitespace, per the desktop-entry quoting rules.
pub fn exec_line(exec_path: &Path, args: &[String]) -> String {
    let mut line = format!("\"{}\"", exec_path.display());
    for arg in args {
        line.push(' ');
        if arg.chars().any(char::is_whitespace) {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}
