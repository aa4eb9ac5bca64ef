//! Platform abstraction layer for cross-platform compatibility.
//!
//! This module centralizes all platform-specific code so that `#[cfg]`
//! blocks for OS-specific behavior live here rather than scattered through
//! the codebase.
//!
//! # Architecture
//!
//! - `paths` - Platform-specific directory and file paths
//! - `process` - Process liveness probing for instance coordination
//!
//! # Supported Platforms
//!
//! - **Linux**: Full support (XDG desktop entries)
//! - **Windows/macOS**: Path resolution works; the shortcut surfaces report
//!   themselves unsupported and registration degrades to a no-op

pub mod paths;
pub mod process;

// Re-export commonly used items
pub use paths::{app_config_dir, applications_dir, command_exists, desktop_dir, icon_scalable_dir};
pub use process::is_process_alive;

/// Returns the current platform name.
pub fn current_platform() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "linux"
    }
    #[cfg(target_os = "windows")]
    {
        "windows"
    }
    #[cfg(target_os = "macos")]
    {
        "macos"
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        "unknown"
    }
}
