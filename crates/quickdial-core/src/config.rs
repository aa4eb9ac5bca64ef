//! Centralized configuration for Quickdial.
//!
//! This module provides the fixed strings and timing parameters the rest of
//! the library relies on: the launch-signal contract, the shortcut label
//! text, and single-instance coordination settings.

use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Quickdial";
    pub const APP_COMMENT: &'static str = "Messaging demo with launcher shortcuts";
    /// Icon theme name used by generated desktop entries.
    pub const ICON_NAME: &'static str = "quickdial";
    /// StartupWMClass for window matching in the main desktop entry.
    pub const WM_CLASS: &'static str = "Quickdial";
}

/// Launch-signal contract and fixed shortcut content.
pub struct ShortcutConfig;

impl ShortcutConfig {
    /// Key under which a launch signal carries the shortcut identifier.
    pub const SHORTCUT_ID_KEY: &'static str = "shortcut_id";

    // Dynamic shortcut (compatibility path)
    pub const DYNAMIC_SHORT_LABEL: &'static str = "Call Mom";
    pub const DYNAMIC_LONG_LABEL: &'static str = "Clicking this will call your mom";

    // Pinned shortcut (native path, capability-gated)
    pub const PINNED_SHORT_LABEL: &'static str = "Send Message";
    pub const PINNED_LONG_LABEL: &'static str = "This sends a message to a friend";

    /// Filename prefix for desktop entries this library writes.
    pub const FILE_PREFIX: &'static str = "quickdial-";
    /// Filename of the packaged main entry (carries the static action).
    pub const APP_ENTRY_FILENAME: &'static str = "quickdial.desktop";
}

/// Single-instance coordination.
pub struct InstanceConfig;

impl InstanceConfig {
    /// Per-user config directory name under the platform config root.
    pub const CONFIG_DIR_NAME: &'static str = "quickdial";
    /// Instance record filename inside the config directory.
    pub const INSTANCE_FILENAME: &'static str = "instance.json";
    /// How long a secondary process waits when forwarding its launch signal.
    pub const FORWARD_TIMEOUT: Duration = Duration::from_secs(3);
}

/// Network defaults for the RPC surface.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
}
