//! Launcher shortcut management.
//!
//! Provides functionality for registering the application's shortcuts with
//! the desktop launcher:
//! - Dynamic shortcuts (.desktop entries in ~/.local/share/applications)
//! - Pinned shortcuts (.desktop entries on ~/Desktop, capability-gated)
//! - Icon installation into the hicolor theme
//!
//! # Platform Support
//!
//! Linux desktops via the XDG Desktop Entry Specification. Hosts without a
//! launcher surface degrade to [`UnsupportedShortcutService`].
//!
//! # Example
//!
//! ```rust,ignore
//! use quickdial_shortcuts::shortcut::{DesktopShortcutService, ShortcutRegistrar};
//!
//! let exec = std::env::current_exe()?;
//! let service = DesktopShortcutService::detect(exec);
//! let registrar = ShortcutRegistrar::new(service);
//!
//! registrar.register_dynamic();
//! registrar.register_pinned();
//! ```

mod descriptor;
mod desktop_entry;
mod icon;
mod kind;
mod registrar;
mod service;

pub use descriptor::{IconRef, ShortcutDescriptor, ShortcutDescriptorBuilder};
pub use desktop_entry::DesktopEntry;
pub use icon::IconInstaller;
pub use kind::ShortcutKind;
pub use registrar::{RegistrationOutcome, ShortcutRegistrar};
pub use service::{
    DesktopShortcutService, PinAcknowledgment, ShortcutService, ShortcutSupport,
    ShortcutSurfaceState, UnsupportedShortcutService,
};

#[cfg(test)]
pub(crate) use service::testing;
