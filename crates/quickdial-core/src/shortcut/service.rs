//! Launcher-surface service for shortcut registration.
//!
//! The `ShortcutService` trait is the seam between the registrar and the
//! host desktop. `DesktopShortcutService` materializes shortcuts as XDG
//! desktop entries; `UnsupportedShortcutService` stands in on hosts with no
//! launcher surface. Which implementation runs is decided once at startup
//! via [`DesktopShortcutService::detect`].

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ShortcutConfig;
use crate::error::{QuickdialError, Result};
use crate::platform;
use crate::shortcut::descriptor::ShortcutDescriptor;
use crate::shortcut::desktop_entry::DesktopEntry;
use crate::shortcut::kind::ShortcutKind;

/// Acknowledgment token for a pin request.
///
/// The token can be cloned and handed across tasks; when the pin lands the
/// service calls `confirm()` and all clones observe it.
#[derive(Debug, Clone)]
pub struct PinAcknowledgment {
    shortcut_id: String,
    confirmed: Arc<AtomicBool>,
}

impl PinAcknowledgment {
    /// Create an unconfirmed token for a shortcut identifier.
    pub fn new(shortcut_id: impl Into<String>) -> Self {
        Self {
            shortcut_id: shortcut_id.into(),
            confirmed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Identifier of the shortcut this pin request is for.
    pub fn shortcut_id(&self) -> &str {
        &self.shortcut_id
    }

    /// Mark the pin as landed.
    pub fn confirm(&self) {
        self.confirmed.store(true, Ordering::SeqCst);
    }

    /// Check whether the pin has landed.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed.load(Ordering::SeqCst)
    }
}

/// Pinning capability report for the active service.
#[derive(Debug, Clone, Serialize)]
pub struct ShortcutSupport {
    /// Whether the surface supports pinned shortcuts at all.
    pub supported: bool,
    /// Whether a pin request would currently reach the surface.
    pub pin_request_supported: bool,
    /// Name of the active service implementation.
    pub service: String,
}

/// Which shortcut entries are currently materialized on the surface.
#[derive(Debug, Clone, Serialize)]
pub struct ShortcutSurfaceState {
    /// A dynamic entry exists in the applications directory.
    pub dynamic: bool,
    /// A pinned entry exists on the desktop.
    pub pinned: bool,
}

/// Launcher-surface backend for shortcut registration.
///
/// Implementations decide how (and whether) shortcut descriptors become
/// visible launcher shortcuts.
pub trait ShortcutService: Send + Sync {
    /// Short name identifying the implementation.
    fn name(&self) -> &'static str;

    /// Whether the surface supports pinned shortcuts at all.
    fn supports_pinning(&self) -> bool;

    /// Whether a pin request would currently reach the surface.
    ///
    /// Distinct from [`supports_pinning`](Self::supports_pinning): a surface
    /// can support pinning in principle while the pin target is missing.
    fn pin_request_supported(&self) -> bool;

    /// Publish (or replace) the dynamic shortcut described by `descriptor`.
    fn push_dynamic(&self, descriptor: &ShortcutDescriptor) -> Result<()>;

    /// Create the acknowledgment token a pin request reports back through.
    fn pin_acknowledgment(&self, descriptor: &ShortcutDescriptor) -> PinAcknowledgment {
        PinAcknowledgment::new(descriptor.id.clone())
    }

    /// Ask the surface to pin the shortcut described by `descriptor`.
    ///
    /// The service confirms `ack` once the pin has landed.
    fn request_pin(&self, descriptor: &ShortcutDescriptor, ack: PinAcknowledgment) -> Result<()>;

    /// Whether an entry for `kind` is currently materialized.
    fn entry_exists(&self, kind: ShortcutKind) -> bool;
}

/// Shortcut service backed by XDG desktop entries.
///
/// Dynamic shortcuts land in the launcher applications directory; pinned
/// shortcuts land in the user's desktop directory. Generated entries launch
/// `exec` with the descriptor's launch arguments so activation delivers the
/// launch signal.
pub struct DesktopShortcutService {
    /// Launcher applications directory.
    apps_dir: PathBuf,
    /// Desktop directory, when the platform resolves one.
    desktop_dir: Option<PathBuf>,
    /// Binary the generated entries launch.
    exec: PathBuf,
}

impl DesktopShortcutService {
    /// Detect the launcher surface and pick the service for it.
    ///
    /// Falls back to [`UnsupportedShortcutService`] when no applications
    /// directory can be resolved on this host.
    pub fn detect(exec: PathBuf) -> Arc<dyn ShortcutService> {
        match platform::applications_dir() {
            Ok(apps_dir) => {
                let desktop_dir = platform::desktop_dir().ok();
                info!(
                    "Shortcut service: desktop (applications: {:?}, desktop: {:?})",
                    apps_dir, desktop_dir
                );
                Arc::new(Self {
                    apps_dir,
                    desktop_dir,
                    exec,
                })
            }
            Err(e) => {
                warn!("Shortcut service: unsupported ({})", e);
                Arc::new(UnsupportedShortcutService)
            }
        }
    }

    /// Create a service writing into explicit directories.
    pub fn with_dirs(
        apps_dir: impl AsRef<Path>,
        desktop_dir: Option<PathBuf>,
        exec: impl AsRef<Path>,
    ) -> Self {
        Self {
            apps_dir: apps_dir.as_ref().to_path_buf(),
            desktop_dir,
            exec: exec.as_ref().to_path_buf(),
        }
    }

    /// Entry filename for a shortcut kind.
    ///
    /// The static action ships inside the packaged main entry; generated
    /// entries use the prefix + kind naming.
    fn entry_filename(kind: ShortcutKind) -> String {
        match kind {
            ShortcutKind::Static => ShortcutConfig::APP_ENTRY_FILENAME.to_string(),
            _ => format!("{}{}.desktop", ShortcutConfig::FILE_PREFIX, kind.slug()),
        }
    }

    /// Path an entry of `kind` is written to, if the surface has one.
    pub fn entry_path(&self, kind: ShortcutKind) -> Option<PathBuf> {
        match kind {
            ShortcutKind::Pinned => self
                .desktop_dir
                .as_ref()
                .map(|dir| dir.join(Self::entry_filename(kind))),
            _ => Some(self.apps_dir.join(Self::entry_filename(kind))),
        }
    }
}

impl ShortcutService for DesktopShortcutService {
    fn name(&self) -> &'static str {
        "desktop"
    }

    fn supports_pinning(&self) -> bool {
        self.desktop_dir.is_some()
    }

    fn pin_request_supported(&self) -> bool {
        self.desktop_dir
            .as_ref()
            .map(|dir| dir.is_dir())
            .unwrap_or(false)
    }

    fn push_dynamic(&self, descriptor: &ShortcutDescriptor) -> Result<()> {
        descriptor.validate()?;

        let path = self
            .apps_dir
            .join(Self::entry_filename(ShortcutKind::Dynamic));
        let entry = DesktopEntry::from_descriptor(descriptor, &self.exec);
        entry.write_to_file(&path)?;

        info!("Published dynamic shortcut '{}' at {:?}", descriptor.id, path);
        Ok(())
    }

    fn request_pin(&self, descriptor: &ShortcutDescriptor, ack: PinAcknowledgment) -> Result<()> {
        descriptor.validate()?;

        let Some(desktop_dir) = self.desktop_dir.as_ref() else {
            return Err(QuickdialError::SurfaceUnavailable {
                surface: "desktop directory".to_string(),
            });
        };

        let path = desktop_dir.join(Self::entry_filename(ShortcutKind::Pinned));
        let entry = DesktopEntry::from_descriptor(descriptor, &self.exec);
        entry.write_to_file(&path)?;

        ack.confirm();
        info!("Pinned shortcut '{}' at {:?}", descriptor.id, path);
        Ok(())
    }

    fn entry_exists(&self, kind: ShortcutKind) -> bool {
        self.entry_path(kind).map(|p| p.exists()).unwrap_or(false)
    }
}

/// Stand-in service for hosts with no launcher surface.
///
/// All capability queries answer false. Publishing a dynamic shortcut
/// degrades to a logged no-op; pin requests fail with `SurfaceUnavailable`.
pub struct UnsupportedShortcutService;

impl ShortcutService for UnsupportedShortcutService {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn supports_pinning(&self) -> bool {
        false
    }

    fn pin_request_supported(&self) -> bool {
        false
    }

    fn push_dynamic(&self, descriptor: &ShortcutDescriptor) -> Result<()> {
        descriptor.validate()?;
        debug!(
            "No launcher surface; dynamic shortcut '{}' not materialized",
            descriptor.id
        );
        Ok(())
    }

    fn request_pin(&self, descriptor: &ShortcutDescriptor, _ack: PinAcknowledgment) -> Result<()> {
        debug!("Pin request for '{}' on unsupported surface", descriptor.id);
        Err(QuickdialError::SurfaceUnavailable {
            surface: "desktop directory".to_string(),
        })
    }

    fn entry_exists(&self, _kind: ShortcutKind) -> bool {
        false
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Service double that records calls instead of touching the filesystem.
    pub(crate) struct RecordingShortcutService {
        pub pushed: Mutex<Vec<ShortcutDescriptor>>,
        pub pin_requests: Mutex<Vec<(ShortcutDescriptor, PinAcknowledgment)>>,
        pub supports_pinning: bool,
        pub pin_request_supported: bool,
    }

    impl RecordingShortcutService {
        pub fn new() -> Self {
            Self::with_support(true, true)
        }

        pub fn with_support(supports_pinning: bool, pin_request_supported: bool) -> Self {
            Self {
                pushed: Mutex::new(Vec::new()),
                pin_requests: Mutex::new(Vec::new()),
                supports_pinning,
                pin_request_supported,
            }
        }

        pub fn pushed_ids(&self) -> Vec<String> {
            self.pushed
                .lock()
                .unwrap()
                .iter()
                .map(|d| d.id.clone())
                .collect()
        }

        pub fn pin_request_ids(&self) -> Vec<String> {
            self.pin_requests
                .lock()
                .unwrap()
                .iter()
                .map(|(d, _)| d.id.clone())
                .collect()
        }
    }

    impl ShortcutService for RecordingShortcutService {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn supports_pinning(&self) -> bool {
            self.supports_pinning
        }

        fn pin_request_supported(&self) -> bool {
            self.pin_request_supported
        }

        fn push_dynamic(&self, descriptor: &ShortcutDescriptor) -> Result<()> {
            self.pushed.lock().unwrap().push(descriptor.clone());
            Ok(())
        }

        fn request_pin(
            &self,
            descriptor: &ShortcutDescriptor,
            ack: PinAcknowledgment,
        ) -> Result<()> {
            self.pin_requests
                .lock()
                .unwrap()
                .push((descriptor.clone(), ack));
            Ok(())
        }

        fn entry_exists(&self, _kind: ShortcutKind) -> bool {
            false
        }
    }
}
