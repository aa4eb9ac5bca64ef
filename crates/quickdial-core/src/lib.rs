//! Quickdial Shortcuts - Headless library for launcher shortcuts and launch routing.
//!
//! This crate provides the core functionality of the Quickdial demo backend:
//! registering launcher shortcuts (dynamic and pinned), routing inbound
//! launch signals, and exposing the resulting selection as observable state.
//! It can be used programmatically without any HTTP/RPC layer.
//!
//! For the JSON-RPC server binary a presentation shell talks to, see the
//! `quickdial-rpc` crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickdial_shortcuts::{LaunchSignal, QuickdialApi};
//!
//! fn main() -> quickdial_shortcuts::Result<()> {
//!     let api = QuickdialApi::new()?;
//!
//!     // Publish the launcher shortcuts
//!     api.register_dynamic();
//!     api.register_pinned();
//!
//!     // Route the signal this process was launched with
//!     let signal = LaunchSignal::for_shortcut("Dynamic");
//!     api.handle_launch(Some(&signal));
//!     assert_eq!(api.selection_label(), "Dynamic Shortcut Clicked");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod instance;
pub mod platform;
pub mod router;
pub mod shortcut;
pub mod signal;
pub mod store;

// Re-export commonly used types
pub use error::{QuickdialError, Result};
pub use router::LaunchRouter;
pub use shortcut::{
    DesktopShortcutService, IconInstaller, IconRef, PinAcknowledgment, RegistrationOutcome,
    ShortcutDescriptor, ShortcutDescriptorBuilder, ShortcutKind, ShortcutRegistrar,
    ShortcutService, ShortcutSupport, ShortcutSurfaceState, UnsupportedShortcutService,
};
pub use signal::LaunchSignal;
pub use store::{SelectionStore, SelectionWatcher};

use std::sync::Arc;

/// Main API struct for Quickdial operations.
///
/// Primary entry point for programmatic access. Wires the detected shortcut
/// service, the registrar, the selection store, and the launch router
/// together; the RPC layer is a thin veneer over this type.
pub struct QuickdialApi {
    service: Arc<dyn ShortcutService>,
    registrar: ShortcutRegistrar,
    store: Arc<SelectionStore>,
    router: LaunchRouter,
}

impl QuickdialApi {
    /// Create an API instance with the service detected for this host.
    ///
    /// Generated shortcut entries relaunch the current executable.
    pub fn new() -> Result<Self> {
        let exec = std::env::current_exe().map_err(|e| QuickdialError::Io {
            message: "resolve current executable".to_string(),
            path: None,
            source: Some(e),
        })?;
        Ok(Self::with_service(DesktopShortcutService::detect(exec)))
    }

    /// Create an API instance around an explicit shortcut service.
    pub fn with_service(service: Arc<dyn ShortcutService>) -> Self {
        let store = Arc::new(SelectionStore::new());
        Self {
            registrar: ShortcutRegistrar::new(service.clone()),
            router: LaunchRouter::new(store.clone()),
            service,
            store,
        }
    }

    /// Register the dynamic shortcut.
    pub fn register_dynamic(&self) -> RegistrationOutcome {
        self.registrar.register_dynamic()
    }

    /// Request pinning of the pinned shortcut.
    pub fn register_pinned(&self) -> RegistrationOutcome {
        self.registrar.register_pinned()
    }

    /// Route an inbound launch signal.
    ///
    /// Called with the process's own startup signal and again for every
    /// signal forwarded from a secondary invocation.
    pub fn handle_launch(&self, signal: Option<&LaunchSignal>) -> Option<ShortcutKind> {
        self.router.route(signal)
    }

    /// The currently selected shortcut kind, if any.
    pub fn selection(&self) -> Option<ShortcutKind> {
        self.store.current()
    }

    /// Presentation label for the current selection.
    pub fn selection_label(&self) -> &'static str {
        self.store.label()
    }

    /// Subscribe to selection changes.
    pub fn subscribe_selection(&self) -> SelectionWatcher {
        self.store.subscribe()
    }

    /// Capability report of the active service.
    pub fn shortcut_support(&self) -> ShortcutSupport {
        ShortcutSupport {
            supported: self.service.supports_pinning(),
            pin_request_supported: self.service.pin_request_supported(),
            service: self.service.name().to_string(),
        }
    }

    /// Which shortcut entries are currently materialized.
    pub fn shortcut_state(&self) -> ShortcutSurfaceState {
        ShortcutSurfaceState {
            dynamic: self.service.entry_exists(ShortcutKind::Dynamic),
            pinned: self.service.entry_exists(ShortcutKind::Pinned),
        }
    }

    /// The active shortcut service.
    pub fn service(&self) -> &Arc<dyn ShortcutService> {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcut::testing::RecordingShortcutService;

    #[test]
    fn test_launch_to_label_loop() {
        let api = QuickdialApi::with_service(Arc::new(RecordingShortcutService::new()));

        assert_eq!(api.selection(), None);
        assert_eq!(api.selection_label(), "");

        let signal = LaunchSignal::for_shortcut("Dynamic");
        assert_eq!(api.handle_launch(Some(&signal)), Some(ShortcutKind::Dynamic));
        assert_eq!(api.selection(), Some(ShortcutKind::Dynamic));
        assert_eq!(api.selection_label(), "Dynamic Shortcut Clicked");
    }

    #[test]
    fn test_signal_without_key_leaves_label_empty() {
        let api = QuickdialApi::with_service(Arc::new(RecordingShortcutService::new()));
        let signal = LaunchSignal::new().with_extra("note", "hello");

        assert_eq!(api.handle_launch(Some(&signal)), None);
        assert_eq!(api.selection_label(), "");
    }

    #[test]
    fn test_registration_goes_through_service() {
        let service = Arc::new(RecordingShortcutService::new());
        let api = QuickdialApi::with_service(service.clone());

        assert!(api.register_dynamic().registered());
        assert!(api.register_pinned().registered());

        assert_eq!(service.pushed_ids(), vec!["Dynamic"]);
        assert_eq!(service.pin_request_ids(), vec!["Pinned"]);
    }

    #[test]
    fn test_support_report_reflects_service() {
        let api = QuickdialApi::with_service(Arc::new(RecordingShortcutService::with_support(
            true, false,
        )));

        let support = api.shortcut_support();
        assert!(support.supported);
        assert!(!support.pin_request_supported);
        assert_eq!(support.service, "recording");

        let state = api.shortcut_state();
        assert!(!state.dynamic);
        assert!(!state.pinned);
    }

    #[tokio::test]
    async fn test_subscription_through_facade() {
        let api = QuickdialApi::with_service(Arc::new(RecordingShortcutService::new()));
        let mut watcher = api.subscribe_selection();

        api.handle_launch(Some(&LaunchSignal::for_shortcut("Static")));

        assert!(watcher.changed().await);
        assert_eq!(watcher.current(), Some(ShortcutKind::Static));
    }
}
