//! Shortcut registration.
//!
//! The registrar owns the two registration paths: the dynamic shortcut
//! (compatibility path, attempted on every surface) and the pinned shortcut
//! (native path, double-gated on surface capabilities). Registration
//! failures are absorbed and logged, never propagated.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::ShortcutConfig;
use crate::shortcut::descriptor::ShortcutDescriptor;
use crate::shortcut::kind::ShortcutKind;
use crate::shortcut::service::ShortcutService;

/// Outcome of a registration attempt.
///
/// Callers are free to ignore this; failures never propagate as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The shortcut was handed to the launcher surface.
    Registered,
    /// The surface does not support this shortcut path right now.
    Unsupported,
    /// The surface rejected the shortcut; details were logged.
    Failed,
}

impl RegistrationOutcome {
    /// Whether the shortcut reached the surface.
    pub fn registered(&self) -> bool {
        matches!(self, Self::Registered)
    }

    /// Status string for RPC payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Unsupported => "unsupported",
            Self::Failed => "failed",
        }
    }
}

/// Registers the application's shortcuts with the launcher surface.
pub struct ShortcutRegistrar {
    service: Arc<dyn ShortcutService>,
}

impl ShortcutRegistrar {
    pub fn new(service: Arc<dyn ShortcutService>) -> Self {
        Self { service }
    }

    /// Register the dynamic "Call Mom" shortcut.
    ///
    /// The compatibility path: attempted unconditionally, with failures
    /// absorbed and logged.
    pub fn register_dynamic(&self) -> RegistrationOutcome {
        let descriptor = dynamic_descriptor();

        match self.service.push_dynamic(&descriptor) {
            Ok(()) => {
                info!("Registered dynamic shortcut '{}'", descriptor.id);
                RegistrationOutcome::Registered
            }
            Err(e) => {
                warn!("Failed to register dynamic shortcut: {}", e);
                RegistrationOutcome::Failed
            }
        }
    }

    /// Request pinning of the "Send Message" shortcut.
    ///
    /// Double-gated: first on whether the surface supports pinning at all,
    /// then on whether a pin request can currently land. When either gate
    /// fails, no descriptor is built and nothing is submitted. The pin
    /// confirmation is fire-and-forget.
    pub fn register_pinned(&self) -> RegistrationOutcome {
        if !self.service.supports_pinning() {
            debug!("Pinned shortcuts not supported on this surface");
            return RegistrationOutcome::Unsupported;
        }

        if !self.service.pin_request_supported() {
            debug!("Pin requests cannot currently reach the surface");
            return RegistrationOutcome::Unsupported;
        }

        let descriptor = pinned_descriptor();
        let ack = self.service.pin_acknowledgment(&descriptor);

        match self.service.request_pin(&descriptor, ack) {
            Ok(()) => {
                info!("Requested pin for shortcut '{}'", descriptor.id);
                RegistrationOutcome::Registered
            }
            Err(e) => {
                warn!("Failed to request pinned shortcut: {}", e);
                RegistrationOutcome::Failed
            }
        }
    }
}

/// Descriptor for the dynamic shortcut.
pub(crate) fn dynamic_descriptor() -> ShortcutDescriptor {
    let id = ShortcutKind::Dynamic.as_str();
    ShortcutDescriptor::builder()
        .id(id)
        .short_label(ShortcutConfig::DYNAMIC_SHORT_LABEL)
        .long_label(ShortcutConfig::DYNAMIC_LONG_LABEL)
        .extra(ShortcutConfig::SHORTCUT_ID_KEY, id)
        .build()
}

/// Descriptor for the pinned shortcut.
pub(crate) fn pinned_descriptor() -> ShortcutDescriptor {
    let id = ShortcutKind::Pinned.as_str();
    ShortcutDescriptor::builder()
        .id(id)
        .short_label(ShortcutConfig::PINNED_SHORT_LABEL)
        .long_label(ShortcutConfig::PINNED_LONG_LABEL)
        .extra(ShortcutConfig::SHORTCUT_ID_KEY, id)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{QuickdialError, Result};
    use crate::shortcut::service::testing::RecordingShortcutService;
    use crate::shortcut::service::PinAcknowledgment;

    struct FailingService;

    impl ShortcutService for FailingService {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn supports_pinning(&self) -> bool {
            true
        }

        fn pin_request_supported(&self) -> bool {
            true
        }

        fn push_dynamic(&self, _descriptor: &ShortcutDescriptor) -> Result<()> {
            Err(QuickdialError::Other("surface rejected entry".to_string()))
        }

        fn request_pin(
            &self,
            _descriptor: &ShortcutDescriptor,
            _ack: PinAcknowledgment,
        ) -> Result<()> {
            Err(QuickdialError::Other("surface rejected pin".to_string()))
        }

        fn entry_exists(&self, _kind: ShortcutKind) -> bool {
            false
        }
    }

    #[test]
    fn test_register_dynamic_submits_once() {
        let service = Arc::new(RecordingShortcutService::new());
        let registrar = ShortcutRegistrar::new(service.clone());

        let outcome = registrar.register_dynamic();

        assert!(outcome.registered());
        assert_eq!(service.pushed_ids(), vec!["Dynamic"]);

        let pushed = service.pushed.lock().unwrap();
        assert_eq!(pushed[0].short_label, "Call Mom");
        assert_eq!(
            pushed[0].long_label.as_deref(),
            Some("Clicking this will call your mom")
        );
        assert_eq!(
            pushed[0].extras.get("shortcut_id").map(String::as_str),
            Some("Dynamic")
        );
    }

    #[test]
    fn test_register_pinned_submits_descriptor_and_ack() {
        let service = Arc::new(RecordingShortcutService::new());
        let registrar = ShortcutRegistrar::new(service.clone());

        let outcome = registrar.register_pinned();

        assert!(outcome.registered());
        assert_eq!(service.pin_request_ids(), vec!["Pinned"]);

        let requests = service.pin_requests.lock().unwrap();
        let (descriptor, ack) = &requests[0];
        assert_eq!(descriptor.short_label, "Send Message");
        assert_eq!(
            descriptor.long_label.as_deref(),
            Some("This sends a message to a friend")
        );
        assert_eq!(ack.shortcut_id(), "Pinned");
        // The recording double never completes the pin
        assert!(!ack.is_confirmed());
    }

    #[test]
    fn test_register_pinned_no_support_makes_zero_calls() {
        let service = Arc::new(RecordingShortcutService::with_support(false, false));
        let registrar = ShortcutRegistrar::new(service.clone());

        let outcome = registrar.register_pinned();

        assert_eq!(outcome, RegistrationOutcome::Unsupported);
        assert!(service.pin_requests.lock().unwrap().is_empty());
        assert!(service.pushed.lock().unwrap().is_empty());
    }

    #[test]
    fn test_register_pinned_gated_on_pin_request_support() {
        let service = Arc::new(RecordingShortcutService::with_support(true, false));
        let registrar = ShortcutRegistrar::new(service.clone());

        let outcome = registrar.register_pinned();

        assert_eq!(outcome, RegistrationOutcome::Unsupported);
        assert!(service.pin_requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_failures_are_absorbed() {
        let registrar = ShortcutRegistrar::new(Arc::new(FailingService));

        assert_eq!(registrar.register_dynamic(), RegistrationOutcome::Failed);
        assert_eq!(registrar.register_pinned(), RegistrationOutcome::Failed);
    }

    #[test]
    fn test_outcome_status_strings() {
        assert_eq!(RegistrationOutcome::Registered.as_str(), "registered");
        assert_eq!(RegistrationOutcome::Unsupported.as_str(), "unsupported");
        assert!(!RegistrationOutcome::Failed.registered());
    }
}
