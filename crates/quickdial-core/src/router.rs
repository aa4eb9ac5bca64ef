//! Launch-signal routing.
//!
//! Inspects inbound launch signals for the shortcut identifier and updates
//! the selection store on an exact match. Runs on initial process start and
//! again for every signal forwarded to the running instance.

use std::sync::Arc;

use tracing::{debug, info};

use crate::shortcut::ShortcutKind;
use crate::signal::LaunchSignal;
use crate::store::SelectionStore;

/// Routes launch signals into the selection store.
pub struct LaunchRouter {
    store: Arc<SelectionStore>,
}

impl LaunchRouter {
    pub fn new(store: Arc<SelectionStore>) -> Self {
        Self { store }
    }

    /// Route a launch signal.
    ///
    /// Reads the shortcut identifier from the signal and matches it exactly
    /// (case-sensitive) against the known kinds. A match overwrites the
    /// selection and is returned; an absent signal, absent key, or
    /// unrecognized value leaves the selection untouched.
    pub fn route(&self, signal: Option<&LaunchSignal>) -> Option<ShortcutKind> {
        let Some(signal) = signal else {
            debug!("Launch without signal");
            return None;
        };

        let Some(value) = signal.shortcut_id() else {
            debug!("Launch signal carries no shortcut id");
            return None;
        };

        match ShortcutKind::from_launch_id(value) {
            Some(kind) => {
                self.store.select(kind);
                info!("Routed launch signal to {}", kind);
                Some(kind)
            }
            None => {
                debug!("Ignoring unrecognized shortcut id '{}'", value);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> (Arc<SelectionStore>, LaunchRouter) {
        let store = Arc::new(SelectionStore::new());
        let router = LaunchRouter::new(store.clone());
        (store, router)
    }

    #[test]
    fn test_absent_signal_leaves_selection() {
        let (store, router) = router();

        assert_eq!(router.route(None), None);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_signal_without_key_leaves_selection() {
        let (store, router) = router();
        let signal = LaunchSignal::new().with_extra("note", "hello");

        assert_eq!(router.route(Some(&signal)), None);
        assert_eq!(store.current(), None);
        assert_eq!(store.label(), "");
    }

    #[test]
    fn test_each_kind_routes_exactly() {
        for kind in ShortcutKind::ALL {
            let (store, router) = router();
            let signal = LaunchSignal::for_shortcut(kind.as_str());

            assert_eq!(router.route(Some(&signal)), Some(kind));
            assert_eq!(store.current(), Some(kind));
        }
    }

    #[test]
    fn test_unrecognized_value_preserves_selection() {
        let (store, router) = router();

        router.route(Some(&LaunchSignal::for_shortcut("Static")));
        assert_eq!(store.current(), Some(ShortcutKind::Static));

        assert_eq!(router.route(Some(&LaunchSignal::for_shortcut("Bogus"))), None);
        assert_eq!(store.current(), Some(ShortcutKind::Static));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let (store, router) = router();

        for id in ["dynamic", "DYNAMIC", "Pinned ", ""] {
            assert_eq!(router.route(Some(&LaunchSignal::for_shortcut(id))), None);
        }
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_later_route_overwrites() {
        let (store, router) = router();

        router.route(Some(&LaunchSignal::for_shortcut("Static")));
        router.route(Some(&LaunchSignal::for_shortcut("Dynamic")));

        assert_eq!(store.current(), Some(ShortcutKind::Dynamic));
        assert_eq!(store.label(), "Dynamic Shortcut Clicked");
    }

    #[tokio::test]
    async fn test_subscriber_observes_route() {
        let (store, router) = router();
        let mut watcher = store.subscribe();

        router.route(Some(&LaunchSignal::for_shortcut("Pinned")));

        assert!(watcher.changed().await);
        assert_eq!(watcher.current(), Some(ShortcutKind::Pinned));
    }
}
