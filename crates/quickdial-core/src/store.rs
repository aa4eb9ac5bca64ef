//! Observable selection state.
//!
//! Holds which shortcut the application was most recently launched through.
//! The cell starts empty on process start, is overwritten on every routed
//! launch (last write wins), and is only written from the routing path.
//! Observers subscribe through a `tokio::sync::watch` channel.

use tokio::sync::watch;
use tracing::debug;

use crate::shortcut::ShortcutKind;

/// State container for the current shortcut selection.
pub struct SelectionStore {
    tx: watch::Sender<Option<ShortcutKind>>,
}

impl SelectionStore {
    /// Create a store with no selection.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// The currently selected shortcut kind, if any.
    pub fn current(&self) -> Option<ShortcutKind> {
        *self.tx.borrow()
    }

    /// Presentation label for the current selection.
    ///
    /// Empty string when nothing has been selected.
    pub fn label(&self) -> &'static str {
        self.current().map(|kind| kind.label()).unwrap_or("")
    }

    /// Overwrite the selection. Routing-path only.
    pub(crate) fn select(&self, kind: ShortcutKind) {
        debug!("Selection set to {}", kind);
        self.tx.send_replace(Some(kind));
    }

    /// Subscribe to selection changes.
    ///
    /// The watcher sees the value current at subscription time and can await
    /// subsequent changes.
    pub fn subscribe(&self) -> SelectionWatcher {
        SelectionWatcher {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of a selection subscription.
pub struct SelectionWatcher {
    rx: watch::Receiver<Option<ShortcutKind>>,
}

impl SelectionWatcher {
    /// The latest selection the store holds.
    pub fn current(&self) -> Option<ShortcutKind> {
        *self.rx.borrow()
    }

    /// Wait for the next selection change.
    ///
    /// Returns false if the store was dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
