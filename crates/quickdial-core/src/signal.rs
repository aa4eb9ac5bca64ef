//! Launch signals.
//!
//! A launch signal is the key/value payload delivered to the application
//! when it is started or re-activated. Shortcut activations put the shortcut
//! identifier under [`ShortcutConfig::SHORTCUT_ID_KEY`]; anything else in
//! the bag is carried but not interpreted here.
//!
//! Signals originate from two places: the process's own command line
//! (`--shortcut-id`/`--extra key=value`) and forwarded deliveries from a
//! secondary invocation to the running primary, which is why the type is
//! serde-serializable.

use crate::config::ShortcutConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key/value payload delivered on application start or re-activation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchSignal {
    /// String extras carried by the signal.
    #[serde(default)]
    pub extras: BTreeMap<String, String>,
}

impl LaunchSignal {
    /// Create an empty signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a signal from an existing extras map.
    pub fn from_extras(extras: BTreeMap<String, String>) -> Self {
        Self { extras }
    }

    /// Create a signal carrying only a shortcut identifier.
    pub fn for_shortcut(id: impl Into<String>) -> Self {
        Self::new().with_extra(ShortcutConfig::SHORTCUT_ID_KEY, id)
    }

    /// Add an extra, returning the signal for chaining.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Look up an extra by key.
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }

    /// The value under the shortcut-identifier key, if any.
    pub fn shortcut_id(&self) -> Option<&str> {
        self.extra(ShortcutConfig::SHORTCUT_ID_KEY)
    }

    /// Whether the signal carries no extras at all.
    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }

    /// Parse `key=value` pairs as passed via repeated `--extra` arguments.
    ///
    /// Pairs without a `=` are ignored; later duplicates overwrite earlier
    /// ones. An empty iterator yields an empty signal.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut signal = Self::new();
        for pair in pairs {
            if let Some((key, value)) = pair.as_ref().split_once('=') {
                if !key.is_empty() {
                    signal.extras.insert(key.to_string(), value.to_string());
                }
            }
        }
        signal
    }
}
