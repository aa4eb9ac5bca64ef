//! Shortcut descriptors.
//!
//! A descriptor bundles everything the platform needs to materialize one
//! launcher entry: identifier, labels, icon and the launch extras delivered
//! back to the application on activation. Descriptors are built at the
//! moment of a registration request and handed to the platform service;
//! the application keeps no reference afterwards.

use crate::config::{AppConfig, ShortcutConfig};
use crate::error::{QuickdialError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Opaque image reference attached to a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconRef {
    /// Icon name resolved through the platform icon theme.
    Named(String),
    /// Direct path to an image file.
    Path(PathBuf),
}

impl IconRef {
    /// The value placed in a desktop entry's `Icon=` field.
    pub fn entry_value(&self) -> String {
        match self {
            IconRef::Named(name) => name.clone(),
            IconRef::Path(path) => path.display().to_string(),
        }
    }
}

impl Default for IconRef {
    fn default() -> Self {
        IconRef::Named(AppConfig::ICON_NAME.to_string())
    }
}

/// A shortcut descriptor ready for platform registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutDescriptor {
    /// Platform-scoped identifier, unique per registration.
    pub id: String,
    /// Short label shown on the launcher entry.
    pub short_label: String,
    /// Longer description, shown where the launcher has room.
    pub long_label: Option<String>,
    /// Icon reference.
    pub icon: IconRef,
    /// Launch extras delivered back to the application on activation.
    pub extras: BTreeMap<String, String>,
}

impl ShortcutDescriptor {
    /// Create a new descriptor builder.
    pub fn builder() -> ShortcutDescriptorBuilder {
        ShortcutDescriptorBuilder::new()
    }

    /// Check the identifier invariant.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(QuickdialError::Validation {
                field: "id".to_string(),
                message: "shortcut identifier must be non-empty".to_string(),
            });
        }
        Ok(())
    }

    /// Command-line arguments that reproduce this descriptor's launch
    /// extras when the entry is activated.
    ///
    /// The shortcut identifier gets the dedicated `--shortcut-id` flag; any
    /// other extras ride along as `--extra key=value`.
    pub fn launch_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(id) = self.extras.get(ShortcutConfig::SHORTCUT_ID_KEY) {
            args.push("--shortcut-id".to_string());
            args.push(id.clone());
        }
        for (key, value) in &self.extras {
            if key == ShortcutConfig::SHORTCUT_ID_KEY {
                continue;
            }
            args.push("--extra".to_string());
            args.push(format!("{}={}", key, value));
        }
        args
    }
}

/// Builder for shortcut descriptors.
pub struct ShortcutDescriptorBuilder {
    descriptor: ShortcutDescriptor,
}

impl ShortcutDescriptorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            descriptor: ShortcutDescriptor {
                id: String::new(),
                short_label: String::new(),
                long_label: None,
                icon: IconRef::default(),
                extras: BTreeMap::new(),
            },
        }
    }

    /// Set the identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.descriptor.id = id.into();
        self
    }

    /// Set the short label.
    pub fn short_label(mut self, label: impl Into<String>) -> Self {
        self.descriptor.short_label = label.into();
        self
    }

    /// Set the long label.
    pub fn long_label(mut self, label: impl Into<String>) -> Self {
        self.descriptor.long_label = Some(label.into());
        self
    }

    /// Set the icon reference.
    pub fn icon(mut self, icon: IconRef) -> Self {
        self.descriptor.icon = icon;
        self
    }

    /// Add a launch extra.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.descriptor.extras.insert(key.into(), value.into());
        self
    }

    /// Build the descriptor.
    pub fn build(self) -> ShortcutDescriptor {
        self.descriptor
    }
}

impl Default for ShortcutDescriptorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
