//! The closed set of shortcut kinds.

use serde::{Deserialize, Serialize};

/// Shortcut kinds the launcher integration deals in.
///
/// `Static` entries are declared in the packaged desktop-entry configuration
/// and never authored at runtime; `Dynamic` and `Pinned` are registered
/// through [`ShortcutRegistrar`](crate::ShortcutRegistrar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortcutKind {
    Static,
    Dynamic,
    Pinned,
}

impl ShortcutKind {
    /// All kinds, in declaration order.
    pub const ALL: [ShortcutKind; 3] = [
        ShortcutKind::Static,
        ShortcutKind::Dynamic,
        ShortcutKind::Pinned,
    ];

    /// The launch-signal identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShortcutKind::Static => "Static",
            ShortcutKind::Dynamic => "Dynamic",
            ShortcutKind::Pinned => "Pinned",
        }
    }

    /// Parse a launch-signal identifier.
    ///
    /// Matching is exact and case-sensitive: `"dynamic"` and `"DYNAMIC"` do
    /// not name a kind.
    pub fn from_launch_id(s: &str) -> Option<Self> {
        match s {
            "Static" => Some(ShortcutKind::Static),
            "Dynamic" => Some(ShortcutKind::Dynamic),
            "Pinned" => Some(ShortcutKind::Pinned),
            _ => None,
        }
    }

    /// The presentation label shown when this kind launched the app.
    pub fn label(&self) -> &'static str {
        match self {
            ShortcutKind::Static => "Static Shortcut Clicked",
            ShortcutKind::Dynamic => "Dynamic Shortcut Clicked",
            ShortcutKind::Pinned => "Pinned Shortcut Clicked",
        }
    }

    /// Lowercase filename slug for entries this library writes.
    pub fn slug(&self) -> &'static str {
        match self {
            ShortcutKind::Static => "static",
            ShortcutKind::Dynamic => "dynamic",
            ShortcutKind::Pinned => "pinned",
        }
    }
}

impl std::fmt::Display for ShortcutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        for kind in ShortcutKind::ALL {
            let s = kind.as_str();
            let parsed = ShortcutKind::from_launch_id(s).expect("Should parse");
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(ShortcutKind::from_launch_id("dynamic"), None);
        assert_eq!(ShortcutKind::from_launch_id("DYNAMIC"), None);
        assert_eq!(ShortcutKind::from_launch_id("pinned "), None);
        assert_eq!(ShortcutKind::from_launch_id(""), None);
    }

    #[test]
    fn test_label_mapping() {
        assert_eq!(ShortcutKind::Static.label(), "Static Shortcut Clicked");
        assert_eq!(ShortcutKind::Dynamic.label(), "Dynamic Shortcut Clicked");
        assert_eq!(ShortcutKind::Pinned.label(), "Pinned Shortcut Clicked");
    }

    #[test]
    fn test_serde_uses_launch_identifiers() {
        let json = serde_json::to_string(&ShortcutKind::Dynamic).unwrap();
        assert_eq!(json, "\"Dynamic\"");
        let back: ShortcutKind = serde_json::from_str("\"Pinned\"").unwrap();
        assert_eq!(back, ShortcutKind::Pinned);
    }
}
