//! Core types exchanged between console plugins and the host kernel.
//!
//! All tap functions use full-serialization (JSON in, JSON out).

use serde::{Deserialize, Serialize};

/// Menu route definition returned by `tap_menu`.
///
/// The host registers one route per definition and shows it in the admin
/// navigation under `group` when `title` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDefinition {
    pub path: String,
    pub title: String,
    /// Route name used for host-side navigation lookups.
    #[serde(default)]
    pub name: String,
    /// View callback resolved by the host through `tap_view` on first visit.
    pub callback: String,
    pub permission: String,
    pub parent: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub weight: i32,
}

impl MenuDefinition {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            name: String::new(),
            callback: String::new(),
            permission: "access content".into(),
            parent: None,
            group: None,
            icon: None,
            weight: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = callback.into();
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = permission.into();
        self
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }
}

/// Permission definition returned by `tap_perm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDefinition {
    pub name: String,
    pub description: String,
}

impl PermissionDefinition {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Input for `tap_view`: the callback name of the route being visited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewInput {
    pub callback: String,
}

/// Log levels for structured logging from plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Level name as understood by the host logging import.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn menu_defaults_to_access_content() {
        let menu = MenuDefinition::new("/x", "X");
        assert_eq!(menu.permission, "access content");
        assert!(menu.parent.is_none());
        assert_eq!(menu.weight, 0);
    }

    #[test]
    fn menu_deserializes_without_optional_fields() {
        let json = r#"{"path":"/a","title":"A","callback":"a_view","permission":"p","parent":null}"#;
        let menu: MenuDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(menu.callback, "a_view");
        assert!(menu.group.is_none());
        assert!(menu.name.is_empty());
    }

    #[test]
    fn log_level_serializes_lowercase() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        assert_eq!(LogLevel::Error.as_str(), "error");
    }
}
