//! Plugin descriptor returned by `tap_plugin`.
//!
//! A descriptor is the whole registration surface of a console plugin: a
//! (usually empty) component map and the routes the plugin mounts into the
//! admin shell. The host reads it once at startup; nothing in it changes
//! afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::types::MenuDefinition;

/// Route name of the admin shell's top-level layout.
pub const ROOT_ROUTE: &str = "Root";

/// Registration record handed to the host loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    /// Globally registered components, keyed by tag name.
    #[serde(default)]
    pub components: BTreeMap<String, String>,
    #[serde(default)]
    pub routes: Vec<RouteDefinition>,
}

impl PluginDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, route: RouteDefinition) -> Self {
        self.routes.push(route);
        self
    }

    /// Flatten the routes into the host's menu table.
    ///
    /// The host gates a menu on a single permission, so only the first
    /// permission of each route is carried over. Routes without permissions
    /// are public.
    pub fn menu_definitions(&self) -> Vec<MenuDefinition> {
        self.routes
            .iter()
            .map(|route| {
                let title = route.meta.menu.as_ref().map(|m| m.name.as_str()).unwrap_or("");
                let mut menu = MenuDefinition::new(route.path.as_str(), title)
                    .name(route.name.as_str())
                    .callback(route.view.as_str())
                    .permission(route.meta.permissions.first().map(String::as_str).unwrap_or(""));

                if let Some(parent) = route.parent_name.as_deref().filter(|p| *p != ROOT_ROUTE) {
                    menu = menu.parent(parent);
                }
                if let Some(entry) = &route.meta.menu {
                    menu = menu
                        .group(entry.group.as_str())
                        .icon(entry.icon.as_str())
                        .weight(entry.weight);
                }
                menu
            })
            .collect()
    }
}

/// A single route mounted into the admin shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDefinition {
    /// Name of the host route this one nests under.
    #[serde(default)]
    pub parent_name: Option<String>,
    pub path: String,
    pub name: String,
    /// Callback name of the deferred view, resolved through `tap_view`.
    pub view: String,
    #[serde(default)]
    pub meta: RouteMeta,
}

impl RouteDefinition {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            parent_name: None,
            path: path.into(),
            name: name.into(),
            view: String::new(),
            meta: RouteMeta::default(),
        }
    }

    pub fn parent_name(mut self, parent: impl Into<String>) -> Self {
        self.parent_name = Some(parent.into());
        self
    }

    /// Bind the route to a lazily resolved view.
    pub fn view<T>(mut self, view: &LazyView<T>) -> Self {
        self.view = view.name().into();
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.meta.permissions.push(permission.into());
        self
    }

    pub fn menu(mut self, entry: MenuEntry) -> Self {
        self.meta.menu = Some(entry);
        self
    }
}

/// Access control and navigation metadata for a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta {
    /// Permission tokens required to see the route.
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub menu: Option<MenuEntry>,
}

/// Navigation entry shown in the admin sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Display label.
    pub name: String,
    /// Sidebar grouping key (e.g. "content", "tool").
    pub group: String,
    /// Icon identifier from the host's icon set.
    pub icon: String,
    #[serde(default)]
    pub weight: i32,
}

impl MenuEntry {
    pub fn new(name: impl Into<String>, group: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            icon: icon.into(),
            weight: 0,
        }
    }
}

/// A view that is built on first access and memoized for the process lifetime.
///
/// Usable in a `static`; the loader runs at most once even under concurrent
/// first access.
pub struct LazyView<T> {
    name: &'static str,
    loader: fn() -> T,
    cell: OnceLock<T>,
}

impl<T> LazyView<T> {
    pub const fn new(name: &'static str, loader: fn() -> T) -> Self {
        Self {
            name,
            loader,
            cell: OnceLock::new(),
        }
    }

    /// Callback name the host uses to request this view.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve the view, running the loader on first call only.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(self.loader)
    }

    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> std::fmt::Debug for LazyView<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyView")
            .field("name", &self.name)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}
