//! Storage toolkit plugin.
//!
//! Mounts the storage toolkit page (duplicate files, attachment references,
//! broken links, batch processing, cleanup logs) into the admin console and
//! exposes the endpoint and paging tables its client widgets use.

use console_plugin_sdk::host;
use console_plugin_sdk::prelude::*;
use console_plugin_sdk::render::RenderElement;

pub mod api;
pub mod pagination;
pub mod view;

pub const PLUGIN_NAME: &str = "storage_toolkit";

pub const ROUTE_PATH: &str = "/storage-toolkit";
pub const ROUTE_NAME: &str = "StorageToolkit";
pub const MANAGE_PERMISSION: &str = "plugin:storage-toolkit:manage";

/// Sidebar label ("Storage Toolkit").
pub const MENU_LABEL: &str = "存储工具箱";
pub const MENU_GROUP: &str = "tool";
pub const MENU_ICON: &str = "folder";

/// The plugin's registration record.
pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new().route(
        RouteDefinition::new(ROUTE_PATH, ROUTE_NAME)
            .parent_name(ROOT_ROUTE)
            .view(&view::STORAGE_TOOLKIT_VIEW)
            .permission(MANAGE_PERMISSION)
            .menu(MenuEntry::new(MENU_LABEL, MENU_GROUP, MENU_ICON)),
    )
}

#[plugin_tap]
pub fn tap_plugin() -> PluginDescriptor {
    descriptor()
}

#[plugin_tap]
pub fn tap_perm() -> Vec<PermissionDefinition> {
    vec![PermissionDefinition::new(
        MANAGE_PERMISSION,
        "Scan, inspect and clean up stored attachments",
    )]
}

#[plugin_tap]
pub fn tap_menu() -> Vec<MenuDefinition> {
    descriptor().menu_definitions()
}

#[plugin_tap]
pub fn tap_view(input: ViewInput) -> Option<RenderElement> {
    let view = view::resolve(&input.callback);
    if view.is_none() {
        host::log(
            LogLevel::Warn,
            PLUGIN_NAME,
            &format!("unknown view callback '{}'", input.callback),
        );
    }
    view.cloned()
}

#[plugin_tap]
pub fn tap_enable() -> bool {
    host::log(
        LogLevel::Info,
        PLUGIN_NAME,
        &format!("enabled, console API at {}", api::API_PREFIX),
    );
    true
}
