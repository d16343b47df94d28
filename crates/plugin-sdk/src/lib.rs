//! Console Plugin SDK
//!
//! Types, builders, and host function bindings for admin console plugins
//! compiled to WASM. A plugin describes its routes with a
//! [`route::PluginDescriptor`], exports taps with [`plugin_tap`], and hands
//! views back to the host as render trees.

pub mod host;
pub mod manifest;
pub mod render;
pub mod route;
pub mod types;

pub use console_plugin_sdk_macros::plugin_tap;

// Re-export serde_json for use in macro-generated code
#[doc(hidden)]
pub use serde_json;

pub mod prelude {
    pub use crate::plugin_tap;
    pub use crate::render;
    pub use crate::route::*;
    pub use crate::types::*;
}
