//! Host function bindings for calling kernel services from WASM plugins.
//!
//! The extern imports exist only on `wasm32`. Native builds forward to
//! `tracing` so plugin code behaves the same under unit tests.

use crate::types::LogLevel;

#[cfg(target_arch = "wasm32")]
#[link(wasm_import_module = "console:kernel/logging")]
unsafe extern "C" {
    #[link_name = "log"]
    fn __log(
        level_ptr: i32,
        level_len: i32,
        plugin_ptr: i32,
        plugin_len: i32,
        message_ptr: i32,
        message_len: i32,
    );
}

/// Emit a log line through the host's tracing pipeline.
#[cfg(target_arch = "wasm32")]
pub fn log(level: LogLevel, plugin: &str, message: &str) {
    let level = level.as_str();
    unsafe {
        __log(
            level.as_ptr() as i32,
            level.len() as i32,
            plugin.as_ptr() as i32,
            plugin.len() as i32,
            message.as_ptr() as i32,
            message.len() as i32,
        );
    }
}

/// Emit a log line (native builds log straight to `tracing`).
#[cfg(not(target_arch = "wasm32"))]
pub fn log(level: LogLevel, plugin: &str, message: &str) {
    match level {
        LogLevel::Debug => tracing::debug!(plugin = %plugin, "{}", message),
        LogLevel::Info => tracing::info!(plugin = %plugin, "{}", message),
        LogLevel::Warn => tracing::warn!(plugin = %plugin, "{}", message),
        LogLevel::Error => tracing::error!(plugin = %plugin, "{}", message),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn native_log_accepts_every_level() {
        for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            log(level, "test_plugin", "message");
        }
    }
}
