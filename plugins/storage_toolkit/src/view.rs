//! The storage toolkit admin page.
//!
//! The page is a tab set, one tab per tool. Each tab carries the endpoints
//! its client widget talks to as `data-*` attributes; list tabs also get a
//! page-size selector. The tree is built the first time the route is visited.

use console_plugin_sdk::prelude::*;
use console_plugin_sdk::render::RenderElement;

use crate::api;
use crate::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

pub static STORAGE_TOOLKIT_VIEW: LazyView<RenderElement> =
    LazyView::new("storage_toolkit_view", build_view);

/// Look up a view by the callback name a route was registered with.
pub fn resolve(callback: &str) -> Option<&'static RenderElement> {
    (callback == STORAGE_TOOLKIT_VIEW.name()).then(|| STORAGE_TOOLKIT_VIEW.get())
}

struct Section {
    key: &'static str,
    label: &'static str,
    /// Primary data source (listing or summary).
    source: &'static str,
    /// Additional endpoints, as `(data attribute, path)`.
    actions: &'static [(&'static str, &'static str)],
    paged: bool,
}

const SECTIONS: &[Section] = &[
    Section {
        key: "statistics",
        label: "概览",
        source: api::STATISTICS,
        actions: &[],
        paged: false,
    },
    Section {
        key: "duplicates",
        label: "重复文件",
        source: api::DUPLICATES,
        actions: &[
            ("scan", api::DUPLICATES_SCAN),
            ("stats", api::DUPLICATES_STATS),
            ("clear", api::DUPLICATES_CLEAR),
            ("preview", api::CLEANUP_PREVIEW),
        ],
        paged: true,
    },
    Section {
        key: "references",
        label: "引用统计",
        source: api::REFERENCES,
        actions: &[
            ("scan", api::REFERENCES_SCAN),
            ("stats", api::REFERENCES_STATS),
            ("clear", api::REFERENCES_CLEAR),
            ("delete", api::CLEANUP_UNREFERENCED),
            ("preview", api::CLEANUP_PREVIEW),
        ],
        paged: true,
    },
    Section {
        key: "broken-links",
        label: "断链检测",
        source: api::BROKEN_LINKS,
        actions: &[
            ("scan", api::BROKEN_LINKS_SCAN),
            ("status", api::BROKEN_LINKS_STATUS),
            ("source-types", api::BROKEN_LINKS_SOURCE_TYPES),
            ("whitelist", api::BROKEN_LINKS_WHITELIST),
        ],
        paged: true,
    },
    Section {
        key: "whitelist",
        label: "白名单",
        source: api::WHITELIST,
        actions: &[
            ("search", api::WHITELIST_SEARCH),
            ("batch", api::WHITELIST_BATCH),
            ("check", api::WHITELIST_CHECK),
            ("clear-all", api::WHITELIST_CLEAR_ALL),
        ],
        paged: false,
    },
    Section {
        key: "batch-processing",
        label: "批量处理",
        source: api::BATCH_PROCESSING_STATUS,
        actions: &[
            ("tasks", api::BATCH_PROCESSING_TASKS),
            ("settings", api::BATCH_PROCESSING_SETTINGS),
            ("cancel", api::BATCH_PROCESSING_CANCEL),
            ("check-references", api::BATCH_PROCESSING_CHECK_REFERENCES),
        ],
        paged: false,
    },
    Section {
        key: "cleanup-logs",
        label: "清理日志",
        source: api::CLEANUP_LOGS,
        actions: &[("stats", api::CLEANUP_LOGS_STATS), ("cleanup", api::CLEANUP)],
        paged: true,
    },
];

fn page_size_selector() -> RenderElement {
    let default = DEFAULT_PAGE_SIZE.to_string();
    let mut select = render::select("size").data("default", &default);
    for (i, size) in PAGE_SIZE_OPTIONS.iter().enumerate() {
        let value = size.to_string();
        let mut option = render::option(&value, &value).weight(i as i32);
        if *size == DEFAULT_PAGE_SIZE {
            option = option.attr("selected", "selected");
        }
        select = select.child(&value, option.build());
    }
    select.build()
}

fn build_section(weight: usize, section: &Section) -> RenderElement {
    let mut tab = render::tab(section.label)
        .weight(weight as i32)
        .data("source", section.source);
    for (name, path) in section.actions {
        tab = tab.data(name, path);
    }
    if section.paged {
        tab = tab.child("page_size", page_size_selector());
    }
    tab.build()
}

fn build_view() -> RenderElement {
    host_log(LogLevel::Debug, "building storage toolkit view");

    let mut tabs = render::tabs().class("storage-toolkit-tabs");
    for (weight, section) in SECTIONS.iter().enumerate() {
        tabs = tabs.child(section.key, build_section(weight, section));
    }

    render::container()
        .class("storage-toolkit")
        .data("api-prefix", api::API_PREFIX)
        .child("tabs", tabs.build())
        .build()
}

fn host_log(level: LogLevel, message: &str) {
    console_plugin_sdk::host::log(level, crate::PLUGIN_NAME, message);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_callback() {
        let view = resolve("storage_toolkit_view").unwrap();
        assert_eq!(view.element_type, "container");
        assert!(STORAGE_TOOLKIT_VIEW.is_resolved());
        assert!(std::ptr::eq(view, STORAGE_TOOLKIT_VIEW.get()));
    }

    #[test]
    fn resolve_unknown_callback() {
        assert!(resolve("media_admin").is_none());
    }

    #[test]
    fn one_tab_per_section() {
        let view = build_view();
        let tabs = view.child("tabs").unwrap();
        assert_eq!(tabs.children.len(), SECTIONS.len());
        let dup = tabs.child("duplicates").unwrap();
        assert_eq!(dup.attr("data-source"), Some(api::DUPLICATES));
        assert_eq!(dup.attr("data-scan"), Some(api::DUPLICATES_SCAN));
    }

    #[test]
    fn paged_tabs_offer_only_allowed_sizes() {
        let view = build_view();
        let tabs = view.child("tabs").unwrap();
        for section in SECTIONS {
            let tab = tabs.child(section.key).unwrap();
            let selector = tab.child("page_size");
            assert_eq!(selector.is_some(), section.paged, "{}", section.key);
            let Some(selector) = selector else { continue };

            let values: Vec<u32> = selector
                .children
                .values()
                .map(|o| o.attr("value").unwrap().parse().unwrap())
                .collect::<std::collections::BTreeSet<_>>()
                .into_iter()
                .collect();
            assert_eq!(values, PAGE_SIZE_OPTIONS);

            let selected: Vec<&str> = selector
                .children
                .values()
                .filter(|o| o.attr("selected").is_some())
                .filter_map(|o| o.attr("value"))
                .collect();
            assert_eq!(selected, vec!["20"]);
        }
    }

    #[test]
    fn every_endpoint_is_reachable_from_the_view() {
        let view = build_view();
        let json = serde_json::to_string(&view).unwrap();
        for endpoint in api::Endpoint::ALL {
            assert!(
                json.contains(&format!("\"{}\"", endpoint.path())),
                "{endpoint:?} missing from view"
            );
        }
    }
}
