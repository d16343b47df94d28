//! REST endpoint table for the storage toolkit console API.
//!
//! Every path is relative to the host origin and starts with [`API_PREFIX`].
//! Template functions splice their arguments in verbatim; callers must
//! percent-encode identifiers that need it. Query strings built by the list
//! query types are encoded here.

use std::fmt;

use crate::pagination::{PageRequest, PageSize};

macro_rules! api_path {
    ($suffix:literal) => {
        concat!("/apis/console.api.storage-toolkit.timxs.com/v1alpha1", $suffix)
    };
}

/// Namespace shared by every endpoint.
pub const API_PREFIX: &str = api_path!("");

pub const STATISTICS: &str = api_path!("/statistics");

pub const WHITELIST: &str = api_path!("/whitelist");
pub const WHITELIST_SEARCH: &str = api_path!("/whitelist/search");
pub const WHITELIST_BATCH: &str = api_path!("/whitelist/batch");
pub const WHITELIST_CHECK: &str = api_path!("/whitelist/check");
pub const WHITELIST_CLEAR_ALL: &str = api_path!("/whitelist/all");

pub const BROKEN_LINKS: &str = api_path!("/broken-links");
pub const BROKEN_LINKS_SCAN: &str = api_path!("/broken-links/scan");
pub const BROKEN_LINKS_STATUS: &str = api_path!("/broken-links/status");
pub const BROKEN_LINKS_SOURCE_TYPES: &str = api_path!("/broken-links/source-types");
pub const BROKEN_LINKS_WHITELIST: &str = api_path!("/broken-links/whitelist");

pub const REFERENCES: &str = api_path!("/references");
pub const REFERENCES_SCAN: &str = api_path!("/references/scan");
pub const REFERENCES_STATS: &str = api_path!("/references/stats");
pub const REFERENCES_CLEAR: &str = api_path!("/references/clear");

pub const DUPLICATES: &str = api_path!("/duplicates");
pub const DUPLICATES_SCAN: &str = api_path!("/duplicates/scan");
pub const DUPLICATES_STATS: &str = api_path!("/duplicates/stats");
pub const DUPLICATES_CLEAR: &str = api_path!("/duplicates/clear");

pub const BATCH_PROCESSING_TASKS: &str = api_path!("/batch-processing/tasks");
pub const BATCH_PROCESSING_STATUS: &str = api_path!("/batch-processing/status");
pub const BATCH_PROCESSING_SETTINGS: &str = api_path!("/batch-processing/settings");
pub const BATCH_PROCESSING_CANCEL: &str = api_path!("/batch-processing/tasks/current");
pub const BATCH_PROCESSING_CHECK_REFERENCES: &str =
    api_path!("/batch-processing/check-references");

pub const CLEANUP: &str = api_path!("/cleanup");
pub const CLEANUP_UNREFERENCED: &str = api_path!("/cleanup/unreferenced");
pub const CLEANUP_LOGS: &str = api_path!("/cleanup/logs");
pub const CLEANUP_LOGS_STATS: &str = api_path!("/cleanup/logs/stats");
pub const CLEANUP_PREVIEW: &str = api_path!("/cleanup/preview");

/// References held by attachments matched by a storage policy.
pub fn references_policy(policy_name: &str) -> String {
    format!("{API_PREFIX}/references/policy/{policy_name}")
}

/// References held by attachments in a group.
pub fn references_group(group_name: &str) -> String {
    format!("{API_PREFIX}/references/group/{group_name}")
}

/// Attachments referenced by one subject (e.g. `Post`, `abc`).
pub fn references_subject(kind: &str, name: &str) -> String {
    format!("{API_PREFIX}/references/subject/{kind}/{name}")
}

/// One reference source of one attachment.
pub fn references_source(attachment_name: &str, source_name: &str) -> String {
    format!("{API_PREFIX}/references/{attachment_name}/source/{source_name}")
}

/// Display label of a settings group, used to name settings-based references.
pub fn references_setting_group_label(setting_name: &str, group_key: &str) -> String {
    format!("{API_PREFIX}/references/settings/{setting_name}/groups/{group_key}/label")
}

/// Delete duplicates sharing an MD5 hash.
pub fn cleanup_duplicates(md5_hash: &str) -> String {
    format!("{API_PREFIX}/cleanup/duplicates/{md5_hash}")
}

/// A single whitelist entry (delete).
pub fn whitelist_entry(name: &str) -> String {
    format!("{API_PREFIX}/whitelist/{name}")
}

/// Named literal endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Statistics,
    Whitelist,
    WhitelistSearch,
    WhitelistBatch,
    WhitelistCheck,
    WhitelistClearAll,
    BrokenLinks,
    BrokenLinksScan,
    BrokenLinksStatus,
    BrokenLinksSourceTypes,
    BrokenLinksWhitelist,
    References,
    ReferencesScan,
    ReferencesStats,
    ReferencesClear,
    Duplicates,
    DuplicatesScan,
    DuplicatesStats,
    DuplicatesClear,
    BatchProcessingTasks,
    BatchProcessingStatus,
    BatchProcessingSettings,
    BatchProcessingCancel,
    BatchProcessingCheckReferences,
    Cleanup,
    CleanupUnreferenced,
    CleanupLogs,
    CleanupLogsStats,
    CleanupPreview,
}

impl Endpoint {
    pub const ALL: &'static [Endpoint] = &[
        Endpoint::Statistics,
        Endpoint::Whitelist,
        Endpoint::WhitelistSearch,
        Endpoint::WhitelistBatch,
        Endpoint::WhitelistCheck,
        Endpoint::WhitelistClearAll,
        Endpoint::BrokenLinks,
        Endpoint::BrokenLinksScan,
        Endpoint::BrokenLinksStatus,
        Endpoint::BrokenLinksSourceTypes,
        Endpoint::BrokenLinksWhitelist,
        Endpoint::References,
        Endpoint::ReferencesScan,
        Endpoint::ReferencesStats,
        Endpoint::ReferencesClear,
        Endpoint::Duplicates,
        Endpoint::DuplicatesScan,
        Endpoint::DuplicatesStats,
        Endpoint::DuplicatesClear,
        Endpoint::BatchProcessingTasks,
        Endpoint::BatchProcessingStatus,
        Endpoint::BatchProcessingSettings,
        Endpoint::BatchProcessingCancel,
        Endpoint::BatchProcessingCheckReferences,
        Endpoint::Cleanup,
        Endpoint::CleanupUnreferenced,
        Endpoint::CleanupLogs,
        Endpoint::CleanupLogsStats,
        Endpoint::CleanupPreview,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Statistics => STATISTICS,
            Endpoint::Whitelist => WHITELIST,
            Endpoint::WhitelistSearch => WHITELIST_SEARCH,
            Endpoint::WhitelistBatch => WHITELIST_BATCH,
            Endpoint::WhitelistCheck => WHITELIST_CHECK,
            Endpoint::WhitelistClearAll => WHITELIST_CLEAR_ALL,
            Endpoint::BrokenLinks => BROKEN_LINKS,
            Endpoint::BrokenLinksScan => BROKEN_LINKS_SCAN,
            Endpoint::BrokenLinksStatus => BROKEN_LINKS_STATUS,
            Endpoint::BrokenLinksSourceTypes => BROKEN_LINKS_SOURCE_TYPES,
            Endpoint::BrokenLinksWhitelist => BROKEN_LINKS_WHITELIST,
            Endpoint::References => REFERENCES,
            Endpoint::ReferencesScan => REFERENCES_SCAN,
            Endpoint::ReferencesStats => REFERENCES_STATS,
            Endpoint::ReferencesClear => REFERENCES_CLEAR,
            Endpoint::Duplicates => DUPLICATES,
            Endpoint::DuplicatesScan => DUPLICATES_SCAN,
            Endpoint::DuplicatesStats => DUPLICATES_STATS,
            Endpoint::DuplicatesClear => DUPLICATES_CLEAR,
            Endpoint::BatchProcessingTasks => BATCH_PROCESSING_TASKS,
            Endpoint::BatchProcessingStatus => BATCH_PROCESSING_STATUS,
            Endpoint::BatchProcessingSettings => BATCH_PROCESSING_SETTINGS,
            Endpoint::BatchProcessingCancel => BATCH_PROCESSING_CANCEL,
            Endpoint::BatchProcessingCheckReferences => BATCH_PROCESSING_CHECK_REFERENCES,
            Endpoint::Cleanup => CLEANUP,
            Endpoint::CleanupUnreferenced => CLEANUP_UNREFERENCED,
            Endpoint::CleanupLogs => CLEANUP_LOGS,
            Endpoint::CleanupLogsStats => CLEANUP_LOGS_STATS,
            Endpoint::CleanupPreview => CLEANUP_PREVIEW,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Why a file was removed, as recorded in the cleanup log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CleanupReason {
    Duplicate,
    Unreferenced,
}

impl CleanupReason {
    pub fn as_str(self) -> &'static str {
        match self {
            CleanupReason::Duplicate => "DUPLICATE",
            CleanupReason::Unreferenced => "UNREFERENCED",
        }
    }
}

/// Appends `key=value` pairs to a path, skipping empty values.
struct QueryBuilder {
    url: String,
    has_query: bool,
}

impl QueryBuilder {
    fn new(path: &str, page: PageRequest) -> Self {
        let mut builder = Self {
            url: path.to_string(),
            has_query: false,
        };
        builder.push("page", &page.page.to_string());
        builder.push("size", &page.size.get().to_string());
        builder
    }

    fn push(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.url.push(if self.has_query { '&' } else { '?' });
        self.url.push_str(key);
        self.url.push('=');
        self.url.push_str(&urlencoding::encode(value));
        self.has_query = true;
    }

    fn push_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    fn finish(self) -> String {
        self.url
    }
}

/// Filtered, paged listing of broken links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrokenLinkQuery {
    pub page: PageRequest,
    pub source_type: Option<String>,
    pub keyword: Option<String>,
    pub sort: Option<String>,
}

impl BrokenLinkQuery {
    pub fn new(page: u32, size: PageSize) -> Self {
        Self {
            page: PageRequest::new(page, size),
            ..Self::default()
        }
    }

    pub fn source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Full request path including the query string.
    pub fn to_url(&self) -> String {
        let mut query = QueryBuilder::new(BROKEN_LINKS, self.page);
        query.push_opt("sourceType", self.source_type.as_deref());
        query.push_opt("keyword", self.keyword.as_deref());
        query.push_opt("sort", self.sort.as_deref());
        query.finish()
    }
}

/// Filtered, paged listing of cleanup log records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupLogQuery {
    pub page: PageRequest,
    pub reason: Option<CleanupReason>,
    /// Case-insensitive substring of the file display name.
    pub filename: Option<String>,
}

impl CleanupLogQuery {
    pub fn new(page: u32, size: PageSize) -> Self {
        Self {
            page: PageRequest::new(page, size),
            ..Self::default()
        }
    }

    pub fn reason(mut self, reason: CleanupReason) -> Self {
        self.reason = Some(reason);
        self
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn to_url(&self) -> String {
        let mut query = QueryBuilder::new(CLEANUP_LOGS, self.page);
        query.push_opt("reason", self.reason.map(CleanupReason::as_str));
        query.push_opt("filename", self.filename.as_deref());
        query.finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const PREFIX: &str = "/apis/console.api.storage-toolkit.timxs.com/v1alpha1";

    #[test]
    fn prefix_is_the_console_namespace() {
        assert_eq!(API_PREFIX, PREFIX);
    }

    #[test]
    fn every_literal_endpoint_is_prefixed() {
        for endpoint in Endpoint::ALL {
            let path = endpoint.path();
            assert!(path.starts_with(PREFIX), "{endpoint:?} -> {path}");
            assert!(path.len() > PREFIX.len(), "{endpoint:?} has no suffix");
        }
    }

    #[test]
    fn literal_suffixes_match_routes() {
        let cases = [
            (STATISTICS, "/statistics"),
            (WHITELIST, "/whitelist"),
            (WHITELIST_SEARCH, "/whitelist/search"),
            (WHITELIST_BATCH, "/whitelist/batch"),
            (WHITELIST_CHECK, "/whitelist/check"),
            (WHITELIST_CLEAR_ALL, "/whitelist/all"),
            (BROKEN_LINKS, "/broken-links"),
            (BROKEN_LINKS_SCAN, "/broken-links/scan"),
            (BROKEN_LINKS_STATUS, "/broken-links/status"),
            (BROKEN_LINKS_SOURCE_TYPES, "/broken-links/source-types"),
            (BROKEN_LINKS_WHITELIST, "/broken-links/whitelist"),
            (REFERENCES, "/references"),
            (REFERENCES_SCAN, "/references/scan"),
            (REFERENCES_STATS, "/references/stats"),
            (REFERENCES_CLEAR, "/references/clear"),
            (DUPLICATES, "/duplicates"),
            (DUPLICATES_SCAN, "/duplicates/scan"),
            (DUPLICATES_STATS, "/duplicates/stats"),
            (DUPLICATES_CLEAR, "/duplicates/clear"),
            (BATCH_PROCESSING_TASKS, "/batch-processing/tasks"),
            (BATCH_PROCESSING_STATUS, "/batch-processing/status"),
            (BATCH_PROCESSING_SETTINGS, "/batch-processing/settings"),
            (BATCH_PROCESSING_CANCEL, "/batch-processing/tasks/current"),
            (BATCH_PROCESSING_CHECK_REFERENCES, "/batch-processing/check-references"),
            (CLEANUP, "/cleanup"),
            (CLEANUP_UNREFERENCED, "/cleanup/unreferenced"),
            (CLEANUP_LOGS, "/cleanup/logs"),
            (CLEANUP_LOGS_STATS, "/cleanup/logs/stats"),
            (CLEANUP_PREVIEW, "/cleanup/preview"),
        ];
        assert_eq!(cases.len(), Endpoint::ALL.len());
        for (path, suffix) in cases {
            assert_eq!(path, format!("{PREFIX}{suffix}"));
        }
    }

    #[test]
    fn endpoint_display_is_path() {
        assert_eq!(Endpoint::CleanupPreview.to_string(), CLEANUP_PREVIEW);
    }

    #[test]
    fn subject_template() {
        assert_eq!(
            references_subject("Post", "abc"),
            format!("{PREFIX}/references/subject/Post/abc")
        );
    }

    #[test]
    fn source_template_puts_attachment_first() {
        assert_eq!(
            references_source("att1", "src1"),
            format!("{PREFIX}/references/att1/source/src1")
        );
    }

    #[test]
    fn cleanup_duplicates_template() {
        assert_eq!(
            cleanup_duplicates("abc123"),
            "/apis/console.api.storage-toolkit.timxs.com/v1alpha1/cleanup/duplicates/abc123"
        );
    }

    #[test]
    fn single_argument_templates() {
        assert_eq!(references_policy("default-policy"), format!("{PREFIX}/references/policy/default-policy"));
        assert_eq!(references_group("avatars"), format!("{PREFIX}/references/group/avatars"));
        assert_eq!(whitelist_entry("entry-1"), format!("{PREFIX}/whitelist/entry-1"));
    }

    #[test]
    fn setting_group_label_template() {
        assert_eq!(
            references_setting_group_label("theme-earth", "basic"),
            format!("{PREFIX}/references/settings/theme-earth/groups/basic/label")
        );
    }

    #[test]
    fn templates_do_not_escape() {
        let odd = ["a b", "ü/ß", "x?y=z", "%2F", "中文"];
        for id in odd {
            assert_eq!(cleanup_duplicates(id), format!("{PREFIX}/cleanup/duplicates/{id}"));
            assert_eq!(
                references_subject(id, id),
                format!("{PREFIX}/references/subject/{id}/{id}")
            );
        }
    }

    #[test]
    fn broken_link_query_defaults() {
        let url = BrokenLinkQuery::default().to_url();
        assert_eq!(url, format!("{PREFIX}/broken-links?page=1&size=20"));
    }

    #[test]
    fn broken_link_query_encodes_values() {
        let url = BrokenLinkQuery::new(2, PageSize::Fifty)
            .source_type("POST")
            .keyword("a b&c")
            .sort("url")
            .to_url();
        assert_eq!(
            url,
            format!("{PREFIX}/broken-links?page=2&size=50&sourceType=POST&keyword=a%20b%26c&sort=url")
        );
    }

    #[test]
    fn cleanup_log_query_skips_empty_filters() {
        let url = CleanupLogQuery::new(1, PageSize::Hundred)
            .reason(CleanupReason::Unreferenced)
            .filename("")
            .to_url();
        assert_eq!(url, format!("{PREFIX}/cleanup/logs?page=1&size=100&reason=UNREFERENCED"));
    }

    #[test]
    fn cleanup_reason_wire_format() {
        let json = serde_json::to_string(&CleanupReason::Duplicate).unwrap();
        assert_eq!(json, "\"DUPLICATE\"");
    }
}
